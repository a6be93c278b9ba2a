use crate::domain::model::RankingQuery;
use crate::utils::error::Result;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://qrank.wbsrv.net/entries";

/// Builds `<endpoint>?days=N[&tag=T]&orderby=...`.
///
/// The tag goes through form encoding, so `c++` or `a&b` cannot leak into
/// neighbouring parameters. An empty tag is treated as no tag.
pub fn build_url(endpoint: &str, query: &RankingQuery) -> Result<Url> {
    let mut url = Url::parse(endpoint)?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("days", &query.days.to_string());
        if let Some(tag) = query.tag.as_deref().filter(|t| !t.is_empty()) {
            pairs.append_pair("tag", tag);
        }
        pairs.append_pair("orderby", query.order.as_param());
    }
    Ok(url)
}
