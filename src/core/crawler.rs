use crate::core::parser::parse_ranking;
use crate::domain::model::QueryResult;
use crate::domain::ports::PageFetcher;
use crate::utils::error::Result;

pub struct Crawler<F: PageFetcher> {
    fetcher: F,
}

impl<F: PageFetcher> Crawler<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetches `url` once and keeps the first `number` entries.
    pub async fn crawl(&self, url: &str, number: usize) -> Result<QueryResult> {
        tracing::info!("Fetching ranking from {}", url);
        let html = self.fetcher.fetch(url).await?;

        let result = parse_ranking(&html, number);
        tracing::info!(
            "Parsed {} entries (title: {:?})",
            result.entries.len(),
            result.title
        );

        Ok(result)
    }
}
