use crate::domain::model::{Entry, QueryResult};
use scraper::{ElementRef, Html};

/// Extracts at most `number` entries from a ranking page, in document order.
///
/// Every `tr` is a candidate row. Rows without a link (table headers, spacer
/// rows) are skipped before the limit is applied.
pub fn parse_ranking(html: &str, number: usize) -> QueryResult {
    let document = Html::parse_document(html);

    let entries = document
        .select(selector!("tr"))
        .filter_map(parse_row)
        .take(number)
        .collect();

    let title = document
        .select(selector!(".subtitle1"))
        .map(element_text)
        .collect::<String>();

    QueryResult {
        title: title.trim().to_string(),
        entries,
    }
}

fn parse_row(row: ElementRef) -> Option<Entry> {
    let url = row
        .select(selector!("a"))
        .next()
        .and_then(|a| a.value().attr("href"))
        .unwrap_or_default();
    if url.is_empty() {
        return None;
    }

    let title = row
        .select(selector!("a"))
        .map(element_text)
        .collect::<String>();
    let like_count = row
        .select(selector!("td"))
        .nth(2)
        .map(element_text)
        .unwrap_or_default();

    Some(Entry {
        title: title.trim().to_string(),
        url: url.to_string(),
        like_count: like_count.trim().to_string(),
    })
}

fn element_text(element: ElementRef) -> String {
    element.text().collect()
}
