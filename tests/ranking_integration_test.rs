use goita::core::presenter::NOT_FOUND_MESSAGE;
use goita::{build_url, Crawler, GoitaError, HttpFetcher, Presenter, RankingQuery, SortOrder};
use httpmock::prelude::*;

const MALFORMED_ROW_PAGE: &str = include_str!("fixtures/ranking_with_malformed_row.html");
const FIVE_ROW_PAGE: &str = include_str!("fixtures/ranking_five_rows.html");

fn crawler() -> Crawler<HttpFetcher> {
    Crawler::new(HttpFetcher::new().unwrap())
}

#[tokio::test]
async fn test_end_to_end_skips_malformed_row() {
    let server = MockServer::start_async().await;
    let page_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/entries")
                .query_param("days", "1")
                .query_param("orderby", "like_count");
            then.status(200)
                .header("Content-Type", "text/html; charset=utf-8")
                .body(MALFORMED_ROW_PAGE);
        })
        .await;

    let query = RankingQuery::default();
    let url = build_url(&server.url("/entries"), &query).unwrap();
    let result = crawler().crawl(url.as_str(), query.number).await.unwrap();

    page_mock.assert_async().await;
    assert_eq!(result.title, "デイリーランキング (like)");

    let titles: Vec<&str> = result.entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Rustで書くCLIツール入門",
            "tokio の非同期ランタイム",
            "Why scraper beats regex",
        ]
    );
    assert_eq!(result.entries[0].url, "http://qiita.com/alice/items/0001");
    assert_eq!(result.entries[0].like_count, "152");
    assert!(result.entries.iter().all(|e| !e.url.is_empty()));
}

#[tokio::test]
async fn test_end_to_end_number_one_returns_first_row() {
    let server = MockServer::start_async().await;
    let page_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/entries")
                .query_param("days", "7")
                .query_param("tag", "rust")
                .query_param("orderby", "hatebu_count");
            then.status(200).body(FIVE_ROW_PAGE);
        })
        .await;

    let query = RankingQuery {
        number: 1,
        days: 7,
        tag: Some("rust".to_string()),
        order: SortOrder::from_hatebu(true),
    };
    let url = build_url(&server.url("/entries"), &query).unwrap();
    let result = crawler().crawl(url.as_str(), query.number).await.unwrap();

    page_mock.assert_async().await;
    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].title, "first");
    assert_eq!(result.entries[0].like_count, "500");
}

#[tokio::test]
async fn test_requesting_more_than_available_returns_all() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/entries");
            then.status(200).body(FIVE_ROW_PAGE);
        })
        .await;

    let query = RankingQuery {
        number: 50,
        ..Default::default()
    };
    let url = build_url(&server.url("/entries"), &query).unwrap();
    let result = crawler().crawl(url.as_str(), query.number).await.unwrap();

    assert_eq!(result.entries.len(), 5);
    assert_eq!(result.entries[4].title, "fifth");
}

#[tokio::test]
async fn test_server_error_is_fetch_failure() {
    let server = MockServer::start_async().await;
    let page_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/entries");
            then.status(500);
        })
        .await;

    let url = build_url(&server.url("/entries"), &RankingQuery::default()).unwrap();
    let result = crawler().crawl(url.as_str(), 10).await;

    page_mock.assert_async().await;
    assert!(matches!(result, Err(GoitaError::FetchError(_))));
}

#[tokio::test]
async fn test_unreachable_host_is_fetch_failure() {
    let result = crawler()
        .crawl("http://127.0.0.1:9/entries?days=1&orderby=like_count", 10)
        .await;

    assert!(matches!(result, Err(GoitaError::FetchError(_))));
}

#[tokio::test]
async fn test_empty_page_prints_not_found_with_url() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/entries");
            then.status(200)
                .body("<html><body><h2 class=\"subtitle1\">none</h2><table></table></body></html>");
        })
        .await;

    let url = build_url(&server.url("/entries"), &RankingQuery::default()).unwrap();
    let result = crawler().crawl(url.as_str(), 10).await.unwrap();
    assert!(result.entries.is_empty());

    let mut out = Vec::new();
    Presenter::new(false)
        .show(&result, url.as_str(), &mut out)
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{}\n  url: {} \n\n", NOT_FOUND_MESSAGE, url)
    );
}

#[tokio::test]
async fn test_rendered_table_from_fixture() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/entries");
            then.status(200).body(MALFORMED_ROW_PAGE);
        })
        .await;

    let url = build_url(&server.url("/entries"), &RankingQuery::default()).unwrap();
    let result = crawler().crawl(url.as_str(), 10).await.unwrap();

    let mut out = Vec::new();
    Presenter::new(false)
        .show(&result, url.as_str(), &mut out)
        .unwrap();
    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "デイリーランキング (like) : 3 entries");
    assert_eq!(lines.len(), 2 + 1 + 3);
    assert!(lines[1].starts_with(" Title "));
    assert!(lines[1].ends_with(" | Like "));
    assert!(lines[3].ends_with(" | 152 "));
    assert!(lines[5].contains("http://qiita.com/carol/items/0003"));
}
