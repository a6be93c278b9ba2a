use serde::Serialize;

/// One ranked item. Only built when the row carried a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub title: String,
    pub url: String,
    pub like_count: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct QueryResult {
    pub title: String,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    LikeCount,
    HatebuCount,
}

impl SortOrder {
    pub fn from_hatebu(hatebu: bool) -> Self {
        if hatebu {
            SortOrder::HatebuCount
        } else {
            SortOrder::LikeCount
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::LikeCount => "like_count",
            SortOrder::HatebuCount => "hatebu_count",
        }
    }
}

/// What to ask the ranking service for.
///
/// `Default` matches the command line defaults: 10 rows, 1 day, no tag,
/// sorted by like count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingQuery {
    pub number: usize,
    pub days: u32,
    pub tag: Option<String>,
    pub order: SortOrder,
}

impl Default for RankingQuery {
    fn default() -> Self {
        Self {
            number: 10,
            days: 1,
            tag: None,
            order: SortOrder::LikeCount,
        }
    }
}
