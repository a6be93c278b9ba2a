#[macro_use]
mod macros;

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::HttpFetcher;
pub use config::{CliConfig, ColorChoice};
pub use core::{crawler::Crawler, presenter::Presenter, url_builder::build_url};
pub use domain::model::{Entry, QueryResult, RankingQuery, SortOrder};
pub use utils::error::{GoitaError, Result};
