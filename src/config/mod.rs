use crate::core::url_builder::DEFAULT_ENDPOINT;
use crate::domain::model::{RankingQuery, SortOrder};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::{Parser, ValueEnum};
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(&self) -> bool {
        match self {
            ColorChoice::Auto => std::io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "goita", version)]
#[command(about = "Command Line Client for Qiita ranking")]
pub struct CliConfig {
    /// Number of output lines
    #[arg(short, long, default_value_t = 10)]
    pub number: usize,

    /// Number of report days
    #[arg(short, long, default_value_t = 1)]
    pub days: u32,

    /// Ranking sorted by hatebu bookmark number
    #[arg(long, visible_alias = "hatena")]
    pub hatebu: bool,

    /// Only show entries with this tag
    #[arg(value_name = "TAG")]
    pub tag: Option<String>,

    #[arg(long, default_value = DEFAULT_ENDPOINT, hide = true)]
    pub endpoint: String,

    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn query(&self) -> RankingQuery {
        RankingQuery {
            number: self.number,
            days: self.days,
            tag: self.tag.clone(),
            order: SortOrder::from_hatebu(self.hatebu),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_positive_number("days", u64::from(self.days), 1)?;
        Ok(())
    }
}
