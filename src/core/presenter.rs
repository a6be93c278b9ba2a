use crate::domain::model::{Entry, QueryResult};
use crate::utils::error::Result;
use colored::{Color, Colorize};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub const NOT_FOUND_MESSAGE: &str = "Rankingｹﾞﾄできなかたyo!";

const TITLE_LABEL: &str = "Title";
const URL_LABEL: &str = "Url";
const LIKE_LABEL: &str = "Like";

const TITLE_COLOR: Color = Color::Blue;
const LIKE_COLOR: Color = Color::Cyan;

/// A row spends 8 columns on spaces and bars; the rest is room for the like count.
const SEPARATOR_PADDING: usize = 16;

/// Terminal columns taken by `s`. Full-width and CJK characters count as 2.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Plain codepoint count, used for the URL column.
pub fn char_width(s: &str) -> usize {
    s.chars().count()
}

fn pad_to_display_width(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

pub fn title_column_width(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|e| display_width(&e.title))
        .fold(display_width(TITLE_LABEL), usize::max)
}

pub fn url_column_width(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|e| char_width(&e.url))
        .fold(char_width(URL_LABEL), usize::max)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter {
    color: bool,
}

impl Presenter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text
        }
    }

    /// Writes the ranking table, or the not-found notice when nothing was parsed.
    pub fn show<W: Write>(&self, result: &QueryResult, url: &str, out: &mut W) -> io::Result<()> {
        let entries = &result.entries;
        if entries.is_empty() {
            writeln!(out, "{}", NOT_FOUND_MESSAGE)?;
            write!(out, "  url: {} \n\n", url)?;
            return Ok(());
        }

        writeln!(out, "{} : {} entries", result.title, entries.len())?;

        let title_width = title_column_width(entries);
        let url_width = url_column_width(entries);

        writeln!(
            out,
            " {} | {:<url_width$} | {} ",
            self.paint(pad_to_display_width(TITLE_LABEL, title_width), TITLE_COLOR),
            URL_LABEL,
            self.paint(LIKE_LABEL.to_string(), LIKE_COLOR),
        )?;
        writeln!(
            out,
            "{}",
            "-".repeat(title_width + url_width + SEPARATOR_PADDING)
        )?;

        for entry in entries {
            writeln!(
                out,
                " {} | {:<url_width$} | {} ",
                self.paint(pad_to_display_width(&entry.title, title_width), TITLE_COLOR),
                entry.url,
                self.paint(entry.like_count.clone(), LIKE_COLOR),
            )?;
        }

        out.flush()
    }

    pub fn show_json<W: Write>(&self, result: &QueryResult, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, result)?;
        writeln!(out)?;
        Ok(())
    }
}
