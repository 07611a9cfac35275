//! Formatting rules for the daily note: title resolution and the prefix put
//! in front of appended text.

use super::error::SupernotesError;
use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

/// Token replaced by today's date in the configured title pattern.
pub const DATE_PLACEHOLDER: &str = "{date}";

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    Iso,
    Slashes,
    European,
    American,
    Traditional,
}

impl FromStr for DateStyle {
    type Err = SupernotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso" => Ok(DateStyle::Iso),
            "slashes" => Ok(DateStyle::Slashes),
            "european" => Ok(DateStyle::European),
            "american" => Ok(DateStyle::American),
            "traditional" => Ok(DateStyle::Traditional),
            _ => Err(SupernotesError::Config(format!("unknown date style '{s}'"))),
        }
    }
}

impl DateStyle {
    /// Render `date` without going through locale aware formatting.
    pub fn render(self, date: NaiveDate) -> String {
        let (y, m, d) = (date.year(), date.month(), date.day());
        match self {
            DateStyle::Iso => format!("{y:04}-{m:02}-{d:02}"),
            DateStyle::Slashes => format!("{y:04}/{m:02}/{d:02}"),
            DateStyle::European => format!("{d:02}.{m:02}.{y:04}"),
            DateStyle::American => format!("{m:02}/{d:02}/{y:04}"),
            DateStyle::Traditional => format!(
                "{} {d}{}, {y}",
                MONTHS[date.month0() as usize],
                ordinal_suffix(d)
            ),
        }
    }
}

/// English ordinal suffix for a day of month. 11, 12 and 13 take `th`.
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendStyle {
    Bullet,
    Todo,
    Plain,
}

impl FromStr for AppendStyle {
    type Err = SupernotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bullet" => Ok(AppendStyle::Bullet),
            "todo" => Ok(AppendStyle::Todo),
            "plain" => Ok(AppendStyle::Plain),
            _ => Err(SupernotesError::Config(format!(
                "unknown append style '{s}'"
            ))),
        }
    }
}

impl AppendStyle {
    pub fn prefix(self) -> &'static str {
        match self {
            AppendStyle::Bullet => "- ",
            AppendStyle::Todo => "- [ ] ",
            AppendStyle::Plain => "",
        }
    }
}

pub fn has_placeholder(pattern: &str) -> bool {
    pattern.contains(DATE_PLACEHOLDER)
}

/// Title of the daily note for `date`, or `None` when the pattern has no
/// date placeholder. An unknown date style resolves the placeholder to an
/// empty string.
pub fn resolve_title(pattern: &str, date_style: &str, date: NaiveDate) -> Option<String> {
    if !has_placeholder(pattern) {
        return None;
    }
    let rendered = match date_style.parse::<DateStyle>() {
        Ok(style) => style.render(date),
        Err(e) => {
            tracing::warn!("{e}; leaving the daily note date empty");
            String::new()
        }
    };
    Some(pattern.replace(DATE_PLACEHOLDER, &rendered))
}

/// Prefix `text` according to the configured append style.
pub fn format_entry(text: &str, append_style: &str) -> String {
    match append_style.parse::<AppendStyle>() {
        Ok(style) => format!("{}{text}", style.prefix()),
        Err(e) => {
            tracing::warn!("{e}; appending text without a prefix");
            text.to_string()
        }
    }
}

/// Append `entry` on a new line after the existing markup.
pub fn append_to_markup(existing: &str, entry: &str) -> String {
    format!("{existing}\n{entry}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_suffix_handles_teens_and_twenties() {
        let got: Vec<&str> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 30, 31]
            .into_iter()
            .map(ordinal_suffix)
            .collect();
        assert_eq!(
            got,
            vec!["st", "nd", "rd", "th", "th", "th", "th", "st", "nd", "rd", "th", "st"]
        );
    }

    #[test]
    fn style_names_are_case_insensitive() {
        assert_eq!("ISO".parse::<DateStyle>().unwrap(), DateStyle::Iso);
        assert_eq!(" Todo ".parse::<AppendStyle>().unwrap(), AppendStyle::Todo);
    }
}
