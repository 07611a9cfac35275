use once_cell::sync::Lazy;
use regex::Regex;

// `\w` is the Unicode word class and already covers `_`.
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w\- ]+$").unwrap());

/// Split a comma separated tag list, dropping pieces that are not valid tags.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| TAG_RE.is_match(t))
        .map(str::to_string)
        .collect()
}
