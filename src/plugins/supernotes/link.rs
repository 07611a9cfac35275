use super::error::SupernotesError;
use std::str::FromStr;

/// Where a selected card is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    AppNoteboard,
    AppPreview,
    WebNoteboard,
    WebPreview,
}

impl Default for LinkMode {
    fn default() -> Self {
        LinkMode::AppNoteboard
    }
}

impl FromStr for LinkMode {
    type Err = SupernotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "app_nb" | "app-noteboard" => Ok(LinkMode::AppNoteboard),
            "app_pv" | "app-preview" => Ok(LinkMode::AppPreview),
            "web_nb" | "web-noteboard" => Ok(LinkMode::WebNoteboard),
            "web_pv" | "web-preview" => Ok(LinkMode::WebPreview),
            other => Err(SupernotesError::Config(format!(
                "unknown link mode '{other}'"
            ))),
        }
    }
}

impl LinkMode {
    pub fn url(self, id: &str) -> String {
        match self {
            LinkMode::AppNoteboard => format!("supernotes:/v/card/{id}"),
            LinkMode::AppPreview => format!("supernotes:/?preview={id}"),
            LinkMode::WebNoteboard => format!("https://my.supernotes.app/v/card/{id}"),
            LinkMode::WebPreview => format!("https://my.supernotes.app/?preview={id}"),
        }
    }
}

/// Build the deep link for `id` from a configured mode name.
pub fn build_link(mode: &str, id: &str) -> Result<String, SupernotesError> {
    Ok(mode.parse::<LinkMode>()?.url(id))
}
