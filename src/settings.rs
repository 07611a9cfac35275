use crate::plugins::supernotes::link::LinkMode;
use crate::plugins::supernotes::tags::parse_tags;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.supernotes.app";
pub const DEFAULT_LIMIT: u32 = 10;
pub const DEFAULT_MAX_ROWS: usize = 3;

/// User preferences of the plugin.
///
/// The host owns the settings file; the plugin reloads it for every query and
/// selection so edits apply without a restart.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Preferences {
    /// Supernotes API key. Without it only a hint entry is listed.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Maximum number of cards requested per search.
    #[serde(default, deserialize_with = "lenient_number")]
    pub limit: Option<u64>,
    /// Number of non-blank markup lines shown under each card.
    #[serde(default, deserialize_with = "lenient_number")]
    pub max_rows: Option<u64>,
    /// Link mode used when a card is selected (`app_nb`, `app_pv`, `web_nb`
    /// or `web_pv`).
    #[serde(default = "default_open_in")]
    pub open_in: String,
    /// Comma separated tags attached to created cards.
    #[serde(default = "default_tags")]
    pub tags: String,
    /// Title of the daily note. Must contain `{date}` for the append entry to
    /// be offered.
    #[serde(default = "default_daily_title")]
    pub daily_title: String,
    #[serde(default = "default_date_style")]
    pub date_style: String,
    #[serde(default = "default_append_style")]
    pub append_style: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// When enabled the logger is initialised at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<String>,
}

fn default_open_in() -> String {
    "app_nb".into()
}

fn default_tags() -> String {
    "saved on the go".into()
}

fn default_daily_title() -> String {
    "Journal {date}".into()
}

fn default_date_style() -> String {
    "iso".into()
}

fn default_append_style() -> String {
    "bullet".into()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.into()
}

fn default_timeout_secs() -> u64 {
    5
}

/// Accept numbers as well as numeric strings. Anything else is treated as
/// unset.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            api_key: None,
            limit: None,
            max_rows: None,
            open_in: default_open_in(),
            tags: default_tags(),
            daily_title: default_daily_title(),
            date_style: default_date_style(),
            append_style: default_append_style(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            debug_logging: false,
            log_file: None,
        }
    }
}

impl Preferences {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// The configured API key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn limit(&self) -> u32 {
        self.limit
            .filter(|n| *n > 0)
            .map(|n| n.min(u32::MAX as u64) as u32)
            .unwrap_or(DEFAULT_LIMIT)
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
            .map(|n| n as usize)
            .unwrap_or(DEFAULT_MAX_ROWS)
    }

    pub fn link_mode(&self) -> LinkMode {
        match self.open_in.parse() {
            Ok(mode) => mode,
            Err(e) => {
                tracing::warn!("{e}; falling back to the default link mode");
                LinkMode::default()
            }
        }
    }

    pub fn tag_list(&self) -> Vec<String> {
        parse_tags(&self.tags)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
