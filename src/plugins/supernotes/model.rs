use hashlink::LinkedHashMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Card fields as returned inside the `data` object of the Supernotes API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub markup: String,
    #[serde(default, deserialize_with = "string_tags")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardEnvelope {
    #[serde(default)]
    pub data: CardData,
}

/// Search response keyed by card id, kept in the order the server ranked it.
pub type SearchResult = LinkedHashMap<String, CardEnvelope>;

/// Payload attached to a synthesized entry and interpreted once the user
/// selects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PendingAction {
    CreateCard { name: String },
    AppendDailyNote { text: String },
}

impl PendingAction {
    pub fn to_payload(&self) -> String {
        serde_json::json!(self).to_string()
    }

    /// Decode a payload produced by [`PendingAction::to_payload`]. Unknown
    /// tags are rejected.
    pub fn from_payload(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Tags are only informational here, so anything that is not a plain string
// list is ignored instead of failing the whole search.
fn string_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    })
}
