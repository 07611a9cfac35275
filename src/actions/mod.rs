use serde::{Deserialize, Serialize};

/// One entry of the result list shown by the launcher.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Action {
    pub label: String,
    pub desc: String,
    pub action: String, // `url:<link>`, `custom`, `hide`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

pub mod supernotes;
