use super::error::SupernotesError;
use super::model::SearchResult;
use crate::settings::Preferences;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use std::time::Duration;

const SELECT_PATH: &str = "/v1/cards/get/select";
const CREATE_PATH: &str = "/v1/cards/simple";
const UPDATE_PATH: &str = "/v1/cards";
const API_KEY_HEADER: &str = "Api-Key";

/// Operations the plugin needs from the note service.
pub trait NoteService {
    /// Search cards matching `query`, most relevant first. `filter` is sent
    /// as the `filter_group` of the request when present.
    fn search(
        &self,
        query: &str,
        limit: u32,
        filter: Option<&Value>,
    ) -> Result<SearchResult, SupernotesError>;

    /// Create a card and return its id. Never retried.
    fn create(&self, name: &str, tags: &[String], markup: &str) -> Result<String, SupernotesError>;

    /// Overwrite the markup of an existing card.
    fn update(&self, id: &str, markup: &str) -> Result<(), SupernotesError>;
}

/// Blocking client for the Supernotes REST API.
pub struct SupernotesClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupernotesClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, SupernotesError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("supernotes-launcher")
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_preferences(prefs: &Preferences) -> Result<Self, SupernotesError> {
        Self::new(
            &prefs.api_url,
            prefs.api_key().unwrap_or_default(),
            prefs.timeout(),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send an authenticated request and return the status and body of a
    /// successful response.
    fn send(&self, req: RequestBuilder) -> Result<(StatusCode, String), SupernotesError> {
        // `.json()` on the builder already sets the content type.
        let resp = req.header(API_KEY_HEADER, &self.api_key).send()?;
        let status = resp.status();
        let body = resp.text()?;
        if status.is_success() {
            return Ok((status, body));
        }
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(SupernotesError::Auth {
                status: status.as_u16(),
                body,
            }),
            _ => Err(SupernotesError::Remote {
                status: status.as_u16(),
                body,
            }),
        }
    }
}

fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, SupernotesError> {
    serde_json::from_str(body).map_err(|e| SupernotesError::Remote {
        status: status.as_u16(),
        body: format!("invalid response: {e}"),
    })
}

/// First `data.id` found anywhere in a create response.
fn find_card_id(value: &Value) -> Option<&str> {
    match value {
        Value::Object(map) => map
            .get("data")
            .and_then(|d| d.get("id"))
            .and_then(Value::as_str)
            .or_else(|| map.values().find_map(find_card_id)),
        Value::Array(items) => items.iter().find_map(find_card_id),
        _ => None,
    }
}

impl NoteService for SupernotesClient {
    fn search(
        &self,
        query: &str,
        limit: u32,
        filter: Option<&Value>,
    ) -> Result<SearchResult, SupernotesError> {
        tracing::info!("requesting results for query {query:?}");
        let mut payload = json!({
            "include_membership_statuses": [0, 1, 2],
            "search": query,
            "include": [],
            "exclude": [],
            "sort_type": 0,
            "sort_ascending": false,
            "limit": limit.max(1),
        });
        if let Some(filter) = filter {
            payload["filter_group"] = filter.clone();
        }
        let (status, body) = self.send(self.client.post(self.url(SELECT_PATH)).json(&payload))?;
        if body.trim().is_empty() {
            return Ok(SearchResult::new());
        }
        let result: SearchResult = decode(status, &body)?;
        tracing::debug!("search returned {} cards", result.len());
        Ok(result)
    }

    fn create(&self, name: &str, tags: &[String], markup: &str) -> Result<String, SupernotesError> {
        tracing::info!("creating new card with name {name:?}");
        let payload = json!({
            "name": name,
            "markup": markup,
            "color": null,
            "icon": null,
            "tags": tags,
            "parent_ids": [],
            "source": null,
            "meta": {},
        });
        let (status, body) = self.send(self.client.post(self.url(CREATE_PATH)).json(&payload))?;
        let value: Value = decode(status, &body)?;
        find_card_id(&value)
            .map(str::to_string)
            .ok_or_else(|| SupernotesError::Remote {
                status: status.as_u16(),
                body: format!("created card id missing from response: {body}"),
            })
    }

    fn update(&self, id: &str, markup: &str) -> Result<(), SupernotesError> {
        tracing::info!("updating markup of card {id}");
        let mut payload = Map::new();
        payload.insert(id.to_string(), json!({ "data": { "markup": markup } }));
        self.send(self.client.patch(self.url(UPDATE_PATH)).json(&payload))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_id_found_in_nested_response() {
        let value = json!([{ "success": true, "payload": { "data": { "id": "c1" } } }]);
        assert_eq!(find_card_id(&value), Some("c1"));
        assert_eq!(find_card_id(&json!({ "ok": true })), None);
    }
}
