use httpmock::prelude::*;
use serde_json::json;
use supernotes_launcher::actions::Action;
use supernotes_launcher::launcher::{launch_action, launch_encoded};
use supernotes_launcher::plugin::Plugin;
use supernotes_launcher::plugins::supernotes::SupernotesPlugin;
use supernotes_launcher::settings::Preferences;
use tempfile::tempdir;

fn plugin_for(server: &MockServer, dir: &std::path::Path) -> SupernotesPlugin {
    let path = dir.join("settings.json");
    Preferences {
        api_key: Some("secret".into()),
        api_url: server.base_url(),
        tags: "inbox".into(),
        ..Default::default()
    }
    .save(&path)
    .unwrap();
    SupernotesPlugin::new(path)
}

#[test]
fn search_then_enter_creates_card() {
    let server = MockServer::start();
    let select = server.mock(|when, then| {
        when.method(POST).path("/v1/cards/get/select");
        then.status(200).json_body(json!({}));
    });
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/cards/simple")
            .json_body_partial(r#"{"name": "groceries", "tags": ["inbox"], "markup": ""}"#);
        then.status(200).json_body(json!({"data": {"id": "n1"}}));
    });

    let dir = tempdir().unwrap();
    let plugin = plugin_for(&server, dir.path());
    let results = plugin.search("groceries");
    select.assert();

    // Entries survive a JSON round trip through the host.
    let json = serde_json::to_string(&results[0]).unwrap();
    let action: Action = serde_json::from_str(&json).unwrap();
    launch_action(&action, &plugin).unwrap();
    create.assert();
}

#[test]
fn unknown_pending_tag_is_rejected() {
    let server = MockServer::start();
    let dir = tempdir().unwrap();
    let plugin = plugin_for(&server, dir.path());
    let action = Action {
        label: "Create new card".into(),
        desc: String::new(),
        action: "custom".into(),
        args: Some(r#"{"action":"push","name":"x"}"#.into()),
        icon: None,
    };
    assert!(launch_action(&action, &plugin).is_err());
}

#[test]
fn create_failure_is_swallowed() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST).path("/v1/cards/simple");
        then.status(401).body("bad key");
    });
    let dir = tempdir().unwrap();
    let plugin = plugin_for(&server, dir.path());
    let action = Action {
        label: "Create new card".into(),
        desc: String::new(),
        action: "custom".into(),
        args: Some(r#"{"action":"create_card","name":"x"}"#.into()),
        icon: None,
    };
    launch_action(&action, &plugin).unwrap();
    create.assert();
}

#[test]
fn plugin_without_key_lists_hint() {
    let dir = tempdir().unwrap();
    let plugin = SupernotesPlugin::new(dir.path().join("missing.json"));
    let results = plugin.search("anything");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].action, "hide");
    assert_eq!(plugin.name(), "supernotes");
}

#[test]
fn malformed_entry_is_reported_not_launched() {
    let server = MockServer::start();
    let any = server.mock(|when, then| {
        when.any_request();
        then.status(200).body("{}");
    });
    let dir = tempdir().unwrap();
    let plugin = plugin_for(&server, dir.path());
    assert!(launch_encoded("{not json", &plugin).is_err());
    any.assert_hits(0);
}
