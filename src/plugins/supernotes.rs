pub mod client;
pub mod daily;
pub mod error;
pub mod link;
pub mod model;
pub mod tags;

use crate::actions::Action;
use crate::plugin::Plugin;
use crate::settings::Preferences;
use client::{NoteService, SupernotesClient};
use link::LinkMode;
use model::{CardData, PendingAction};
use std::path::PathBuf;

pub const ICON: &str = "images/supernotes.png";
const CREATE_HINT: &str = "Type a title for the new card";

/// Keep the first `max_rows` non-blank lines of `markup`.
pub fn preview(markup: &str, max_rows: usize) -> String {
    markup
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(max_rows)
        .collect::<Vec<_>>()
        .join("\n")
}

fn missing_key_entry() -> Action {
    Action {
        label: "No API key".into(),
        desc: "Provide your API key in extension settings".into(),
        action: "hide".into(),
        args: None,
        icon: Some(ICON.into()),
    }
}

fn pending_entry(label: &str, desc: String, pending: PendingAction) -> Action {
    Action {
        label: label.into(),
        desc,
        action: "custom".into(),
        args: Some(pending.to_payload()),
        icon: Some(ICON.into()),
    }
}

fn card_entry(id: &str, card: &CardData, mode: LinkMode, max_rows: usize) -> Action {
    let label = if card.name.trim().is_empty() {
        "Untitled card".to_string()
    } else {
        card.name.clone()
    };
    Action {
        label,
        desc: preview(&card.markup, max_rows),
        action: format!("url:{}", mode.url(id)),
        args: None,
        icon: Some(ICON.into()),
    }
}

/// Build the result list for `query`: the create entry, the daily note entry
/// when a usable title pattern is configured, then the matching cards in the
/// order the service ranked them. Search failures only drop the matches.
pub fn list_entries<S: NoteService + ?Sized>(
    query: &str,
    prefs: &Preferences,
    service: &S,
) -> Vec<Action> {
    if prefs.api_key().is_none() {
        return vec![missing_key_entry()];
    }

    let mut out = Vec::new();
    let desc = if query.is_empty() {
        CREATE_HINT.to_string()
    } else {
        query.to_string()
    };
    out.push(pending_entry(
        "Create new card",
        desc,
        PendingAction::CreateCard { name: query.into() },
    ));

    if daily::has_placeholder(&prefs.daily_title) {
        out.push(pending_entry(
            "Append to daily note",
            query.to_string(),
            PendingAction::AppendDailyNote { text: query.into() },
        ));
    }

    match service.search(query, prefs.limit(), None) {
        Ok(result) => {
            let mode = prefs.link_mode();
            let max_rows = prefs.max_rows();
            out.extend(
                result
                    .iter()
                    .map(|(id, card)| card_entry(id, &card.data, mode, max_rows)),
            );
        }
        Err(e) => tracing::warn!("supernotes search for {query:?} failed: {e}"),
    }
    out
}

/// Launcher plugin backed by a settings file that is re-read on every event.
pub struct SupernotesPlugin {
    settings_path: PathBuf,
}

impl SupernotesPlugin {
    pub fn new<P: Into<PathBuf>>(settings_path: P) -> Self {
        Self {
            settings_path: settings_path.into(),
        }
    }

    pub fn preferences(&self) -> Preferences {
        match Preferences::load(&self.settings_path) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(
                    "failed to load settings from {}: {e}",
                    self.settings_path.display()
                );
                Preferences::default()
            }
        }
    }

    /// Run the side effect attached to a selected entry.
    pub fn activate(&self, pending: &PendingAction) {
        let prefs = self.preferences();
        if prefs.api_key().is_none() {
            tracing::warn!("ignoring {pending:?}: no API key configured");
            return;
        }
        match SupernotesClient::from_preferences(&prefs) {
            Ok(client) => crate::actions::supernotes::run(pending, &prefs, &client),
            Err(e) => tracing::error!("failed to build supernotes client: {e}"),
        }
    }
}

impl Plugin for SupernotesPlugin {
    fn search(&self, query: &str) -> Vec<Action> {
        let prefs = self.preferences();
        if prefs.api_key().is_none() {
            return vec![missing_key_entry()];
        }
        match SupernotesClient::from_preferences(&prefs) {
            Ok(client) => list_entries(query, &prefs, &client),
            Err(e) => {
                tracing::error!("failed to build supernotes client: {e}");
                Vec::new()
            }
        }
    }

    fn name(&self) -> &str {
        "supernotes"
    }

    fn description(&self) -> &str {
        "Search, create and append Supernotes cards"
    }

    fn capabilities(&self) -> &[&str] {
        &["search", "create", "daily"]
    }
}
