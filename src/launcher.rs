use crate::actions::Action;
use crate::plugins::supernotes::model::PendingAction;
use crate::plugins::supernotes::SupernotesPlugin;
use anyhow::Context;

#[derive(Debug, PartialEq, Eq)]
pub enum ActionKind<'a> {
    OpenUrl(&'a str),
    Custom(&'a str),
    HideWindow,
    Noop,
}

pub fn parse_action_kind(action: &Action) -> ActionKind<'_> {
    let s = action.action.as_str();
    if let Some(url) = s.strip_prefix("url:") {
        return ActionKind::OpenUrl(url);
    }
    if s == "custom" {
        if let Some(payload) = action.args.as_deref() {
            return ActionKind::Custom(payload);
        }
    }
    if s == "hide" {
        return ActionKind::HideWindow;
    }
    ActionKind::Noop
}

pub fn launch_action(action: &Action, plugin: &SupernotesPlugin) -> anyhow::Result<()> {
    match parse_action_kind(action) {
        ActionKind::OpenUrl(url) => {
            open::that(url).with_context(|| format!("failed to open {url}"))?;
        }
        ActionKind::Custom(payload) => {
            let pending = PendingAction::from_payload(payload)
                .with_context(|| format!("unknown pending action {payload}"))?;
            plugin.activate(&pending);
        }
        ActionKind::HideWindow | ActionKind::Noop => {}
    }
    Ok(())
}

/// Decode an entry as printed by `query` and launch it.
pub fn launch_encoded(raw: &str, plugin: &SupernotesPlugin) -> anyhow::Result<()> {
    let action: Action = serde_json::from_str(raw).context("malformed action")?;
    launch_action(&action, plugin)
}
