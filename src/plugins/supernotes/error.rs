use thiserror::Error;

/// Failures produced while talking to Supernotes or interpreting preferences.
///
/// None of these ever reach the launcher: the listing phase turns them into
/// "no results" and the selection phase only logs them.
#[derive(Debug, Error)]
pub enum SupernotesError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("authentication rejected ({status}): {body}")]
    Auth { status: u16, body: String },
    #[error("remote error ({status}): {body}")]
    Remote { status: u16, body: String },
}
