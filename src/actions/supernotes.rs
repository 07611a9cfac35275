use crate::plugins::supernotes::client::NoteService;
use crate::plugins::supernotes::daily::{self, DATE_PLACEHOLDER};
use crate::plugins::supernotes::error::SupernotesError;
use crate::plugins::supernotes::model::PendingAction;
use crate::settings::Preferences;
use chrono::{Local, NaiveDate};

/// Cards requested when looking for today's daily note. Independent of the
/// listing limit so near matches ranked above it do not hide the note.
pub const DAILY_LOOKUP_LIMIT: u32 = 100;

/// Perform a pending action. Failures are logged; the launcher window is
/// already gone so there is nobody to show them to.
pub fn run<S: NoteService + ?Sized>(pending: &PendingAction, prefs: &Preferences, service: &S) {
    let result = match pending {
        PendingAction::CreateCard { name } => create_card(name, prefs, service).map(|_| ()),
        PendingAction::AppendDailyNote { text } => {
            append_daily_note(text, prefs, service, Local::now().date_naive())
        }
    };
    if let Err(e) = result {
        tracing::error!("supernotes action failed: {e}");
    }
}

pub fn create_card<S: NoteService + ?Sized>(
    name: &str,
    prefs: &Preferences,
    service: &S,
) -> Result<String, SupernotesError> {
    let id = service.create(name, &prefs.tag_list(), "")?;
    tracing::info!("created card {id}");
    Ok(id)
}

/// Append `text` to the daily note for `today`, creating the note when no
/// card carries exactly the resolved title.
pub fn append_daily_note<S: NoteService + ?Sized>(
    text: &str,
    prefs: &Preferences,
    service: &S,
    today: NaiveDate,
) -> Result<(), SupernotesError> {
    let title = daily::resolve_title(&prefs.daily_title, &prefs.date_style, today).ok_or_else(
        || {
            SupernotesError::Config(format!(
                "daily note title '{}' has no {DATE_PLACEHOLDER} placeholder",
                prefs.daily_title
            ))
        },
    )?;
    let entry = daily::format_entry(text, &prefs.append_style);

    let existing = service.search(&title, DAILY_LOOKUP_LIMIT.max(prefs.limit()), None)?;
    match existing.iter().find(|(_, card)| card.data.name == title) {
        Some((id, card)) => {
            tracing::info!("appending to daily note {title:?}");
            service.update(id, &daily::append_to_markup(&card.data.markup, &entry))
        }
        None => {
            tracing::info!("daily note {title:?} not found, creating it");
            service.create(&title, &prefs.tag_list(), &entry).map(|_| ())
        }
    }
}
