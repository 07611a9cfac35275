
use chrono::NaiveDate;
use mock_service::{card, Call, MockService};
use supernotes_launcher::actions::supernotes::{
    append_daily_note, create_card, run, DAILY_LOOKUP_LIMIT,
};
use supernotes_launcher::plugins::supernotes::model::PendingAction;
use supernotes_launcher::settings::Preferences;

fn prefs() -> Preferences {
    Preferences {
        api_key: Some("key".into()),
        tags: "inbox, on-the-go, bad!".into(),
        daily_title: "Journal {date}".into(),
        ..Default::default()
    }
}

fn may_fourth() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 4).unwrap()
}

fn tags() -> Vec<String> {
    vec!["inbox".to_string(), "on-the-go".to_string()]
}

#[test]
fn create_card_uses_parsed_tags() {
    let service = MockService::default();
    let id = create_card("Buy milk", &prefs(), &service).unwrap();
    assert_eq!(id, "new-card");
    assert_eq!(
        service.calls(),
        vec![Call::Create {
            name: "Buy milk".into(),
            tags: tags(),
            markup: String::new(),
        }]
    );
}

#[test]
fn run_dispatches_create_card() {
    let service = MockService::default();
    run(&PendingAction::CreateCard { name: String::new() }, &prefs(), &service);
    assert!(matches!(&service.calls()[..], [Call::Create { name, .. }] if name.is_empty()));
}

#[test]
fn append_updates_existing_daily_note() {
    let service = MockService::with_cards(vec![
        card("other", "Journal 2025-05-04 draft", "nope"),
        card("daily", "Journal 2025-05-04", "- coffee"),
    ]);
    append_daily_note("call mum", &prefs(), &service, may_fourth()).unwrap();
    assert_eq!(
        service.calls()[1],
        Call::Update {
            id: "daily".into(),
            markup: "- coffee\n- call mum".into(),
        }
    );
    assert_eq!(
        service.calls()[0],
        Call::Search {
            query: "Journal 2025-05-04".into(),
            limit: DAILY_LOOKUP_LIMIT
        }
    );
}

#[test]
fn append_finds_daily_note_ranked_below_listing_limit() {
    let p = Preferences {
        limit: Some(1),
        ..prefs()
    };
    let service = MockService::with_cards(vec![
        card("draft", "Journal 2025-05-04 draft", "nope"),
        card("daily", "Journal 2025-05-04", "- coffee"),
    ]);
    append_daily_note("tea", &p, &service, may_fourth()).unwrap();
    let calls = service.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[1],
        Call::Update {
            id: "daily".into(),
            markup: "- coffee\n- tea".into(),
        }
    );
}

#[test]
fn append_creates_missing_daily_note() {
    let p = Preferences {
        append_style: "todo".into(),
        date_style: "traditional".into(),
        ..prefs()
    };
    let service = MockService::default();
    append_daily_note("water plants", &p, &service, may_fourth()).unwrap();
    assert_eq!(
        service.calls()[1],
        Call::Create {
            name: "Journal May 4th, 2025".into(),
            tags: tags(),
            markup: "- [ ] water plants".into(),
        }
    );
}

#[test]
fn unknown_styles_do_not_abort_append() {
    let p = Preferences {
        append_style: "fancy".into(),
        date_style: "klingon".into(),
        ..prefs()
    };
    let service = MockService::default();
    append_daily_note("raw", &p, &service, may_fourth()).unwrap();
    assert_eq!(
        service.calls()[1],
        Call::Create {
            name: "Journal ".into(),
            tags: tags(),
            markup: "raw".into(),
        }
    );
}

#[test]
fn append_without_placeholder_is_config_error() {
    let p = Preferences {
        daily_title: "Journal".into(),
        ..prefs()
    };
    let service = MockService::default();
    assert!(append_daily_note("x", &p, &service, may_fourth()).is_err());
    assert!(service.calls().is_empty());
}

#[test]
fn failed_lookup_does_not_create_duplicate() {
    let service = MockService::failing();
    run(
        &PendingAction::AppendDailyNote { text: "x".into() },
        &prefs(),
        &service,
    );
    assert_eq!(service.calls().len(), 1);
}
