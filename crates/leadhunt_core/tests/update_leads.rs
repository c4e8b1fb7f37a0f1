use std::path::PathBuf;
use std::sync::Once;

use leadhunt_core::{
    update, AppState, Effect, FetchOrigin, Lead, LeadStatus, Msg, Phase, EMAIL_NOT_FOUND,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(hunt_logging::initialize_for_tests);
}

fn lead(id: i64, name: &str, email: Option<&str>, status: &str) -> Lead {
    Lead {
        id,
        name: name.to_string(),
        email: email.map(str::to_string),
        company: "Acme".to_string(),
        role: "CEO".to_string(),
        intent: "HOT".to_string(),
        status: LeadStatus::from(status),
    }
}

fn running() -> (AppState, u64) {
    let (state, _) = update(AppState::new(), Msg::RoleChanged("CEO".to_string()));
    let (state, _) = update(state, Msg::IndustryChanged("Fintech".to_string()));
    let (state, _) = update(state, Msg::LaunchClicked);
    let hunt = state.active_hunt().expect("running hunt");
    (state, hunt)
}

#[test]
fn fetched_leads_replace_the_working_set() {
    init_logging();
    let first = vec![
        lead(1, "Ana Lee", Some("ana@x.com"), "Verified"),
        lead(2, "Bo Chen", None, "Not Found"),
    ];
    let second = vec![lead(3, "Cy Diaz", Some("cy@x.com"), "Verified")];

    let (state, _) = update(AppState::new(), Msg::LeadsFetched(first));
    assert_eq!(state.leads().len(), 2);

    let (state, effects) = update(state, Msg::LeadsFetched(second.clone()));
    assert!(effects.is_empty());
    assert_eq!(state.leads(), second.as_slice());
}

#[test]
fn in_flight_poll_result_clears_launch_error() {
    init_logging();
    let (state, hunt) = running();
    let (state, _) = update(state, Msg::PollTick { hunt });
    let (state, _) = update(
        state,
        Msg::LaunchFailed {
            hunt,
            reason: Some("Search quota exhausted".to_string()),
        },
    );
    assert_eq!(state.last_error(), Some("Error: Search quota exhausted"));

    let listing = vec![lead(1, "Ana Lee", Some("ana@x.com"), "Verified")];
    let (mut state, effects) = update(state, Msg::LeadsFetched(listing.clone()));

    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.last_error(), None);
    assert_eq!(state.leads(), listing.as_slice());
    assert!(state.consume_dirty());
}

#[test]
fn duplicate_ids_are_kept_as_served() {
    init_logging();
    let served = vec![
        lead(7, "Ana Lee", None, "Pending"),
        lead(7, "Ana Lee", Some("ana@x.com"), "Verified"),
    ];
    let (state, _) = update(AppState::new(), Msg::LeadsFetched(served.clone()));

    assert_eq!(state.leads(), served.as_slice());
}

#[test]
fn identical_listing_does_not_mark_dirty() {
    init_logging();
    let listing = vec![lead(1, "Ana Lee", Some("ana@x.com"), "Verified")];
    let (mut state, _) = update(AppState::new(), Msg::LeadsFetched(listing.clone()));
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::LeadsFetched(listing));
    assert!(!state.consume_dirty());
}

#[test]
fn failed_fetch_while_running_changes_nothing() {
    init_logging();
    let (state, _hunt) = running();
    let (state, _) = update(
        state,
        Msg::LeadsFetched(vec![lead(1, "Ana Lee", None, "Pending")]),
    );
    let before = state.clone();

    let (state, effects) = update(
        state,
        Msg::LeadsFetchFailed {
            origin: FetchOrigin::Poll,
            reason: "connection refused".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state, before);
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.last_error(), None);
    assert_eq!(state.leads().len(), 1);
}

#[test]
fn successful_fetch_clears_error() {
    init_logging();
    let (state, hunt) = running();
    let (state, _) = update(state, Msg::LaunchFailed { hunt, reason: None });
    assert!(state.last_error().is_some());

    let (state, _) = update(state, Msg::LeadsFetched(Vec::new()));
    assert_eq!(state.last_error(), None);
}

#[test]
fn export_with_no_leads_is_noop() {
    init_logging();
    let mut state = AppState::new();
    state.consume_dirty();

    let (mut state, effects) = update(state, Msg::ExportClicked);

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert!(!state.view().can_export);
}

#[test]
fn export_carries_current_leads() {
    init_logging();
    let listing = vec![
        lead(1, "Ana Lee", Some("ana@x.com"), "Verified"),
        lead(2, "Bo Chen", None, "Not Found"),
    ];
    let (state, _) = update(AppState::new(), Msg::LeadsFetched(listing.clone()));
    assert!(state.view().can_export);

    let (_state, effects) = update(state, Msg::ExportClicked);
    assert_eq!(effects, vec![Effect::ExportCsv { leads: listing }]);
}

#[test]
fn export_outcome_sets_notice() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::ExportWritten {
            path: PathBuf::from("out/leads_2024-01-01.csv"),
            rows: 4,
        },
    );
    assert_eq!(
        state.view().notice.as_deref(),
        Some("Exported 4 leads to out/leads_2024-01-01.csv")
    );

    let (state, _) = update(
        state,
        Msg::ExportFailed {
            reason: "disk full".to_string(),
        },
    );
    assert_eq!(state.view().notice.as_deref(), Some("Export failed: disk full"));
}

#[test]
fn view_rows_render_missing_email_and_pending_status() {
    init_logging();
    let listing = vec![
        lead(1, "Ana Lee", Some("ana@x.com"), "Verified"),
        lead(2, "Bo Chen", None, "Not Found"),
        lead(3, "Cy Diaz", Some(""), "verified"),
    ];
    let (state, _) = update(AppState::new(), Msg::LeadsFetched(listing));
    let view = state.view();

    let rows: Vec<_> = view
        .leads
        .iter()
        .map(|row| (row.id, row.email.as_str(), row.status_label()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (1, "ana@x.com", "Verified"),
            (2, EMAIL_NOT_FOUND, "Pending"),
            (3, EMAIL_NOT_FOUND, "Pending"),
        ]
    );
    assert_eq!(view.metrics.total, 3);
    assert_eq!(view.metrics.with_email, 1);
    assert_eq!(view.metrics.success_rate, 33);
}
