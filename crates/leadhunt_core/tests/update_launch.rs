use std::sync::Once;

use leadhunt_core::{
    update, AppState, Effect, FetchOrigin, HuntCriteria, Msg, Phase, LAUNCH_FAILED_FALLBACK,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(hunt_logging::initialize_for_tests);
}

fn with_criteria(role: &str, industry: &str) -> AppState {
    let (state, _) = update(AppState::new(), Msg::RoleChanged(role.to_string()));
    let (state, _) = update(state, Msg::IndustryChanged(industry.to_string()));
    state
}

fn launched(role: &str, industry: &str) -> (AppState, u64) {
    let (state, effects) = update(with_criteria(role, industry), Msg::LaunchClicked);
    let hunt = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::StartJob { hunt, .. } => Some(*hunt),
            _ => None,
        })
        .expect("start job effect");
    (state, hunt)
}

#[test]
fn launch_with_complete_criteria_starts_job_and_polling() {
    init_logging();
    let state = with_criteria("Founder", "Fintech");
    assert_eq!(state.phase(), Phase::Idle);

    let (mut next, effects) = update(state, Msg::LaunchClicked);

    assert_eq!(next.phase(), Phase::Running);
    assert_eq!(next.active_hunt(), Some(1));
    assert!(next.consume_dirty());
    assert_eq!(
        effects,
        vec![
            Effect::StartJob {
                hunt: 1,
                criteria: HuntCriteria::new("Founder", "Fintech"),
            },
            Effect::StartPolling { hunt: 1 },
        ]
    );
}

#[test]
fn launch_with_missing_role_or_industry_is_noop() {
    init_logging();
    for (role, industry) in [("", "Fintech"), ("Founder", ""), ("", "")] {
        let mut state = with_criteria(role, industry);
        state.consume_dirty();
        let before = state.clone();

        let (mut next, effects) = update(state, Msg::LaunchClicked);

        assert_eq!(next, before, "role={role:?} industry={industry:?}");
        assert_eq!(next.phase(), Phase::Idle);
        assert!(effects.is_empty());
        assert!(!next.consume_dirty());
    }
}

#[test]
fn launch_clears_previous_error() {
    init_logging();
    let (state, hunt) = launched("Founder", "Fintech");
    let (state, _) = update(
        state,
        Msg::LaunchFailed {
            hunt,
            reason: Some("boom".to_string()),
        },
    );
    assert_eq!(state.last_error(), Some("Error: boom"));

    let (state, effects) = update(state, Msg::LaunchClicked);
    assert_eq!(state.last_error(), None);
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(effects.len(), 2);
}

#[test]
fn second_launch_while_running_is_rejected() {
    init_logging();
    let (state, hunt) = launched("Founder", "Fintech");
    let (state, effects) = update(state, Msg::LaunchClicked);

    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.active_hunt(), Some(hunt));
    assert!(!state.view().can_launch);
}

#[test]
fn accepted_launch_arms_fallback() {
    init_logging();
    let (state, hunt) = launched("CTO", "SaaS");
    let (state, effects) = update(state, Msg::LaunchAccepted { hunt });

    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(effects, vec![Effect::ArmFallback { hunt }]);
}

#[test]
fn failed_launch_returns_to_idle_with_service_message() {
    init_logging();
    let (state, hunt) = launched("CTO", "SaaS");
    let (state, effects) = update(
        state,
        Msg::LaunchFailed {
            hunt,
            reason: Some("Search quota exhausted".to_string()),
        },
    );

    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.active_hunt(), None);
    assert_eq!(state.last_error(), Some("Error: Search quota exhausted"));
    assert_eq!(effects, vec![Effect::StopTimers]);
}

#[test]
fn failed_launch_without_reason_uses_generic_message() {
    init_logging();
    let (state, hunt) = launched("CTO", "SaaS");
    let (state, _) = update(state, Msg::LaunchFailed { hunt, reason: None });

    let expected = format!("Error: {LAUNCH_FAILED_FALLBACK}");
    assert_eq!(state.last_error(), Some(expected.as_str()));
}

#[test]
fn fallback_ends_hunt_without_error() {
    init_logging();
    let (state, hunt) = launched("CTO", "SaaS");
    let (state, _) = update(state, Msg::LaunchAccepted { hunt });
    let (state, effects) = update(state, Msg::FallbackElapsed { hunt });

    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.last_error(), None);
    assert_eq!(effects, vec![Effect::StopTimers]);
}

#[test]
fn poll_tick_fetches_only_while_running() {
    init_logging();
    let (state, hunt) = launched("CTO", "SaaS");
    let (state, effects) = update(state, Msg::PollTick { hunt });
    assert_eq!(
        effects,
        vec![Effect::FetchLeads {
            origin: FetchOrigin::Poll
        }]
    );

    let (state, _) = update(state, Msg::FallbackElapsed { hunt });
    let (_state, effects) = update(state, Msg::PollTick { hunt });
    assert!(effects.is_empty());
}

#[test]
fn stale_hunt_messages_are_ignored() {
    init_logging();
    let (state, first) = launched("CTO", "SaaS");
    let (state, _) = update(state, Msg::FallbackElapsed { hunt: first });
    let (state, effects) = update(state, Msg::LaunchClicked);
    let second = state.active_hunt().expect("second hunt");
    assert_ne!(first, second);
    assert_eq!(effects.len(), 2);

    let before = state.clone();
    let (state, effects) = update(state, Msg::FallbackElapsed { hunt: first });
    assert!(effects.is_empty());
    let (state, effects) = update(
        state,
        Msg::LaunchFailed {
            hunt: first,
            reason: None,
        },
    );
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::PollTick { hunt: first });
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::LaunchAccepted { hunt: first });
    assert!(effects.is_empty());

    assert_eq!(state, before);
    assert_eq!(state.phase(), Phase::Running);
}

#[test]
fn mount_requests_initial_fetch() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Mounted);

    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(
        effects,
        vec![Effect::FetchLeads {
            origin: FetchOrigin::Mount
        }]
    );
}
