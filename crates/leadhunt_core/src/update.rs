use crate::{AppState, Effect, FetchOrigin, Msg, Phase};

/// Shown when a failed start request carries no usable cause.
pub const LAUNCH_FAILED_FALLBACK: &str = "Failed to start the scraping job. Please try again.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RoleChanged(role) => {
            state.set_role(role);
            Vec::new()
        }
        Msg::IndustryChanged(industry) => {
            state.set_industry(industry);
            Vec::new()
        }
        Msg::Mounted => vec![Effect::FetchLeads {
            origin: FetchOrigin::Mount,
        }],
        Msg::LaunchClicked => {
            if !state.criteria().is_complete() {
                return (state, Vec::new());
            }
            // One hunt at a time: a second launch while Running is ignored.
            if state.phase() == Phase::Running {
                return (state, Vec::new());
            }
            let hunt = state.begin_hunt();
            vec![
                Effect::StartJob {
                    hunt,
                    criteria: state.criteria().clone(),
                },
                Effect::StartPolling { hunt },
            ]
        }
        Msg::LaunchAccepted { hunt } => {
            if state.is_active_hunt(hunt) {
                vec![Effect::ArmFallback { hunt }]
            } else {
                Vec::new()
            }
        }
        Msg::LaunchFailed { hunt, reason } => {
            if state.is_active_hunt(hunt) {
                state.fail_hunt(launch_error_text(reason));
                vec![Effect::StopTimers]
            } else {
                Vec::new()
            }
        }
        Msg::FallbackElapsed { hunt } => {
            if state.is_active_hunt(hunt) {
                state.end_hunt();
                vec![Effect::StopTimers]
            } else {
                Vec::new()
            }
        }
        Msg::PollTick { hunt } => {
            if state.is_active_hunt(hunt) {
                vec![Effect::FetchLeads {
                    origin: FetchOrigin::Poll,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::LeadsFetched(leads) => {
            state.replace_leads(leads);
            Vec::new()
        }
        Msg::ExportClicked => {
            if state.leads().is_empty() {
                Vec::new()
            } else {
                vec![Effect::ExportCsv {
                    leads: state.leads().to_vec(),
                }]
            }
        }
        Msg::ExportWritten { path, rows } => {
            state.set_notice(format!("Exported {rows} leads to {}", path.display()));
            Vec::new()
        }
        Msg::ExportFailed { reason } => {
            state.set_notice(format!("Export failed: {reason}"));
            Vec::new()
        }
        Msg::LeadsFetchFailed { .. } => Vec::new(),
    };

    (state, effects)
}

fn launch_error_text(reason: Option<String>) -> String {
    let reason = reason
        .filter(|reason| !reason.trim().is_empty())
        .unwrap_or_else(|| LAUNCH_FAILED_FALLBACK.to_string());
    format!("Error: {reason}")
}
