//! Lead hunt core: pure job-session state machine, lead model and view-model helpers.
mod criteria;
mod effect;
mod lead;
mod metrics;
mod msg;
mod state;
mod update;
mod view_model;

pub use criteria::HuntCriteria;
pub use effect::{Effect, FetchOrigin};
pub use lead::{Lead, LeadId, LeadStatus};
pub use metrics::{compute_metrics, LeadMetrics};
pub use msg::Msg;
pub use state::{AppState, HuntId, Phase};
pub use update::{update, LAUNCH_FAILED_FALLBACK};
pub use view_model::{AppViewModel, LeadRowView, EMAIL_NOT_FOUND};
