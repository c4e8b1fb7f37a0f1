use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Operator edited the target role input.
    RoleChanged(String),
    /// Operator edited the industry input.
    IndustryChanged(String),
    /// View was created; loads whatever leads the service already holds.
    Mounted,
    /// Operator asked to launch a hunt with the current inputs.
    LaunchClicked,
    /// Service accepted the start request for a hunt.
    LaunchAccepted { hunt: crate::HuntId },
    /// Start request failed. `reason` is the best human-readable cause, if any.
    LaunchFailed {
        hunt: crate::HuntId,
        reason: Option<String>,
    },
    /// Poll interval fired for a running hunt.
    PollTick { hunt: crate::HuntId },
    /// Fallback timer fired for a running hunt.
    FallbackElapsed { hunt: crate::HuntId },
    /// A full lead listing arrived.
    LeadsFetched(Vec<crate::Lead>),
    /// A lead listing failed. Never surfaced to the operator.
    LeadsFetchFailed {
        origin: crate::FetchOrigin,
        reason: String,
    },
    /// Operator asked for a CSV download.
    ExportClicked,
    /// Export file was written.
    ExportWritten { path: PathBuf, rows: usize },
    /// Export file could not be written.
    ExportFailed { reason: String },
}
