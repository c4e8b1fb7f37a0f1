use crate::{HuntCriteria, HuntId, Lead};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue `POST /start-job` for this hunt.
    StartJob { hunt: HuntId, criteria: HuntCriteria },
    /// Issue `GET /leads`.
    FetchLeads { origin: FetchOrigin },
    /// Start the recurring poll interval for this hunt.
    StartPolling { hunt: HuntId },
    /// Arm the one-shot fallback that ends this hunt.
    ArmFallback { hunt: HuntId },
    /// Cancel the poll interval and the fallback timer.
    StopTimers,
    /// Serialize and write these leads as a CSV download.
    ExportCsv { leads: Vec<Lead> },
}

/// Why a lead fetch was issued; only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    Mount,
    Poll,
}
