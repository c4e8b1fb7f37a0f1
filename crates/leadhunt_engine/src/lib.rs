//! Lead hunt engine: remote service client, export pipeline and the job controller runtime.
mod client;
mod controller;
mod export;
mod timer;
mod types;

pub use client::{LeadService, ReqwestLeadService, ServiceSettings, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use controller::{ControllerSettings, JobController};
pub use export::{
    export_filename, leads_to_csv, write_csv_export, ExportError, ExportSummary, CSV_HEADER,
    CSV_MIME_TYPE,
};
pub use timer::TimerHandle;
pub use types::{FailureKind, ServiceError};
