use serde::{Deserialize, Serialize};

pub type LeadId = i64;

/// One discovered prospect as served by `GET /leads`.
///
/// The service keys its columns with capitalised names (`Name`, `Email`, ...)
/// next to a lower-case `id`; unknown columns such as `URL` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Intent")]
    pub intent: String,
    #[serde(rename = "Status")]
    pub status: LeadStatus,
}

impl Lead {
    /// True once enrichment found a non-empty address.
    pub fn has_email(&self) -> bool {
        self.email.as_deref().is_some_and(|email| !email.is_empty())
    }
}

/// Verification state of a lead.
///
/// Only the exact string `Verified` counts as verified. Every other value is
/// kept verbatim in `Pending` so exports reproduce what the service sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeadStatus {
    Verified,
    Pending(String),
}

impl LeadStatus {
    pub const VERIFIED: &'static str = "Verified";

    pub fn as_str(&self) -> &str {
        match self {
            LeadStatus::Verified => Self::VERIFIED,
            LeadStatus::Pending(raw) => raw,
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, LeadStatus::Verified)
    }
}

impl From<String> for LeadStatus {
    fn from(raw: String) -> Self {
        if raw == Self::VERIFIED {
            LeadStatus::Verified
        } else {
            LeadStatus::Pending(raw)
        }
    }
}

impl From<&str> for LeadStatus {
    fn from(raw: &str) -> Self {
        LeadStatus::from(raw.to_string())
    }
}

impl From<LeadStatus> for String {
    fn from(status: LeadStatus) -> Self {
        match status {
            LeadStatus::Verified => LeadStatus::VERIFIED.to_string(),
            LeadStatus::Pending(raw) => raw,
        }
    }
}
