use crate::{Lead, LeadId, LeadMetrics, Phase};

/// Placeholder shown in the email column while enrichment has found nothing.
pub const EMAIL_NOT_FOUND: &str = "Not found";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub role: String,
    pub industry: String,
    pub last_error: Option<String>,
    pub notice: Option<String>,
    pub metrics: LeadMetrics,
    pub leads: Vec<LeadRowView>,
    pub can_launch: bool,
    pub can_export: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadRowView {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub intent: String,
    pub verified: bool,
}

impl LeadRowView {
    pub(crate) fn from_lead(lead: &Lead) -> Self {
        let email = match &lead.email {
            Some(email) if lead.has_email() => email.clone(),
            _ => EMAIL_NOT_FOUND.to_string(),
        };
        Self {
            id: lead.id,
            name: lead.name.clone(),
            email,
            company: lead.company.clone(),
            role: lead.role.clone(),
            intent: lead.intent.clone(),
            verified: lead.status.is_verified(),
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.verified {
            "Verified"
        } else {
            "Pending"
        }
    }
}
