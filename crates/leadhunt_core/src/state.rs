use crate::view_model::{AppViewModel, LeadRowView};
use crate::{compute_metrics, HuntCriteria, Lead};

pub type HuntId = u64;

/// Whether a hunt is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
}

/// Client-local job session plus the lead set currently on display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    criteria: HuntCriteria,
    phase: Phase,
    active_hunt: Option<HuntId>,
    last_hunt: HuntId,
    last_error: Option<String>,
    notice: Option<String>,
    leads: Vec<Lead>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn criteria(&self) -> &HuntCriteria {
        &self.criteria
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Hunt that currently owns the `Running` phase.
    pub fn active_hunt(&self) -> Option<HuntId> {
        self.active_hunt
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            role: self.criteria.role.clone(),
            industry: self.criteria.industry.clone(),
            last_error: self.last_error.clone(),
            notice: self.notice.clone(),
            metrics: compute_metrics(&self.leads),
            leads: self.leads.iter().map(LeadRowView::from_lead).collect(),
            can_launch: self.phase == Phase::Idle && self.criteria.is_complete(),
            can_export: !self.leads.is_empty(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_role(&mut self, role: String) {
        if self.criteria.role != role {
            self.criteria.role = role;
            self.dirty = true;
        }
    }

    pub(crate) fn set_industry(&mut self, industry: String) {
        if self.criteria.industry != industry {
            self.criteria.industry = industry;
            self.dirty = true;
        }
    }

    pub(crate) fn is_active_hunt(&self, hunt: HuntId) -> bool {
        self.phase == Phase::Running && self.active_hunt == Some(hunt)
    }

    /// Enter `Running` under a fresh hunt id.
    pub(crate) fn begin_hunt(&mut self) -> HuntId {
        self.last_hunt += 1;
        let hunt = self.last_hunt;
        self.active_hunt = Some(hunt);
        self.phase = Phase::Running;
        self.last_error = None;
        self.dirty = true;
        hunt
    }

    pub(crate) fn end_hunt(&mut self) {
        self.active_hunt = None;
        self.phase = Phase::Idle;
        self.dirty = true;
    }

    pub(crate) fn fail_hunt(&mut self, message: String) {
        self.end_hunt();
        self.last_error = Some(message);
    }

    /// Last fetch wins: the listing replaces the working set without merging.
    ///
    /// A successful fetch also clears `last_error`, including a launch error
    /// that a poll fetch already in flight lands after.
    pub(crate) fn replace_leads(&mut self, leads: Vec<Lead>) {
        if self.leads != leads {
            self.leads = leads;
            self.dirty = true;
        }
        if self.last_error.take().is_some() {
            self.dirty = true;
        }
    }

    pub(crate) fn set_notice(&mut self, notice: String) {
        self.notice = Some(notice);
        self.dirty = true;
    }
}
