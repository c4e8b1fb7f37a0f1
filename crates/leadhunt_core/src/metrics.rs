use crate::Lead;

/// Aggregates shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeadMetrics {
    pub total: usize,
    pub with_email: usize,
    /// Percentage of leads with an email, rounded half up. Zero when there are no leads.
    pub success_rate: u32,
}

pub fn compute_metrics(leads: &[Lead]) -> LeadMetrics {
    let total = leads.len();
    let with_email = leads.iter().filter(|lead| lead.has_email()).count();
    LeadMetrics {
        total,
        with_email,
        success_rate: success_rate(with_email, total),
    }
}

fn success_rate(with_email: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // round(with_email / total * 100) == floor((200 * with_email + total) / (2 * total))
    let rate = (200 * with_email as u64 + total as u64) / (2 * total as u64);
    rate as u32
}
