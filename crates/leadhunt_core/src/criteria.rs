/// Search input for one hunt: the job title to match and the industry to scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HuntCriteria {
    pub role: String,
    pub industry: String,
}

impl HuntCriteria {
    pub fn new(role: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            industry: industry.into(),
        }
    }

    /// Both fields must be non-empty before a hunt may start.
    pub fn is_complete(&self) -> bool {
        !self.role.is_empty() && !self.industry.is_empty()
    }
}
