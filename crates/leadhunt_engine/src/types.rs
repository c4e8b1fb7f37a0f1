use std::fmt;

/// Failure talking to the lead service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    pub kind: FailureKind,
    pub message: String,
    /// `message` field of the service's JSON error body, when present.
    pub service_message: Option<String>,
}

impl ServiceError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            service_message: None,
        }
    }

    pub fn with_service_message(mut self, service_message: Option<String>) -> Self {
        self.service_message = service_message;
        self
    }

    /// Operator-facing cause: the service's own message first, then ours.
    pub fn user_reason(&self) -> Option<String> {
        self.service_message
            .as_deref()
            .filter(|msg| !msg.trim().is_empty())
            .or_else(|| Some(self.message.as_str()).filter(|msg| !msg.trim().is_empty()))
            .map(str::to_owned)
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(service_message) = &self.service_message {
            write!(f, " ({service_message})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
        }
    }
}
