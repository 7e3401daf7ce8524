use std::time::{Duration, Instant};

/// How long a notice stays visible before it expires on its own.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient feedback for a mutation outcome.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub raised_at: Instant,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
            raised_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            raised_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn expired(&self) -> bool {
        self.raised_at.elapsed() > NOTICE_TIMEOUT
    }
}
