use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("remote store not configured: {0}")]
    NotConfigured(String),

    #[error("network unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("backend table missing: {table}")]
    SchemaMissing { table: String },

    #[error("backend rejected request ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("missing credentials")]
    MissingCredentials,

    #[error("invalid login credentials")]
    InvalidCredentials,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Failures the content layer absorbs into offline mode instead of
    /// surfacing to the user: the site must keep rendering with bundled
    /// content when the backend is missing, unreachable, or unprovisioned.
    /// `Backend` is absorbed too, but logged at a higher level so it stays
    /// visible to telemetry.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            Error::NotConfigured(_)
                | Error::Unreachable(_)
                | Error::SchemaMissing { .. }
                | Error::Backend { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
