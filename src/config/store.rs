use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const ENV_URL: &str = "CHALKBOARD_URL";
const ENV_ANON_KEY: &str = "CHALKBOARD_ANON_KEY";
const ENV_BYPASS_EMAIL: &str = "CHALKBOARD_BYPASS_EMAIL";
const ENV_BYPASS_PASSWORD: &str = "CHALKBOARD_BYPASS_PASSWORD";

/// Connection settings for the hosted backend.
///
/// Always injected explicitly wherever a store is built; the data layer never
/// reads ambient process state on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the hosted backend, e.g. "https://abc.example.co".
    pub url: String,
    /// Public (anon) API key attached to every outgoing request.
    pub anon_key: String,
    /// Optional always-available demo login. Disabled unless configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bypass: Option<BypassCredentials>,
}

/// Fallback login pair checked only after real backend authentication has
/// failed. Sourced from configuration, never from source literals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BypassCredentials {
    pub email: String,
    pub password: String,
}

impl StoreConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            bypass: None,
        }
    }

    /// Reads the backend URL and key (plus the optional bypass pair) from the
    /// process environment.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(ENV_URL)
            .map_err(|_| Error::NotConfigured(format!("{ENV_URL} is not set")))?;
        let anon_key = std::env::var(ENV_ANON_KEY)
            .map_err(|_| Error::NotConfigured(format!("{ENV_ANON_KEY} is not set")))?;

        // The bypass login only exists when both halves are present.
        let bypass = match (
            std::env::var(ENV_BYPASS_EMAIL),
            std::env::var(ENV_BYPASS_PASSWORD),
        ) {
            (Ok(email), Ok(password)) => Some(BypassCredentials { email, password }),
            _ => None,
        };

        let config = Self {
            url,
            anon_key,
            bypass,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig =
            toml::from_str(&content).map_err(|e| Error::Config(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(Error::NotConfigured("backend URL is empty".into()));
        }
        if self.anon_key.trim().is_empty() {
            return Err(Error::NotConfigured("backend API key is empty".into()));
        }
        Ok(())
    }

    /// Base URL without a trailing slash, safe to join paths onto.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}
