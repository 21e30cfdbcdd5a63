use anyhow::{Result, anyhow};
use serde::Deserialize;

pub const API_KEY_VAR: &str = "WEATHER_API_KEY";
pub const BASE_URL_VAR: &str = "WEATHER_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Settings for [`crate::WeatherLookupService`]. Passed in explicitly; the
/// service never reads the environment on its own.
#[derive(Clone, Deserialize)]
pub struct LookupConfig {
    pub api_key: String,

    /// Provider root, without the `/weather` endpoint. Overridable so tests can
    /// point at a local mock server.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl std::fmt::Debug for LookupConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl LookupConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load from `WEATHER_API_KEY` and the optional `WEATHER_API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`LookupConfig::from_env`] but reads variables through `get`.
    pub fn from_vars<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = get(API_KEY_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "No API key configured.\n\
                     Hint: set {API_KEY_VAR} in the environment or in a .env file."
                )
            })?;

        let base_url = get(BASE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_base_url);

        Ok(Self {
            api_key: api_key.trim().to_string(),
            base_url,
        })
    }

    /// Full URL of the current-weather endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/weather", self.base_url.trim_end_matches('/'))
    }
}
