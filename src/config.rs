use std::time::Duration;

use crate::constants::{DICTIONARY_API_BASE, WEATHER_API_BASE};

pub const DICTIONARY_API_BASE_VAR: &str = "LOOKUP_DICTIONARY_API_BASE";
pub const WEATHER_API_BASE_VAR: &str = "LOOKUP_WEATHER_API_BASE";
pub const TIMEOUT_SECS_VAR: &str = "LOOKUP_TIMEOUT_SECS";

/// Where the lookups send their requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dictionary_api_base: String,
    pub weather_api_base: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_api_base: DICTIONARY_API_BASE.to_string(),
            weather_api_base: WEATHER_API_BASE.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    /// Reads overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base) = var(DICTIONARY_API_BASE_VAR) {
            config.dictionary_api_base = base;
        }
        if let Some(base) = var(WEATHER_API_BASE_VAR) {
            config.weather_api_base = base;
        }
        if let Some(secs) = var(TIMEOUT_SECS_VAR) {
            match secs.trim().parse::<u64>() {
                Ok(secs) => config.timeout = Some(Duration::from_secs(secs)),
                Err(e) => tracing::warn!("Ignoring {}={:?}: {}", TIMEOUT_SECS_VAR, secs, e),
            }
        }

        config.with_trimmed_bases()
    }

    pub fn with_dictionary_api_base(mut self, base: impl Into<String>) -> Self {
        self.dictionary_api_base = base.into();
        self.with_trimmed_bases()
    }

    pub fn with_weather_api_base(mut self, base: impl Into<String>) -> Self {
        self.weather_api_base = base.into();
        self.with_trimmed_bases()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn with_trimmed_bases(mut self) -> Self {
        let trim = |s: &mut String| {
            while s.ends_with('/') {
                s.pop();
            }
        };
        trim(&mut self.dictionary_api_base);
        trim(&mut self.weather_api_base);
        self
    }
}
