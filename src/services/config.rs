use std::time::Duration;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable naming the backend base URL.
pub const ENV_API_URL: &str = "ZONESTUDIO_API_URL";
/// Environment variable holding the request timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "ZONESTUDIO_API_TIMEOUT_SECS";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Where the backend lives and how long to wait for it.
pub struct BackendConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl BackendConfig {
    /// Defaults overridden by `ZONESTUDIO_API_URL` / `ZONESTUDIO_API_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`BackendConfig::from_env`] over an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            cfg = cfg.with_base_url(url);
        }
        match lookup(ENV_TIMEOUT_SECS).map(|s| s.trim().parse::<u64>()) {
            Some(Ok(secs)) if secs > 0 => cfg.timeout = Duration::from_secs(secs),
            Some(_) => tracing::warn!(
                var = ENV_TIMEOUT_SECS,
                "ignoring unparseable timeout, using default"
            ),
            None => {}
        }
        cfg
    }

    /// Replace the base URL, trimming whitespace and trailing slashes.
    pub fn with_base_url(mut self, url: impl AsRef<str>) -> Self {
        self.base_url = url.as_ref().trim().trim_end_matches('/').to_string();
        self
    }

    /// Absolute URL for a backend path such as `/projects/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/config.rs"]
mod tests;
