//! Runtime configuration.
//!
//! Values come from defaults, then environment variables, then CLI flags,
//! with later sources winning.
//!
//! # Example
//!
//! ```ignore
//! use poolwatch::config::Config;
//!
//! let config = Config::from_env()?
//!     .with_api_base_url("http://localhost:3000/api")
//!     .with_mobile_breakpoint(100);
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::gateway::DEFAULT_API_BASE_URL;
use crate::state::FencingPolicy;
use crate::ui::ThemeMode;

pub const ENV_API_URL: &str = "POOLWATCH_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "POOLWATCH_TIMEOUT_SECS";
pub const ENV_MOBILE_COLS: &str = "POOLWATCH_MOBILE_COLS";
pub const ENV_FENCING: &str = "POOLWATCH_FENCING";
pub const ENV_LOG_FILE: &str = "POOLWATCH_LOG_FILE";
pub const ENV_THEME: &str = "POOLWATCH_THEME";

/// Terminals narrower than this many columns use the mobile layout.
pub const DEFAULT_MOBILE_BREAKPOINT: u16 = 80;

/// How long an error toast stays up.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the mining-pool API, without trailing slash
    pub api_base_url: String,
    /// Per-request timeout; `None` waits forever
    pub request_timeout: Option<Duration>,
    /// Column count below which `is_mobile` is set
    pub mobile_breakpoint: u16,
    /// Error toast auto-dismiss delay
    pub toast_duration: Duration,
    /// How superseded fetch results are handled
    pub fencing: FencingPolicy,
    /// Log file override; `None` uses the cache directory
    pub log_file: Option<PathBuf>,
    /// Theme the TUI starts with
    pub theme: ThemeMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: None,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            toast_duration: DEFAULT_TOAST_DURATION,
            fencing: FencingPolicy::default(),
            log_file: None,
            theme: ThemeMode::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_mobile_breakpoint(mut self, columns: u16) -> Self {
        self.mobile_breakpoint = columns;
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    pub fn with_fencing(mut self, fencing: FencingPolicy) -> Self {
        self.fencing = fencing;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    /// Whether a terminal `width` columns wide counts as mobile.
    pub fn is_mobile_width(&self, width: u16) -> bool {
        width < self.mobile_breakpoint
    }

    /// Defaults overridden by `POOLWATCH_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_API_URL) {
            config = config.with_api_base_url(url.trim());
        }

        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ConfigError::invalid_value(ENV_TIMEOUT_SECS, &raw, "expected whole seconds")
            })?;
            // 0 disables the timeout
            config.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        if let Some(raw) = get(ENV_MOBILE_COLS) {
            config.mobile_breakpoint = raw.trim().parse().map_err(|_| {
                ConfigError::invalid_value(ENV_MOBILE_COLS, &raw, "expected a column count")
            })?;
        }

        if let Some(raw) = get(ENV_FENCING) {
            config.fencing = raw
                .parse()
                .map_err(|reason: String| ConfigError::invalid_value(ENV_FENCING, &raw, reason))?;
        }

        if let Some(raw) = get(ENV_THEME) {
            config.theme = raw
                .parse()
                .map_err(|reason: String| ConfigError::invalid_value(ENV_THEME, &raw, reason))?;
        }

        if let Some(path) = get(ENV_LOG_FILE) {
            config.log_file = Some(PathBuf::from(path));
        }

        config.validate()?;
        Ok(config)
    }

    /// Check values that builders accept unchecked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(self.api_base_url.clone()));
        }
        reqwest::Url::parse(url).map_err(|_| ConfigError::InvalidApiUrl(self.api_base_url.clone()))?;
        Ok(())
    }

    /// Where the TUI writes its log.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("poolwatch").join("poolwatch.log")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.mobile_breakpoint, 80);
        assert_eq!(config.toast_duration, Duration::from_secs(6));
        assert_eq!(config.fencing, FencingPolicy::LatestIssued);
        assert_eq!(config.theme, ThemeMode::Dark);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = Config::new()
            .with_api_base_url("http://localhost:9000/api/")
            .with_request_timeout(Some(Duration::from_secs(3)))
            .with_mobile_breakpoint(100)
            .with_fencing(FencingPolicy::LastResolved)
            .with_log_file("/tmp/pw.log");

        assert_eq!(config.api_base_url, "http://localhost:9000/api");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(3)));
        assert!(config.is_mobile_width(99));
        assert!(!config.is_mobile_width(100));
        assert_eq!(config.fencing, FencingPolicy::LastResolved);
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/pw.log")));
    }

    #[test]
    fn test_from_lookup_reads_all_vars() {
        let config = Config::from_lookup(lookup(&[
            (ENV_API_URL, "http://127.0.0.1:8080"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_MOBILE_COLS, "60"),
            (ENV_FENCING, "last-resolved"),
            (ENV_LOG_FILE, "/var/log/pw.log"),
            (ENV_THEME, "light"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.mobile_breakpoint, 60);
        assert_eq!(config.fencing, FencingPolicy::LastResolved);
        assert_eq!(config.log_file, Some(PathBuf::from("/var/log/pw.log")));
        assert_eq!(config.theme, ThemeMode::Light);
    }

    #[test]
    fn test_zero_timeout_disables() {
        let config = Config::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "0")])).unwrap();
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let config = Config::from_lookup(lookup(&[(ENV_API_URL, "  ")])).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == ENV_TIMEOUT_SECS));

        let err = Config::from_lookup(lookup(&[(ENV_FENCING, "maybe")])).unwrap_err();
        assert!(err.to_string().contains(ENV_FENCING));

        let err = Config::from_lookup(lookup(&[(ENV_THEME, "sepia")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == ENV_THEME));

        let err = Config::from_lookup(lookup(&[(ENV_API_URL, "ftp://example.com")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidApiUrl("ftp://example.com".to_string()));
    }
}
