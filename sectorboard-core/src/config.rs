//! Dashboard configuration: a TOML file plus environment overrides.
//!
//! ```toml
//! api_base_url = "http://localhost:8000/api"
//! request_timeout_secs = 15
//! benchmark_name = "S&P 500"
//! report_date = "today"   # or "latest"
//! tooltip_margin = 2
//! log_filter = "info"
//! log_file = "/tmp/sectorboard.log"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::route::ReportDateMode;

/// Environment variable that overrides `api_base_url`.
pub const API_URL_ENV: &str = "SECTORBOARD_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Root of the REST API; endpoints are appended to it.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Name of the record shown as the benchmark row.
    pub benchmark_name: String,
    /// Edition opened when a table row is selected.
    pub report_date: ReportDateMode,
    /// Tooltip offset from the pointer, in cells.
    pub tooltip_margin: u16,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub log_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".into(),
            request_timeout_secs: 15,
            benchmark_name: "S&P 500".into(),
            report_date: ReportDateMode::Today,
            tooltip_margin: 2,
            log_filter: "info".into(),
            log_file: None,
        }
    }
}

impl DashboardConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply overrides looked up through `var` (normally `std::env::var`).
    pub fn with_env(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(url) = var(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_base_url).map_err(|e| {
            ConfigError::Invalid(format!("api_base_url '{}': {e}", self.api_base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid("request_timeout_secs must be > 0".into()));
        }
        if self.benchmark_name.trim().is_empty() {
            return Err(ConfigError::Invalid("benchmark_name must not be empty".into()));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
