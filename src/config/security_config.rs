use serde::Deserialize;

use super::ConfigError;

/// Upper bound that still converts to a whole number of milliseconds per
/// request for the governor.
pub const MAX_RATE_LIMIT_PER_MINUTE: u32 = 60_000;

#[derive(Debug, Deserialize, Clone)]
pub struct SecurityConfig {
    #[serde(default = "crate::config::defaults::default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
    #[serde(default = "crate::config::defaults::default_metrics_allow_private_only")]
    pub metrics_allow_private_only: bool,
    #[serde(default)]
    pub metrics_admin_token: Option<String>,
    #[serde(default = "crate::config::defaults::default_global_rate_limit_per_minute")]
    pub global_rate_limit_per_minute: u32,
    #[serde(default = "crate::config::defaults::default_global_rate_limit_burst_size")]
    pub global_rate_limit_burst_size: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        use crate::config::defaults;

        Self {
            cors_allowed_origins: defaults::default_cors_allowed_origins(),
            metrics_allow_private_only: defaults::default_metrics_allow_private_only(),
            metrics_admin_token: None,
            global_rate_limit_per_minute: defaults::default_global_rate_limit_per_minute(),
            global_rate_limit_burst_size: defaults::default_global_rate_limit_burst_size(),
        }
    }
}

impl SecurityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let per_minute = self.global_rate_limit_per_minute;
        if per_minute == 0 || per_minute > MAX_RATE_LIMIT_PER_MINUTE {
            return Err(ConfigError::Security(format!(
                "global_rate_limit_per_minute must be between 1 and {MAX_RATE_LIMIT_PER_MINUTE}, got {per_minute}"
            )));
        }

        if self.global_rate_limit_burst_size == 0 {
            return Err(ConfigError::Security(
                "global_rate_limit_burst_size must be greater than 0".to_string(),
            ));
        }

        if self.global_rate_limit_burst_size > 1000 {
            tracing::warn!(
                burst_size = self.global_rate_limit_burst_size,
                "global_rate_limit_burst_size is unusually high"
            );
        }

        Ok(())
    }

    pub fn metrics_token(&self) -> Option<&str> {
        self.metrics_admin_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
