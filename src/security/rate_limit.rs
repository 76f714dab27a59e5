use actix_governor::{
    governor::middleware::NoOpMiddleware, Governor, GovernorConfigBuilder, PeerIpKeyExtractor,
};

use crate::config::{ConfigError, SecurityConfig, MAX_RATE_LIMIT_PER_MINUTE};

/// Per-peer-IP limiter applied to the whole application.
pub fn global_rate_limiting(
    security_config: &SecurityConfig,
) -> Result<Governor<PeerIpKeyExtractor, NoOpMiddleware>, ConfigError> {
    security_config.validate()?;

    let replenish_every_ms =
        u64::from(MAX_RATE_LIMIT_PER_MINUTE / security_config.global_rate_limit_per_minute);
    let governor_config = GovernorConfigBuilder::default()
        .per_millisecond(replenish_every_ms)
        .burst_size(security_config.global_rate_limit_burst_size)
        .finish()
        .ok_or_else(|| {
            ConfigError::Security("rate limiter rejected the configured quota".to_string())
        })?;

    Ok(Governor::new(&governor_config))
}
