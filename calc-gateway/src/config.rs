//! Gateway configuration loaded from the environment.

use std::num::NonZeroUsize;

/// Environment variable holding the `host:port` to bind.
pub const LISTEN_ADDR_VAR: &str = "CALC_LISTEN_ADDR";
/// Environment variable holding the request body limit in bytes.
pub const MAX_BODY_BYTES_VAR: &str = "CALC_MAX_BODY_BYTES";

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MAX_BODY_BYTES: NonZeroUsize = match NonZeroUsize::new(4096) {
    Some(n) => n,
    None => panic!("default body limit must be non-zero"),
};

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A variable was set to a value that could not be used.
    #[error("invalid value '{value}' for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the HTTP gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket address to listen on.
    pub listen_addr: String,
    /// Largest accepted request body.
    pub max_body_bytes: NonZeroUsize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_owned(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl GatewayConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset variables.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but unusable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup(LISTEN_ADDR_VAR) {
            if addr.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    var: LISTEN_ADDR_VAR,
                    value: addr,
                    reason: "must not be empty".to_owned(),
                });
            }
            config.listen_addr = addr;
        }

        if let Some(raw) = lookup(MAX_BODY_BYTES_VAR) {
            config.max_body_bytes =
                raw.trim()
                    .parse::<NonZeroUsize>()
                    .map_err(|e| ConfigError::InvalidValue {
                        var: MAX_BODY_BYTES_VAR,
                        reason: e.to_string(),
                        value: raw.clone(),
                    })?;
        }

        Ok(config)
    }
}
