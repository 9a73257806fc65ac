//! Host configuration from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid MEALPLAN_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub addr: SocketAddr,
    /// Overrides the Leptos `site-root` when set.
    pub site_root: Option<PathBuf>,
}

impl HostConfig {
    /// Read `MEALPLAN_ADDR` and `MEALPLAN_SITE_ROOT`.
    ///
    /// # Errors
    ///
    /// Returns an error if `MEALPLAN_ADDR` is not a socket address.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("MEALPLAN_ADDR").ok(),
            std::env::var("MEALPLAN_SITE_ROOT").ok(),
        )
    }

    pub(crate) fn from_values(addr: Option<String>, site_root: Option<String>) -> Result<Self, ConfigError> {
        let raw = addr
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr = raw
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr { value: raw.clone(), source })?;
        let site_root = site_root.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()).map(PathBuf::from);
        Ok(Self { addr, site_root })
    }
}
