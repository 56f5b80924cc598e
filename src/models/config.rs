//! Server configuration
//!
//! Built once at startup from the environment and passed down explicitly.
//! Hosting platforms set `PORT`; everything else has a local default.

use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::utils::constants::{
    DEFAULT_HOST, DEFAULT_INDEX_PATH, DEFAULT_LOGO_PATH, DEFAULT_PORT, ENV_HOST, ENV_INDEX_PATH,
    ENV_LOGO_PATH, ENV_PORT,
};

/// Listening address and static asset locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// PNG drawn at the top of every proposal
    pub logo_path: PathBuf,
    /// Intake form served on `GET /`
    pub index_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (environment, test maps)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup(ENV_PORT).filter(|p| !p.trim().is_empty()) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::with_source(
                    ErrorCode::ConfigInvalidValue,
                    format!("{} must be a port number, got {:?}", ENV_PORT, raw),
                    e,
                )
            })?,
            None => defaults.port,
        };

        let config = Self {
            host: lookup(ENV_HOST).unwrap_or(defaults.host),
            port,
            logo_path: lookup(ENV_LOGO_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.logo_path),
            index_path: lookup(ENV_INDEX_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.index_path),
        };

        info!(
            host = %config.host,
            port = config.port,
            logo = %config.logo_path.display(),
            index = %config.index_path.display(),
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| {
                AppError::invalid_config(format!(
                    "Invalid listen address {}:{}",
                    self.host, self.port
                ))
            })
    }
}
