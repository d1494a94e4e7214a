use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DIST_DIR: &str = "../frontend/dist";
const DEFAULT_ASSETS_DIR: &str = "../frontend/assets";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR `{value}` is not a socket address: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Trunk output: `index.html` template plus the wasm bundle.
    pub dist_dir: PathBuf,
    /// Team photos and other static files served under `/assets`.
    pub assets_dir: PathBuf,
    /// `development` locally, anything else in production.
    pub environment: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|source| ConfigError::BindAddr { value: bind_addr.clone(), source })?;

        Ok(ServerConfig {
            bind_addr,
            dist_dir: lookup("DIST_DIR").unwrap_or_else(|| DEFAULT_DIST_DIR.to_string()).into(),
            assets_dir: lookup("ASSETS_DIR").unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_string()).into(),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
