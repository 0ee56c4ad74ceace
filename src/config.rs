// Process configuration, read once at startup from the environment.
//
// Variables
// - IDEA_PORTAL_ADDR       listen address, default 0.0.0.0:8080
// - IDEA_PORTAL_STORE      `memory` (default) or `file`
// - IDEA_PORTAL_DATA_DIR   directory for the `file` backend, default ./data
// - IDEA_PORTAL_PASSCODE   reviewer passcode; the gate is disabled when unset
// - IDEA_PORTAL_EMPLOYEES  optional path to a JSON employee directory

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("IDEA_PORTAL_ADDR is not a socket address: {0}")]
    InvalidAddr(String),

    #[error("IDEA_PORTAL_STORE must be `memory` or `file`, got `{0}`")]
    UnknownStore(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    File { dir: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub store: StoreBackend,
    pub passcode: Option<String>,
    pub employees_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any name lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let raw_addr = var("IDEA_PORTAL_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr(raw_addr.clone()))?;

        let store = match var("IDEA_PORTAL_STORE").as_deref() {
            None | Some("memory") => StoreBackend::Memory,
            Some("file") => StoreBackend::File {
                dir: PathBuf::from(
                    var("IDEA_PORTAL_DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()),
                ),
            },
            Some(other) => return Err(ConfigError::UnknownStore(other.to_string())),
        };

        Ok(Self {
            addr,
            store,
            passcode: var("IDEA_PORTAL_PASSCODE"),
            employees_path: var("IDEA_PORTAL_EMPLOYEES").map(PathBuf::from),
        })
    }
}
