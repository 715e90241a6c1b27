use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Runtime configuration for the address-book server.
///
/// Loadable from a TOML file; every field falls back to its default when
/// absent, so a partial config file is fine.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Max seconds to read a request from a client.
    pub read_timeout_secs: u64,
    /// Max seconds to write a response to a client.
    pub write_timeout_secs: u64,
    /// Max seconds to hold an idle keep-alive connection.
    pub idle_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9090".parse().unwrap(),
            read_timeout_secs: 5,
            write_timeout_secs: 10,
            idle_timeout_secs: 120,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&raw).map_err(|e| ServerError::Config(e.to_string()))
    }
}
