//! Server configuration

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,

    /// Command document (`.yml`/`.yaml`) or compiled table (`.json`)
    #[serde(default = "default_commands_path")]
    pub commands_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            commands_path: default_commands_path(),
        }
    }
}

impl ServerConfig {
    /// Create a new server config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a server config from a YAML file; missing fields take defaults
    pub fn load_from_yaml<P: AsRef<Path>>(path: P) -> ServerResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ServerError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        serde_yaml::from_str(&content)
            .map_err(|e| ServerError::Config(format!("Invalid {}: {}", path.display(), e)))
    }

    /// Set the listen address
    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    /// Set the command file
    pub fn with_commands_path(mut self, commands_path: impl Into<PathBuf>) -> Self {
        self.commands_path = commands_path.into();
        self
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8787))
}

fn default_commands_path() -> PathBuf {
    PathBuf::from("commands.yml")
}
