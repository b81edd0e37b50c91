// ABOUTME: Configuration loaded from a TOML file with defaults for every field
// Server endpoint and framing, terminal behaviour, and the sidebar menu sections

use crate::models::{default_sections, MenuSection};
use crate::session::Framing;
use crate::terminal::DEFAULT_DISCONNECT_NOTICE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const SOCKETIO_PATH: &str = "/socket.io/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid server URL {0:?}: expected ws:// or wss://")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub terminal: TerminalConfig,
    pub menu: MenuConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub url: String,
    pub framing: Framing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Printed to the terminal when the connection is lost
    pub disconnect_notice: String,
    /// UI poll interval in milliseconds
    pub tick_rate_ms: u64,
    pub mouse: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub sections: Vec<MenuSection>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: "ws://127.0.0.1:5001".to_string(),
            framing: Framing::default(),
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            disconnect_notice: DEFAULT_DISCONNECT_NOTICE.to_string(),
            tick_rate_ms: 50,
            mouse: true,
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            sections: default_sections(),
        }
    }
}

impl ServerConfig {
    /// URL to dial. Socket.IO servers listen under `/socket.io/`, so a bare
    /// host URL gets the Engine.IO WebSocket path appended.
    pub fn endpoint(&self) -> String {
        match self.framing {
            Framing::SocketIo if !self.url.contains(SOCKETIO_PATH) => format!(
                "{}{}?EIO=4&transport=websocket",
                self.url.trim_end_matches('/'),
                SOCKETIO_PATH
            ),
            _ => self.url.clone(),
        }
    }
}

impl AppConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dashterm").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        debug!("Loading config from {}", path.display());
        if !required && !path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.server.url;
        if url.starts_with("ws://") || url.starts_with("wss://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidUrl(url.clone()))
        }
    }
}
