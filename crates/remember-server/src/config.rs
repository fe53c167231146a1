//! Server configuration read from environment variables.
//!
//! - `REMEMBER_DB_PATH`: SQLite database file path (default: "remember.db")
//! - `REMEMBER_PORT`: Server listen port (default: "3000")
//! - `REMEMBER_USER`: user id whose document is served (default: "default")
//! - `REMEMBER_STORE`: `sqlite` (default) or `memory`

use remember_storage::DocumentKey;

/// Which [`remember_storage::DocumentStore`] backend the server uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Sqlite,
    Memory,
}

/// Errors in the environment configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("REMEMBER_PORT must be a port number, got '{0}'")]
    InvalidPort(String),

    #[error("REMEMBER_STORE must be 'sqlite' or 'memory', got '{0}'")]
    UnknownBackend(String),

    #[error("REMEMBER_USER must not be empty")]
    EmptyUser,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub db_path: String,
    pub port: u16,
    pub user_id: String,
    pub backend: StoreBackend,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            db_path: "remember.db".to_string(),
            port: 3000,
            user_id: "default".to_string(),
            backend: StoreBackend::Sqlite,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable source. Unset variables fall back
    /// to [`ServerConfig::default`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ServerConfig::default();

        let port = match lookup("REMEMBER_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let backend = match lookup("REMEMBER_STORE").as_deref().map(str::trim) {
            None | Some("sqlite") => StoreBackend::Sqlite,
            Some("memory") => StoreBackend::Memory,
            Some(other) => return Err(ConfigError::UnknownBackend(other.to_string())),
        };

        let user_id = lookup("REMEMBER_USER").unwrap_or(defaults.user_id);
        if user_id.trim().is_empty() {
            return Err(ConfigError::EmptyUser);
        }

        Ok(ServerConfig {
            db_path: lookup("REMEMBER_DB_PATH").unwrap_or(defaults.db_path),
            port,
            user_id,
            backend,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn document_key(&self) -> DocumentKey {
        DocumentKey::for_user(&self.user_id)
    }
}
