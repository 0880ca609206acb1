// Configuration module
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of HTTP workers. 0 means one per CPU core.
    #[serde(default)]
    pub workers: usize,
    /// Directory holding the built console bundle.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// Path to the SQLite database file. The file is opened read-only once
    /// at startup; if it is missing the server runs in a degraded
    /// "not connected" state.
    #[serde(default = "default_db_path")]
    pub path: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file; console-only when absent.
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default = "default_true")]
    pub log_to_console: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_db_path() -> String {
    "console.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
            static_dir: default_static_dir(),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_path: None,
            log_to_console: default_true(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            database: DatabaseSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file, apply environment overrides and
    /// validate the result.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        let mut config: ServerConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    /// Environment overrides apply in both cases.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            let mut config = ServerConfig::default();
            config.apply_env_overrides()?;
            config.validate()?;
            Ok(config)
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Supported environment variables:
    /// - SQL_CONSOLE_HOST: Override server.host
    /// - SQL_CONSOLE_PORT: Override server.port
    /// - SQL_CONSOLE_STATIC_DIR: Override server.static_dir
    /// - SQL_CONSOLE_DB_PATH: Override database.path
    /// - SQL_CONSOLE_LOG_LEVEL: Override logging.level
    ///
    /// Environment variables take precedence over config.toml values.
    fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        if let Ok(host) = std::env::var("SQL_CONSOLE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("SQL_CONSOLE_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid SQL_CONSOLE_PORT '{}': {}", port, e))?;
        }
        if let Ok(dir) = std::env::var("SQL_CONSOLE_STATIC_DIR") {
            self.server.static_dir = dir;
        }
        if let Ok(path) = std::env::var("SQL_CONSOLE_DB_PATH") {
            self.database.path = path;
        }
        if let Ok(level) = std::env::var("SQL_CONSOLE_LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(())
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.server.host.is_empty() {
            anyhow::bail!("server.host must not be empty");
        }
        if self.server.port == 0 {
            anyhow::bail!("server.port must not be 0");
        }
        if self.database.path.is_empty() {
            anyhow::bail!("database.path must not be empty");
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
