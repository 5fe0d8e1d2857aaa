use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;
use sqlx::mysql::MySqlConnectOptions;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// Precedence, lowest to highest: struct defaults, the optional TOML
    /// file named by `TIENDA_CONFIG` (default `config.toml`), the `TIENDA_*`
    /// environment section, and finally the deployment's fixed `MYSQL_*`
    /// variables for the database section.
    pub fn load() -> Result<Self> {
        let config_path = env::var("TIENDA_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("TIENDA")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        config
            .database
            .apply_env_overrides(|name| env::var(name).ok());

        if config.logging.level.trim().is_empty() {
            config.logging.level = "debug".to_string();
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Connection settings for the externally managed MySQL database.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub charset: String,
}

impl DatabaseConfig {
    /// Apply the `MYSQL_*` overrides the deployment environment may set.
    ///
    /// The lookup is injected so tests can drive this without touching the
    /// process environment. Variables that are unset leave the configured
    /// value (ultimately the literal default) in place.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("MYSQL_HOST") {
            self.host = host;
        }
        if let Some(user) = lookup("MYSQL_USER") {
            self.user = user;
        }
        if let Some(password) = lookup("MYSQL_PASSWORD") {
            self.password = password;
        }
        if let Some(name) = lookup("MYSQL_DB") {
            self.name = name;
        }
        if let Some(charset) = lookup("MYSQL_CHARSET") {
            self.charset = charset;
        }
    }

    /// Resolve this section into driver options, once, at startup.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .charset(&self.charset)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "db".to_string(),
            port: 3306,
            user: "mopii".to_string(),
            password: "daw".to_string(),
            name: "tienda_forestal".to_string(),
            charset: "utf8mb4".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            // Verbose by default; deployments tune this via RUST_LOG.
            level: "debug".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}
