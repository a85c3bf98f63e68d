use std::path::Path;

use anyhow::{anyhow, Context, Result};
use common::utils::logging::LogFormat;
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: DEFAULT_PORT, worker_threads: None }
    }
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { DEFAULT_PORT }

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
    #[serde(default = "default_auto_migrate")]
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
            auto_migrate: default_auto_migrate(),
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_auto_migrate() -> bool { true }

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: Option<String>,
}

impl LoggingConfig {
    pub fn log_format(&self) -> Result<LogFormat> {
        match self.format.as_deref() {
            None => Ok(LogFormat::default()),
            Some(s) => s.parse::<LogFormat>().map_err(|e| anyhow!(e)),
        }
    }
}

/// Where records are kept, derived from `database.url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    Postgres(String),
    /// Directory holding one JSON document file per resource.
    File(String),
    Memory,
}

impl DatabaseConfig {
    pub fn location(&self) -> Result<StoreLocation> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(anyhow!("DATABASE_URL is not set; provide it in the environment or as database.url in the config file"));
        }
        let lower = url.to_lowercase();
        if lower.starts_with("postgresql://") || lower.starts_with("postgres://") {
            Ok(StoreLocation::Postgres(url.to_string()))
        } else if let Some(rest) = url.strip_prefix("file:") {
            let path = rest.strip_prefix("//").unwrap_or(rest);
            if path.is_empty() {
                return Err(anyhow!("database.url `file:` requires a path"));
            }
            Ok(StoreLocation::File(path.to_string()))
        } else if lower.starts_with("memory:") {
            Ok(StoreLocation::Memory)
        } else {
            Err(anyhow!("database.url must start with postgres://, postgresql://, file: or memory:"))
        }
    }

    /// Pool bounds only matter for Postgres; document stores have no pool.
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.location()?, StoreLocation::Postgres(_)) {
            return Ok(());
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if self.worker_threads == Some(0) {
            self.worker_threads = None;
        }
        Ok(())
    }
}

/// Load from `CONFIG_PATH` (default `config.toml`), then the process environment.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_with(&path, |key| std::env::var(key).ok())
}

/// A missing file yields the defaults; a malformed one is an error.
pub fn load_from_file(path: &str) -> Result<AppConfig> {
    if !Path::new(path).exists() {
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let cfg: AppConfig = toml::from_str(&content).with_context(|| format!("parsing {path}"))?;
    Ok(cfg)
}

/// Same as [`load_default`] with an injectable variable lookup.
pub fn load_with<F>(path: &str, lookup: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = load_from_file(path)?;
    cfg.apply_env(lookup)?;
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

impl AppConfig {
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get("HOST") {
            self.server.host = host;
        }
        if let Some(port) = get("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| anyhow!("PORT must be a number in 1..=65535, got `{port}`"))?;
        }
        if let Some(threads) = get("TOKIO_WORKER_THREADS") {
            self.server.worker_threads = Some(
                threads
                    .trim()
                    .parse()
                    .map_err(|_| anyhow!("TOKIO_WORKER_THREADS must be a positive integer"))?,
            );
        }
        if let Some(url) = get("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(max) = get("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = max
                .trim()
                .parse()
                .map_err(|_| anyhow!("DATABASE_MAX_CONNECTIONS must be a positive integer"))?;
            self.database.min_connections = self.database.min_connections.min(self.database.max_connections);
        }
        if let Some(flag) = get("DATABASE_AUTO_MIGRATE") {
            self.database.auto_migrate = parse_bool(&flag)
                .ok_or_else(|| anyhow!("DATABASE_AUTO_MIGRATE must be true or false"))?;
        }
        if let Some(format) = get("LOG_FORMAT") {
            self.logging.format = Some(format);
        }
        Ok(())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.validate()?;
        self.logging.log_format()?;
        Ok(())
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
