//! TOML configuration for the daemon
//!
//! Every section is optional. Environment variables override the file:
//! `JOURNALPOST_URL`, `BIDRAG_ARKIV_URL` and `PORT`.

use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_JOURNALPOST_URL: &str = "http://localhost:8090/bidrag-dokument-journalpost";
const DEFAULT_ARKIV_URL: &str = "http://localhost:8091/bidrag-dokument-arkiv";

/// Top-level daemon configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    /// bidrag-dokument-journalpost
    pub journalpost: BackendConfig,
    /// bidrag-dokument-arkiv
    pub arkiv: BackendConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

/// Where and how to reach one journal backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            journalpost: BackendConfig::new(DEFAULT_JOURNALPOST_URL),
            arkiv: BackendConfig::new(DEFAULT_ARKIV_URL),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl BackendConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;
        Self::parse(&content).with_context(|| format!("Failed to parse config file '{}'", path))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> anyhow::Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, keyed by environment variable name
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        if let Some(url) = lookup("JOURNALPOST_URL") {
            self.journalpost.url = url;
        }
        if let Some(url) = lookup("BIDRAG_ARKIV_URL") {
            self.arkiv.url = url;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("PORT is not a port number: '{}'", port))?;
        }
        Ok(self)
    }
}
