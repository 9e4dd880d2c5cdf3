use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

const CONFIG_ENV_VAR: &str = "ELSERVE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Server configuration, loaded from a YAML file at startup.
///
/// Every field has a default, so a missing config file still produces a
/// usable configuration. Read-only after startup; shared with connection
/// workers behind an `Arc`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the listening socket to.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document root: base directory request URLs are resolved against.
    pub root: String,
    /// Page served when a request targets the root path `/`.
    pub default_page: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: "./site".to_string(),
            default_page: "/index.html".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the path in the `ELSERVE_CONFIG` env var
    /// (default `config.yaml`). A missing file yields the defaults; a file
    /// that exists but fails to parse is an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(CONFIG_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::from_file(Path::new(&path))
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// The `host:port` address the listening socket binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
