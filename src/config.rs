use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    InvalidConfigSyntax(#[from] toml::de::Error),
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Config {
    pub server: Server,
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

/// Where the config service lives and how to talk to it.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Server {
    pub url: String,

    #[serde(with = "humantime_serde")]
    pub timeout: Duration,

    pub auth: Option<Credentials>,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            auth: None,
        }
    }
}

/// HTTP basic credentials attached to every request.
#[derive(Deserialize, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}
