use std::net::SocketAddr;

use sopo_core::{KeyError, SigningKey, DEFAULT_BASE_URL};

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("SIGNING_SECRET is not set")]
    MissingSecret,
    #[error("SIGNING_SECRET is unusable: {0}")]
    Key(#[from] KeyError),
    #[error("BIND is not a socket address: {0:?}")]
    Bind(String),
    #[error("BASE_URL must start with http:// or https://, got {0:?}")]
    BaseUrl(String),
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub key: SigningKey,
    pub bind: SocketAddr,
    /// Public origin used in OGP tags, without trailing slash.
    pub base_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = lookup("SIGNING_SECRET").ok_or(ConfigError::MissingSecret)?;
        let key = SigningKey::new(secret)?;

        let bind = lookup("BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind.parse::<SocketAddr>().map_err(|_| ConfigError::Bind(bind))?;

        let base_url = lookup("BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ConfigError::BaseUrl(base_url));
        }
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self {
            key,
            bind,
            base_url,
        })
    }
}
