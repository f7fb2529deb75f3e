//! Configuration for the Glossary Server
//!
//! This module contains the configuration types and loading functionality.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};
use tracing::{info, warn};

use crate::error::ServerResult;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host to bind to
    #[serde(default = "default_host")]
    pub bind_address: String,

    /// Glossary document to seed the store with (JSON or YAML)
    #[serde(default)]
    pub data_file: Option<String>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_port() -> u16 {
    8080
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is honoured if present.
    pub fn load() -> ServerResult<Self> {
        dotenv::dotenv().ok();

        let mut config = Self::default();

        if let Ok(port) = env::var("SERVER_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                config.port = port;
            } else {
                warn!("Invalid SERVER_PORT value: {}", port);
            }
        }

        if let Ok(host) = env::var("SERVER_HOST") {
            config.bind_address = host;
        }

        if let Ok(data_file) = env::var("GLOSSARY_DATA_FILE") {
            if data_file.trim().is_empty() {
                config.data_file = None;
            } else {
                config.data_file = Some(data_file);
            }
        }

        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.log_level = log_level;
        }

        if config.data_file.is_none() {
            warn!("No GLOSSARY_DATA_FILE provided - starting with an empty glossary");
        }

        info!("Loaded server configuration");
        Ok(config)
    }

    /// Log level from `LOG_LEVEL`, read before the full configuration
    ///
    /// Logging has to be up before [`ServerConfig::load`] reports bad values.
    pub fn log_level_from_env() -> String {
        dotenv::dotenv().ok();
        env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level())
    }

    /// Socket address to bind the listener to
    pub fn socket_addr(&self) -> ServerResult<SocketAddr> {
        let ip: IpAddr = self.bind_address.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_host(),
            data_file: None,
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServerError;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.data_file, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 5000,
            bind_address: "127.0.0.1".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr().unwrap(), "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_invalid_bind_address() {
        let config = ServerConfig {
            bind_address: "localhost:80".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.socket_addr(), Err(ServerError::ConfigError(_))));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ServerConfig = serde_json::from_str(r#"{ "data_file": "data/glossary.json" }"#).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_file.as_deref(), Some("data/glossary.json"));
    }
}
