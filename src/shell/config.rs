use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::shared::core::pagination::DEFAULT_LIMIT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Load the starter products at boot.
    pub seed: bool,
    /// Page size used when a list request does not name one.
    pub default_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed: true,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl AppConfig {
    /// Defaults, then `catalog.toml` if present, then `CATALOG__*` variables
    /// (for example `CATALOG__SERVER__PORT=9000`).
    pub fn load() -> anyhow::Result<Self> {
        let config = Self::layered()?.build()?;
        Ok(config.try_deserialize()?)
    }

    fn layered() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::with_name("catalog").required(false))
            .add_source(
                Environment::with_prefix("CATALOG")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            ))
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
