//! Configuration management for the library admin client

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory holding the session-scoped token file
    pub dir: PathBuf,
    /// Storage key of the bearer token
    pub key: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables with prefix LIBRARY_ADMIN_ (e.g. LIBRARY_ADMIN_API__BASE_URL)
            .add_source(
                Environment::with_prefix("LIBRARY_ADMIN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("api.base_url", env::var("LIBRARY_API_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://libraryapi-production-b14d.up.railway.app".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        let dir = dirs::cache_dir()
            .unwrap_or_else(env::temp_dir)
            .join("library-admin")
            .join("session");
        Self {
            dir,
            key: crate::session::TOKEN_KEY.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
