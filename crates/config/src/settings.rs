//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Runtime environment enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Translation configuration
    #[serde(default)]
    pub translation: TranslationSettings,

    /// Dataset file locations
    #[serde(default)]
    pub datasets: DatasetPaths,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins; empty means allow any
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: true,
            cors_origins: Vec::new(),
        }
    }
}

/// Translation providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    /// Remote HTTP service with dictionary fallback
    #[default]
    Remote,
    /// Curated gloss dictionary only (offline)
    Dictionary,
    /// Disabled (pass-through)
    Disabled,
}

/// Translation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationSettings {
    /// Which provider to use
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Remote translation endpoint
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,

    /// Per-attempt request timeout in seconds
    #[serde(default = "default_translation_timeout")]
    pub timeout_secs: u64,

    /// Retries after the first failed attempt
    #[serde(default = "default_translation_retries")]
    pub max_retries: u32,
}

fn default_translation_endpoint() -> String {
    "http://localhost:8089".to_string()
}

fn default_translation_timeout() -> u64 {
    5
}

fn default_translation_retries() -> u32 {
    1
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            endpoint: default_translation_endpoint(),
            timeout_secs: default_translation_timeout(),
            max_retries: default_translation_retries(),
        }
    }
}

/// Locations of the static schedule datasets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetPaths {
    /// Weekly timetable JSON
    #[serde(default = "default_timetable_path")]
    pub timetable: String,

    /// Academic calendar JSON
    #[serde(default = "default_calendar_path")]
    pub calendar: String,
}

fn default_timetable_path() -> String {
    "data/timetable.json".to_string()
}

fn default_calendar_path() -> String {
    "data/academic_calendar.json".to_string()
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            timetable: default_timetable_path(),
            calendar: default_calendar_path(),
        }
    }
}

/// Load settings from config files and environment
///
/// Layering order: `config/default` file, then `config/{env}` when an
/// environment name is given, then `CAMPUS__`-prefixed environment
/// variables.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("CAMPUS")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    Ok(settings)
}
