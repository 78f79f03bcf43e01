use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub catalog: CatalogSettings,
    pub cache: CacheSettings,
    pub matching: MatchingSettings,
    pub scoring: ScoringSettings,
    pub simulator: SimulatorSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// Path to a JSON catalog file; the built-in seed is used when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub max_entries: Option<u64>,
    pub ttl_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<u8>,
    pub max_limit: Option<u8>,
    pub fallback_specialty: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_keyword_weight")]
    pub keyword: u32,
    #[serde(default = "default_name_weight")]
    pub name: u32,
    #[serde(default = "default_specialty_weight")]
    pub specialty: u32,
    #[serde(default = "default_location_weight")]
    pub location: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            keyword: default_keyword_weight(),
            name: default_name_weight(),
            specialty: default_specialty_weight(),
            location: default_location_weight(),
        }
    }
}

fn default_keyword_weight() -> u32 { 10 }
fn default_name_weight() -> u32 { 8 }
fn default_specialty_weight() -> u32 { 6 }
fn default_location_weight() -> u32 { 4 }

#[derive(Debug, Clone, Deserialize)]
pub struct SimulatorSettings {
    #[serde(default)]
    pub enabled: bool,
    pub interval_secs: Option<u64>,
    pub max_step: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with KAIROS__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with KAIROS__)
            // e.g., KAIROS__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("KAIROS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("KAIROS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.keyword, 10);
        assert_eq!(weights.name, 8);
        assert_eq!(weights.specialty, 6);
        assert_eq!(weights.location, 4);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }
}
