use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use config::builder::DefaultState;
use tracing::debug;
use crate::error::{Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://api.yelp.com/v3/graphql";

/// Yelp's GraphQL API returns at most 50 businesses per request.
pub const PROVIDER_MAX_LIMIT: u32 = 50;

/// Yelp's GraphQL API returns at most 240 businesses per search.
pub const PROVIDER_MAX_RESULTS: u32 = 240;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiConfig,
    pub harvest: HarvestConfig,
    pub output: OutputConfig,
    pub minio: Option<MinioConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub endpoint: String,
    pub api_key: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    pub page_delay_ms: u64,
    pub page_jitter_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HarvestConfig {
    pub category: String,
    pub locations: Vec<String>,
    pub page_limit: u32,
    pub max_results: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub data_path: PathBuf,
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Parquet,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Parquet => "parquet",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MinioConfig {
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub region: String,
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_prefix() -> String {
    "yelp".to_string()
}

impl Settings {
    /// Loads `config/default.yaml` (if present) and `APP_*` environment overrides.
    pub fn new() -> Result<Self> {
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            );

        Self::build(builder)
    }

    /// Builds settings from an inline YAML document layered over the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let builder = Self::defaults()?.add_source(File::from_str(yaml, FileFormat::Yaml));
        Self::build(builder)
    }

    fn defaults() -> std::result::Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("api.endpoint", DEFAULT_ENDPOINT)?
            .set_default("api.api_key", "")?
            .set_default("api.page_delay_ms", 0)?
            .set_default("api.page_jitter_ms", 0)?
            .set_default("harvest.category", "restaurants")?
            .set_default(
                "harvest.locations",
                vec!["Paris", "New York City", "Tokyo", "Rio de Janeiro", "Sydney"],
            )?
            .set_default("harvest.page_limit", i64::from(PROVIDER_MAX_LIMIT))?
            .set_default("harvest.max_results", 200)?
            .set_default("output.data_path", "data")?
            .set_default("output.format", "csv")
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;

        debug!(
            endpoint = %settings.api.endpoint,
            locations = ?settings.harvest.locations,
            category = %settings.harvest.category,
            data_path = %settings.output.data_path.display(),
            "Parsed settings"
        );

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.api_key.trim().is_empty() {
            return Err(Error::InvalidSettings(
                "api.api_key is empty (set APP_API__API_KEY)".to_string(),
            ));
        }
        if self.harvest.locations.is_empty() {
            return Err(Error::InvalidSettings("harvest.locations is empty".to_string()));
        }
        if !(1..=PROVIDER_MAX_LIMIT).contains(&self.harvest.page_limit) {
            return Err(Error::InvalidSettings(format!(
                "harvest.page_limit must be within 1..={}, got {}",
                PROVIDER_MAX_LIMIT, self.harvest.page_limit
            )));
        }
        if !(1..=PROVIDER_MAX_RESULTS).contains(&self.harvest.max_results) {
            return Err(Error::InvalidSettings(format!(
                "harvest.max_results must be within 1..={}, got {}",
                PROVIDER_MAX_RESULTS, self.harvest.max_results
            )));
        }
        Ok(())
    }

    pub fn photos_path(&self) -> PathBuf {
        self.output.data_path.join("photos")
    }
}
