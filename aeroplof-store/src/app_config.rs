use config::builder::{ConfigBuilder, DefaultState};
use serde::Deserialize;
use std::env;

use crate::StoreError;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub sessions: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 { 3000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON file with the flights to serve; the built-in timetable when unset.
    pub seed_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SearchConfig {
    #[serde(default)]
    pub case_insensitive_cities: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Sessions untouched for longer than this are dropped.
    #[serde(default = "default_idle_ttl")]
    pub idle_ttl_seconds: u64,
}

fn default_idle_ttl() -> u64 { 1800 }

impl Default for SessionConfig {
    fn default() -> Self {
        Self { idle_ttl_seconds: default_idle_ttl() }
    }
}

impl Config {
    pub fn load() -> Result<Self, StoreError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Optional per-environment overrides
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `AEROPLOF_SERVER__PORT=8080`
            .add_source(config::Environment::with_prefix("AEROPLOF").separator("__"));

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, StoreError> {
        Ok(builder.build()?.try_deserialize()?)
    }
}
