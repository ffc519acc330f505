pub mod app_config;
pub mod flight_store;
pub mod seed;

pub use flight_store::FlightStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read seed file {path}: {source}")]
    SeedIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid seed data: {0}")]
    SeedFormat(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
