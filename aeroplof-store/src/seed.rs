use std::fs;
use std::path::Path;

use aeroplof_core::{ConcreteFlight, FareClass};
use chrono::NaiveDate;
use tracing::info;

use crate::app_config::Config;
use crate::{FlightStore, StoreError};

/// Reads a JSON array of flights.
pub fn load_flights(path: impl AsRef<Path>) -> Result<Vec<ConcreteFlight>, StoreError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| StoreError::SeedIo {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// The Aeroplof timetable served when no seed file is configured.
pub fn default_timetable() -> Vec<ConcreteFlight> {
    let routes = [
        ("AP-0301", "Bilbao", "Madrid", [2, 5, 20]),
        ("AP-0302", "Madrid", "Bilbao", [2, 5, 20]),
        ("AP-0401", "Bilbao", "Barcelona", [0, 4, 30]),
        ("AP-0402", "Barcelona", "Bilbao", [0, 4, 30]),
        ("AP-0711", "Donostia", "Paris", [1, 0, 12]),
        ("AP-0712", "Paris", "Donostia", [1, 0, 12]),
    ];

    let mut flights = Vec::new();
    for day in [10, 11, 12] {
        let Some(date) = NaiveDate::from_ymd_opt(2026, 11, day) else {
            continue;
        };
        for (code, from, to, [first, business, economy]) in routes {
            flights.push(
                ConcreteFlight::new(code, from, to, date)
                    .with_seats(FareClass::First, first)
                    .with_seats(FareClass::Business, business)
                    .with_seats(FareClass::Economy, economy),
            );
        }
    }
    flights
}

/// Builds the store described by `config`, seeded from file or the default timetable.
pub fn build_store(config: &Config) -> Result<FlightStore, StoreError> {
    let flights = match &config.catalog.seed_path {
        Some(path) => {
            let flights = load_flights(path)?;
            info!("Loaded {} flights from {}", flights.len(), path);
            flights
        }
        None => {
            info!("No seed file configured, using default timetable");
            default_timetable()
        }
    };

    let store = FlightStore::new().with_case_insensitive_cities(config.search.case_insensitive_cities);
    store.extend(flights);
    Ok(store)
}
