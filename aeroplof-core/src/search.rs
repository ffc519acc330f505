use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ConcreteFlight, CoreError, CoreResult, FlightBooker, TravelDate};

#[derive(Debug, Deserialize)]
pub struct FlightSearchRequest {
    pub departure_city: String,
    pub arrival_city: String,
    /// Full date text, e.g. "May 14 2025".
    #[serde(default)]
    pub date: Option<String>,
    /// Alternatively the date as entered in separate fields.
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

impl FlightSearchRequest {
    /// The date text this request carries, assembled from its parts when no
    /// full date was given.
    pub fn date_text(&self) -> CoreResult<String> {
        match (&self.date, &self.month, &self.day, &self.year) {
            (Some(date), _, _, _) => Ok(date.clone()),
            (None, Some(month), Some(day), Some(year)) => Ok(TravelDate::join(month, day, year)),
            _ => Err(CoreError::ValidationError(
                "either date or month, day and year are required".to_string(),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FlightSearchResult {
    pub flights: Vec<ConcreteFlight>,
}

/// Parses `date_text` strictly and returns the flights matching the route on that date.
///
/// An unparseable or non-existent date is an `InvalidDateFormat` error; no
/// matches is an empty list.
pub fn search(
    booker: &dyn FlightBooker,
    departure_city: &str,
    arrival_city: &str,
    date_text: &str,
) -> CoreResult<Vec<ConcreteFlight>> {
    let date = TravelDate::parse(date_text)?;
    let flights = booker.get_matching_flights(departure_city, arrival_city, date.date());
    debug!(
        "Search {} -> {} on {}: {} flight(s)",
        departure_city,
        arrival_city,
        date,
        flights.len()
    );
    Ok(flights)
}
