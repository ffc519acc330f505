use std::collections::HashMap;
use std::sync::Arc;

use aeroplof_core::{ConcreteFlight, CoreError, CoreResult, FareClass, FlightBooker};
use chrono::NaiveDate;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// In-memory backing store for concrete flights and their seat inventory.
///
/// Each flight sits behind its own mutex, so bookings on one flight are
/// serialized while other flights stay available.
pub struct FlightStore {
    flights: RwLock<HashMap<Uuid, Arc<Mutex<ConcreteFlight>>>>,
    case_insensitive_cities: bool,
}

impl FlightStore {
    pub fn new() -> Self {
        Self {
            flights: RwLock::new(HashMap::new()),
            case_insensitive_cities: false,
        }
    }

    /// Matches city names ignoring case instead of exactly.
    pub fn with_case_insensitive_cities(mut self, enabled: bool) -> Self {
        self.case_insensitive_cities = enabled;
        self
    }

    pub fn insert(&self, flight: ConcreteFlight) -> Uuid {
        let id = flight.id;
        debug!("Adding flight {} ({})", flight, id);
        self.flights.write().insert(id, Arc::new(Mutex::new(flight)));
        id
    }

    pub fn extend(&self, flights: impl IntoIterator<Item = ConcreteFlight>) {
        for flight in flights {
            self.insert(flight);
        }
    }

    /// Snapshot of a stored flight.
    pub fn get(&self, id: &Uuid) -> Option<ConcreteFlight> {
        self.flights.read().get(id).map(|f| f.lock().clone())
    }

    pub fn len(&self) -> usize {
        self.flights.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.read().is_empty()
    }

    fn entry(&self, id: &Uuid) -> Option<Arc<Mutex<ConcreteFlight>>> {
        self.flights.read().get(id).cloned()
    }
}

impl Default for FlightStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightBooker for FlightStore {
    fn get_matching_flights(
        &self,
        departure_city: &str,
        arrival_city: &str,
        date: NaiveDate,
    ) -> Vec<ConcreteFlight> {
        let mut matches: Vec<ConcreteFlight> = self
            .flights
            .read()
            .values()
            .filter_map(|f| {
                let flight = f.lock();
                flight
                    .matches(departure_city, arrival_city, date, self.case_insensitive_cities)
                    .then(|| flight.clone())
            })
            .collect();

        // HashMap iteration order is arbitrary
        matches.sort_by(|a, b| a.code.cmp(&b.code).then(a.id.cmp(&b.id)));
        matches
    }

    fn book_seat(&self, flight: &ConcreteFlight, fare: FareClass) -> CoreResult<u32> {
        let entry = self
            .entry(&flight.id)
            .ok_or(CoreError::FlightNotFound(flight.id))?;

        let mut stored = entry.lock();
        match stored.take_seat(fare) {
            Ok(remaining) => {
                info!("Seat booked: {} {} ({} left)", stored.code, fare, remaining);
                Ok(remaining)
            }
            Err(e) => {
                warn!("Booking rejected on {}: {}", stored.code, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 14).unwrap()
    }

    fn store() -> FlightStore {
        let store = FlightStore::new();
        store.extend([
            ConcreteFlight::new("AP-0303", "Bilbao", "Madrid", date()).with_seats(FareClass::Economy, 3),
            ConcreteFlight::new("AP-0301", "Bilbao", "Madrid", date())
                .with_seats(FareClass::First, 1)
                .with_seats(FareClass::Economy, 5),
            ConcreteFlight::new("AP-0401", "Bilbao", "Barcelona", date()),
            ConcreteFlight::new("AP-0302", "Madrid", "Bilbao", date()),
        ]);
        store
    }

    #[test]
    fn test_search_matches_route_and_date() {
        let store = store();
        let flights = store.get_matching_flights("Bilbao", "Madrid", date());

        assert_eq!(flights.len(), 2);
        assert!(flights
            .iter()
            .all(|f| f.departure_city == "Bilbao" && f.arrival_city == "Madrid" && f.date == date()));
        assert_eq!(flights[0].code, "AP-0301");
        assert_eq!(flights[1].code, "AP-0303");
    }

    #[test]
    fn test_search_is_repeatable() {
        let store = store();
        let first = store.get_matching_flights("Bilbao", "Madrid", date());
        let second = store.get_matching_flights("Bilbao", "Madrid", date());
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let store = store();
        assert!(store.get_matching_flights("Bilbao", "Madrid", date().succ_opt().unwrap()).is_empty());
        assert!(store.get_matching_flights("bilbao", "madrid", date()).is_empty());
    }

    #[test]
    fn test_case_insensitive_cities() {
        let store = store().with_case_insensitive_cities(true);
        assert_eq!(store.get_matching_flights("bilbao", "MADRID", date()).len(), 2);
    }

    #[test]
    fn test_book_seat_sequence() {
        let store = store();
        let flight = store
            .get_matching_flights("Bilbao", "Madrid", date())
            .into_iter()
            .find(|f| f.code == "AP-0303")
            .unwrap();

        assert_eq!(store.book_seat(&flight, FareClass::Economy).unwrap(), 2);
        assert_eq!(store.book_seat(&flight, FareClass::Economy).unwrap(), 1);
        assert_eq!(store.book_seat(&flight, FareClass::Economy).unwrap(), 0);
        assert!(matches!(
            store.book_seat(&flight, FareClass::Economy),
            Err(CoreError::NoInventory { fare: FareClass::Economy })
        ));
        assert_eq!(store.get(&flight.id).unwrap().remaining(FareClass::Economy), 0);
    }

    #[test]
    fn test_book_seat_leaves_other_fares_alone() {
        let store = store();
        let flight = store.get_matching_flights("Bilbao", "Madrid", date()).remove(0);

        assert_eq!(store.book_seat(&flight, FareClass::First).unwrap(), 0);
        assert!(store.book_seat(&flight, FareClass::Business).is_err());

        let stored = store.get(&flight.id).unwrap();
        assert_eq!(stored.remaining(FareClass::First), 0);
        assert_eq!(stored.remaining(FareClass::Economy), 5);
        assert!(!stored.seats.contains_key(&FareClass::Business));
    }

    #[test]
    fn test_book_unknown_flight() {
        let store = store();
        let stranger = ConcreteFlight::new("XX-1", "Bilbao", "Madrid", date()).with_seats(FareClass::Economy, 9);
        assert!(matches!(
            store.book_seat(&stranger, FareClass::Economy),
            Err(CoreError::FlightNotFound(id)) if id == stranger.id
        ));
    }

    #[test]
    fn test_concurrent_bookings_never_oversell() {
        let store = FlightStore::new();
        let id = store.insert(
            ConcreteFlight::new("AP-0501", "Bilbao", "Paris", date()).with_seats(FareClass::Economy, 50),
        );
        let flight = store.get(&id).unwrap();

        let booked: usize = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        (0..10)
                            .filter(|_| store.book_seat(&flight, FareClass::Economy).is_ok())
                            .count()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        assert_eq!(booked, 50);
        assert_eq!(store.get(&id).unwrap().remaining(FareClass::Economy), 0);
    }
}
