use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CoreError, CoreResult, FareClass};

/// One scheduled instance of a route on a specific date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcreteFlight {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub code: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub seats: BTreeMap<FareClass, u32>,
}

impl ConcreteFlight {
    pub fn new(
        code: impl Into<String>,
        departure_city: impl Into<String>,
        arrival_city: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            departure_city: departure_city.into(),
            arrival_city: arrival_city.into(),
            date,
            seats: BTreeMap::new(),
        }
    }

    pub fn with_seats(mut self, fare: FareClass, count: u32) -> Self {
        self.seats.insert(fare, count);
        self
    }

    /// Remaining seats for `fare`; a class with no allocation has none.
    pub fn remaining(&self, fare: FareClass) -> u32 {
        self.seats.get(&fare).copied().unwrap_or(0)
    }

    pub fn matches(
        &self,
        departure_city: &str,
        arrival_city: &str,
        date: NaiveDate,
        case_insensitive: bool,
    ) -> bool {
        let same_city = |a: &str, b: &str| {
            if case_insensitive {
                a.to_lowercase() == b.to_lowercase()
            } else {
                a == b
            }
        };

        self.date == date
            && same_city(&self.departure_city, departure_city)
            && same_city(&self.arrival_city, arrival_city)
    }

    /// Consumes one seat of `fare` and returns what is left.
    ///
    /// Leaves the seat map untouched when the class is empty or unallocated.
    pub fn take_seat(&mut self, fare: FareClass) -> CoreResult<u32> {
        match self.seats.get_mut(&fare) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Ok(*count)
            }
            _ => Err(CoreError::NoInventory { fare }),
        }
    }
}

impl fmt::Display for ConcreteFlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} {}",
            self.code,
            self.departure_city,
            self.arrival_city,
            self.date.format("%B %-d %Y")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight() -> ConcreteFlight {
        ConcreteFlight::new("AP-0301", "Bilbao", "Madrid", NaiveDate::from_ymd_opt(2025, 5, 14).unwrap())
            .with_seats(FareClass::Business, 1)
            .with_seats(FareClass::Economy, 3)
    }

    #[test]
    fn test_take_seat_counts_down_to_zero() {
        let mut flight = flight();

        assert_eq!(flight.take_seat(FareClass::Economy).unwrap(), 2);
        assert_eq!(flight.take_seat(FareClass::Economy).unwrap(), 1);
        assert_eq!(flight.take_seat(FareClass::Economy).unwrap(), 0);
        assert!(matches!(
            flight.take_seat(FareClass::Economy),
            Err(CoreError::NoInventory { fare: FareClass::Economy })
        ));
        assert_eq!(flight.remaining(FareClass::Economy), 0);
    }

    #[test]
    fn test_take_seat_only_touches_requested_fare() {
        let mut flight = flight();
        flight.take_seat(FareClass::Business).unwrap();

        assert_eq!(flight.remaining(FareClass::Business), 0);
        assert_eq!(flight.remaining(FareClass::Economy), 3);
    }

    #[test]
    fn test_unallocated_fare_is_rejected() {
        let mut flight = flight();
        let before = flight.seats.clone();

        assert!(flight.take_seat(FareClass::First).is_err());
        assert_eq!(flight.seats, before);
    }

    #[test]
    fn test_matches_is_exact_by_default() {
        let flight = flight();
        let date = NaiveDate::from_ymd_opt(2025, 5, 14).unwrap();

        assert!(flight.matches("Bilbao", "Madrid", date, false));
        assert!(!flight.matches("bilbao", "Madrid", date, false));
        assert!(flight.matches("bilbao", "MADRID", date, true));
        assert!(!flight.matches("Bilbao", "Madrid", date.succ_opt().unwrap(), false));
    }

    #[test]
    fn test_display() {
        assert_eq!(flight().to_string(), "AP-0301 Bilbao -> Madrid May 14 2025");
    }

    #[test]
    fn test_flight_deserialization() {
        let json = r#"
            {
                "code": "AP-0302",
                "departure_city": "Madrid",
                "arrival_city": "Bilbao",
                "date": "2025-05-14",
                "seats": { "First": 2, "Economy": 40 }
            }
        "#;
        let flight: ConcreteFlight = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(flight.remaining(FareClass::First), 2);
        assert_eq!(flight.remaining(FareClass::Business), 0);
        assert_eq!(flight.remaining(FareClass::Economy), 40);
    }
}
