use serde::Serialize;
use tracing::info;

use crate::{
    remaining_or_sentinel, search, ConcreteFlight, CoreError, CoreResult, FareClass, FlightBooker,
    TravelDate,
};

pub const MSG_NO_FLIGHTS: &str = "No matching flights found. Please change your options";
pub const MSG_CHOOSE_FLIGHT: &str = "Choose an available flight in the following list:";
pub const MSG_BOOK_SELECTED: &str = "Book a ticket in selected flight";
pub const MSG_NO_TICKET: &str = "Error: This flight had no ticket for the requested fare!";

/// State of one user's "select flight" interaction: search, pick a flight,
/// choose a fare, book.
///
/// Booking always clears the selection, so every booking needs a fresh pick.
#[derive(Debug, Clone, Default)]
pub struct BookingSession {
    flights: Vec<ConcreteFlight>,
    selected: Option<usize>,
    fare: FareClass,
    message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub message: String,
    pub flights: Vec<ConcreteFlight>,
    pub selected: Option<usize>,
    pub fare_class: FareClass,
    pub can_book: bool,
}

impl BookingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a search with the date given as separate month, day and year fields.
    ///
    /// Previous results and any selection are discarded first. The returned
    /// message tells the user whether the date was invalid, nothing matched,
    /// or flights are listed.
    pub fn search(
        &mut self,
        booker: &dyn FlightBooker,
        departure_city: &str,
        arrival_city: &str,
        month: &str,
        day: &str,
        year: &str,
    ) -> &str {
        self.flights.clear();
        self.selected = None;

        let date_text = TravelDate::join(month, day, year);
        self.message = match search::search(booker, departure_city, arrival_city, &date_text) {
            Ok(flights) if flights.is_empty() => MSG_NO_FLIGHTS.to_string(),
            Ok(flights) => {
                self.flights = flights;
                MSG_CHOOSE_FLIGHT.to_string()
            }
            Err(_) => format!("The chosen date {} is not valid. Please correct it", date_text),
        };
        &self.message
    }

    pub fn select(&mut self, index: usize) -> CoreResult<&ConcreteFlight> {
        let flight = self.flights.get(index).ok_or_else(|| {
            CoreError::ValidationError(format!(
                "No flight at position {} ({} listed)",
                index,
                self.flights.len()
            ))
        })?;
        self.selected = Some(index);
        self.message = MSG_BOOK_SELECTED.to_string();
        Ok(flight)
    }

    pub fn set_fare(&mut self, fare: FareClass) {
        self.fare = fare;
    }

    pub fn fare(&self) -> FareClass {
        self.fare
    }

    pub fn flights(&self) -> &[ConcreteFlight] {
        &self.flights
    }

    pub fn selected(&self) -> Option<&ConcreteFlight> {
        self.selected.and_then(|i| self.flights.get(i))
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn can_book(&self) -> bool {
        self.selected.is_some()
    }

    /// Books one seat of the chosen fare on the selected flight.
    ///
    /// Returns the remaining count, or the negative sentinel when the fare
    /// had no seats left. Either way the selection is cleared.
    pub fn book(&mut self, booker: &dyn FlightBooker) -> CoreResult<i32> {
        let index = self.selected.take().ok_or(CoreError::NoFlightSelected)?;
        let flight = &mut self.flights[index];

        let result = booker.book_seat(flight, self.fare);
        match &result {
            Ok(remaining) => {
                flight.seats.insert(self.fare, *remaining);
                info!("Seat booked on {} ({}), {} left", flight.code, self.fare, remaining);
                self.message = format!("Your ticket has been booked. Remaining tickets = {}", remaining);
            }
            Err(e) => {
                if let CoreError::NoInventory { fare } = e {
                    flight.seats.insert(*fare, 0);
                }
                info!("Booking on {} ({}) failed: {}", flight.code, self.fare, e);
                self.message = MSG_NO_TICKET.to_string();
            }
        }
        Ok(remaining_or_sentinel(&result))
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            message: self.message.clone(),
            flights: self.flights.clone(),
            selected: self.selected,
            fare_class: self.fare,
            can_book: self.can_book(),
        }
    }
}
