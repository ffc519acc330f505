use chrono::NaiveDate;

use crate::{ConcreteFlight, CoreResult, FareClass};

/// Business logic behind the booking screen: flight lookup and seat booking.
pub trait FlightBooker: Send + Sync {
    /// Flights whose route and date match exactly, in a stable order.
    fn get_matching_flights(
        &self,
        departure_city: &str,
        arrival_city: &str,
        date: NaiveDate,
    ) -> Vec<ConcreteFlight>;

    /// Takes one seat of `fare` on `flight` and returns the seats left in that class.
    ///
    /// Fails with `NoInventory` when the class is exhausted or has no
    /// allocation, and with `FlightNotFound` when `flight` is not one this
    /// booker knows about. Failed calls change nothing.
    fn book_seat(&self, flight: &ConcreteFlight, fare: FareClass) -> CoreResult<u32>;
}
