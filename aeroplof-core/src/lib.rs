pub mod booking;
pub mod date;
pub mod fare;
pub mod flight;
pub mod repository;
pub mod search;
pub mod session;

pub use booking::{remaining_or_sentinel, NO_INVENTORY};
pub use date::TravelDate;
pub use fare::FareClass;
pub use flight::ConcreteFlight;
pub use repository::FlightBooker;
pub use session::BookingSession;

use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),
    #[error("No {fare} seats left on this flight")]
    NoInventory { fare: FareClass },
    #[error("Flight not found: {0}")]
    FlightNotFound(Uuid),
    #[error("No flight selected")]
    NoFlightSelected,
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
