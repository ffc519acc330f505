use aeroplof_core::{CoreError, FareClass, FlightBooker};
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BookSeatRequest {
    pub flight_id: Uuid,
    pub fare_class: FareClass,
}

#[derive(Debug, Serialize)]
pub struct BookSeatResponse {
    pub flight_id: Uuid,
    pub fare_class: FareClass,
    pub remaining: u32,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/bookings", post(book_seat))
}

async fn book_seat(
    State(state): State<AppState>,
    Json(req): Json<BookSeatRequest>,
) -> Result<Json<BookSeatResponse>, AppError> {
    let flight = state
        .store
        .get(&req.flight_id)
        .ok_or(CoreError::FlightNotFound(req.flight_id))?;

    let remaining = state.store.book_seat(&flight, req.fare_class)?;
    info!("Booked {} seat on {}", req.fare_class, flight.code);

    Ok(Json(BookSeatResponse {
        flight_id: flight.id,
        fare_class: req.fare_class,
        remaining,
    }))
}
