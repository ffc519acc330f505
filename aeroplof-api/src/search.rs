use aeroplof_core::search::{self, FlightSearchRequest, FlightSearchResult};
use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/flights/search", post(search_flights))
}

async fn search_flights(
    State(state): State<AppState>,
    Json(req): Json<FlightSearchRequest>,
) -> Result<Json<FlightSearchResult>, AppError> {
    let date_text = req.date_text()?;
    let flights = search::search(
        state.store.as_ref(),
        &req.departure_city,
        &req.arrival_city,
        &date_text,
    )
    .map_err(|e| {
        info!("Search rejected: {}", e);
        e
    })?;

    Ok(Json(FlightSearchResult { flights }))
}
