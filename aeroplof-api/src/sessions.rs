use aeroplof_core::session::SessionView;
use aeroplof_core::{BookingSession, FareClass};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SessionSearchRequest {
    pub departure_city: String,
    pub arrival_city: String,
    pub month: String,
    pub day: String,
    pub year: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct FareRequest {
    pub fare_class: FareClass,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/sessions", post(create_session))
        .route("/v1/sessions/{id}", get(get_session).delete(close_session))
        .route("/v1/sessions/{id}/search", post(search))
        .route("/v1/sessions/{id}/select", post(select))
        .route("/v1/sessions/{id}/fare", put(set_fare))
        .route("/v1/sessions/{id}/book", post(book))
}

fn with_session<T>(
    state: &AppState,
    id: Uuid,
    f: impl FnOnce(&mut BookingSession) -> Result<T, AppError>,
) -> Result<T, AppError> {
    state.sessions.with(id, f)
}

async fn create_session(State(state): State<AppState>) -> Json<CreateSessionResponse> {
    let session_id = state.sessions.open();
    info!("Booking session opened: {}", session_id);
    Json(CreateSessionResponse { session_id })
}

async fn close_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.close(id) {
        return Err(AppError::NotFoundError(format!("Session not found: {}", id)));
    }
    info!("Booking session closed: {}", id);
    Ok(StatusCode::NO_CONTENT)
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    with_session(&state, id, |session| Ok(Json(session.view())))
}

async fn search(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SessionSearchRequest>,
) -> Result<Json<SessionView>, AppError> {
    with_session(&state, id, |session| {
        session.search(
            state.store.as_ref(),
            &req.departure_city,
            &req.arrival_city,
            &req.month,
            &req.day,
            &req.year,
        );
        Ok(Json(session.view()))
    })
}

async fn select(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<SessionView>, AppError> {
    with_session(&state, id, |session| {
        session.select(req.index)?;
        Ok(Json(session.view()))
    })
}

async fn set_fare(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<FareRequest>,
) -> Result<Json<SessionView>, AppError> {
    with_session(&state, id, |session| {
        session.set_fare(req.fare_class);
        Ok(Json(session.view()))
    })
}

async fn book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    with_session(&state, id, |session| {
        let remaining = session.book(state.store.as_ref())?;
        info!("Session {} booking result: {}", id, remaining);
        Ok(Json(session.view()))
    })
}
