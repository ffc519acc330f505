use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use aeroplof_core::BookingSession;
use aeroplof_store::FlightStore;
use parking_lot::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::error::AppError;

const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(1800);

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FlightStore>,
    pub sessions: Arc<SessionTable>,
}

impl AppState {
    pub fn new(store: Arc<FlightStore>) -> Self {
        Self::with_session_ttl(store, DEFAULT_SESSION_TTL)
    }

    pub fn with_session_ttl(store: Arc<FlightStore>, idle_ttl: Duration) -> Self {
        Self {
            store,
            sessions: Arc::new(SessionTable::new(idle_ttl)),
        }
    }
}

struct SessionEntry {
    session: BookingSession,
    touched: Instant,
}

/// Open booking sessions. A session idle for `idle_ttl` is gone.
pub struct SessionTable {
    entries: Mutex<HashMap<Uuid, SessionEntry>>,
    idle_ttl: Duration,
}

impl SessionTable {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            idle_ttl,
        }
    }

    /// Starts a new session, dropping expired ones first.
    pub fn open(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut entries = self.entries.lock();

        let before = entries.len();
        entries.retain(|_, entry| entry.touched.elapsed() < self.idle_ttl);
        if entries.len() < before {
            debug!("Expired {} idle session(s)", before - entries.len());
        }

        entries.insert(
            id,
            SessionEntry {
                session: BookingSession::new(),
                touched: Instant::now(),
            },
        );
        id
    }

    /// Runs `f` against session `id` while holding the table lock.
    pub fn with<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut BookingSession) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut entries = self.entries.lock();
        let not_found = || AppError::NotFoundError(format!("Session not found: {}", id));

        let expired = entries
            .get(&id)
            .map(|entry| entry.touched.elapsed() >= self.idle_ttl)
            .ok_or_else(not_found)?;
        if expired {
            entries.remove(&id);
            return Err(not_found());
        }

        let entry = entries.get_mut(&id).ok_or_else(not_found)?;
        entry.touched = Instant::now();
        f(&mut entry.session)
    }

    /// Ends session `id`; false when it did not exist.
    pub fn close(&self, id: Uuid) -> bool {
        self.entries.lock().remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
