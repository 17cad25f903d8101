use std::sync::Arc;

use crate::store::{HospitalStore, SnakeStore};

/// Shared application state injected into all route handlers via Axum extractors.
/// Stores are trait objects so tests can swap in the in-memory backend.
#[derive(Clone)]
pub struct AppState {
    pub snakes: Arc<dyn SnakeStore>,
    pub hospitals: Arc<dyn HospitalStore>,
}
