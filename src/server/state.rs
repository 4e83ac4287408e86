//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use std::sync::Arc;

use crate::server::{data::PersonStore, service::validation::ValidationRules};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `Arc<dyn PersonStore>` is a reference-counted pointer to the one store instance
/// - `ValidationRules` is a few plain values
#[derive(Clone)]
pub struct AppState {
    /// Store serving phonebook entries.
    ///
    /// Either the SeaORM repository (sharing the connection pool) or the
    /// in-memory repository, selected at startup from configuration.
    pub store: Arc<dyn PersonStore>,

    /// Rules applied to every create and update request.
    pub rules: ValidationRules,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `store` - Store serving phonebook entries
    /// - `rules` - Validation rules for incoming entries
    pub fn new(store: Arc<dyn PersonStore>, rules: ValidationRules) -> Self {
        Self { store, rules }
    }
}
