//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only carries the upstream API client; pages are never cached server-side.

use std::sync::Arc;

use crate::artic::ArticClient;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub artic: Arc<ArticClient>,
}

impl AppState {
    #[must_use]
    pub fn new(artic: ArticClient) -> Self {
        Self { artic: Arc::new(artic) }
    }
}
