//! API server state

use std::sync::Arc;

use crate::store::ProductStore;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Product data source; one fresh database session per call.
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}
