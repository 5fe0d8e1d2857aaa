//! API handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::AppState;
use crate::types::ProductRecord;

/// Liveness acknowledgment, served with no database interaction.
pub async fn home() -> &'static str {
    "El backend funciona."
}

/// List every row of the `products` table as a JSON array.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductRecord>>, ApiError> {
    let products = state.store.list_products().await.map_err(|err| {
        tracing::error!(error = %err, "failed to list products");
        ApiError::data_unavailable()
    })?;

    tracing::debug!(count = products.len(), "listed products");

    Ok(Json(products))
}

/// Error envelope returned to API clients.
///
/// Every data-layer failure collapses into the single "data unavailable"
/// kind; the underlying cause goes to the log, never to the client.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    fn data_unavailable() -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: "product data is unavailable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": self.message,
        }));
        (self.status, body).into_response()
    }
}
