//! Error types for tienda-backend

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Data-layer failures surfaced to the route handler.
///
/// Connection and query failures stay distinguishable for logging; the HTTP
/// layer maps every variant to the same "data unavailable" response.
#[derive(Error, Debug)]
pub enum Error {
    /// The database server could not be reached or refused the session.
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// The products query failed (missing table, revoked grants, ...).
    #[error("products query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// A result column holds a type the JSON passthrough cannot represent.
    #[error("column `{column}` has unsupported type {ty}")]
    UnsupportedColumn { column: String, ty: String },
}
