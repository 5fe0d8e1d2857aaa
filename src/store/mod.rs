//! Data access layer
//!
//! Provides the read-side contract over the `products` table and its
//! MySQL-backed implementation.

use async_trait::async_trait;

use crate::types::ProductRecord;
use crate::Result;

pub mod mysql;

pub use mysql::MySqlStore;

/// Product data source trait
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetch every row of the `products` table, in result-set order.
    async fn list_products(&self) -> Result<Vec<ProductRecord>>;
}
