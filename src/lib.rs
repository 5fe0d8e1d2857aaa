//! Tienda backend - product catalog API for the Tienda Forestal storefront
//!
//! A small HTTP service that mirrors the `products` table of an externally
//! managed MySQL database as JSON:
//! - One read endpoint (`GET /api/products`) returning raw table rows
//! - A root liveness route, decoupled from database health
//! - Permissive CORS for the separately served front-end
//! - One fresh database session per request, no pooling

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
