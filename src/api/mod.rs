//! API Module
//!
//! HTTP handlers and routing exposing the cache operations.
//!
//! # Endpoints
//! - `PUT /set` - Store a key-value pair
//! - `GET /get/:key` - Retrieve a value, refreshing its recency
//! - `GET /peek/:key` - Retrieve a value without refreshing it
//! - `PUT /bound` - Change the capacity
//! - `GET /dump` - All entries in ascending key order
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
