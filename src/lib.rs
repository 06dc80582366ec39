//! Bounded LRU - An in-memory key-value cache
//!
//! Least recently used eviction, adjustable capacity, and sorted dumps,
//! driven by a line-oriented command stream or an HTTP API.

pub mod api;
pub mod cache;
pub mod command;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::LruCache;
pub use command::{run_stream, Session};
pub use config::{Config, RunMode};
pub use error::CacheError;
