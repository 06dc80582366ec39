//! Request and Response models for the cache API
//!
//! DTOs used for serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{BoundRequest, SetRequest, MAX_KEY_LENGTH};
pub use responses::{
    BoundResponse, DumpEntry, DumpResponse, GetResponse, HealthResponse, SetResponse,
    StatsResponse,
};
