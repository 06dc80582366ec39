//! Response DTOs for the cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheStats, SortedSnapshot};

/// Response body for GET /get/:key and GET /peek/:key
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for the SET operation (PUT /set)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
        }
    }
}

/// Response body for the BOUND operation (PUT /bound)
#[derive(Debug, Clone, Serialize)]
pub struct BoundResponse {
    /// The capacity now in effect
    pub capacity: usize,
    /// Entries evicted by this change
    pub evicted: usize,
    /// Entries left in the cache
    pub total_entries: usize,
}

/// One key/value pair in a dump
#[derive(Debug, Clone, Serialize)]
pub struct DumpEntry {
    pub key: String,
    pub value: String,
}

/// Response body for the DUMP operation (GET /dump)
///
/// Entries are in ascending key order.
#[derive(Debug, Clone, Serialize)]
pub struct DumpResponse {
    /// Number of entries
    pub count: usize,
    pub entries: Vec<DumpEntry>,
}

impl From<SortedSnapshot<'_>> for DumpResponse {
    fn from(snapshot: SortedSnapshot<'_>) -> Self {
        let entries: Vec<DumpEntry> = snapshot
            .into_iter()
            .map(|entry| DumpEntry {
                key: entry.key.to_string(),
                value: entry.value.to_string(),
            })
            .collect();
        Self {
            count: entries.len(),
            entries,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of GET hits
    pub hits: u64,
    /// Number of GET misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Current capacity
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            capacity: stats.capacity,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
