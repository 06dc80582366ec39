//! API Handlers
//!
//! HTTP request handlers, one per cache operation.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::cache::LruCache;
use crate::error::{CacheError, Result};
use crate::models::{
    BoundRequest, BoundResponse, DumpResponse, GetResponse, HealthResponse, SetRequest,
    SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// The cache itself is single-threaded; the RwLock serializes writers.
/// GET takes the write lock because it refreshes recency.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<RwLock<LruCache>>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: LruCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(LruCache::new(config.initial_capacity))
    }
}

/// Handler for PUT /set
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.write().await;
    cache.set(req.key.clone(), req.value);

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Refreshes the key's recency on a hit.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let mut cache = state.cache.write().await;
    let value = cache
        .get(&key)
        .map(String::from)
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for GET /peek/:key
///
/// Reads without changing recency order.
pub async fn peek_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let cache = state.cache.read().await;
    let value = cache
        .peek(&key)
        .map(String::from)
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for PUT /bound
pub async fn bound_handler(
    State(state): State<AppState>,
    Json(req): Json<BoundRequest>,
) -> Json<BoundResponse> {
    let mut cache = state.cache.write().await;
    let evicted = cache.bound(req.capacity);
    info!(capacity = req.capacity, evicted, "cache bound updated");

    Json(BoundResponse {
        capacity: cache.capacity(),
        evicted,
        total_entries: cache.len(),
    })
}

/// Handler for GET /dump
pub async fn dump_handler(State(state): State<AppState>) -> Json<DumpResponse> {
    let cache = state.cache.read().await;
    Json(DumpResponse::from(cache.dump()))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::from(cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
