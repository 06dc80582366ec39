//! Command Module
//!
//! Line-oriented command protocol driving a single cache.
//!
//! # Commands
//! - `BOUND n` - Construct the cache, or change its capacity
//! - `SET k v` - Store a value
//! - `GET k` - Print a value (refreshes recency) or `NULL`
//! - `PEEK k` - Print a value without refreshing recency, or `NULL`
//! - `DUMP` - Print every `key value` pair in ascending key order

mod parser;
mod runner;
mod session;

pub use parser::Command;
pub use runner::{run_session, run_stream, RunSummary};
pub use session::{Reply, Session, NULL_REPLY};
