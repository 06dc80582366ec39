//! Command Session
//!
//! Owns the cache driven by a command stream and executes parsed commands.

use std::fmt;

use tracing::debug;

use crate::cache::{LruCache, SortedSnapshot};
use crate::command::Command;
use crate::error::{CacheError, Result};

/// Token printed when GET or PEEK misses.
pub const NULL_REPLY: &str = "NULL";

// == Reply ==
/// Output of one executed command.
///
/// Borrows from the session's cache, so it must be written out before the
/// next command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<'a> {
    /// BOUND and SET print nothing
    Silent,
    /// GET or PEEK result, `None` renders as `NULL`
    Value(Option<&'a str>),
    /// DUMP result in ascending key order
    Dump(SortedSnapshot<'a>),
}

/// Renders the reply exactly as the command protocol prints it, one
/// newline-terminated line per output line.
impl fmt::Display for Reply<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Silent => Ok(()),
            Reply::Value(Some(value)) => writeln!(f, "{}", value),
            Reply::Value(None) => writeln!(f, "{}", NULL_REPLY),
            Reply::Dump(snapshot) => write!(f, "{}", snapshot),
        }
    }
}

// == Session ==
/// A cache that is created by the first BOUND command.
///
/// Any other command issued before that BOUND is rejected with
/// [`CacheError::Unbounded`] and leaves the session untouched.
#[derive(Debug, Default)]
pub struct Session {
    cache: Option<LruCache>,
}

impl Session {
    /// Creates a session with no cache yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session around an existing cache.
    pub fn with_cache(cache: LruCache) -> Self {
        Self { cache: Some(cache) }
    }

    pub fn is_bound(&self) -> bool {
        self.cache.is_some()
    }

    pub fn cache(&self) -> Option<&LruCache> {
        self.cache.as_ref()
    }

    /// Executes one command.
    pub fn execute(&mut self, command: Command) -> Result<Reply<'_>> {
        if let Command::Bound(capacity) = command {
            match self.cache.as_mut() {
                Some(cache) => {
                    cache.bound(capacity);
                }
                None => {
                    debug!(capacity, "constructing cache");
                    self.cache = Some(LruCache::new(capacity));
                }
            }
            return Ok(Reply::Silent);
        }

        let cache = self
            .cache
            .as_mut()
            .ok_or_else(|| CacheError::Unbounded(command.name().to_string()))?;

        let reply = match command {
            Command::Set { key, value } => {
                cache.set(key, value);
                Reply::Silent
            }
            Command::Get(key) => Reply::Value(cache.get(&key)),
            Command::Peek(key) => Reply::Value(cache.peek(&key)),
            Command::Dump => Reply::Dump(cache.dump()),
            Command::Bound(_) => Reply::Silent,
        };

        Ok(reply)
    }

    /// Parses and executes one command line.
    pub fn execute_line(&mut self, line: &str) -> Result<Reply<'_>> {
        self.execute(Command::parse(line)?)
    }
}
