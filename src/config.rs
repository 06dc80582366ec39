//! Configuration Module
//!
//! Loads runtime configuration from environment variables.

use std::env;
use std::str::FromStr;

// == Run Mode ==
/// Which front-end drives the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Read a command stream from stdin, write replies to stdout
    #[default]
    Stdin,
    /// Serve the HTTP API
    Http,
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdin" | "cli" => Ok(RunMode::Stdin),
            "http" | "server" => Ok(RunMode::Http),
            other => Err(format!("unknown run mode: {}", other)),
        }
    }
}

/// Runtime configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Front-end to run
    pub mode: RunMode,
    /// Capacity of the cache the HTTP server starts with
    pub initial_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `RUN_MODE` - `stdin` or `http` (default: stdin)
    /// - `MAX_ENTRIES` - Initial capacity in HTTP mode (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            mode: env_or("RUN_MODE", defaults.mode),
            initial_capacity: env_or("MAX_ENTRIES", defaults.initial_capacity),
            server_port: env_or("SERVER_PORT", defaults.server_port),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: RunMode::Stdin,
            initial_capacity: 1000,
            server_port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.mode, RunMode::Stdin);
        assert_eq!(config.initial_capacity, 1000);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("RUN_MODE");
        env::remove_var("MAX_ENTRIES");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.mode, RunMode::Stdin);
        assert_eq!(config.initial_capacity, 1000);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_run_mode_parse() {
        assert_eq!("HTTP".parse::<RunMode>(), Ok(RunMode::Http));
        assert_eq!(" stdin ".parse::<RunMode>(), Ok(RunMode::Stdin));
        assert!("carrier-pigeon".parse::<RunMode>().is_err());
    }
}
