//! Command Parser
//!
//! Turns one line of the command stream into a typed [`Command`].

use std::fmt;
use std::str::FromStr;

use crate::error::{CacheError, Result};

// == Command ==
/// A single cache command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `BOUND n`: construct the cache or change its capacity
    Bound(usize),
    /// `SET k v`
    Set { key: String, value: String },
    /// `GET k`
    Get(String),
    /// `PEEK k`
    Peek(String),
    /// `DUMP`
    Dump,
}

impl Command {
    /// Parses a whitespace-separated command line.
    ///
    /// The command name is case-insensitive. Tokens past the ones a command
    /// needs are ignored.
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens
            .next()
            .ok_or_else(|| CacheError::InvalidRequest("empty command line".to_string()))?;

        let command = match name.to_ascii_uppercase().as_str() {
            "BOUND" => {
                let raw = required(&mut tokens, "BOUND", "capacity")?;
                let capacity = raw
                    .parse::<usize>()
                    .map_err(|_| CacheError::InvalidCapacity(raw.to_string()))?;
                Command::Bound(capacity)
            }
            "SET" => {
                let key = required(&mut tokens, "SET", "key")?;
                let value = required(&mut tokens, "SET", "value")?;
                Command::Set {
                    key: key.to_string(),
                    value: value.to_string(),
                }
            }
            "GET" => Command::Get(required(&mut tokens, "GET", "key")?.to_string()),
            "PEEK" => Command::Peek(required(&mut tokens, "PEEK", "key")?.to_string()),
            "DUMP" => Command::Dump,
            _ => return Err(CacheError::UnknownCommand(name.to_string())),
        };

        Ok(command)
    }

    /// Upper-case command name.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Bound(_) => "BOUND",
            Command::Set { .. } => "SET",
            Command::Get(_) => "GET",
            Command::Peek(_) => "PEEK",
            Command::Dump => "DUMP",
        }
    }
}

fn required<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str> {
    tokens
        .next()
        .ok_or(CacheError::MissingArgument { command, argument })
}

impl FromStr for Command {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        Command::parse(s)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Bound(capacity) => write!(f, "BOUND {}", capacity),
            Command::Set { key, value } => write!(f, "SET {} {}", key, value),
            Command::Get(key) => write!(f, "GET {}", key),
            Command::Peek(key) => write!(f, "PEEK {}", key),
            Command::Dump => write!(f, "DUMP"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_each_command() {
        assert_eq!(Command::parse("BOUND 3").unwrap(), Command::Bound(3));
        assert_eq!(
            Command::parse("SET a 1").unwrap(),
            Command::Set {
                key: "a".to_string(),
                value: "1".to_string()
            }
        );
        assert_eq!(Command::parse("GET a").unwrap(), Command::Get("a".into()));
        assert_eq!(Command::parse("PEEK a").unwrap(), Command::Peek("a".into()));
        assert_eq!(Command::parse("DUMP").unwrap(), Command::Dump);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Command::parse("bound 2").unwrap(), Command::Bound(2));
        assert_eq!(Command::parse("Get k").unwrap(), Command::Get("k".into()));
        assert_eq!(Command::parse("dUmP").unwrap(), Command::Dump);
    }

    #[test]
    fn test_keys_keep_their_case() {
        assert_eq!(
            Command::parse("peek MixedKey").unwrap(),
            Command::Peek("MixedKey".into())
        );
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace_and_tokens() {
        assert_eq!(
            Command::parse("  SET   k   v  trailing\r").unwrap(),
            Command::Set {
                key: "k".into(),
                value: "v".into()
            }
        );
        assert_eq!(Command::parse("DUMP now").unwrap(), Command::Dump);
    }

    #[test]
    fn test_parse_missing_argument() {
        let err = Command::parse("SET k").unwrap_err();
        assert!(matches!(
            err,
            CacheError::MissingArgument {
                command: "SET",
                argument: "value"
            }
        ));
        assert!(matches!(
            Command::parse("GET").unwrap_err(),
            CacheError::MissingArgument { command: "GET", .. }
        ));
    }

    #[test]
    fn test_parse_invalid_capacity() {
        assert!(matches!(
            Command::parse("BOUND -1").unwrap_err(),
            CacheError::InvalidCapacity(raw) if raw == "-1"
        ));
        assert!(matches!(
            Command::parse("BOUND many").unwrap_err(),
            CacheError::InvalidCapacity(_)
        ));
    }

    #[test]
    fn test_parse_unknown_and_empty() {
        assert!(matches!(
            Command::parse("DELETE k").unwrap_err(),
            CacheError::UnknownCommand(name) if name == "DELETE"
        ));
        assert!(matches!(
            Command::parse("   ").unwrap_err(),
            CacheError::InvalidRequest(_)
        ));
    }

    #[test]
    fn test_display_round_trips() {
        let command: Command = "set k v".parse().unwrap();
        assert_eq!(command.to_string(), "SET k v");
        assert_eq!(command.name(), "SET");
    }
}
