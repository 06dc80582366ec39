//! Request DTOs for the cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Request body for the SET operation (PUT /set)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Keys and values must be non-empty and free of whitespace so that they
    /// survive a round trip through the line protocol and DUMP output.
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        if self.key.chars().any(char::is_whitespace) {
            return Some("Key cannot contain whitespace".to_string());
        }
        if self.value.is_empty() {
            return Some("Value cannot be empty".to_string());
        }
        if self.value.chars().any(char::is_whitespace) {
            return Some("Value cannot contain whitespace".to_string());
        }
        None
    }
}

/// Request body for the BOUND operation (PUT /bound)
#[derive(Debug, Clone, Deserialize)]
pub struct BoundRequest {
    /// New maximum number of entries
    pub capacity: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(key: &str, value: &str) -> SetRequest {
        SetRequest {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_set_request_deserialize() {
        let json = r#"{"key": "test", "value": "hello"}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "test");
        assert_eq!(req.value, "hello");
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(request("valid_key", "test").validate().is_none());
    }

    #[test]
    fn test_validate_rejects_bad_keys() {
        assert!(request("", "v").validate().is_some());
        assert!(request("two words", "v").validate().is_some());
        assert!(request(&"k".repeat(MAX_KEY_LENGTH + 1), "v")
            .validate()
            .is_some());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(request("k", "").validate().is_some());
        assert!(request("k", "a\tb").validate().is_some());
    }

    #[test]
    fn test_bound_request_deserialize() {
        let req: BoundRequest = serde_json::from_str(r#"{"capacity": 0}"#).unwrap();
        assert_eq!(req.capacity, 0);
        assert!(serde_json::from_str::<BoundRequest>(r#"{"capacity": -3}"#).is_err());
    }
}
