use thiserror::Error;

/// Shape rules a key-value pair must pass before the gateway issues any
/// RPC call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("key cannot be empty")]
    EmptyKey,

    #[error("value cannot be empty")]
    EmptyValue,

    #[error("key contains invalid characters")]
    InvalidCharacters,
}

/// Validates a key-value pair.
///
/// Check order is fixed: empty key, then empty value, then key characters;
/// the first failing rule wins. The empty-value rule exists only at this
/// boundary; the store service itself accepts empty values.
pub fn validate_kv_pair(key: &str, value: &str) -> Result<(), ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey);
    }

    if value.is_empty() {
        return Err(ValidationError::EmptyValue);
    }

    if contains_invalid_chars(key) {
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(())
}

/// Keys are restricted to `[A-Za-z0-9_-]`.
fn contains_invalid_chars(s: &str) -> bool {
    !s.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
