//! Device identity types.

use serde::{Deserialize, Serialize};

/// Maximum number of characters in a device ID.
pub const MAX_ID_LEN: usize = 19;

/// Maximum number of characters in a device type.
pub const MAX_TYPE_LEN: usize = 14;

/// Identity of a candidate device as reported at the input boundary.
///
/// Field lengths are capped at construction; the rest of the crate treats
/// the fields as opaque preconditioned strings and never re-validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentity {
    /// Caller-supplied device ID, at most [`MAX_ID_LEN`] characters.
    pub id: String,
    /// Reported device type, at most [`MAX_TYPE_LEN`] characters.
    pub device_type: String,
}

impl DeviceIdentity {
    /// Create a device identity, truncating over-long fields.
    #[must_use]
    pub fn new(id: impl Into<String>, device_type: impl Into<String>) -> Self {
        Self {
            id: truncate_chars(&id.into(), MAX_ID_LEN),
            device_type: truncate_chars(&device_type.into(), MAX_TYPE_LEN),
        }
    }
}

/// Truncate a string to at most `max` characters, respecting char boundaries.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
