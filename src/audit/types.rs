//! Access record types for the audit trail.

use serde::{Deserialize, Serialize};

use crate::clock;
use crate::device::DeviceIdentity;

/// Outcome recorded for an authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessStatus {
    /// Device was in the trusted registry.
    Authorized,
    /// Device was not in the trusted registry.
    Blocked,
}

impl AccessStatus {
    /// Returns the string representation used in exports and listings.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authorized => "AUTHORIZED",
            Self::Blocked => "BLOCKED",
        }
    }
}

/// A single authorization decision, recorded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRecord {
    /// ID of the device the decision was made for.
    pub device_id: String,
    /// Reported type of the device.
    pub device_type: String,
    /// Local wall-clock time of the decision.
    pub timestamp: String,
    /// Verdict at decision time.
    pub status: AccessStatus,
    /// Free-text reason accompanying the verdict.
    pub action: String,
}

impl AccessRecord {
    /// Create a new builder for an access record.
    #[must_use]
    pub fn builder(device: &DeviceIdentity, status: AccessStatus) -> AccessRecordBuilder {
        AccessRecordBuilder::new(device, status)
    }
}

/// Builder for creating access records.
#[derive(Debug, Clone)]
pub struct AccessRecordBuilder {
    device_id: String,
    device_type: String,
    timestamp: String,
    status: AccessStatus,
    action: String,
}

impl AccessRecordBuilder {
    /// Create a new builder; the timestamp defaults to the current time.
    #[must_use]
    pub fn new(device: &DeviceIdentity, status: AccessStatus) -> Self {
        Self {
            device_id: device.id.clone(),
            device_type: device.device_type.clone(),
            timestamp: clock::current_timestamp(),
            status,
            action: String::new(),
        }
    }

    /// Set a specific timestamp instead of the current time.
    #[must_use]
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Set the action text.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Build the access record.
    #[must_use]
    pub fn build(self) -> AccessRecord {
        AccessRecord {
            device_id: self.device_id,
            device_type: self.device_type,
            timestamp: self.timestamp,
            status: self.status,
            action: self.action,
        }
    }
}
