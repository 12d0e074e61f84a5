//! Trusted device registry.
//!
//! The registry holds the fixed set of device identities permitted to
//! connect. It is seeded once at start-up and never mutated afterwards;
//! there is no revocation while the session runs.

use serde::{Deserialize, Serialize};

/// Maximum number of entries the registry will hold.
pub const MAX_TRUSTED_DEVICES: usize = 100;

/// A single authorized device identity.
///
/// Entries exist only inside a [`TrustedRegistry`]; they are created at
/// seeding time and live for the whole process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedEntry {
    /// Device ID membership is checked against.
    pub device_id: String,
    /// Informational device type; never consulted during lookup.
    pub device_type: String,
}

impl TrustedEntry {
    /// Create a trusted entry.
    #[must_use]
    pub fn new(device_id: impl Into<String>, device_type: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            device_type: device_type.into(),
        }
    }
}

/// The set of devices authorized to connect.
#[derive(Debug, Clone, Default)]
pub struct TrustedRegistry {
    entries: Vec<TrustedEntry>,
}

impl TrustedRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a registry seeded with the built-in trusted devices.
    #[must_use]
    pub fn with_default_devices() -> Self {
        Self::from_entries(vec![
            TrustedEntry::new("USB001", "Mouse"),
            TrustedEntry::new("USB002", "Keyboard"),
            TrustedEntry::new("USB003", "Printer"),
            TrustedEntry::new("USB004", "Storage"),
            TrustedEntry::new("Dev", "Storage"),
        ])
    }

    /// Create a registry from seed entries, preserving their order.
    ///
    /// Entries beyond [`MAX_TRUSTED_DEVICES`] are dropped with a warning.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = TrustedEntry>) -> Self {
        let mut kept = Vec::new();
        let mut dropped = 0usize;
        for entry in entries {
            if kept.len() < MAX_TRUSTED_DEVICES {
                kept.push(entry);
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            tracing::warn!(
                dropped,
                capacity = MAX_TRUSTED_DEVICES,
                "Trusted device list exceeds capacity; excess entries ignored"
            );
        }
        Self { entries: kept }
    }

    /// Check whether a device ID is in the trusted set.
    ///
    /// Exact, case-sensitive comparison on the ID only; the first matching
    /// entry governs.
    #[must_use]
    pub fn contains(&self, device_id: &str) -> bool {
        self.entries.iter().any(|e| e.device_id == device_id)
    }

    /// Get all entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[TrustedEntry] {
        &self.entries
    }

    /// Get the number of trusted devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
