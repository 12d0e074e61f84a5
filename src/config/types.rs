//! Configuration types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::audit::{DEFAULT_EXPORT_PATH, MAX_LOG_ENTRIES};
use crate::registry::TrustedEntry;

/// Station configuration loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SentinelConfig {
    /// Maximum number of audit records kept in memory.
    pub log_capacity: usize,
    /// Destination file for audit log exports.
    pub export_path: PathBuf,
    /// Trusted devices seeded into the registry at start-up.
    pub trusted_devices: Vec<TrustedEntry>,
}

fn default_log_capacity() -> usize {
    MAX_LOG_ENTRIES
}

fn default_export_path() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_PATH)
}

fn default_trusted_devices() -> Vec<TrustedEntry> {
    vec![
        TrustedEntry::new("USB001", "Mouse"),
        TrustedEntry::new("USB002", "Keyboard"),
        TrustedEntry::new("USB003", "Printer"),
        TrustedEntry::new("USB004", "Storage"),
        TrustedEntry::new("Dev", "Storage"),
    ]
}

impl Default for SentinelConfig {
    fn default() -> Self {
        Self {
            log_capacity: default_log_capacity(),
            export_path: default_export_path(),
            trusted_devices: default_trusted_devices(),
        }
    }
}
