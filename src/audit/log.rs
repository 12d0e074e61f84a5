//! In-memory, capacity-bounded audit log.

use super::types::AccessRecord;

/// Default maximum number of records the log will hold.
pub const MAX_LOG_ENTRIES: usize = 1000;

/// Append-only ordered log of authorization decisions.
///
/// The log is bounded: once full, further appends are silently skipped.
/// Records are never mutated or removed after being stored.
#[derive(Debug, Clone)]
pub struct AuditLog {
    records: Vec<AccessRecord>,
    capacity: usize,
}

impl AuditLog {
    /// Create an empty log with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOG_ENTRIES)
    }

    /// Create an empty log with a specific capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    /// Append a record, returning whether it was actually stored.
    ///
    /// Returns `false` once the log is at capacity. A dropped record is a
    /// deliberate fixed-capacity policy, not an error.
    pub fn append(&mut self, record: AccessRecord) -> bool {
        if self.records.len() >= self.capacity {
            tracing::debug!(
                capacity = self.capacity,
                device_id = %record.device_id,
                "Audit log at capacity; record dropped"
            );
            return false;
        }
        self.records.push(record);
        true
    }

    /// Iterate over records in append order.
    pub fn iter(&self) -> impl Iterator<Item = &AccessRecord> {
        self.records.iter()
    }

    /// Get all records in append order.
    #[must_use]
    pub fn records(&self) -> &[AccessRecord] {
        &self.records
    }

    /// Get the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the log holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the maximum number of records the log will hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::types::{AccessRecord, AccessStatus};
    use crate::device::DeviceIdentity;

    fn record(id: &str) -> AccessRecord {
        AccessRecord::builder(&DeviceIdentity::new(id, "Mouse"), AccessStatus::Authorized)
            .action("Access granted")
            .build()
    }

    #[test]
    fn test_append_stores_in_order() {
        let mut log = AuditLog::new();
        assert!(log.append(record("USB001")));
        assert!(log.append(record("USB002")));

        let ids: Vec<_> = log.iter().map(|r| r.device_id.as_str()).collect();
        assert_eq!(ids, ["USB001", "USB002"]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_append_at_capacity_drops_silently() {
        let mut log = AuditLog::with_capacity(2);
        assert!(log.append(record("USB001")));
        assert!(log.append(record("USB002")));
        assert!(!log.append(record("USB003")));

        assert_eq!(log.len(), 2);
        assert!(log.iter().all(|r| r.device_id != "USB003"));
    }

    #[test]
    fn test_iteration_is_restartable() {
        let mut log = AuditLog::new();
        log.append(record("USB001"));
        log.append(record("USB002"));

        let first: Vec<_> = log.iter().map(|r| r.device_id.clone()).collect();
        let second: Vec<_> = log.iter().map(|r| r.device_id.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_capacity() {
        let log = AuditLog::new();
        assert_eq!(log.capacity(), MAX_LOG_ENTRIES);
        assert!(log.is_empty());
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let mut log = AuditLog::with_capacity(0);
        assert!(!log.append(record("USB001")));
        assert!(log.is_empty());
    }
}
