//! Authorization engine for candidate device connections.

use crate::audit::{AccessRecord, AccessStatus, AuditLog};
use crate::device::DeviceIdentity;
use crate::registry::TrustedRegistry;

/// Action text recorded for an authorized connection.
pub const ACTION_GRANTED: &str = "Access granted";

/// Action text recorded for a blocked connection.
pub const ACTION_DENIED: &str = "Access denied - unauthorized device";

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Device may connect.
    Authorized,
    /// Device must not connect.
    Blocked,
}

impl Verdict {
    /// Check whether this verdict blocks the connection.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked)
    }
}

impl From<Verdict> for AccessStatus {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Authorized => Self::Authorized,
            Verdict::Blocked => Self::Blocked,
        }
    }
}

/// Decides whether candidate devices may connect and records every decision.
///
/// The engine owns the registry and the audit log for one operator session;
/// independent sessions get independent engines.
#[derive(Debug)]
pub struct AuthorizationEngine {
    registry: TrustedRegistry,
    log: AuditLog,
}

impl AuthorizationEngine {
    /// Create an engine over a seeded registry and an empty log.
    #[must_use]
    pub fn new(registry: TrustedRegistry, log: AuditLog) -> Self {
        Self { registry, log }
    }

    /// Authorize a candidate device.
    ///
    /// Looks the device ID up in the trusted registry, appends one decision
    /// record to the audit log, and returns the verdict. The verdict is
    /// reported whether or not the log had capacity to store the record.
    pub fn authorize(&mut self, device: &DeviceIdentity) -> Verdict {
        let verdict = if self.registry.contains(&device.id) {
            Verdict::Authorized
        } else {
            Verdict::Blocked
        };

        let action = match verdict {
            Verdict::Authorized => ACTION_GRANTED,
            Verdict::Blocked => ACTION_DENIED,
        };

        let record = AccessRecord::builder(device, verdict.into())
            .action(action)
            .build();
        let stored = self.log.append(record);

        tracing::info!(
            device_id = %device.id,
            device_type = %device.device_type,
            verdict = ?verdict,
            stored,
            "Authorization decision"
        );
        verdict
    }

    /// Get the trusted registry.
    #[must_use]
    pub fn registry(&self) -> &TrustedRegistry {
        &self.registry
    }

    /// Get the audit log.
    #[must_use]
    pub fn log(&self) -> &AuditLog {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> AuthorizationEngine {
        AuthorizationEngine::new(TrustedRegistry::with_default_devices(), AuditLog::new())
    }

    #[test]
    fn test_trusted_device_is_authorized() {
        let mut engine = engine();
        let device = DeviceIdentity::new("USB002", "Keyboard");

        assert_eq!(engine.authorize(&device), Verdict::Authorized);

        let record = &engine.log().records()[0];
        assert_eq!(record.device_id, "USB002");
        assert_eq!(record.status, AccessStatus::Authorized);
        assert_eq!(record.action, ACTION_GRANTED);
    }

    #[test]
    fn test_unknown_device_is_blocked() {
        let mut engine = engine();
        let device = DeviceIdentity::new("XYZ999", "Drive");

        let verdict = engine.authorize(&device);
        assert_eq!(verdict, Verdict::Blocked);
        assert!(verdict.is_blocked());

        assert_eq!(engine.log().len(), 1);
        let record = &engine.log().records()[0];
        assert_eq!(record.status, AccessStatus::Blocked);
        assert_eq!(record.action, ACTION_DENIED);
    }

    #[test]
    fn test_verdict_depends_only_on_id() {
        let mut engine = engine();
        // Type does not match the seeded entry, but the ID does.
        let device = DeviceIdentity::new("USB001", "Storage");
        assert_eq!(engine.authorize(&device), Verdict::Authorized);
    }

    #[test]
    fn test_each_call_appends_one_record() {
        let mut engine = engine();
        engine.authorize(&DeviceIdentity::new("USB001", "Mouse"));
        engine.authorize(&DeviceIdentity::new("USB001", "Mouse"));
        engine.authorize(&DeviceIdentity::new("BAD", "Drive"));

        assert_eq!(engine.log().len(), 3);
        let ids: Vec<_> = engine.log().iter().map(|r| r.device_id.as_str()).collect();
        assert_eq!(ids, ["USB001", "USB001", "BAD"]);
    }

    #[test]
    fn test_verdict_reported_when_log_is_full() {
        let mut engine = AuthorizationEngine::new(
            TrustedRegistry::with_default_devices(),
            AuditLog::with_capacity(1),
        );
        engine.authorize(&DeviceIdentity::new("USB001", "Mouse"));

        // The log is full; the verdict must still be computed correctly.
        assert_eq!(
            engine.authorize(&DeviceIdentity::new("USB002", "Keyboard")),
            Verdict::Authorized
        );
        assert_eq!(
            engine.authorize(&DeviceIdentity::new("XYZ999", "Drive")),
            Verdict::Blocked
        );
        assert_eq!(engine.log().len(), 1);
    }
}
