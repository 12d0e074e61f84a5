//! Audit trail for authorization decisions.

mod error;
mod export;
mod log;
mod types;

pub use error::ExportError;
pub use export::{LogExporter, DEFAULT_EXPORT_PATH};
pub use log::{AuditLog, MAX_LOG_ENTRIES};
pub use types::{AccessRecord, AccessRecordBuilder, AccessStatus};
