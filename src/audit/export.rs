//! Audit log export to a fixed-width text file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::error::ExportError;
use super::log::AuditLog;
use crate::clock;

/// Default export destination, relative to the working directory.
pub const DEFAULT_EXPORT_PATH: &str = "usb_access_log.txt";

/// Serializes the audit log to a stable tabular text format.
///
/// The destination is overwritten on every export. The exporter holds no
/// state beyond its destination path and may be reused.
#[derive(Debug, Clone)]
pub struct LogExporter {
    destination: PathBuf,
}

impl LogExporter {
    /// Create an exporter writing to the given destination.
    #[must_use]
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    /// Get the export destination path.
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Export the log, returning the number of records written.
    ///
    /// Truncates the destination if it already exists. The in-memory log is
    /// untouched by a failed export and can be exported again later.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::CannotOpenDestination`] when the destination
    /// cannot be created, or [`ExportError::Write`] when writing fails.
    pub fn export(&self, log: &AuditLog) -> Result<usize, ExportError> {
        let file =
            File::create(&self.destination).map_err(|source| ExportError::CannotOpenDestination {
                path: self.destination.clone(),
                source,
            })?;
        let mut writer = BufWriter::new(file);

        let count = write_log(&mut writer, log, &clock::current_timestamp()).map_err(|source| {
            ExportError::Write {
                path: self.destination.clone(),
                source,
            }
        })?;

        writer.flush().map_err(|source| ExportError::Write {
            path: self.destination.clone(),
            source,
        })?;

        tracing::info!(
            path = %self.destination.display(),
            records = count,
            "Audit log exported"
        );
        Ok(count)
    }
}

/// Write the full export document: header block, column headers, rule, rows.
fn write_log<W: Write>(
    writer: &mut W,
    log: &AuditLog,
    generated_at: &str,
) -> std::io::Result<usize> {
    writeln!(writer, "=== USB Device Access Log ===")?;
    writeln!(writer, "Generated: {generated_at}")?;
    writeln!(writer)?;
    writeln!(
        writer,
        "{:<12} {:<12} {:<20} {:<12} {}",
        "Device ID", "Type", "Timestamp", "Status", "Action"
    )?;
    writeln!(writer, "{}", "=".repeat(80))?;

    let mut count = 0;
    for record in log.iter() {
        writeln!(
            writer,
            "{:<12} {:<12} {:<20} {:<12} {}",
            record.device_id,
            record.device_type,
            record.timestamp,
            record.status.as_str(),
            record.action
        )?;
        count += 1;
    }
    Ok(count)
}
