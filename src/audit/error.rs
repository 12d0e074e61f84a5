//! Audit export error types.

use std::path::PathBuf;

/// Errors that can occur while exporting the audit log.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// The destination file could not be created or opened for writing.
    #[error("Cannot open export destination {path}: {source}")]
    CannotOpenDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to an opened destination failed part-way.
    #[error("Failed to write export to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cannot_open_display() {
        let err = ExportError::CannotOpenDestination {
            path: PathBuf::from("/nonexistent/usb_access_log.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("Cannot open export destination"));
        assert!(err.to_string().contains("/nonexistent/usb_access_log.txt"));
    }

    #[test]
    fn test_write_display() {
        let err = ExportError::Write {
            path: PathBuf::from("usb_access_log.txt"),
            source: std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full"),
        };
        assert!(err.to_string().contains("Failed to write export"));
    }
}
