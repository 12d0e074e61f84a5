//! Wall-clock timestamps for event records.

use chrono::Local;

/// Format used for every timestamp in records and exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Get the current local time as a fixed-format string.
///
/// Second resolution, local wall-clock. Exported files are byte-comparable
/// only between runs in the same timezone; this is a documented assumption,
/// not a platform accident.
#[must_use]
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_timestamp_shape() {
        let ts = current_timestamp();
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }

    #[test]
    fn test_timestamp_parses_back() {
        let ts = current_timestamp();
        assert!(NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }
}
