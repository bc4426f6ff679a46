//! Human-readable record codes generated when the caller does not supply one.

use crate::types::Timestamp;

/// Prefix for generated report codes.
pub const REPORT_PREFIX: &str = "REP";

/// Build a code of the form `PREFIX-YYYYMMDD-XXXXXXXX`.
///
/// The suffix is taken from a random UUID so concurrent callers do not
/// collide on the unique constraint.
pub fn generate_code(prefix: &str, at: Timestamp) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "{prefix}-{}-{}",
        at.format("%Y%m%d"),
        suffix[..8].to_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn code_has_prefix_date_and_suffix() {
        let at = chrono::Utc.with_ymd_and_hms(2026, 3, 9, 12, 0, 0).unwrap();
        let code = generate_code(REPORT_PREFIX, at);
        let parts: Vec<&str> = code.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "REP");
        assert_eq!(parts[1], "20260309");
        assert_eq!(parts[2].len(), 8);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn codes_are_distinct() {
        let now = chrono::Utc::now();
        assert_ne!(generate_code("X", now), generate_code("X", now));
    }
}
