//! Cross-field rules that field-level DTO validation cannot express.

use crate::error::CoreError;
use crate::types::Timestamp;

/// Incident severity grades, 1 (minor) to 5 (critical). DTOs use these in
/// their `range` attributes.
pub const MIN_SEVERITY: i16 = 1;
pub const MAX_SEVERITY: i16 = 5;

/// Operation progress is a percentage.
pub const MIN_PROGRESS: i16 = 0;
pub const MAX_PROGRESS: i16 = 100;

/// Reject blank strings for fields the caller must fill in.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// A validity window must end strictly after it starts.
pub fn require_ordered(
    start_field: &str,
    start: Timestamp,
    end_field: &str,
    end: Timestamp,
) -> Result<(), CoreError> {
    if end <= start {
        return Err(CoreError::Validation(format!(
            "{end_field} must be after {start_field}"
        )));
    }
    Ok(())
}

/// An operation registered as already completed must be fully progressed.
pub fn require_full_progress(progress: i16) -> Result<(), CoreError> {
    if progress < MAX_PROGRESS {
        return Err(CoreError::Validation(format!(
            "A completed operation must have progress {MAX_PROGRESS}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn blank_is_rejected() {
        assert!(require_non_blank("code", "   ").is_err());
        assert!(require_non_blank("code", "OP-1").is_ok());
    }

    #[test]
    fn window_must_be_ordered() {
        let now = chrono::Utc::now();
        assert!(require_ordered("issued_at", now, "expires_at", now + Duration::days(1)).is_ok());
        let err = require_ordered("issued_at", now, "expires_at", now).unwrap_err();
        assert!(err.to_string().contains("expires_at must be after issued_at"));
    }

    #[test]
    fn completed_operations_need_full_progress() {
        assert!(require_full_progress(MAX_PROGRESS).is_ok());
        let err = require_full_progress(MAX_PROGRESS - 1).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: A completed operation must have progress 100");
    }
}
