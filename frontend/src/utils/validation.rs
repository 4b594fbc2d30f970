use thiserror::Error;

/// Client-side form rejection. The request is never sent when one of these
/// comes back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid date.")]
    InvalidDate,
    #[error("Cannot mark attendance for future dates.")]
    FutureDate,
}

/// Trimmed value, or `None` when only whitespace remains.
pub fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_alert_copy() {
        assert_eq!(
            FormError::MissingFields.to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            FormError::FutureDate.to_string(),
            "Cannot mark attendance for future dates."
        );
    }

    #[test]
    fn required_trims_and_rejects_blank() {
        assert_eq!(required("  E001 "), Some("E001".to_string()));
        assert_eq!(required("   "), None);
    }
}
