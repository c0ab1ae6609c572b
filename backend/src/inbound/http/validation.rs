//! Shared validation helpers for inbound HTTP adapters.
//!
//! The gate runs before any service call. Field failures for one request are
//! collected and folded into a single `Invalid input: ...` message so the
//! client sees every problem at once.

use crate::domain::{EmailAddress, Error, RecordId};

/// Collector folding per-field failures into one validation error.
#[derive(Debug, Default)]
pub(crate) struct FieldErrors {
    messages: Vec<&'static str>,
}

impl FieldErrors {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a failed field constraint.
    pub(crate) fn push(&mut self, message: &'static str) {
        self.messages.push(message);
    }

    /// Produce the combined error, or `Ok` when no constraint failed.
    pub(crate) fn into_result(self) -> Result<(), Error> {
        if self.messages.is_empty() {
            return Ok(());
        }
        Err(invalid_input(&self.messages.join(", ")))
    }
}

/// Build the uniform validation failure carried by a 400 envelope.
pub(crate) fn invalid_input(detail: &str) -> Error {
    Error::invalid_request(format!("Invalid input: {detail}"))
}

/// Parse and range-check a path identifier.
///
/// Non-numeric input and non-positive values are rejected here, so they never
/// reach the storage layer.
pub(crate) fn parse_record_id(raw: &str) -> Result<RecordId, Error> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid_input("ID must be a numeric value"))?;
    u64::try_from(value)
        .ok()
        .and_then(|value| RecordId::new(value).ok())
        .ok_or_else(|| invalid_input("ID must be a positive number"))
}

/// Check a required non-empty string field.
pub(crate) fn require_non_empty(
    value: Option<&str>,
    message: &'static str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text.to_owned()),
        _ => {
            errors.push(message);
            None
        }
    }
}

/// Check a required well-formed email field.
pub(crate) fn require_email(
    value: Option<&str>,
    message: &'static str,
    errors: &mut FieldErrors,
) -> Option<EmailAddress> {
    match value.map(EmailAddress::new) {
        Some(Ok(email)) => Some(email),
        _ => {
            errors.push(message);
            None
        }
    }
}

/// Check a required non-negative integer field.
pub(crate) fn require_non_negative(
    value: Option<i64>,
    message: &'static str,
    errors: &mut FieldErrors,
) -> Option<u32> {
    match value.and_then(|age| u32::try_from(age).ok()) {
        Some(age) => Some(age),
        None => {
            errors.push(message);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1)]
    #[case("42", 42)]
    #[case(" 7 ", 7)]
    fn parse_record_id_accepts_positive_integers(#[case] raw: &str, #[case] expected: u64) {
        let id = parse_record_id(raw).expect("valid id");
        assert_eq!(id.get(), expected);
    }

    #[rstest]
    #[case("abc", "Invalid input: ID must be a numeric value")]
    #[case("1.5", "Invalid input: ID must be a numeric value")]
    #[case("", "Invalid input: ID must be a numeric value")]
    #[case("0", "Invalid input: ID must be a positive number")]
    #[case("-3", "Invalid input: ID must be a positive number")]
    fn parse_record_id_rejects_bad_input(#[case] raw: &str, #[case] expected: &str) {
        let error = parse_record_id(raw).expect_err("invalid id");
        assert_eq!(error.message(), expected);
    }

    #[rstest]
    fn field_errors_concatenate_in_push_order() {
        let mut errors = FieldErrors::new();
        errors.push("Name is required");
        errors.push("Valid email is required");
        let error = errors.into_result().expect_err("two failures");
        assert_eq!(
            error.message(),
            "Invalid input: Name is required, Valid email is required"
        );
    }

    #[rstest]
    fn empty_collector_is_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[rstest]
    #[case(None)]
    #[case(Some(-1))]
    #[case(Some(i64::from(u32::MAX) + 1))]
    fn require_non_negative_rejects_out_of_range(#[case] value: Option<i64>) {
        let mut errors = FieldErrors::new();
        let age = require_non_negative(value, "Age must be a non-negative integer", &mut errors);
        assert!(age.is_none());
        assert!(errors.into_result().is_err());
    }

    #[rstest]
    fn require_non_negative_accepts_zero() {
        let mut errors = FieldErrors::new();
        let age = require_non_negative(Some(0), "Age must be a non-negative integer", &mut errors);
        assert_eq!(age, Some(0));
        assert!(errors.into_result().is_ok());
    }
}
