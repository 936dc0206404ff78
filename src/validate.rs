//! Checks applied by the parsers at fixed points of the grammar.

use crate::consts::MIN_PARTS;
use crate::types::{FieldConstraints, FieldKind};
use crate::ParseError;

/// Ensures the expression holds the five fields plus a command.
pub(crate) fn validate_format(parts: &[&str]) -> Result<(), ParseError> {
    if parts.len() < MIN_PARTS {
        return Err(ParseError::InvalidPartCount { found: parts.len() });
    }
    Ok(())
}

/// Returns the trimmed text, or an error if nothing is left.
pub(crate) fn validate_not_empty(text: &str, field: FieldKind) -> Result<&str, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyField { field });
    }
    Ok(trimmed)
}

/// Checks `value` against the field bounds and narrows it.
pub(crate) fn validate_in_range(value: i64, constraints: FieldConstraints) -> Result<u8, ParseError> {
    let out_of_range = || ParseError::OutOfRange {
        field: constraints.kind(),
        value,
        min: constraints.min(),
        max: constraints.max(),
    };
    let narrowed = u8::try_from(value).map_err(|_| out_of_range())?;
    if narrowed < constraints.min() || narrowed > constraints.max() {
        return Err(out_of_range());
    }
    Ok(narrowed)
}

/// Rejects zero and negative steps.
pub(crate) fn validate_step(step: i64, field: FieldKind) -> Result<usize, ParseError> {
    match usize::try_from(step) {
        Ok(step) if step > 0 => Ok(step),
        _ => Err(ParseError::InvalidStep { field, step }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_format() {
        assert!(validate_format(&["*", "*", "*", "*", "*", "cmd"]).is_ok());
        assert!(validate_format(&["*", "*", "*", "*", "*", "cmd", "--flag"]).is_ok());
        assert_eq!(
            validate_format(&["*", "*", "*", "*", "*"]),
            Err(ParseError::InvalidPartCount { found: 5 })
        );
        assert_eq!(
            validate_format(&[]),
            Err(ParseError::InvalidPartCount { found: 0 })
        );
    }

    #[test]
    fn test_validate_not_empty() {
        assert_eq!(validate_not_empty(" 5 ", FieldKind::Hour), Ok("5"));
        assert_eq!(
            validate_not_empty("   ", FieldKind::Hour),
            Err(ParseError::EmptyField {
                field: FieldKind::Hour
            })
        );
    }

    #[test]
    fn test_validate_in_range() {
        let minute = FieldKind::Minute.constraints();
        assert_eq!(validate_in_range(0, minute), Ok(0));
        assert_eq!(validate_in_range(59, minute), Ok(59));

        let err = validate_in_range(60, minute).unwrap_err();
        assert_eq!(err.to_string(), "Value 60 is out of range for minute: expected 0-59");

        let day = FieldKind::DayOfMonth.constraints();
        assert!(matches!(
            validate_in_range(0, day),
            Err(ParseError::OutOfRange { value: 0, min: 1, max: 31, .. })
        ));
        assert!(matches!(
            validate_in_range(-1, day),
            Err(ParseError::OutOfRange { value: -1, .. })
        ));
        assert!(matches!(
            validate_in_range(1000, day),
            Err(ParseError::OutOfRange { value: 1000, .. })
        ));
    }

    #[test]
    fn test_validate_step() {
        assert_eq!(validate_step(1, FieldKind::Minute), Ok(1));
        assert_eq!(validate_step(15, FieldKind::Minute), Ok(15));
        assert_eq!(
            validate_step(0, FieldKind::Minute),
            Err(ParseError::InvalidStep {
                field: FieldKind::Minute,
                step: 0
            })
        );
        let err = validate_step(-2, FieldKind::Hour).unwrap_err();
        assert_eq!(err.to_string(), "Step value for hour must be greater than 0, got -2");
    }
}
