mod consts;
mod field;
mod names;
mod prelude;
mod types;
mod validate;

pub use consts::*;
pub use field::parse_field;
pub use names::resolve_name;
pub use types::{FieldConstraints, FieldKind, FieldValues};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use validate::validate_format;

/// A cron expression with every time field expanded to its concrete values.
///
/// Each field holds strictly ascending values within that field's bounds.
/// The command is everything after the fifth field, rejoined with single
/// spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CronExpression {
    minute:       FieldValues,
    hour:         FieldValues,
    day_of_month: FieldValues,
    month:        FieldValues,
    day_of_week:  FieldValues,
    command:      String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Cron expression cannot be empty")]
    EmptyExpression,

    #[error(
        "Invalid cron format: expected at least {} parts (minute hour day-of-month month day-of-week command), found {found}",
        MIN_PARTS
    )]
    InvalidPartCount { found: usize },

    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: FieldKind },

    #[error("Invalid {field} expression: {expression}")]
    InvalidSyntax { field: FieldKind, expression: String },

    #[error("Invalid value for {field}: {token}")]
    InvalidValue { field: FieldKind, token: String },

    #[error("Value {value} is out of range for {field}: expected {min}-{max}")]
    OutOfRange {
        field: FieldKind,
        value: i64,
        min:   u8,
        max:   u8,
    },

    #[error("Invalid range for {field}: start ({start}) is greater than end ({end})")]
    InvalidRange { field: FieldKind, start: u8, end: u8 },

    #[error("Step value for {field} must be greater than 0, got {step}")]
    InvalidStep { field: FieldKind, step: i64 },
}

/// Parses a full cron expression: five time fields followed by a command.
///
/// # Errors
/// Fails on the first invalid part; see [`ParseError`].
pub fn parse(text: &str) -> Result<CronExpression, ParseError> {
    text.parse()
}

impl CronExpression {
    /// Expanded minutes (0-59)
    pub const fn minute(&self) -> &FieldValues {
        &self.minute
    }

    /// Expanded hours (0-23)
    pub const fn hour(&self) -> &FieldValues {
        &self.hour
    }

    /// Expanded days of the month (1-31)
    pub const fn day_of_month(&self) -> &FieldValues {
        &self.day_of_month
    }

    /// Expanded months (1-12)
    pub const fn month(&self) -> &FieldValues {
        &self.month
    }

    /// Expanded days of the week (0-6, Sunday is 0)
    pub const fn day_of_week(&self) -> &FieldValues {
        &self.day_of_week
    }

    /// Returns the values of the given field
    pub const fn field(&self, kind: FieldKind) -> &FieldValues {
        match kind {
            FieldKind::Minute => &self.minute,
            FieldKind::Hour => &self.hour,
            FieldKind::DayOfMonth => &self.day_of_month,
            FieldKind::Month => &self.month,
            FieldKind::DayOfWeek => &self.day_of_week,
        }
    }

    /// The command to run
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl FromStr for CronExpression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        validate_format(&parts)?;
        let (fields, command) = parts.split_at(FIELD_COUNT);

        let parse_part = |kind: FieldKind| {
            parse_field(fields[kind as usize], kind.constraints()).inspect_err(|err| {
                tracing::debug!(field = %kind, error = %err, "rejected cron field");
            })
        };

        let expression = Self {
            minute:       parse_part(FieldKind::Minute)?,
            hour:         parse_part(FieldKind::Hour)?,
            day_of_month: parse_part(FieldKind::DayOfMonth)?,
            month:        parse_part(FieldKind::Month)?,
            day_of_week:  parse_part(FieldKind::DayOfWeek)?,
            command:      command.join(" "),
        };
        tracing::debug!(command = %expression.command, "parsed cron expression");
        Ok(expression)
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in FieldKind::ALL {
            writeln!(f, "{:<FIELD_NAME_WIDTH$}{}", kind.name(), self.field(kind))?;
        }
        write!(f, "{:<FIELD_NAME_WIDTH$}{}", "command", self.command)
    }
}
