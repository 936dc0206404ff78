use crate::consts::{
    MAX_DAY_OF_MONTH, MAX_DAY_OF_WEEK, MAX_HOUR, MAX_MINUTE, MAX_MONTH, MIN_DAY_OF_MONTH,
    MIN_DAY_OF_WEEK, MIN_HOUR, MIN_MINUTE, MIN_MONTH,
};
use crate::prelude::*;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// One of the five time fields of a cron expression, in expression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    /// All fields in the order they appear in an expression
    pub const ALL: [Self; 5] = [
        Self::Minute,
        Self::Hour,
        Self::DayOfMonth,
        Self::Month,
        Self::DayOfWeek,
    ];

    /// Looks up the inclusive bounds of this field
    pub const fn constraints(self) -> FieldConstraints {
        let (min, max) = match self {
            Self::Minute => (MIN_MINUTE, MAX_MINUTE),
            Self::Hour => (MIN_HOUR, MAX_HOUR),
            Self::DayOfMonth => (MIN_DAY_OF_MONTH, MAX_DAY_OF_MONTH),
            Self::Month => (MIN_MONTH, MAX_MONTH),
            Self::DayOfWeek => (MIN_DAY_OF_WEEK, MAX_DAY_OF_WEEK),
        };
        FieldConstraints {
            kind: self,
            min,
            max,
        }
    }

    /// Human readable name, as used in error messages and rendered output
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "day of month",
            Self::Month => "month",
            Self::DayOfWeek => "day of week",
        }
    }
}

/// Inclusive numeric bounds of a field. Always `min <= max`.
///
/// Only obtainable through [`FieldKind::constraints`], so every instance
/// matches the constraint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldConstraints {
    kind: FieldKind,
    min:  u8,
    max:  u8,
}

impl FieldConstraints {
    /// Field these bounds belong to
    #[inline]
    pub const fn kind(self) -> FieldKind {
        self.kind
    }

    /// Lowest allowed value (inclusive)
    #[inline]
    pub const fn min(self) -> u8 {
        self.min
    }

    /// Highest allowed value (inclusive)
    #[inline]
    pub const fn max(self) -> u8 {
        self.max
    }

    /// Display name of the field
    #[inline]
    pub const fn name(self) -> &'static str {
        self.kind.name()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<FieldKind> for FieldConstraints {
    fn from(kind: FieldKind) -> Self {
        kind.constraints()
    }
}

/// The expanded values of one field: strictly ascending, no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deref, Serialize)]
#[serde(transparent)]
pub struct FieldValues(Vec<u8>);

impl FieldValues {
    /// Collects a set that has already been checked against the field bounds
    pub(crate) fn from_set(set: BTreeSet<u8>) -> Self {
        Self(set.into_iter().collect())
    }

    /// Checks whether `value` is one of the expanded values
    pub fn contains(&self, value: u8) -> bool {
        self.0.binary_search(&value).is_ok()
    }

    /// Returns the values as a plain vector
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl From<FieldValues> for Vec<u8> {
    fn from(values: FieldValues) -> Self {
        values.0
    }
}

impl fmt::Display for FieldValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.0.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}
