use crate::consts::{LIST_SEPARATOR, RANGE_SEPARATOR, STEP_SEPARATOR, WILDCARD};
use crate::names::resolve_name;
use crate::types::{FieldConstraints, FieldValues};
use crate::validate::{validate_in_range, validate_not_empty, validate_step};
use crate::ParseError;
use std::collections::BTreeSet;
use std::num::IntErrorKind;

/// An arithmetic sequence `start, start + step, ...` capped at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: u8,
    end:   u8,
    step:  usize,
}

impl Span {
    const fn single(value: u8) -> Self {
        Self {
            start: value,
            end:   value,
            step:  1,
        }
    }

    fn values(self) -> impl Iterator<Item = u8> {
        (self.start..=self.end).step_by(self.step)
    }
}

/// Expands a single field expression into its sorted, deduplicated values.
///
/// Accepts `*`, `*/step`, `a-b`, `a-b/step`, a single value, or a comma
/// separated list of those. Values may be numbers or, for the month and
/// day-of-week fields, names such as `jan` or `Mon`.
///
/// # Errors
/// Returns the first [`ParseError`] hit; no partial result is produced.
pub fn parse_field(text: &str, constraints: FieldConstraints) -> Result<FieldValues, ParseError> {
    tracing::trace!(field = %constraints.kind(), expression = text, "parsing field");
    let trimmed = validate_not_empty(text, constraints.kind())?;

    let mut values = BTreeSet::new();
    if trimmed.contains(LIST_SEPARATOR) {
        for segment in trimmed.split(LIST_SEPARATOR) {
            let segment = validate_not_empty(segment, constraints.kind())?;
            values.extend(parse_term(segment, constraints)?.values());
        }
    } else {
        values.extend(parse_term(trimmed, constraints)?.values());
    }
    Ok(FieldValues::from_set(values))
}

fn parse_term(term: &str, constraints: FieldConstraints) -> Result<Span, ParseError> {
    if term.contains(WILDCARD) {
        parse_wildcard(term, constraints)
    } else if term.contains(RANGE_SEPARATOR) {
        parse_range(term, constraints)
    } else {
        resolve_value(term, constraints).map(Span::single)
    }
}

fn parse_wildcard(term: &str, constraints: FieldConstraints) -> Result<Span, ParseError> {
    let (base, step) = split_step(term);
    if base.trim() != WILDCARD {
        return Err(invalid_syntax(term, constraints));
    }
    let step = parse_step(step, term, constraints)?;
    Ok(Span {
        start: constraints.min(),
        end: constraints.max(),
        step,
    })
}

fn parse_range(term: &str, constraints: FieldConstraints) -> Result<Span, ParseError> {
    let (range, step) = split_step(term);
    let (start, end) = range
        .split_once(RANGE_SEPARATOR)
        .ok_or_else(|| invalid_syntax(term, constraints))?;
    if start.trim().is_empty() || end.trim().is_empty() || end.contains(RANGE_SEPARATOR) {
        return Err(invalid_syntax(term, constraints));
    }

    // Both endpoints must be in bounds before their order is checked
    let start = resolve_value(start, constraints)?;
    let end = resolve_value(end, constraints)?;
    if start > end {
        return Err(ParseError::InvalidRange {
            field: constraints.kind(),
            start,
            end,
        });
    }

    let step = parse_step(step, term, constraints)?;
    Ok(Span { start, end, step })
}

/// Numeric value first, then a field-specific name.
fn resolve_value(token: &str, constraints: FieldConstraints) -> Result<u8, ParseError> {
    let token = token.trim();
    let value = match token.parse::<i64>() {
        Ok(value) => value,
        // Too long for i64 is still a number, just out of bounds
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => i64::MAX,
        Err(err) if *err.kind() == IntErrorKind::NegOverflow => i64::MIN,
        Err(_) => resolve_name(token, constraints.kind())
            .map(i64::from)
            .ok_or_else(|| ParseError::InvalidValue {
                field: constraints.kind(),
                token: token.to_owned(),
            })?,
    };
    validate_in_range(value, constraints)
}

fn split_step(term: &str) -> (&str, Option<&str>) {
    match term.split_once(STEP_SEPARATOR) {
        Some((base, step)) => (base, Some(step)),
        None => (term, None),
    }
}

fn parse_step(step: Option<&str>, term: &str, constraints: FieldConstraints) -> Result<usize, ParseError> {
    let Some(step) = step else {
        return Ok(1);
    };
    let step = match step.trim().parse::<i64>() {
        Ok(step) => step,
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => return Ok(usize::MAX),
        Err(err) if *err.kind() == IntErrorKind::NegOverflow => i64::MIN,
        Err(_) => return Err(invalid_syntax(term, constraints)),
    };
    validate_step(step, constraints.kind())
}

fn invalid_syntax(term: &str, constraints: FieldConstraints) -> ParseError {
    ParseError::InvalidSyntax {
        field: constraints.kind(),
        expression: term.to_owned(),
    }
}
