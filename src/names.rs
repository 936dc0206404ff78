use crate::consts::{MONTH_NAMES, WEEKDAY_NAMES};
use crate::types::FieldKind;

/// Resolves a symbolic weekday or month name to its numeric value.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Only the
/// day-of-week and month fields have names; every other field yields `None`.
pub fn resolve_name(token: &str, field: FieldKind) -> Option<u8> {
    let table: &[(&str, u8)] = match field {
        FieldKind::DayOfWeek => &WEEKDAY_NAMES,
        FieldKind::Month => &MONTH_NAMES,
        FieldKind::Minute | FieldKind::Hour | FieldKind::DayOfMonth => return None,
    };
    let token = token.trim();
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map(|&(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_names() {
        assert_eq!(resolve_name("SUN", FieldKind::DayOfWeek), Some(0));
        assert_eq!(resolve_name("mon", FieldKind::DayOfWeek), Some(1));
        assert_eq!(resolve_name("Saturday", FieldKind::DayOfWeek), Some(6));
        assert_eq!(resolve_name(" wed ", FieldKind::DayOfWeek), Some(3));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(resolve_name("jan", FieldKind::Month), Some(1));
        assert_eq!(resolve_name("May", FieldKind::Month), Some(5));
        assert_eq!(resolve_name("DECEMBER", FieldKind::Month), Some(12));
        assert_eq!(resolve_name("sept", FieldKind::Month), None);
    }

    #[test]
    fn test_names_scoped_to_field() {
        assert_eq!(resolve_name("jan", FieldKind::DayOfWeek), None);
        assert_eq!(resolve_name("mon", FieldKind::Month), None);
        assert_eq!(resolve_name("mon", FieldKind::Minute), None);
        assert_eq!(resolve_name("jan", FieldKind::DayOfMonth), None);
    }

    #[test]
    fn test_name_tables_have_no_duplicates() {
        for table in [&WEEKDAY_NAMES[..], &MONTH_NAMES[..]] {
            for (i, (name, _)) in table.iter().enumerate() {
                assert!(
                    table[i + 1..].iter().all(|(other, _)| other != name),
                    "{name} listed twice"
                );
            }
        }
        assert_eq!(resolve_name("may", FieldKind::Month), Some(5));
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(resolve_name("", FieldKind::Month), None);
        assert_eq!(resolve_name("13", FieldKind::Month), None);
        assert_eq!(resolve_name("funday", FieldKind::DayOfWeek), None);
    }
}
