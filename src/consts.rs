/// Lowest valid minute
pub const MIN_MINUTE: u8 = 0;
/// Highest valid minute
pub const MAX_MINUTE: u8 = 59;

/// Lowest valid hour
pub const MIN_HOUR: u8 = 0;
/// Highest valid hour
pub const MAX_HOUR: u8 = 23;

/// First day of month
pub const MIN_DAY_OF_MONTH: u8 = 1;
/// Last possible day of any month
pub const MAX_DAY_OF_MONTH: u8 = 31;

/// Month number for January
pub const MIN_MONTH: u8 = 1;
/// Month number for December
pub const MAX_MONTH: u8 = 12;

/// Sunday
pub const MIN_DAY_OF_WEEK: u8 = 0;
/// Saturday
pub const MAX_DAY_OF_WEEK: u8 = 6;

/// Number of time fields at the start of an expression
pub const FIELD_COUNT: usize = 5;
/// Time fields plus at least one command token
pub const MIN_PARTS: usize = FIELD_COUNT + 1;

/// Separates the segments of a list (`1,15,30`)
pub const LIST_SEPARATOR: char = ',';
/// Separates the endpoints of a range (`1-5`)
pub const RANGE_SEPARATOR: char = '-';
/// Introduces a step (`*/15`, `1-30/5`)
pub const STEP_SEPARATOR: char = '/';
/// Matches every value of a field
pub const WILDCARD: &str = "*";

/// Width of the field-name column when rendering an expression
pub const FIELD_NAME_WIDTH: usize = 14;

/// Weekday names (upper case) and their numeric value, Sunday = 0
pub const WEEKDAY_NAMES: [(&str, u8); 14] = [
    ("SUN", 0),
    ("MON", 1),
    ("TUE", 2),
    ("WED", 3),
    ("THU", 4),
    ("FRI", 5),
    ("SAT", 6),
    ("SUNDAY", 0),
    ("MONDAY", 1),
    ("TUESDAY", 2),
    ("WEDNESDAY", 3),
    ("THURSDAY", 4),
    ("FRIDAY", 5),
    ("SATURDAY", 6),
];

/// Month names (upper case) and their numeric value, January = 1.
/// `MAY` is both the abbreviation and the full name, so it appears once.
pub const MONTH_NAMES: [(&str, u8); 23] = [
    ("JAN", 1),
    ("FEB", 2),
    ("MAR", 3),
    ("APR", 4),
    ("MAY", 5),
    ("JUN", 6),
    ("JUL", 7),
    ("AUG", 8),
    ("SEP", 9),
    ("OCT", 10),
    ("NOV", 11),
    ("DEC", 12),
    ("JANUARY", 1),
    ("FEBRUARY", 2),
    ("MARCH", 3),
    ("APRIL", 4),
    ("JUNE", 6),
    ("JULY", 7),
    ("AUGUST", 8),
    ("SEPTEMBER", 9),
    ("OCTOBER", 10),
    ("NOVEMBER", 11),
    ("DECEMBER", 12),
];
