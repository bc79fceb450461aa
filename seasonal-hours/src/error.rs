use std::fmt::Display;

pub use seasonal_hours_syntax::error::Error as ParserError;

/// A timezone name that is not part of the IANA database.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnknownTimezone(pub String);

impl Display for UnknownTimezone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown timezone `{}`", self.0)
    }
}

impl std::error::Error for UnknownTimezone {}

/// A public holiday that is not formatted as `YYYY-MM-DD`.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct InvalidHoliday(pub String);

impl Display for InvalidHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid holiday `{}`: expected a date formatted as YYYY-MM-DD", self.0)
    }
}

impl std::error::Error for InvalidHoliday {}
