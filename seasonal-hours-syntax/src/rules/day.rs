use std::convert::{TryFrom, TryInto};
use std::fmt::Display;

use chrono::prelude::Datelike;

// Reexport Weekday from chrono as part of the public type.
pub use chrono::Weekday;

// Display

pub(crate) fn wday_str(wday: Weekday) -> &'static str {
    match wday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// Read a two-letter day code, ignoring case.
pub(crate) fn wday_from_str(code: &str) -> Option<Weekday> {
    [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]
    .into_iter()
    .find(|wday| wday_str(*wday).eq_ignore_ascii_case(code))
}

// Errors

#[derive(Clone, Debug)]
pub struct InvalidMonth;

// MonthDay

/// A day of the year without its year, the `"MM-DD"` of a season window.
///
/// The ordering is the same as the lexical ordering of the zero-padded
/// string, which is how windows are compared. The day number is not checked
/// against the length of the month: `06-31` is a valid value that simply
/// sorts after every day of June.
///
/// ```
/// use seasonal_hours_syntax::rules::day::MonthDay;
///
/// let md = MonthDay::new(8, 1).unwrap();
/// assert_eq!(md.to_string(), "08-01");
/// assert!(md < MonthDay::new(10, 31).unwrap());
/// assert!(MonthDay::new(13, 1).is_none());
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    #[inline]
    pub const fn new(month: u8, day: u8) -> Option<Self> {
        if month == 0 || month > 12 || day == 0 || day > 31 {
            None
        } else {
            Some(Self { month, day })
        }
    }

    #[inline]
    pub fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub fn day(self) -> u8 {
        self.day
    }

    /// Extract the month and day of a [`chrono::Datelike`].
    #[inline]
    pub fn from_date(date: impl Datelike) -> Self {
        Self {
            month: date.month().try_into().expect("invalid month"),
            day: date.day().try_into().expect("invalid day"),
        }
    }
}

impl Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

// MonthDayRange

/// An inclusive window of days repeated every year.
///
/// When `end` precedes `start` the window wraps around the new year.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct MonthDayRange {
    pub start: MonthDay,
    pub end: MonthDay,
}

impl MonthDayRange {
    #[inline]
    pub fn new(start: MonthDay, end: MonthDay) -> Self {
        Self { start, end }
    }

    /// Whole month window, February ending on its 29th.
    #[inline]
    pub fn month(month: Month) -> Self {
        Self::months(month, month)
    }

    /// Window from the first day of `first` to the last day of `last`.
    #[inline]
    pub fn months(first: Month, last: Month) -> Self {
        Self {
            start: MonthDay { month: first.into(), day: 1 },
            end: MonthDay { month: last.into(), day: last.max_days() },
        }
    }

    /// Check if this window crosses the new year.
    #[inline]
    pub fn wraps(&self) -> bool {
        self.end < self.start
    }

    /// ```
    /// use seasonal_hours_syntax::rules::day::{MonthDay, MonthDayRange};
    ///
    /// let winter = MonthDayRange::new(MonthDay::new(10, 31).unwrap(), MonthDay::new(3, 1).unwrap());
    /// assert!(winter.contains(MonthDay::new(2, 3).unwrap()));
    /// assert!(winter.contains(MonthDay::new(12, 25).unwrap()));
    /// assert!(!winter.contains(MonthDay::new(7, 6).unwrap()));
    /// ```
    #[inline]
    pub fn contains(&self, md: MonthDay) -> bool {
        if self.wraps() {
            md >= self.start || md <= self.end
        } else {
            self.start <= md && md <= self.end
        }
    }
}

// YearRange

/// An inclusive range of years, `end` is `None` for a range with no upper
/// bound.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct YearRange {
    pub start: u16,
    pub end: Option<u16>,
}

impl YearRange {
    #[inline]
    pub fn single(year: u16) -> Self {
        Self { start: year, end: Some(year) }
    }

    #[inline]
    pub fn contains(&self, year: i32) -> bool {
        year >= i32::from(self.start) && self.end.map_or(true, |end| year <= i32::from(end))
    }
}

impl Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.start)?;

        match self.end {
            None => write!(f, "+"),
            Some(end) if end != self.start => write!(f, "-{end:04}"),
            Some(_) => Ok(()),
        }
    }
}

// Month

#[derive(Copy, Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Read a three-letter month abbreviation, ignoring case.
    ///
    /// ```
    /// use seasonal_hours_syntax::rules::day::Month;
    ///
    /// assert_eq!(Month::from_abbrev("aug"), Some(Month::August));
    /// assert_eq!(Month::from_abbrev("Mon"), None);
    /// ```
    #[inline]
    pub fn from_abbrev(abbrev: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|month| month.as_str()[..3].eq_ignore_ascii_case(abbrev))
    }

    /// Highest day number this month can reach over any year.
    #[inline]
    pub fn max_days(self) -> u8 {
        match self {
            Self::February => 29,
            Self::April | Self::June | Self::September | Self::November => 30,
            _ => 31,
        }
    }

    /// Stringify the month (`"January"`, `"February"`, ...).
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.as_str()[..3])
    }
}

macro_rules! impl_convert_for_month {
    ( $from_type: ty ) => {
        impl TryFrom<$from_type> for Month {
            type Error = InvalidMonth;

            #[inline]
            fn try_from(value: $from_type) -> Result<Self, Self::Error> {
                let value: usize = value.try_into().map_err(|_| InvalidMonth)?;
                let index = value.checked_sub(1).ok_or(InvalidMonth)?;
                Self::ALL.get(index).copied().ok_or(InvalidMonth)
            }
        }

        impl From<Month> for $from_type {
            fn from(val: Month) -> Self {
                val as _
            }
        }
    };
    ( $from_type: ty, $( $tail: tt )+ ) => {
        impl_convert_for_month!($from_type);
        impl_convert_for_month!($($tail)+);
    };
}

impl_convert_for_month!(u8, u32, i32);
