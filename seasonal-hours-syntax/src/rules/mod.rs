pub mod day;
pub mod time;

use std::str::FromStr;
use std::sync::Arc;

use crate::error::Error;

// OpenSpan

/// Opening hours of a single weekday, possibly restricted to a season and to
/// a range of years.
///
/// A span with neither a season nor a year range is the default rule for its
/// weekday.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct OpenSpan {
    pub day_of_week: day::Weekday,
    pub time: time::TimeSpan,
    pub season: Option<day::MonthDayRange>,
    pub years: Option<day::YearRange>,
}

impl OpenSpan {
    /// Check if this span applies to its weekday all year long.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.season.is_none() && self.years.is_none()
    }
}

// PublicHoliday

/// Rule replacing weekday rules on public holidays.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum PublicHoliday {
    Open(time::TimeSpan),
    Closed,
}

impl PublicHoliday {
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

// Span

/// One atomic rule of a [`Schedule`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Span {
    Open(OpenSpan),
    /// A window of days closed every year, whatever the weekday rules say.
    Closed(day::MonthDayRange),
    PublicHoliday(PublicHoliday),
}

// Schedule

/// An immutable list of rules, as produced by [`crate::parse`].
///
/// The inner list is shared, so this is cheap to clone and can be read from
/// several threads.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Schedule {
    spans: Arc<[Span]>,
}

impl Schedule {
    pub fn new(spans: impl IntoIterator<Item = Span>) -> Self {
        Self { spans: spans.into_iter().collect() }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Span] {
        &self.spans
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.spans.iter()
    }

    /// Iterate over the weekday rules, in order.
    pub fn open_spans(&self) -> impl Iterator<Item = &OpenSpan> + '_ {
        self.iter().filter_map(|span| match span {
            Span::Open(open) => Some(open),
            _ => None,
        })
    }

    /// Iterate over the windows of days that are always closed.
    pub fn closed_spans(&self) -> impl Iterator<Item = &day::MonthDayRange> + '_ {
        self.iter().filter_map(|span| match span {
            Span::Closed(window) => Some(window),
            _ => None,
        })
    }

    /// Iterate over public holiday rules, only the first one is ever used for
    /// evaluation.
    pub fn public_holidays(&self) -> impl Iterator<Item = &PublicHoliday> + '_ {
        self.iter().filter_map(|span| match span {
            Span::PublicHoliday(ph) => Some(ph),
            _ => None,
        })
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self { spans: Arc::from(Vec::new()) }
    }
}

impl FromStr for Schedule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
