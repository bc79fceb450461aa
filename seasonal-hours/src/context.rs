use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::InvalidHoliday;
use crate::localization::{Localize, NoLocation};

// --
// -- Holidays
// --

/// A set of public holidays, on which `PH` rules replace weekday rules.
///
/// ```
/// use chrono::NaiveDate;
/// use seasonal_hours::ContextHolidays;
///
/// let holidays = ContextHolidays::parse(["2020-12-25", "2021-01-01"]).unwrap();
/// assert!(holidays.contains(NaiveDate::from_ymd_opt(2020, 12, 25).unwrap()));
/// assert!(ContextHolidays::parse(["25/12/2020"]).is_err());
/// ```
#[derive(Clone, Default, Debug, Hash, PartialEq, Eq)]
pub struct ContextHolidays {
    pub(crate) public: Arc<BTreeSet<NaiveDate>>,
}

impl ContextHolidays {
    /// Create a new holidays context from a set of public holidays.
    pub fn new(public: Arc<BTreeSet<NaiveDate>>) -> Self {
        Self { public }
    }

    /// Read a list of dates formatted as `YYYY-MM-DD`.
    pub fn parse<S: AsRef<str>>(dates: impl IntoIterator<Item = S>) -> Result<Self, InvalidHoliday> {
        dates
            .into_iter()
            .map(|raw| {
                let raw = raw.as_ref();
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|_| InvalidHoliday(raw.to_string()))
            })
            .collect()
    }

    /// Get the set of public holidays attached to this context.
    pub fn get_public(&self) -> &BTreeSet<NaiveDate> {
        &self.public
    }

    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.public.contains(&date)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.public.is_empty()
    }

    /// Iterate over public holidays starting from a given date, included.
    pub(crate) fn iter_from(&self, date: NaiveDate) -> impl Iterator<Item = NaiveDate> + '_ {
        self.public.range(date..).copied()
    }
}

impl FromIterator<NaiveDate> for ContextHolidays {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self { public: Arc::new(iter.into_iter().collect()) }
    }
}

// --
// -- Context
// --

/// All the context attached to a schedule and that can alter its evaluation
/// semantics: the timezone instants are read in and the list of public
/// holidays.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Context<L = NoLocation> {
    pub holidays: ContextHolidays,
    pub locale: L,
}

impl<L> Context<L> {
    /// Attach a new holidays component to this context.
    pub fn with_holidays(self, holidays: ContextHolidays) -> Self {
        Self { holidays, ..self }
    }

    /// Attach a new locale component to this context.
    pub fn with_locale<L2: Localize>(self, locale: L2) -> Context<L2> {
        Context { holidays: self.holidays, locale }
    }
}

impl Default for Context<NoLocation> {
    fn default() -> Self {
        Self { holidays: Default::default(), locale: NoLocation }
    }
}
