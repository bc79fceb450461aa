use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use seasonal_hours_syntax::extended_time::ExtendedTime;
use seasonal_hours_syntax::rules::day::MonthDay;
use seasonal_hours_syntax::rules::{PublicHoliday, Schedule};
use seasonal_hours_syntax::Error as ParserError;

use crate::filter::date_filter::{spans_at, DateFilter};
use crate::localization::{Localize, NoLocation};
use crate::Context;

/// Number of public holiday rules that are never used for evaluation.
#[cfg_attr(not(feature = "log"), allow(dead_code))]
pub(crate) fn ignored_public_holidays(schedule: &Schedule) -> usize {
    schedule.public_holidays().count().saturating_sub(1)
}

// OpeningHours

/// A parsed schedule and its evaluation context.
///
/// Note that the schedule and the holidays are immutable and wrapped by an
/// `Arc` so this is safe and fast to clone.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct OpeningHours<L: Localize = NoLocation> {
    /// Rules describing opening hours
    schedule: Schedule,
    /// Evaluation context
    pub(crate) ctx: Context<L>,
}

impl OpeningHours<NoLocation> {
    /// Parse a raw opening hours expression.
    ///
    /// ```
    /// use seasonal_hours::OpeningHours;
    ///
    /// assert!(OpeningHours::parse("Mo-Fr 10:00-18:00; PH off").is_ok());
    /// assert!(OpeningHours::parse("not a valid expression").is_err());
    /// ```
    pub fn parse(raw_oh: &str) -> Result<Self, ParserError> {
        Ok(Self::new(seasonal_hours_syntax::parse(raw_oh)?))
    }

    /// Evaluate an already built schedule, instants are read as local times
    /// and no day is a public holiday.
    pub fn new(schedule: Schedule) -> Self {
        #[cfg(feature = "log")]
        if ignored_public_holidays(&schedule) > 0 {
            log::warn!(
                "Schedule `{schedule}` has several public holiday rules, only the first one is used",
            );
        }

        Self { schedule, ctx: Context::default() }
    }
}

impl<L: Localize> OpeningHours<L> {
    // --
    // -- Builder Methods
    // --

    /// Set a new evaluation context for this schedule.
    ///
    /// ```
    /// use seasonal_hours::{Context, ContextHolidays, OpeningHours};
    ///
    /// let holidays = ContextHolidays::parse(["2020-12-25"]).unwrap();
    ///
    /// let oh = OpeningHours::parse("Mo-Fr 10:00-18:00; PH off")
    ///     .unwrap()
    ///     .with_context(Context::default().with_holidays(holidays));
    /// ```
    pub fn with_context<L2: Localize>(self, ctx: Context<L2>) -> OpeningHours<L2> {
        OpeningHours { schedule: self.schedule, ctx }
    }

    /// Get the rules of this schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Get the evaluation context.
    pub fn context(&self) -> &Context<L> {
        &self.ctx
    }

    // --
    // -- Local time evaluation
    // --

    fn is_closed_date(&self, date: NaiveDate) -> bool {
        let md = MonthDay::from_date(date);
        self.schedule.closed_spans().any(|window| window.contains(md))
    }

    /// Rule replacing weekday rules at given date, if any.
    fn public_holiday_at(&self, date: NaiveDate) -> Option<&PublicHoliday> {
        if !self.ctx.holidays.contains(date) {
            return None;
        }

        self.schedule.public_holidays().next()
    }

    pub(crate) fn is_open_naive(&self, dt: NaiveDateTime) -> bool {
        let date = dt.date();
        let time = ExtendedTime::from(dt.time());

        if self.is_closed_date(date) {
            return false;
        }

        if let Some(ph) = self.public_holiday_at(date) {
            return match ph {
                PublicHoliday::Open(span) => span.contains(time),
                PublicHoliday::Closed => false,
            };
        }

        spans_at(&self.schedule, date, &self.ctx).any(|span| span.time.contains(time))
    }

    // --
    // -- High level implementations
    // --

    /// Check if this is open at a given time.
    ///
    /// ```
    /// use chrono::NaiveDateTime;
    /// use seasonal_hours::OpeningHours;
    ///
    /// let oh = OpeningHours::parse("Mo-Fr 10:00-18:00").unwrap();
    /// let date_1 = NaiveDateTime::parse_from_str("2024-11-18 15:00", "%Y-%m-%d %H:%M").unwrap();
    /// let date_2 = NaiveDateTime::parse_from_str("2024-11-18 19:00", "%Y-%m-%d %H:%M").unwrap();
    /// assert!(oh.is_open_on(date_1));
    /// assert!(!oh.is_open_on(date_2));
    /// ```
    pub fn is_open_on(&self, current_time: L::DateTime) -> bool {
        self.is_open_naive(self.ctx.locale.naive(current_time))
    }

    /// Check if some rule makes the place open during given day, whatever the
    /// time.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use seasonal_hours::OpeningHours;
    ///
    /// let oh = OpeningHours::parse("Su 10:00-18:00; Oct 01 - Oct 03 off").unwrap();
    /// assert!(oh.is_open_on_date(NaiveDate::from_ymd_opt(2020, 12, 6).unwrap()));
    /// assert!(!oh.is_open_on_date(NaiveDate::from_ymd_opt(2020, 12, 7).unwrap()));
    /// assert!(!oh.is_open_on_date(NaiveDate::from_ymd_opt(2020, 10, 2).unwrap()));
    /// ```
    pub fn is_open_on_date(&self, date: NaiveDate) -> bool {
        if self.is_closed_date(date) {
            return false;
        }

        if let Some(ph) = self.public_holiday_at(date) {
            return ph.is_open();
        }

        self.schedule
            .open_spans()
            .any(|span| span.filter(date, &self.ctx))
    }

    /// Get the first instant, not before given time, where this is open.
    ///
    /// The search looks about a year ahead of each rule, `None` is returned
    /// if no opening is found.
    ///
    /// ```
    /// use chrono::NaiveDateTime;
    /// use seasonal_hours::OpeningHours;
    ///
    /// let oh = OpeningHours::parse("We-Th 10:00-14:00").unwrap();
    /// let date_1 = NaiveDateTime::parse_from_str("2024-11-20 16:00", "%Y-%m-%d %H:%M").unwrap();
    /// let date_2 = NaiveDateTime::parse_from_str("2024-11-21 10:00", "%Y-%m-%d %H:%M").unwrap();
    /// assert_eq!(oh.next_open_on(date_1), Some(date_2));
    /// assert_eq!(oh.next_open_on(date_2), Some(date_2));
    /// ```
    pub fn next_open_on(&self, current_time: L::DateTime) -> Option<L::DateTime> {
        let naive = self.ctx.locale.naive(current_time.clone());
        let now = naive.with_second(0)?.with_nanosecond(0)?;

        if self.is_open_naive(now) {
            return Some(current_time);
        }

        let next = crate::search::next_open(self, now)?;
        Some(self.ctx.locale.datetime(next))
    }
}

/// Attach an evaluation context to a schedule.
///
/// ```
/// use chrono::TimeZone;
/// use seasonal_hours::{opening_hours, parse, Context, TzLocation};
///
/// let schedule = parse("Mo-Fr 10:00-18:00").unwrap();
/// let tz = TzLocation::new(chrono_tz::Europe::London);
/// let oh = opening_hours(schedule, Context::default().with_locale(tz));
///
/// // 2020-06-01 is a Monday, London is in summer time
/// let instant = chrono::Utc.with_ymd_and_hms(2020, 6, 1, 9, 30, 0).unwrap();
/// assert!(oh.is_open_on(instant.with_timezone(&chrono_tz::Europe::London)));
/// ```
pub fn opening_hours<L: Localize>(schedule: Schedule, ctx: Context<L>) -> OpeningHours<L> {
    OpeningHours::new(schedule).with_context(ctx)
}

impl FromStr for OpeningHours {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<L: Localize> Display for OpeningHours<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.schedule)
    }
}
