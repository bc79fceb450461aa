use std::fmt::Display;

use crate::extended_time::ExtendedTime;

// TimeSpan

/// A window of time within a day, both bounds included.
///
/// A span whose end precedes its start wraps around midnight: it covers the
/// end of the day from `start` and the beginning of the day until `end`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct TimeSpan {
    pub start: ExtendedTime,
    pub end: ExtendedTime,
}

impl TimeSpan {
    /// The default window of a rule with no time clause.
    pub const FULL_DAY: Self = Self {
        start: ExtendedTime::MIDNIGHT_00,
        end: ExtendedTime::MIDNIGHT_24,
    };

    #[inline]
    pub fn new(start: ExtendedTime, end: ExtendedTime) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn wraps(&self) -> bool {
        self.end < self.start
    }

    /// ```
    /// use seasonal_hours_syntax::ExtendedTime;
    /// use seasonal_hours_syntax::rules::time::TimeSpan;
    ///
    /// let span = TimeSpan::new(ExtendedTime::new(10, 0).unwrap(), ExtendedTime::new(14, 0).unwrap());
    /// assert!(span.contains(ExtendedTime::new(10, 0).unwrap()));
    /// assert!(span.contains(ExtendedTime::new(14, 0).unwrap()));
    /// assert!(!span.contains(ExtendedTime::new(14, 1).unwrap()));
    /// ```
    #[inline]
    pub fn contains(&self, time: ExtendedTime) -> bool {
        if self.wraps() {
            time >= self.start || time <= self.end
        } else {
            self.start <= time && time <= self.end
        }
    }

    /// Earliest time at or after `time`, within the same day, where this span
    /// is open.
    ///
    /// ```
    /// use seasonal_hours_syntax::ExtendedTime;
    /// use seasonal_hours_syntax::rules::time::TimeSpan;
    ///
    /// let t = |h, m| ExtendedTime::new(h, m).unwrap();
    /// let span = TimeSpan::new(t(10, 0), t(14, 0));
    /// assert_eq!(span.first_open_from(t(9, 55)), Some(t(10, 0)));
    /// assert_eq!(span.first_open_from(t(12, 30)), Some(t(12, 30)));
    /// assert_eq!(span.first_open_from(t(16, 0)), None);
    /// ```
    #[inline]
    pub fn first_open_from(&self, time: ExtendedTime) -> Option<ExtendedTime> {
        if self.contains(time) {
            Some(time)
        } else if time < self.start {
            Some(self.start)
        } else {
            None
        }
    }
}

impl Display for TimeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
