use std::convert::TryFrom;
use std::fmt::{Debug, Display};

use chrono::{NaiveTime, Timelike};

/// An hour+minute struct that can go up to the end-of-day sentinel *24:00*.
///
/// Values are ordered the same way as their zero-padded `HH:MM` rendering.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ExtendedTime {
    hour: u8,
    minute: u8,
}

impl ExtendedTime {
    /// First minute of the day.
    pub const MIDNIGHT_00: Self = Self { hour: 0, minute: 0 };

    /// End of the day, only reachable as a closing time.
    pub const MIDNIGHT_24: Self = Self { hour: 24, minute: 0 };

    /// Create a new extended time, this may return `None` if input values are
    /// out of range.
    ///
    /// ```
    /// use seasonal_hours_syntax::ExtendedTime;
    ///
    /// assert!(ExtendedTime::new(24, 0).is_some());
    /// assert!(ExtendedTime::new(24, 1).is_none()); // past the end of the day
    /// assert!(ExtendedTime::new(12, 60).is_none()); // minutes are out of bound
    /// ```
    #[inline]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 24 || minute > 59 || (hour == 24 && minute > 0) {
            None
        } else {
            Some(Self { hour, minute })
        }
    }

    /// Get the number of full hours in this extended time.
    #[inline]
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Get the number of remaining minutes in this extended time.
    #[inline]
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Get the total number of minutes from *00:00*.
    ///
    /// ```
    /// use seasonal_hours_syntax::ExtendedTime;
    ///
    /// assert_eq!(ExtendedTime::MIDNIGHT_24.mins_from_midnight(), 24 * 60);
    /// assert_eq!(ExtendedTime::new(10, 15).unwrap().mins_from_midnight(), 615);
    /// ```
    #[inline]
    pub fn mins_from_midnight(self) -> u16 {
        u16::from(self.minute) + 60 * u16::from(self.hour)
    }

    /// Build an extended time from the total number of minutes from midnight
    /// and return `None` if the result is out of bounds.
    #[inline]
    pub fn from_mins_from_midnight(minute: u16) -> Option<Self> {
        let hour = (minute / 60).try_into().ok()?;
        let minute = (minute % 60).try_into().ok()?;
        Self::new(hour, minute)
    }
}

impl Display for ExtendedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Debug for ExtendedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "{self}")
    }
}

impl TryFrom<ExtendedTime> for NaiveTime {
    type Error = ();

    /// Fails for *24:00*, which has no wall-clock representation.
    #[inline]
    fn try_from(time: ExtendedTime) -> Result<NaiveTime, Self::Error> {
        NaiveTime::from_hms_opt(time.hour.into(), time.minute.into(), 0).ok_or(())
    }
}

impl From<NaiveTime> for ExtendedTime {
    /// Truncates seconds: evaluation happens at minute precision.
    #[inline]
    fn from(time: NaiveTime) -> ExtendedTime {
        Self {
            hour: time.hour().try_into().expect("invalid NaiveTime"),
            minute: time.minute().try_into().expect("invalid NaiveTime"),
        }
    }
}
