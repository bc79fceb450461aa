use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone};

/// Specifies how instants are projected to a local wall clock, which is what
/// rules are written for.
pub trait Localize: Clone {
    /// The type for localized date & time.
    type DateTime: Clone;

    /// Convert a localized datetime to its wall-clock representation.
    fn naive(&self, dt: Self::DateTime) -> NaiveDateTime;

    /// Localize a wall-clock datetime.
    fn datetime(&self, naive: NaiveDateTime) -> Self::DateTime;
}

// --
// -- NoLocation
// --

/// Input instants are already wall-clock times.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct NoLocation;

impl Localize for NoLocation {
    type DateTime = NaiveDateTime;

    fn naive(&self, dt: Self::DateTime) -> NaiveDateTime {
        dt
    }

    fn datetime(&self, naive: NaiveDateTime) -> Self::DateTime {
        naive
    }
}

// --
// -- TzLocation
// --

/// Instants are read through a timezone.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct TzLocation<Tz: TimeZone> {
    tz: Tz,
}

impl<Tz: TimeZone> TzLocation<Tz> {
    /// Create a new location context which only contains timezone information.
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Get the timezone for this location.
    pub fn get_timezone(&self) -> &Tz {
        &self.tz
    }
}

#[cfg(feature = "tz")]
impl TzLocation<chrono_tz::Tz> {
    /// Resolve a timezone from its IANA name.
    ///
    /// ```
    /// use seasonal_hours::TzLocation;
    ///
    /// assert!(TzLocation::from_name("Europe/London").is_ok());
    /// assert!(TzLocation::from_name("Middle/Earth").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, crate::error::UnknownTimezone> {
        name.parse::<chrono_tz::Tz>()
            .map(Self::new)
            .map_err(|_| crate::error::UnknownTimezone(name.to_string()))
    }
}

impl<Tz: TimeZone> Localize for TzLocation<Tz> {
    type DateTime = DateTime<Tz>;

    fn naive(&self, dt: Self::DateTime) -> NaiveDateTime {
        dt.with_timezone(&self.tz).naive_local()
    }

    fn datetime(&self, naive: NaiveDateTime) -> Self::DateTime {
        localize_next_valid(naive, &self.tz)
    }
}

/// Localize input datetime to its first valid occurence.
///
/// Ambiguous times resolve to the earliest instant, times that are skipped
/// by the timezone resolve to the first instant after the gap.
fn localize_next_valid<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(x) => x,
        LocalResult::Ambiguous(x, _y) => {
            #[cfg(feature = "log")]
            log::warn!("Ambiguous date {naive}: could be {x:?} (default) or {_y:?}");
            x
        }
        LocalResult::None => {
            let mut curr = naive;

            // Timezone gaps never exceed a day.
            for _ in 0..24 * 60 {
                curr += Duration::minutes(1);

                if let Some(res) = tz.from_local_datetime(&curr).earliest() {
                    #[cfg(feature = "log")]
                    log::warn!("Skipped invalid dates from {naive} to {curr}");
                    return res;
                }
            }

            tz.from_utc_datetime(&naive)
        }
    }
}
