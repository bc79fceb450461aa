mod merge;

use crate::extended_time::ExtendedTime;
use crate::rules::day::{MonthDay, MonthDayRange, Weekday, YearRange};
use crate::rules::time::TimeSpan;
use crate::rules::{OpenSpan, Span};

pub(crate) fn time(hour: u8, minute: u8) -> ExtendedTime {
    ExtendedTime::new(hour, minute).expect("invalid time")
}

pub(crate) fn window(start: (u8, u8), end: (u8, u8)) -> TimeSpan {
    TimeSpan::new(time(start.0, start.1), time(end.0, end.1))
}

pub(crate) fn season(start: (u8, u8), end: (u8, u8)) -> MonthDayRange {
    MonthDayRange::new(
        MonthDay::new(start.0, start.1).expect("invalid month day"),
        MonthDay::new(end.0, end.1).expect("invalid month day"),
    )
}

pub(crate) fn open(day_of_week: Weekday, time: TimeSpan) -> Span {
    Span::Open(OpenSpan { day_of_week, time, season: None, years: None })
}

pub(crate) fn open_in(
    day_of_week: Weekday,
    time: TimeSpan,
    season: Option<MonthDayRange>,
    years: Option<YearRange>,
) -> Span {
    Span::Open(OpenSpan { day_of_week, time, season, years })
}
