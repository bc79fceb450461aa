use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use seasonal_hours_syntax::extended_time::ExtendedTime;
use seasonal_hours_syntax::rules::time::TimeSpan;

/// Project an extended time at a given date, *24:00* being the first minute of
/// the next day.
pub(crate) fn naive_at(date: NaiveDate, time: ExtendedTime) -> Option<NaiveDateTime> {
    match NaiveTime::try_from(time) {
        Ok(time) => Some(date.and_time(time)),
        Err(()) => date
            .checked_add_signed(Duration::days(1))
            .map(|next| next.and_time(NaiveTime::MIN)),
    }
}

/// First instant of given date at or after `from` where a span is open.
pub(crate) fn first_open_at(
    span: &TimeSpan,
    date: NaiveDate,
    from: ExtendedTime,
) -> Option<NaiveDateTime> {
    naive_at(date, span.first_open_from(from)?)
}
