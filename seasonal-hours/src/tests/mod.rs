mod is_open_on_date;
mod next_open;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Europe::London;
use chrono_tz::Tz;

use crate::error::ParserError;
use crate::{Context, ContextHolidays, OpeningHours, TzLocation};

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! datetime {
    ( $date: expr ) => {{
        use chrono::NaiveDateTime;
        NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M").expect("invalid datetime literal")
    }};
    ( $date: expr, $tz: expr ) => {{
        use chrono::TimeZone;

        $tz.from_local_datetime(&datetime!($date))
            .single()
            .expect("ambiguous input datetime")
    }};
}

/// Read an UTC instant and view it from London.
fn london(raw: &str) -> DateTime<Tz> {
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M").expect("invalid datetime literal");
    Utc.from_utc_datetime(&naive).with_timezone(&London)
}

/// Evaluate a schedule in London with given public holidays.
fn in_london(
    raw_oh: &str,
    holidays: &[&str],
) -> Result<OpeningHours<TzLocation<Tz>>, ParserError> {
    let holidays = ContextHolidays::parse(holidays).expect("invalid holiday literal");

    let ctx = Context::default()
        .with_holidays(holidays)
        .with_locale(TzLocation::new(London));

    Ok(OpeningHours::parse(raw_oh)?.with_context(ctx))
}
