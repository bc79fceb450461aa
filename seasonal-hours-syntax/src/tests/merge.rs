use crate::error::Result;
use crate::parser::parse;
use crate::rules::day::{Weekday, YearRange};
use crate::rules::time::TimeSpan;
use crate::rules::{PublicHoliday, Span};

use super::{open, open_in, season, window};

#[test]
fn same_scope_is_replaced() -> Result<()> {
    assert_eq!(
        parse("Mo-Su 10:00-12:00; Mo-Su 13:00-17:00")?,
        parse("Mo-Su 13:00-17:00")?,
    );

    assert_eq!(
        parse("Su-We; Tu-Th 10:00-18:00")?.as_slice(),
        [
            open(Weekday::Sun, TimeSpan::FULL_DAY),
            open(Weekday::Mon, TimeSpan::FULL_DAY),
            open(Weekday::Tue, window((10, 0), (18, 0))),
            open(Weekday::Wed, window((10, 0), (18, 0))),
            open(Weekday::Thu, window((10, 0), (18, 0))),
        ],
    );

    Ok(())
}

#[test]
fn day_off_removes_rules() -> Result<()> {
    let days: Vec<_> = parse("Mo-Fr 10:00-18:00; Tu-We off")?
        .open_spans()
        .map(|span| span.day_of_week)
        .collect();

    assert_eq!(days, [Weekday::Mon, Weekday::Thu, Weekday::Fri]);

    assert_eq!(
        parse("We-Su; Fr,Sa off; ph 00:00-24:00")?.as_slice(),
        [
            open(Weekday::Wed, TimeSpan::FULL_DAY),
            open(Weekday::Thu, TimeSpan::FULL_DAY),
            open(Weekday::Sun, TimeSpan::FULL_DAY),
            Span::PublicHoliday(PublicHoliday::Open(TimeSpan::FULL_DAY)),
        ],
    );

    // Nothing is left once every day is off
    assert!(parse("Mo-Fr 10:00-18:00; Mo-Su off")?.is_empty());
    Ok(())
}

#[test]
fn different_scopes_accumulate() -> Result<()> {
    let schedule = parse("2020 Oct Mo 12:00-18:00; 2021-2022 Mo 13:00-17:00; 2023+ Mo 12:00-18:00")?;

    assert_eq!(
        schedule.as_slice(),
        [
            open_in(
                Weekday::Mon,
                window((12, 0), (18, 0)),
                Some(season((10, 1), (10, 31))),
                Some(YearRange::single(2020)),
            ),
            open_in(
                Weekday::Mon,
                window((13, 0), (17, 0)),
                None,
                Some(YearRange { start: 2021, end: Some(2022) }),
            ),
            open_in(
                Weekday::Mon,
                window((12, 0), (18, 0)),
                None,
                Some(YearRange { start: 2023, end: None }),
            ),
        ],
    );

    assert_eq!(parse("Mo 10:00-12:00; Aug Mo 14:00-16:00")?.len(), 2);
    Ok(())
}

#[test]
fn day_off_keeps_its_years() -> Result<()> {
    let schedule = parse("Mo 10:00-12:00; 2020 Mo 14:00-16:00; 2020 Mo off")?;
    assert_eq!(schedule.as_slice(), [open(Weekday::Mon, window((10, 0), (12, 0)))]);
    Ok(())
}

#[test]
fn seasonal_off_only_closes_dates() -> Result<()> {
    // A closed window doesn't remove any rule
    let schedule = parse("Mo 10:00-12:00; Aug Mo off")?;
    assert_eq!(schedule.open_spans().count(), 1);
    assert_eq!(schedule.closed_spans().count(), 1);
    Ok(())
}

#[test]
fn public_holiday_is_replaced() -> Result<()> {
    assert_eq!(parse("PH 10:00-12:00; PH off")?, parse("PH off")?);
    assert_eq!(parse("PH off; Mo 10:00-12:00")?.public_holidays().count(), 1);
    Ok(())
}
