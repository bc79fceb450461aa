use crate::error::ParserError;
use crate::tests::{in_london, london};
use crate::{datetime, OpeningHours};

#[test]
fn already_open() -> Result<(), ParserError> {
    let oh = in_london("Mo 10:00-24:00", &[])?;
    let now = london("2020-01-20 23:00");
    assert_eq!(oh.next_open_on(now), Some(now));
    Ok(())
}

#[test]
fn later_today() -> Result<(), ParserError> {
    let oh = OpeningHours::parse("Mo 10:00-14:00,16:00-18:00")?;

    assert_eq!(
        oh.next_open_on(datetime!("2020-06-01 08:30")),
        Some(datetime!("2020-06-01 10:00")),
    );

    assert_eq!(
        oh.next_open_on(datetime!("2020-06-01 15:00")),
        Some(datetime!("2020-06-01 16:00")),
    );

    assert_eq!(
        oh.next_open_on(datetime!("2020-06-01 18:30")),
        Some(datetime!("2020-06-08 10:00")),
    );

    Ok(())
}

#[test]
fn next_day() -> Result<(), ParserError> {
    let oh = OpeningHours::parse("We-Th 10:00-14:00")?;

    assert_eq!(
        oh.next_open_on(datetime!("2020-01-08 16:00")),
        Some(datetime!("2020-01-09 10:00")),
    );

    Ok(())
}

#[test]
fn skip_closed_window() -> Result<(), ParserError> {
    let oh = in_london("10:00-14:00; Jan 27 - Feb 02 off", &[])?;

    assert_eq!(
        oh.next_open_on(london("2020-01-27 12:00")),
        Some(london("2020-02-03 10:00")),
    );

    let oh = in_london("Apr 01 - Sep 30 We-Su 10:00-17:00; Jun 23 - Jun 27 off", &[])?;

    assert_eq!(
        oh.next_open_on(london("2021-06-21 12:00")),
        Some(london("2021-06-30 09:00")),
    );

    Ok(())
}

#[test]
fn never_open() -> Result<(), ParserError> {
    let oh = OpeningHours::parse("Mo-Su 10:00-14:00; Jan 01 - Dec 31 off")?;
    assert!(oh.next_open_on(datetime!("2020-06-01 12:00")).is_none());

    let oh = OpeningHours::parse("2019 Mo 10:00-14:00")?;
    assert!(oh.next_open_on(datetime!("2020-06-01 12:00")).is_none());
    Ok(())
}

#[test]
fn single_day_of_the_year() -> Result<(), ParserError> {
    let oh = in_london("Oct 25 10:00-14:00", &[])?;

    assert_eq!(
        oh.next_open_on(london("2020-02-05 16:00")),
        Some(london("2020-10-25 10:00")),
    );

    Ok(())
}
