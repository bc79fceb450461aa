use crate::error::ParserError;
use crate::tests::in_london;
use crate::{date, OpeningHours};

#[test]
fn weekday() -> Result<(), ParserError> {
    let oh = OpeningHours::parse("Su 10:00-18:00")?;
    assert!(oh.is_open_on_date(date!("2020-12-06")));
    assert!(!oh.is_open_on_date(date!("2020-12-07")));
    Ok(())
}

#[test]
fn season() -> Result<(), ParserError> {
    let oh = OpeningHours::parse("Oct 01 - Dec 06 Mo")?;
    assert!(oh.is_open_on_date(date!("2020-10-05")));
    assert!(!oh.is_open_on_date(date!("2020-12-07")));
    Ok(())
}

#[test]
fn closed_window() -> Result<(), ParserError> {
    let oh = OpeningHours::parse("Oct 01 - Oct 03 off")?;
    assert!(!oh.is_open_on_date(date!("2020-10-02")));

    let oh = OpeningHours::parse("24/7; Oct 01 - Oct 03 off")?;
    assert!(!oh.is_open_on_date(date!("2020-10-02")));
    assert!(oh.is_open_on_date(date!("2020-10-04")));
    Ok(())
}

#[test]
fn years() -> Result<(), ParserError> {
    let oh = OpeningHours::parse("2020-2021 Mo 10:00-12:00")?;
    assert!(oh.is_open_on_date(date!("2020-12-07")));
    assert!(!oh.is_open_on_date(date!("2023-01-02")));
    Ok(())
}

#[test]
fn public_holiday() -> Result<(), ParserError> {
    let oh = in_london("PH 10:00-12:00", &["2020-12-04"])?;
    assert!(oh.is_open_on_date(date!("2020-12-04")));
    assert!(!oh.is_open_on_date(date!("2020-12-11")));

    let oh = in_london("Fr 10:00-18:00; PH off", &["2020-12-04"])?;
    assert!(!oh.is_open_on_date(date!("2020-12-04")));
    assert!(oh.is_open_on_date(date!("2020-12-11")));

    let oh = in_london("Fr 10:00-18:00; PH off", &[])?;
    assert!(oh.is_open_on_date(date!("2020-12-04")));
    Ok(())
}
