use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

use seasonal_hours_syntax::rules::day::MonthDay;

pub(crate) fn count_days_in_month(date: NaiveDate) -> u8 {
    let Some(date_next_month) = date.checked_add_months(Months::new(1)) else {
        // December of last supported year
        return 31;
    };

    let Some((first_this_month, first_next_month)) =
        date.with_day(1).zip(date_next_month.with_day(1))
    else {
        return 31;
    };

    (first_next_month - first_this_month)
        .num_days()
        .try_into()
        .unwrap_or(31)
}

/// First date of given year that is not before given day of the year, for
/// example `02-29` is March 1st on a non-leap year.
pub(crate) fn first_date_from(year: i32, md: MonthDay) -> Option<NaiveDate> {
    let first_of_month = NaiveDate::from_ymd_opt(year, md.month().into(), 1)?;

    if md.day() <= count_days_in_month(first_of_month) {
        first_of_month.with_day(md.day().into())
    } else {
        first_of_month.checked_add_months(Months::new(1))
    }
}

/// Last date of given year that is not after given day of the year, for
/// example `02-29` is February 28th on a non-leap year.
pub(crate) fn last_date_until(year: i32, md: MonthDay) -> Option<NaiveDate> {
    let first_of_month = NaiveDate::from_ymd_opt(year, md.month().into(), 1)?;
    let day = std::cmp::min(md.day(), count_days_in_month(first_of_month));
    first_of_month.with_day(day.into())
}

/// First date at or after `date` which falls on given weekday.
pub(crate) fn next_weekday(date: NaiveDate, wday: Weekday) -> Option<NaiveDate> {
    let offset = (7 + wday.num_days_from_monday() - date.weekday().num_days_from_monday()) % 7;
    date.checked_add_signed(Duration::days(offset.into()))
}

/// Iterate over all dates of a given weekday within `from..=until`.
pub(crate) fn weekly(
    from: NaiveDate,
    until: NaiveDate,
    wday: Weekday,
) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(next_weekday(from, wday), |date| {
        date.checked_add_signed(Duration::weeks(1))
    })
    .take_while(move |date| *date <= until)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::date;

    fn md(month: u8, day: u8) -> MonthDay {
        MonthDay::new(month, day).unwrap()
    }

    #[test]
    fn test_count_days_in_month() {
        assert_eq!(count_days_in_month(date!("2020-02-10")), 29);
        assert_eq!(count_days_in_month(date!("2021-02-10")), 28);
        assert_eq!(count_days_in_month(date!("2021-04-30")), 30);
        assert_eq!(count_days_in_month(date!("2021-12-01")), 31);
        assert_eq!(count_days_in_month(NaiveDate::MAX), 31);
    }

    #[test]
    fn test_month_day_bounds() {
        assert_eq!(first_date_from(2021, md(2, 29)), Some(date!("2021-03-01")));
        assert_eq!(first_date_from(2020, md(2, 29)), Some(date!("2020-02-29")));
        assert_eq!(first_date_from(2021, md(11, 31)), Some(date!("2021-12-01")));
        assert_eq!(last_date_until(2021, md(2, 29)), Some(date!("2021-02-28")));
        assert_eq!(last_date_until(2021, md(6, 31)), Some(date!("2021-06-30")));
        assert_eq!(last_date_until(2021, md(8, 15)), Some(date!("2021-08-15")));
    }

    #[test]
    fn test_next_weekday() {
        // 2020-01-06 is a Monday
        assert_eq!(next_weekday(date!("2020-01-06"), Weekday::Mon), Some(date!("2020-01-06")));
        assert_eq!(next_weekday(date!("2020-01-06"), Weekday::Sun), Some(date!("2020-01-12")));
        assert_eq!(next_weekday(date!("2020-01-07"), Weekday::Mon), Some(date!("2020-01-13")));
    }

    #[test]
    fn test_weekly() {
        let dates: Vec<_> = weekly(date!("2020-01-01"), date!("2020-01-20"), Weekday::Mon).collect();
        assert_eq!(dates, [date!("2020-01-06"), date!("2020-01-13"), date!("2020-01-20")]);
        assert_eq!(weekly(date!("2020-01-07"), date!("2020-01-12"), Weekday::Mon).count(), 0);
    }
}
