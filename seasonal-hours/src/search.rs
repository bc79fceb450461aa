//! Search for the next opening instant.
//!
//! The search is bounded: each rule contributes the openings it would have
//! within a fixed horizon, these candidates are then filtered by closed
//! windows and public holidays and the earliest remaining one is picked.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use seasonal_hours_syntax::extended_time::ExtendedTime;
use seasonal_hours_syntax::rules::day::{MonthDay, MonthDayRange};
use seasonal_hours_syntax::rules::time::TimeSpan;
use seasonal_hours_syntax::rules::{OpenSpan, PublicHoliday};

use crate::filter::date_filter::DateFilter;
use crate::filter::time_filter::first_open_at;
use crate::localization::Localize;
use crate::opening_hours::OpeningHours;
use crate::utils::dates::{first_date_from, last_date_until, weekly};

/// Number of days explored for a rule that applies all year long.
const HORIZON_DAYS: i64 = 366;

/// Seasonal rules may have no matching day left in the current instance of
/// their season, so the next instance is also explored.
const SEASON_INSTANCES: usize = 2;

/// First and last days where a rule may apply, starting from `today`.
fn year_bounds(span: &OpenSpan, today: NaiveDate) -> Option<(NaiveDate, Option<NaiveDate>)> {
    let Some(years) = span.years else {
        return Some((today, None));
    };

    let first_day = NaiveDate::from_ymd_opt(years.start.into(), 1, 1)?;

    let last_day = match years.end {
        Some(end) => Some(NaiveDate::from_ymd_opt(end.into(), 12, 31)?),
        None => None,
    };

    Some((today.max(first_day), last_day))
}

/// Instances of a season that are not over at given date, in chronological
/// order. A season may not exist every year: `Feb 29` only happens on leap
/// years.
fn season_instances(
    season: MonthDayRange,
    from: NaiveDate,
) -> impl Iterator<Item = (NaiveDate, NaiveDate)> {
    let first_year = from.year() - 1;

    (first_year..=first_year + 5)
        .filter_map(move |year| {
            let end_year = if season.wraps() { year + 1 } else { year };
            let start = first_date_from(year, season.start)?;
            let end = last_date_until(end_year, season.end)?;
            Some((start, end))
        })
        .filter(move |(start, end)| start <= end && *end >= from)
}

/// Ranges of dates in which a rule may produce candidates.
fn search_windows(span: &OpenSpan, today: NaiveDate) -> Vec<(NaiveDate, NaiveDate)> {
    let Some((from, last_day)) = year_bounds(span, today) else {
        return Vec::new();
    };

    let windows: Vec<_> = match span.season {
        None => from
            .checked_add_signed(Duration::days(HORIZON_DAYS))
            .map(|until| (from, until))
            .into_iter()
            .collect(),
        Some(season) => season_instances(season, from)
            .take(SEASON_INSTANCES)
            .map(|(start, end)| (start.max(from), end))
            .collect(),
    };

    windows
        .into_iter()
        .map(|(start, end)| (start, last_day.map_or(end, |last| end.min(last))))
        .filter(|(start, end)| start <= end)
        .collect()
}

/// First opening of a time window on given day, which must not happen before
/// `now`.
fn first_open_on_day(time: &TimeSpan, date: NaiveDate, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let from = if date == now.date() {
        ExtendedTime::from(now.time())
    } else {
        ExtendedTime::MIDNIGHT_00
    };

    first_open_at(time, date, from)
}

/// Earliest open instant at or after `now`, expressed in local time.
pub(crate) fn next_open<L: Localize>(
    oh: &OpeningHours<L>,
    now: NaiveDateTime,
) -> Option<NaiveDateTime> {
    let schedule = oh.schedule();
    let ctx = oh.context();
    let today = now.date();

    // Generate
    let mut candidates: Vec<NaiveDateTime> = schedule
        .open_spans()
        .flat_map(|span| {
            search_windows(span, today)
                .into_iter()
                .flat_map(move |(from, until)| weekly(from, until, span.day_of_week))
                .filter(move |date| span.filter(*date, ctx))
                .filter_map(move |date| first_open_on_day(&span.time, date, now))
        })
        .collect();

    let generated = candidates.len();

    // Filter out closed windows
    candidates.retain(|candidate| {
        let md = MonthDay::from_date(candidate.date());
        !schedule.closed_spans().any(|window| window.contains(md))
    });

    // Public holidays replace weekday rules
    match schedule.public_holidays().next() {
        Some(PublicHoliday::Open(time)) => candidates.extend(
            ctx.holidays
                .iter_from(today)
                .filter_map(|date| first_open_on_day(time, date, now)),
        ),
        Some(PublicHoliday::Closed) => {
            candidates.retain(|candidate| !ctx.holidays.contains(candidate.date()))
        }
        None => {}
    }

    let kept = candidates.len();

    // Minimize
    let res = candidates
        .into_iter()
        .filter(|candidate| *candidate >= now && oh.is_open_naive(*candidate))
        .min();

    #[cfg(feature = "log")]
    log::debug!("Searched next opening from {now}: {generated} candidates, {kept} kept");

    #[cfg(not(feature = "log"))]
    let _ = (generated, kept);

    res
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::date;
    use seasonal_hours_syntax::rules::day::{Weekday, YearRange};

    fn span(season: Option<(u8, u8, u8, u8)>, years: Option<YearRange>) -> OpenSpan {
        let season = season.map(|(m1, d1, m2, d2)| {
            MonthDayRange::new(MonthDay::new(m1, d1).unwrap(), MonthDay::new(m2, d2).unwrap())
        });

        OpenSpan { day_of_week: Weekday::Mon, time: TimeSpan::FULL_DAY, season, years }
    }

    #[test]
    fn test_search_windows() {
        let today = date!("2020-06-15");

        assert_eq!(search_windows(&span(None, None), today), [(today, date!("2021-06-16"))]);

        assert_eq!(
            search_windows(&span(None, Some(YearRange { start: 2025, end: None })), today),
            [(date!("2025-01-01"), date!("2026-01-02"))],
        );

        assert_eq!(
            search_windows(&span(None, Some(YearRange::single(2020))), today),
            [(today, date!("2020-12-31"))],
        );

        assert!(search_windows(&span(None, Some(YearRange::single(2019))), today).is_empty());
    }

    #[test]
    fn test_season_windows() {
        let today = date!("2020-06-15");

        assert_eq!(
            search_windows(&span(Some((8, 1, 8, 31)), None), today),
            [
                (date!("2020-08-01"), date!("2020-08-31")),
                (date!("2021-08-01"), date!("2021-08-31")),
            ],
        );

        assert_eq!(
            search_windows(&span(Some((6, 1, 6, 30)), None), today),
            [(today, date!("2020-06-30")), (date!("2021-06-01"), date!("2021-06-30"))],
        );

        assert_eq!(
            search_windows(&span(Some((10, 31, 3, 1)), None), date!("2021-02-10")),
            [
                (date!("2021-02-10"), date!("2021-03-01")),
                (date!("2021-10-31"), date!("2022-03-01")),
            ],
        );

        assert_eq!(
            search_windows(&span(Some((2, 29, 2, 29)), None), today),
            [(date!("2024-02-29"), date!("2024-02-29"))],
        );
    }
}
