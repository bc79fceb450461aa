use chrono::prelude::Datelike;
use chrono::NaiveDate;

use seasonal_hours_syntax::rules::day::{self as ds, MonthDay};
use seasonal_hours_syntax::rules::{OpenSpan, Schedule};

use crate::localization::Localize;
use crate::Context;

/// Generic trait to specify the behavior of a rule over dates.
pub(crate) trait DateFilter {
    fn filter<L>(&self, date: NaiveDate, ctx: &Context<L>) -> bool
    where
        L: Localize;
}

impl<T: DateFilter> DateFilter for Option<T> {
    fn filter<L>(&self, date: NaiveDate, ctx: &Context<L>) -> bool
    where
        L: Localize,
    {
        self.as_ref().map_or(true, |x| x.filter(date, ctx))
    }
}

impl DateFilter for ds::MonthDayRange {
    fn filter<L>(&self, date: NaiveDate, _ctx: &Context<L>) -> bool
    where
        L: Localize,
    {
        self.contains(MonthDay::from_date(date))
    }
}

impl DateFilter for ds::YearRange {
    fn filter<L>(&self, date: NaiveDate, _ctx: &Context<L>) -> bool
    where
        L: Localize,
    {
        self.contains(date.year())
    }
}

impl DateFilter for OpenSpan {
    fn filter<L>(&self, date: NaiveDate, ctx: &Context<L>) -> bool
    where
        L: Localize,
    {
        date.weekday() == self.day_of_week
            && DateFilter::filter(&self.season, date, ctx)
            && DateFilter::filter(&self.years, date, ctx)
    }
}

/// How narrow the date constraints of a span are, when several spans apply
/// to the same day only the most specific ones are used.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Specificity {
    Default,
    Season,
    Year,
    YearAndSeason,
}

impl Specificity {
    pub(crate) fn of(span: &OpenSpan) -> Self {
        match (span.years.is_some(), span.season.is_some()) {
            (true, true) => Self::YearAndSeason,
            (true, false) => Self::Year,
            (false, true) => Self::Season,
            (false, false) => Self::Default,
        }
    }
}

/// Rules that decide the opening hours of a given day.
pub(crate) fn spans_at<'a, L: Localize>(
    schedule: &'a Schedule,
    date: NaiveDate,
    ctx: &'a Context<L>,
) -> impl Iterator<Item = &'a OpenSpan> + 'a {
    let best = schedule
        .open_spans()
        .filter(|span| span.filter(date, ctx))
        .map(Specificity::of)
        .max();

    schedule
        .open_spans()
        .filter(move |span| Some(Specificity::of(span)) == best && span.filter(date, ctx))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::date;
    use seasonal_hours_syntax::rules::day::{MonthDayRange, Weekday, YearRange};
    use seasonal_hours_syntax::rules::time::TimeSpan;

    fn monday(season: Option<MonthDayRange>, years: Option<YearRange>) -> OpenSpan {
        OpenSpan { day_of_week: Weekday::Mon, time: TimeSpan::FULL_DAY, season, years }
    }

    #[test]
    fn test_open_span_filter() {
        let ctx = Context::default();
        let winter = MonthDayRange::new(MonthDay::new(10, 31).unwrap(), MonthDay::new(3, 1).unwrap());

        // 2021-02-01 and 2021-07-05 are mondays
        assert!(monday(None, None).filter(date!("2021-02-01"), &ctx));
        assert!(!monday(None, None).filter(date!("2021-02-02"), &ctx));
        assert!(monday(Some(winter), None).filter(date!("2021-02-01"), &ctx));
        assert!(!monday(Some(winter), None).filter(date!("2021-07-05"), &ctx));
        assert!(monday(None, Some(YearRange::single(2021))).filter(date!("2021-07-05"), &ctx));
        assert!(!monday(None, Some(YearRange::single(2020))).filter(date!("2021-07-05"), &ctx));
        assert!(!monday(Some(winter), Some(YearRange::single(2021))).filter(date!("2021-07-05"), &ctx));
    }

    #[test]
    fn test_specificity() {
        let season = MonthDayRange::month(seasonal_hours_syntax::rules::day::Month::July);
        let years = YearRange { start: 2020, end: None };
        assert_eq!(Specificity::of(&monday(None, None)), Specificity::Default);
        assert_eq!(Specificity::of(&monday(Some(season), None)), Specificity::Season);
        assert_eq!(Specificity::of(&monday(None, Some(years))), Specificity::Year);
        assert_eq!(Specificity::of(&monday(Some(season), Some(years))), Specificity::YearAndSeason);
        assert!(Specificity::YearAndSeason > Specificity::Year);
        assert!(Specificity::Year > Specificity::Season);
        assert!(Specificity::Season > Specificity::Default);
    }
}
