//! Render rules back into the mini-language.
//!
//! The output of [`Schedule`]'s `Display` parses back into the same set of
//! spans: rules sharing a season and a year window are written in a single
//! expression so that no rule overrides another one.

use std::fmt::Display;

use crate::rules::day::{wday_str, Month, MonthDay, MonthDayRange, Weekday, YearRange};
use crate::rules::time::TimeSpan;
use crate::rules::{OpenSpan, PublicHoliday, Schedule, Span};

fn write_selector(f: &mut std::fmt::Formatter<'_>, seq: &[impl Display]) -> std::fmt::Result {
    let Some(first) = seq.first() else {
        return Ok(());
    };

    write!(f, "{first}")?;

    for elem in &seq[1..] {
        write!(f, ",{elem}")?;
    }

    Ok(())
}

/// Write a day as `Aug 01`.
fn write_monthday(f: &mut std::fmt::Formatter<'_>, md: MonthDay) -> std::fmt::Result {
    let month = Month::try_from(md.month()).map_err(|_| std::fmt::Error)?;
    write!(f, "{month} {:02}", md.day())
}

impl Display for MonthDayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_monthday(f, self.start)?;
        write!(f, " - ")?;
        write_monthday(f, self.end)
    }
}

fn write_scope(
    f: &mut std::fmt::Formatter<'_>,
    season: Option<MonthDayRange>,
    years: Option<YearRange>,
) -> std::fmt::Result {
    if let Some(years) = years {
        write!(f, "{years} ")?;
    }

    if let Some(season) = season {
        write!(f, "{season} ")?;
    }

    Ok(())
}

impl Display for OpenSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_scope(f, self.season, self.years)?;
        write!(f, "{} {}", wday_str(self.day_of_week), self.time)
    }
}

impl Display for PublicHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(time) => write!(f, "PH {time}"),
            Self::Closed => write!(f, "PH off"),
        }
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(span) => write!(f, "{span}"),
            Self::Closed(window) => write!(f, "{window} off"),
            Self::PublicHoliday(ph) => write!(f, "{ph}"),
        }
    }
}

// Schedule

#[derive(Clone, Copy, PartialEq, Eq)]
enum Label {
    Day(Weekday),
    HolidayOpen,
    HolidayClosed,
}

enum Part {
    Expression {
        season: Option<MonthDayRange>,
        years: Option<YearRange>,
        entries: Vec<(Label, Vec<TimeSpan>)>,
    },
    Closed(MonthDayRange),
}

/// Write a set of weekdays as a range when they follow each other, as a list
/// otherwise.
fn write_days(f: &mut std::fmt::Formatter<'_>, days: &[Weekday]) -> std::fmt::Result {
    let mut days = days.to_vec();
    days.sort_by_key(|wday| wday.num_days_from_monday());

    let contiguous = days
        .windows(2)
        .all(|pair| pair[0].num_days_from_monday() + 1 == pair[1].num_days_from_monday());

    match days.as_slice() {
        [first, .., last] if contiguous && days.len() > 2 => {
            write!(f, "{}-{}", wday_str(*first), wday_str(*last))
        }
        _ => write_selector(f, &days.iter().map(|wday| wday_str(*wday)).collect::<Vec<_>>()),
    }
}

impl Part {
    fn write(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (season, years, entries) = match self {
            Self::Closed(window) => return write!(f, "{window} off"),
            Self::Expression { season, years, entries } => (*season, *years, entries),
        };

        write_scope(f, season, years)?;

        // Weekdays sharing the same windows are written together.
        let mut day_groups: Vec<(Vec<Weekday>, &[TimeSpan])> = Vec::new();
        let mut holidays = Vec::new();

        for (label, times) in entries {
            match label {
                Label::Day(wday) => {
                    match day_groups.iter_mut().find(|(_, t)| *t == times.as_slice()) {
                        Some((days, _)) => days.push(*wday),
                        None => day_groups.push((vec![*wday], times.as_slice())),
                    }
                }
                _ => holidays.push((*label, times.as_slice())),
            }
        }

        let mut first = true;

        for (days, times) in day_groups {
            if !first {
                write!(f, ", ")?;
            }

            first = false;
            write_days(f, &days)?;
            write!(f, " ")?;
            write_selector(f, times)?;
        }

        for (label, times) in holidays {
            if !first {
                write!(f, ", ")?;
            }

            first = false;

            if label == Label::HolidayClosed {
                write!(f, "PH off")?;
            } else {
                write!(f, "PH ")?;
                write_selector(f, times)?;
            }
        }

        Ok(())
    }
}

fn split_parts(schedule: &Schedule) -> Vec<Part> {
    let mut parts: Vec<Part> = Vec::new();

    for span in schedule {
        let (season, years, label, time) = match *span {
            Span::Open(span) => {
                let label = Label::Day(span.day_of_week);
                (span.season, span.years, label, Some(span.time))
            }
            Span::PublicHoliday(PublicHoliday::Open(time)) => {
                (None, None, Label::HolidayOpen, Some(time))
            }
            Span::PublicHoliday(PublicHoliday::Closed) => {
                (None, None, Label::HolidayClosed, None)
            }
            Span::Closed(window) => {
                parts.push(Part::Closed(window));
                continue;
            }
        };

        let index = parts
            .iter()
            .position(|part| {
                matches!(
                    part,
                    Part::Expression { season: s, years: y, .. } if *s == season && *y == years
                )
            })
            .unwrap_or_else(|| {
                parts.push(Part::Expression { season, years, entries: Vec::new() });
                parts.len() - 1
            });

        let Part::Expression { entries, .. } = &mut parts[index] else {
            unreachable!("closed windows are never grouped")
        };

        match entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, times)) => times.extend(time),
            None => entries.push((label, time.into_iter().collect())),
        }
    }

    parts
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, part) in split_parts(self).iter().enumerate() {
            if i > 0 {
                write!(f, " ; ")?;
            }

            part.write(f)?;
        }

        Ok(())
    }
}
