//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.

use std::collections::HashSet;
use std::fmt::Debug;

use arbitrary::Arbitrary;
use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Timelike};

use seasonal_hours::{Context, ContextHolidays, OpeningHours};

/// Number of minutes scanned when looking for the next opening by hand.
const SCAN_MINUTES: i64 = 3 * 24 * 60;

/// A fuzzing example
#[derive(Arbitrary, Clone)]
pub struct Data {
    pub date_secs: i64,
    pub oh: String,
    /// Public holidays, as a number of days after the evaluated date
    pub holidays: Vec<u8>,
    pub operation: Operation,
}

/// What property to check on the input
#[derive(Arbitrary, Clone, Debug)]
pub enum Operation {
    /// The stringified schedule must be equivalent to the initial one.
    Stringified,
    /// An instant that is open must fall on an open date.
    Consistency,
    /// The next opening must be the first open minute.
    Minimality,
}

impl Data {
    /// Evaluated instant, truncated to the minute as evaluation ignores
    /// seconds.
    fn date(&self) -> Option<NaiveDateTime> {
        let date = DateTime::from_timestamp(self.date_secs, 0)?
            .naive_utc()
            .with_second(0)?;

        (1900..=9999).contains(&date.year()).then_some(date)
    }

    fn holidays(&self, date: NaiveDateTime) -> ContextHolidays {
        self.holidays
            .iter()
            .filter_map(|offset| date.date().checked_add_signed(Duration::days((*offset).into())))
            .collect()
    }
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Data");

        if let Some(date) = self.date() {
            debug.field("date", &date);
            debug.field("holidays", self.holidays(date).get_public());
        }

        debug.field("operation", &self.operation);
        debug.field("oh", &self.oh);
        debug.finish()
    }
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_oh(data: Data) -> bool {
    let Some(date) = data.date() else {
        return false;
    };

    let Ok(oh) = data.oh.parse::<OpeningHours>() else {
        return false;
    };

    let oh = oh.with_context(Context::default().with_holidays(data.holidays(date)));

    match &data.operation {
        Operation::Stringified => {
            let stringified = oh.to_string();

            let oh_2 = OpeningHours::parse(&stringified)
                .unwrap_or_else(|err| {
                    eprintln!("[ERR] Initial Expression: {}", data.oh);
                    eprintln!("[ERR] Invalid stringified Expression: {stringified}");
                    panic!("{err}")
                })
                .with_context(oh.context().clone());

            let spans_1: HashSet<_> = oh.schedule().iter().collect();
            let spans_2: HashSet<_> = oh_2.schedule().iter().collect();
            assert_eq!(spans_1, spans_2);
            assert_eq!(oh.is_open_on(date), oh_2.is_open_on(date));
            assert_eq!(oh.next_open_on(date), oh_2.next_open_on(date));
        }
        Operation::Consistency => {
            if oh.is_open_on(date) {
                assert!(oh.is_open_on_date(date.date()));
            }
        }
        Operation::Minimality => {
            let expected = (0..SCAN_MINUTES)
                .filter_map(|i| date.checked_add_signed(Duration::minutes(i)))
                .find(|dt| oh.is_open_on(*dt));

            let next = oh.next_open_on(date);

            if let Some(next) = next {
                assert!(next >= date);
                assert!(oh.is_open_on(next));
            }

            if let Some(expected) = expected {
                assert_eq!(next, Some(expected));
            }
        }
    }

    true
}
