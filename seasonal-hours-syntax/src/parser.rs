use crate::error::{Error, Result};
use crate::extended_time::ExtendedTime;
use crate::lexer::{lex, Token, TokenKind};
use crate::rules as rl;
use crate::rules::day as ds;
use crate::rules::time as ts;

const ALL_WEEKDAYS: [ds::Weekday; 7] = [
    ds::Weekday::Mon,
    ds::Weekday::Tue,
    ds::Weekday::Wed,
    ds::Weekday::Thu,
    ds::Weekday::Fri,
    ds::Weekday::Sat,
    ds::Weekday::Sun,
];

/// Parse an expression into a [`rl::Schedule`].
///
/// Expressions separated by `;` are merged from left to right: a rule
/// replaces previous rules that apply to the same day with the same season
/// and year windows, other rules are kept.
///
/// ```
/// use seasonal_hours_syntax::parse;
///
/// let schedule = parse("Mo-Fr 10:00-18:00; We off").unwrap();
/// assert_eq!(schedule.len(), 4);
/// assert!(parse("").unwrap().is_empty());
/// assert!(parse("Mo 10:00-18:00 Tu").is_err());
/// ```
pub fn parse(data: &str) -> Result<rl::Schedule> {
    if data.trim().is_empty() {
        return Ok(rl::Schedule::default());
    }

    let mut cursor = Cursor::new(lex(data)?);
    let mut parsed = Vec::new();

    loop {
        parsed = combine_schedules(parsed, build_expression(&mut cursor)?);

        if cursor.next_if(TokenKind::RuleSeparator).is_none() {
            break;
        }
    }

    cursor.expect(TokenKind::Eof, "`;` or end of input")?;
    Ok(rl::Schedule::new(parsed.into_iter().filter_map(Parsed::into_span)))
}

// ---
// --- Token cursor
// ---

struct Cursor<'i> {
    tokens: Vec<Token<'i>>,
    index: usize,
}

impl<'i> Cursor<'i> {
    fn new(tokens: Vec<Token<'i>>) -> Self {
        Self { tokens, index: 0 }
    }

    fn peek_nth(&self, n: usize) -> Token<'i> {
        self.tokens
            .get(self.index + n)
            .or_else(|| self.tokens.last())
            .copied()
            .unwrap_or(Token { kind: TokenKind::Eof, text: "", position: 0 })
    }

    fn peek(&self) -> Token<'i> {
        self.peek_nth(0)
    }

    fn peek_kind(&self, n: usize) -> TokenKind {
        self.peek_nth(n).kind
    }

    fn next(&mut self) -> Token<'i> {
        let token = self.peek();

        if token.kind != TokenKind::Eof {
            self.index += 1;
        }

        token
    }

    fn next_if(&mut self, kind: TokenKind) -> Option<Token<'i>> {
        (self.peek_kind(0) == kind).then(|| self.next())
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token<'i>> {
        self.next_if(kind).ok_or_else(|| unexpected(self.peek(), expected))
    }
}

fn unexpected(token: Token, expected: &'static str) -> Error {
    Error::Parse { position: token.position, expected, found: token.to_string() }
}

// ---
// --- Merge
// ---

/// Output of a single expression, before day-off markers are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Parsed {
    Span(rl::Span),
    /// Closes a weekday without leaving any span in the schedule: it only
    /// matters while merging.
    DayOff {
        day: ds::Weekday,
        years: Option<ds::YearRange>,
    },
}

impl Parsed {
    fn into_span(self) -> Option<rl::Span> {
        match self {
            Self::Span(span) => Some(span),
            Self::DayOff { .. } => None,
        }
    }

    /// The set of days and windows a rule applies to, two rules with the same
    /// scope can't coexist in separate expressions.
    fn scope(&self) -> Option<Scope> {
        match self {
            Self::Span(rl::Span::Open(span)) => Some(Scope {
                day: DayCode::Weekday(span.day_of_week),
                season: span.season,
                years: span.years,
            }),
            Self::Span(rl::Span::PublicHoliday(_)) => Some(Scope {
                day: DayCode::PublicHoliday,
                season: None,
                years: None,
            }),
            Self::Span(rl::Span::Closed(_)) => None,
            Self::DayOff { day, years } => Some(Scope {
                day: DayCode::Weekday(*day),
                season: None,
                years: *years,
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Scope {
    day: DayCode,
    season: Option<ds::MonthDayRange>,
    years: Option<ds::YearRange>,
}

/// Append the rules of a new expression, dropping previous rules that have
/// the exact same scope as one of the new rules.
fn combine_schedules(previous: Vec<Parsed>, new: Vec<Parsed>) -> Vec<Parsed> {
    let new_scopes: Vec<_> = new.iter().filter_map(Parsed::scope).collect();

    previous
        .into_iter()
        .filter(|item| item.scope().map_or(true, |scope| !new_scopes.contains(&scope)))
        .chain(new)
        .collect()
}

// ---
// --- Expression
// ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DayCode {
    Weekday(ds::Weekday),
    PublicHoliday,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum TimeClause {
    Open(Vec<ts::TimeSpan>),
    Off,
}

fn build_expression(cursor: &mut Cursor) -> Result<Vec<Parsed>> {
    let years = build_year_range(cursor)?;
    let seasons = build_monthday_list(cursor)?;
    let mut groups = build_day_time_list(cursor)?;

    if groups.is_empty() {
        if years.is_none() && seasons.is_empty() {
            return Err(unexpected(cursor.peek(), "a year, a month, a day or a time"));
        }

        groups.push((all_week(), TimeClause::Open(vec![ts::TimeSpan::FULL_DAY])));
    }

    let seasons: Vec<_> = {
        if seasons.is_empty() {
            vec![None]
        } else {
            seasons.into_iter().map(Some).collect()
        }
    };

    let mut output = Vec::new();

    for season in seasons {
        for (days, clause) in &groups {
            build_spans(&mut output, days, clause, season, years);
        }
    }

    Ok(output)
}

fn build_spans(
    output: &mut Vec<Parsed>,
    days: &[DayCode],
    clause: &TimeClause,
    season: Option<ds::MonthDayRange>,
    years: Option<ds::YearRange>,
) {
    let mut push = |item: Parsed| {
        if !output.contains(&item) {
            output.push(item)
        }
    };

    match clause {
        TimeClause::Open(times) => {
            for day in days {
                for &time in times {
                    push(Parsed::Span(match *day {
                        DayCode::Weekday(day_of_week) => {
                            rl::Span::Open(rl::OpenSpan { day_of_week, time, season, years })
                        }
                        DayCode::PublicHoliday => {
                            rl::Span::PublicHoliday(rl::PublicHoliday::Open(time))
                        }
                    }))
                }
            }
        }
        TimeClause::Off => {
            if days.contains(&DayCode::PublicHoliday) {
                push(Parsed::Span(rl::Span::PublicHoliday(rl::PublicHoliday::Closed)))
            }

            let weekdays = days.iter().filter_map(|day| match day {
                DayCode::Weekday(wday) => Some(*wday),
                DayCode::PublicHoliday => None,
            });

            match season {
                Some(window) => {
                    if weekdays.count() > 0 {
                        push(Parsed::Span(rl::Span::Closed(window)))
                    }
                }
                None => {
                    for day in weekdays {
                        push(Parsed::DayOff { day, years })
                    }
                }
            }
        }
    }
}

fn all_week() -> Vec<DayCode> {
    ALL_WEEKDAYS.into_iter().map(DayCode::Weekday).collect()
}

// ---
// --- Year selector
// ---

fn build_year_range(cursor: &mut Cursor) -> Result<Option<ds::YearRange>> {
    let Some(token) = cursor.next_if(TokenKind::Year) else {
        return Ok(None);
    };

    let start = build_year(token)?;

    let end = {
        if cursor.next_if(TokenKind::Plus).is_some() {
            None
        } else if cursor.peek_kind(0) == TokenKind::To && cursor.peek_kind(1) == TokenKind::Year {
            cursor.next();
            let token = cursor.next();
            let end = build_year(token)?;

            if end < start {
                return Err(unexpected(token, "a year after the start of the range"));
            }

            Some(end)
        } else {
            Some(start)
        }
    };

    Ok(Some(ds::YearRange { start, end }))
}

fn build_year(token: Token) -> Result<u16> {
    token.text.parse().map_err(|_| Error::Overflow {
        value: token.text.to_string(),
        expected: "a year".to_string(),
    })
}

// ---
// --- Monthday selector
// ---

fn build_monthday_list(cursor: &mut Cursor) -> Result<Vec<ds::MonthDayRange>> {
    let mut seasons = Vec::new();

    if cursor.peek_kind(0) != TokenKind::Month {
        return Ok(seasons);
    }

    loop {
        seasons.push(build_monthday_range(cursor)?);

        if cursor.peek_kind(0) == TokenKind::ListSeparator
            && cursor.peek_kind(1) == TokenKind::Month
        {
            cursor.next();
        } else {
            break;
        }
    }

    Ok(seasons)
}

fn build_monthday_range(cursor: &mut Cursor) -> Result<ds::MonthDayRange> {
    let first = build_month(cursor.expect(TokenKind::Month, "a month")?)?;

    if let Some(token) = cursor.next_if(TokenKind::Number) {
        let start = build_monthday(first, token)?;

        if cursor.peek_kind(0) == TokenKind::To && cursor.peek_kind(1) == TokenKind::Month {
            cursor.next();
            let last = build_month(cursor.next())?;
            let end = build_monthday(last, cursor.expect(TokenKind::Number, "a day number")?)?;
            return Ok(ds::MonthDayRange::new(start, end));
        }

        return Ok(ds::MonthDayRange::new(start, start));
    }

    if cursor.peek_kind(0) == TokenKind::To
        && cursor.peek_kind(1) == TokenKind::Month
        && cursor.peek_kind(2) != TokenKind::Number
    {
        cursor.next();
        let last = build_month(cursor.next())?;
        return Ok(ds::MonthDayRange::months(first, last));
    }

    Ok(ds::MonthDayRange::month(first))
}

fn build_month(token: Token) -> Result<ds::Month> {
    ds::Month::from_abbrev(token.text).ok_or_else(|| unexpected(token, "a month"))
}

fn build_monthday(month: ds::Month, token: Token) -> Result<ds::MonthDay> {
    let day: u8 = token.text.parse().map_err(|_| unexpected(token, "a day number"))?;

    let day = {
        if day == 0 {
            #[cfg(feature = "log")]
            log::warn!("Found day number 0 for {month}: specify the 1st or 31st instead.");
            1
        } else if day > 31 {
            #[cfg(feature = "log")]
            log::warn!("Found day number {day} for {month}, using the 31st.");
            31
        } else {
            day
        }
    };

    ds::MonthDay::new(month.into(), day).ok_or_else(|| Error::Overflow {
        value: format!("{month} {day:02}"),
        expected: "a day of the year".to_string(),
    })
}

// ---
// --- Weekday selector
// ---

fn build_day_time_list(cursor: &mut Cursor) -> Result<Vec<(Vec<DayCode>, TimeClause)>> {
    let mut groups: Vec<(Vec<DayCode>, TimeClause)> = Vec::new();

    loop {
        match cursor.peek_kind(0) {
            TokenKind::Day => {
                let days = build_day_range(cursor)?;
                let clause = build_time_clause(cursor)?;
                groups.push((days, clause));
            }
            TokenKind::AllWeek => {
                cursor.next();
                // Any following time clause is read and ignored.
                build_time_clause(cursor)?;
                groups.push((all_week(), TimeClause::Open(vec![ts::TimeSpan::FULL_DAY])));
            }
            TokenKind::Time | TokenKind::DayOff => {
                let days = groups.last().map(|(days, _)| days.clone()).unwrap_or_else(all_week);
                let clause = build_time_clause(cursor)?;
                groups.push((days, clause));
            }
            _ => break,
        }

        let starts_entry = matches!(
            cursor.peek_kind(1),
            TokenKind::Day | TokenKind::AllWeek | TokenKind::Time | TokenKind::DayOff,
        );

        if cursor.peek_kind(0) == TokenKind::ListSeparator && starts_entry {
            cursor.next();
        } else {
            break;
        }
    }

    Ok(groups)
}

fn build_day_range(cursor: &mut Cursor) -> Result<Vec<DayCode>> {
    let first = build_day(cursor.expect(TokenKind::Day, "a day")?)?;

    if cursor.next_if(TokenKind::To).is_some() {
        let token = cursor.expect(TokenKind::Day, "a day")?;

        let (DayCode::Weekday(start), DayCode::Weekday(end)) = (first, build_day(token)?) else {
            return Err(unexpected(token, "a range between two weekdays"));
        };

        let mut days = vec![DayCode::Weekday(start)];
        let mut curr = start;

        while curr != end {
            curr = curr.succ();
            days.push(DayCode::Weekday(curr));
        }

        return Ok(days);
    }

    let mut days = vec![first];

    // A list of single days: `Fr,Sa`. A day followed by a range starts a new
    // entry instead.
    while cursor.peek_kind(0) == TokenKind::ListSeparator
        && cursor.peek_kind(1) == TokenKind::Day
        && cursor.peek_kind(2) != TokenKind::To
    {
        cursor.next();
        let day = build_day(cursor.next())?;

        if !days.contains(&day) {
            days.push(day);
        }
    }

    Ok(days)
}

fn build_day(token: Token) -> Result<DayCode> {
    if token.text.eq_ignore_ascii_case("PH") {
        return Ok(DayCode::PublicHoliday);
    }

    ds::wday_from_str(token.text)
        .map(DayCode::Weekday)
        .ok_or_else(|| unexpected(token, "a day code"))
}

// ---
// --- Time selector
// ---

fn build_time_clause(cursor: &mut Cursor) -> Result<TimeClause> {
    match cursor.peek_kind(0) {
        TokenKind::DayOff => {
            cursor.next();
            Ok(TimeClause::Off)
        }
        TokenKind::Time => {
            let mut spans = vec![build_timespan(cursor)?];

            while cursor.peek_kind(0) == TokenKind::ListSeparator
                && cursor.peek_kind(1) == TokenKind::Time
            {
                cursor.next();
                let span = build_timespan(cursor)?;

                if !spans.contains(&span) {
                    spans.push(span);
                }
            }

            Ok(TimeClause::Open(spans))
        }
        _ => Ok(TimeClause::Open(vec![ts::TimeSpan::FULL_DAY])),
    }
}

fn build_timespan(cursor: &mut Cursor) -> Result<ts::TimeSpan> {
    let start = build_time(cursor.expect(TokenKind::Time, "a time")?)?;
    cursor.expect(TokenKind::To, "`-`")?;
    let end = build_time(cursor.expect(TokenKind::Time, "a time")?)?;
    Ok(ts::TimeSpan::new(start, end))
}

fn build_time(token: Token) -> Result<ExtendedTime> {
    let (hour, minute) = token.text.split_once(':').ok_or_else(|| unexpected(token, "a time"))?;
    let hour: u8 = hour.parse().map_err(|_| unexpected(token, "a time"))?;
    let minute: u8 = minute.parse().map_err(|_| unexpected(token, "a time"))?;

    ExtendedTime::new(hour, minute).ok_or_else(|| Error::Overflow {
        value: token.text.to_string(),
        expected: "a time between 00:00 and 24:00".to_string(),
    })
}
