use std::fmt::Display;

use pest::error::InputLocation;
use pest::iterators::Pair;
use pest::Parser;

use crate::error::{Error, Result};

#[derive(Parser)]
#[grammar = "lexer.pest"]
struct TokenParser;

/// Kind of a lexical unit of the mini-language.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum TokenKind {
    /// Four digits, `2020`.
    Year,
    /// Two digits, the day of a month: `01`.
    Number,
    /// `HH:MM`
    Time,
    /// `24/7`
    AllWeek,
    /// `off`
    DayOff,
    /// Three letters, meant to be a month abbreviation.
    Month,
    /// Two letters, meant to be a weekday or `PH`.
    Day,
    Plus,
    To,
    RuleSeparator,
    ListSeparator,
    Eof,
}

impl TokenKind {
    fn from_rule(rule: Rule) -> Self {
        match rule {
            Rule::time => Self::Time,
            Rule::all_week => Self::AllWeek,
            Rule::year => Self::Year,
            Rule::number => Self::Number,
            Rule::day_off => Self::DayOff,
            Rule::month => Self::Month,
            Rule::day => Self::Day,
            Rule::plus => Self::Plus,
            Rule::to => Self::To,
            Rule::rule_separator => Self::RuleSeparator,
            Rule::list_separator => Self::ListSeparator,
            Rule::EOI => Self::Eof,
            other => unreachable!("Grammar error: found `{other:?}` inside of `input_tokens`"),
        }
    }
}

/// A token borrowed from the lexed input.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Token<'i> {
    pub kind: TokenKind,
    pub text: &'i str,
    /// Byte offset of the first character of the token.
    pub position: usize,
}

impl<'i> Token<'i> {
    fn from_pair(pair: Pair<'i, Rule>) -> Self {
        Self {
            kind: TokenKind::from_rule(pair.as_rule()),
            text: pair.as_str(),
            position: pair.as_span().start(),
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "`{}`", self.text),
        }
    }
}

/// Split an expression into tokens, whitespaces and `:` separators are
/// dropped.
///
/// The output always ends with a single [`TokenKind::Eof`].
///
/// ```
/// use seasonal_hours_syntax::lexer::{lex, TokenKind};
///
/// let kinds: Vec<_> = lex("Mo-Fr 10:00-18:00").unwrap().into_iter().map(|t| t.kind).collect();
///
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Day,
///         TokenKind::To,
///         TokenKind::Day,
///         TokenKind::Time,
///         TokenKind::To,
///         TokenKind::Time,
///         TokenKind::Eof,
///     ],
/// );
/// ```
pub fn lex(data: &str) -> Result<Vec<Token<'_>>> {
    let pairs = TokenParser::parse(Rule::input_tokens, data).map_err(|err| {
        let position = match err.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };

        Error::Lex { position, found: data.get(position..).and_then(|s| s.chars().next()) }
    })?;

    Ok(pairs
        .flat_map(|pair| pair.into_inner())
        .map(Token::from_pair)
        .collect())
}
