use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Any failure raised while turning an expression into a schedule.
///
/// Lexing and parsing failures share this single type: no partial schedule
/// is ever returned.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Error {
    /// No token can start at given byte offset.
    Lex { position: usize, found: Option<char> },
    /// Tokens don't reduce into a complete list of expressions.
    Parse {
        position: usize,
        expected: &'static str,
        found: String,
    },
    /// A numeric literal is out of the range of values it stands for.
    Overflow { value: String, expected: String },
}

impl Error {
    /// Byte offset in the input of the first character that could not be
    /// consumed, if the error is attached to a location.
    ///
    /// ```
    /// assert_eq!(seasonal_hours_syntax::parse("Mo #").unwrap_err().position(), Some(3));
    /// ```
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Lex { position, .. } | Self::Parse { position, .. } => Some(*position),
            Self::Overflow { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex { position, found: Some(c) } => {
                write!(f, "unexpected character `{c}` at position {position}")
            }
            Self::Lex { position, found: None } => {
                write!(f, "unexpected end of input at position {position}")
            }
            Self::Parse { position, expected, found } => {
                write!(f, "expected {expected} at position {position}, found {found}")
            }
            Self::Overflow { value, expected } => {
                write!(f, "{value} is too large: expected {expected}")
            }
        }
    }
}

impl std::error::Error for Error {}
