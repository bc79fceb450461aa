#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod extended_time;
pub mod lexer;
pub mod rules;

mod display;
mod parser;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use extended_time::ExtendedTime;
pub use parser::parse;
pub use rules::{OpenSpan, PublicHoliday, Schedule, Span};
