#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod context;
pub mod error;
pub mod localization;
pub mod opening_hours;

mod filter;
mod search;
mod utils;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::context::{Context, ContextHolidays};
pub use crate::localization::{Localize, NoLocation, TzLocation};
pub use crate::opening_hours::{opening_hours, OpeningHours};
pub use seasonal_hours_syntax::{parse, Schedule};
