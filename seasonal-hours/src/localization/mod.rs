pub(crate) mod localize;

pub use crate::localization::localize::{Localize, NoLocation, TzLocation};
