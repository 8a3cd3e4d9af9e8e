//! TeamCity service-message emission.
//!
//! Three layers, leaves first:
//! - [`escape`]: value escaping for the `##teamcity[...]` wire format
//! - [`message`]: complete service-message lines from a name plus a value
//!   or attribute map
//! - [`TeamCityReporter`]: the stateful reporter implementing the
//!   [`Reporter`](tcreport_types::Reporter) contract, with duplicate and
//!   progress suppression and catalog emission

#![forbid(unsafe_code)]

mod catalog;
mod escape;
pub mod message;
mod reporter;

pub use escape::escape;
pub use reporter::{TeamCityReporter, INTERNAL_FILE_MARKER};
