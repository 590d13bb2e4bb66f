//! # hd-search
//!
//! Turns holiday rules into dated occurrences.
//!
//! * [`DefinitionSearch`] is the resolution engine seam; [`RuleSearch`]
//!   expands the rules of a [`RuleRegistry`](hd_definitions::RuleRegistry)
//!   (plus ad hoc rules) over a [`YearMonthRequest`].
//! * [`YearHoliday`] and [`Between`] validate caller input, call the engine
//!   once, and narrow/order its raw output.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Holidays between two dates.
pub mod between;

/// `YearMonthRequest`: which (year, month) pairs to expand.
pub mod dates_driver;

/// The resolution engine.
pub mod definition_search;

/// Holidays of one calendar year.
pub mod year_holiday;

mod post_process;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use between::Between;
pub use dates_driver::{DatesDriver, YearMonthRequest};
pub use definition_search::{DefinitionSearch, RuleSearch};
pub use year_holiday::YearHoliday;
