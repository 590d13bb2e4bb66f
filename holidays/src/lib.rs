//! # holidays
//!
//! Resolve declarative regional holiday rules into dated occurrences.
//!
//! This crate is a **façade** over the workspace crates. It re-exports them
//! and adds a few one-call queries bound to the built-in rule registry.
//! Application code should depend on this crate rather than the individual
//! `hd-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use holidays::time::Date;
//! use holidays::QueryOptions;
//!
//! let from = Date::from_ymd(2015, 1, 1).unwrap();
//! let found = holidays::year_holidays(["us"], from, QueryOptions::default()).unwrap();
//! assert_eq!(found.len(), 10);
//! assert_eq!(found[0].name, "New Year's Day");
//! ```
//!
//! For a custom rule table, or to stub the engine, use
//! [`search::YearHoliday`] and [`search::RuleSearch`] directly.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use hd_core::ensure;
use hd_core::errors::Result;
use hd_definitions::RuleRegistry;
use hd_search::{Between, RuleSearch, YearHoliday, YearMonthRequest};
use hd_time::Date;

/// Error type and `Result` alias.
pub use hd_core as core;

/// Dates, weekdays, months, Easter and equinoxes.
pub use hd_time as time;

/// Holiday rules, regions and the rule registry.
pub use hd_definitions as definitions;

/// The resolution engine and the year/range queries.
pub use hd_search as search;

pub use hd_core::Error;
pub use hd_definitions::{HolidayOccurrence, Region};

/// Post-processing switches for the one-call queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryOptions {
    /// Report holidays that move off a weekend on their observed date.
    pub observed: bool,
    /// Include informal observances.
    pub informal: bool,
}

impl QueryOptions {
    /// Enable observed-date adjustment.
    pub fn observed(mut self) -> Self {
        self.observed = true;
        self
    }

    /// Include informal observances.
    pub fn informal(mut self) -> Self {
        self.informal = true;
        self
    }
}

fn to_regions<I, R>(regions: I) -> Vec<Region>
where
    I: IntoIterator<Item = R>,
    R: Into<Region>,
{
    regions.into_iter().map(Into::into).collect()
}

/// Holidays of the year containing `from_date` for `regions`, sorted by date.
///
/// # Errors
/// [`Error::InvalidArgument`] if `from_date` is null or `regions` is empty;
/// [`Error::Computation`] if a built-in rule cannot be resolved.
pub fn year_holidays<I, R>(
    regions: I,
    from_date: Date,
    options: QueryOptions,
) -> Result<Vec<HolidayOccurrence>>
where
    I: IntoIterator<Item = R>,
    R: Into<Region>,
{
    ensure!(!from_date.is_null(), "from date is required");
    let request = YearMonthRequest::for_year(from_date.year())?;
    YearHoliday::new(RuleSearch::global()).call(
        from_date,
        request.as_driver(),
        &to_regions(regions),
        options.observed,
        options.informal,
    )
}

/// Holidays in `[start, end]` for `regions`, sorted by date.
///
/// # Errors
/// [`Error::InvalidArgument`] if either date is null, `start > end`, or
/// `regions` is empty; [`Error::Computation`] if a built-in rule cannot be
/// resolved.
pub fn between<I, R>(
    regions: I,
    start: Date,
    end: Date,
    options: QueryOptions,
) -> Result<Vec<HolidayOccurrence>>
where
    I: IntoIterator<Item = R>,
    R: Into<Region>,
{
    let request = YearMonthRequest::between(start, end)?;
    Between::new(RuleSearch::global()).call(
        start,
        end,
        request.as_driver(),
        &to_regions(regions),
        options.observed,
        options.informal,
    )
}

/// Holidays on `date` for `regions`.
///
/// # Errors
/// As [`between`].
pub fn on<I, R>(regions: I, date: Date, options: QueryOptions) -> Result<Vec<HolidayOccurrence>>
where
    I: IntoIterator<Item = R>,
    R: Into<Region>,
{
    between(regions, date, date, options)
}

/// Regions with a built-in rule table, in registration order.
pub fn available_regions() -> Vec<Region> {
    RuleRegistry::global().regions().cloned().collect()
}
