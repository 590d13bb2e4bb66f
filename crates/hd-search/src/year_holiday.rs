//! Holidays falling in one calendar year.

use hd_core::ensure;
use hd_core::errors::Result;
use hd_definitions::{HolidayOccurrence, Region, RegionSelector};
use hd_time::Date;

use crate::dates_driver::{DatesDriver, YearMonthRequest};
use crate::definition_search::DefinitionSearch;
use crate::post_process;

/// Lists the holidays of the year containing a reference date.
///
/// The query validates its input, asks the engine for every (year, month) in
/// the dates driver, then keeps only the occurrences in the reference year.
/// Callers normally pass a driver that reaches a month into the neighbouring
/// years (see [`YearMonthRequest::for_year`]) so that holidays observed
/// across the year boundary are found.
///
/// ```
/// use hd_definitions::Region;
/// use hd_search::{RuleSearch, YearHoliday, YearMonthRequest};
/// use hd_time::Date;
///
/// let query = YearHoliday::new(RuleSearch::global());
/// let driver = YearMonthRequest::for_year(2015).unwrap();
/// let holidays = query
///     .call(
///         Date::from_ymd(2015, 6, 1).unwrap(),
///         driver.as_driver(),
///         &[Region::new("us")],
///         false,
///         false,
///     )
///     .unwrap();
/// assert_eq!(holidays.first().unwrap().name, "New Year's Day");
/// assert!(holidays.iter().all(|h| h.date.year() == 2015));
/// ```
#[derive(Debug, Clone)]
pub struct YearHoliday<S> {
    definition_search: S,
}

impl<S: DefinitionSearch> YearHoliday<S> {
    /// Query over `definition_search`.
    pub fn new(definition_search: S) -> Self {
        Self { definition_search }
    }

    /// Holidays in the year of `from_date`, sorted by date.
    ///
    /// Informal observances are dropped unless `informal`; with `observed`,
    /// holidays that move off a weekend are reported on their observed date.
    /// The year test applies to the reported date.
    ///
    /// # Errors
    /// * [`InvalidArgument`](hd_core::Error::InvalidArgument), before the
    ///   engine is consulted, if `from_date` is null, `dates_driver` is empty
    ///   or maps a year to no months, or `regions` is empty.
    /// * Any error of the engine, unchanged.
    pub fn call(
        &self,
        from_date: Date,
        dates_driver: &DatesDriver,
        regions: &[Region],
        observed: bool,
        informal: bool,
    ) -> Result<Vec<HolidayOccurrence>> {
        ensure!(!from_date.is_null(), "from date is required");
        let request = YearMonthRequest::new(dates_driver)?;
        let selector = RegionSelector::new(regions.iter().cloned())?;

        let year = from_date.year();
        tracing::debug!(year, ?selector, observed, informal, "year holiday query");

        let raw = self.definition_search.call(&request, &selector, &[])?;
        let holidays = post_process::finish(raw, observed, informal, |d| d.year() == year)?;

        tracing::debug!(year, holidays = holidays.len(), "year holiday query done");
        Ok(holidays)
    }

    /// The engine this query calls.
    pub fn definition_search(&self) -> &S {
        &self.definition_search
    }
}
