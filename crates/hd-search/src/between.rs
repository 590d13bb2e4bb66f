//! Holidays between two dates.

use hd_core::ensure;
use hd_core::errors::Result;
use hd_definitions::{HolidayOccurrence, Region, RegionSelector};
use hd_time::Date;

use crate::dates_driver::{DatesDriver, YearMonthRequest};
use crate::definition_search::DefinitionSearch;
use crate::post_process;

/// Lists the holidays in an inclusive date range.
#[derive(Debug, Clone)]
pub struct Between<S> {
    definition_search: S,
}

impl<S: DefinitionSearch> Between<S> {
    /// Query over `definition_search`.
    pub fn new(definition_search: S) -> Self {
        Self { definition_search }
    }

    /// Holidays dated in `[start, end]`, sorted by date.
    ///
    /// `dates_driver` should reach at least a month beyond each end of the
    /// range (see [`YearMonthRequest::between`]).  Flags behave as in
    /// [`YearHoliday::call`](crate::YearHoliday::call); the range test applies
    /// to the reported date.
    ///
    /// # Errors
    /// [`InvalidArgument`](hd_core::Error::InvalidArgument) if either date is
    /// null, `start > end`, or the driver or regions are invalid; any error of
    /// the engine, unchanged.
    pub fn call(
        &self,
        start: Date,
        end: Date,
        dates_driver: &DatesDriver,
        regions: &[Region],
        observed: bool,
        informal: bool,
    ) -> Result<Vec<HolidayOccurrence>> {
        ensure!(!start.is_null(), "start date is required");
        ensure!(!end.is_null(), "end date is required");
        ensure!(start <= end, "start date {start} is after end date {end}");
        let request = YearMonthRequest::new(dates_driver)?;
        let selector = RegionSelector::new(regions.iter().cloned())?;

        tracing::debug!(%start, %end, ?selector, observed, informal, "between query");
        let raw = self.definition_search.call(&request, &selector, &[])?;
        post_process::finish(raw, observed, informal, |d| start <= d && d <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition_search::RuleSearch;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn range_is_inclusive() {
        let query = Between::new(RuleSearch::global());
        let (start, end) = (date(2015, 7, 4), date(2015, 9, 7));
        let driver = YearMonthRequest::between(start, end).unwrap();

        let found = query
            .call(start, end, driver.as_driver(), &[Region::new("us")], false, false)
            .unwrap();
        assert_eq!(
            found.iter().map(|h| h.date).collect::<Vec<_>>(),
            [start, end]
        );
    }

    #[test]
    fn rejects_reversed_range() {
        let query = Between::new(RuleSearch::global());
        let (start, end) = (date(2015, 7, 4), date(2015, 9, 7));
        let driver = YearMonthRequest::between(start, end).unwrap();

        let err = query
            .call(end, start, driver.as_driver(), &[Region::new("us")], false, false)
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
