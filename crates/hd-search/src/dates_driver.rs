//! `YearMonthRequest`: the "dates driver".
//!
//! A request maps each year to the month selectors to expand for it.  A
//! selector of `0` stands for every month of the year; `1`–`12` pick a single
//! month.  Queries usually ask for a month either side of the span they
//! report on, so that holidays whose observed date crosses the boundary are
//! still found.

use std::collections::{BTreeMap, BTreeSet};

use hd_core::ensure;
use hd_core::errors::Result;
use hd_time::date::{MAX_YEAR, MIN_YEAR};
use hd_time::{Date, Month};

/// Raw caller input: year → month selectors.
///
/// An absent map or a year without a list are expressed as an empty map or
/// an empty list.
pub type DatesDriver = BTreeMap<u16, Vec<u8>>;

/// Selector that expands to every month of its year.
pub const ALL_MONTHS: u8 = 0;

/// A validated dates driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearMonthRequest(DatesDriver);

impl YearMonthRequest {
    /// Validate a raw dates driver.
    ///
    /// # Errors
    /// [`InvalidArgument`](hd_core::Error::InvalidArgument) if the driver is
    /// empty, a year has no selectors, a selector is outside 0–12, or a year
    /// is outside the supported date range.
    pub fn new(driver: &DatesDriver) -> Result<Self> {
        ensure!(!driver.is_empty(), "dates driver must not be empty");
        for (&year, selectors) in driver {
            ensure!(
                (MIN_YEAR..=MAX_YEAR).contains(&year),
                "dates driver year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            );
            ensure!(
                !selectors.is_empty(),
                "dates driver has no months for {year}"
            );
            ensure!(
                selectors.iter().all(|&m| m <= 12),
                "month selectors for {year} must lie in [0, 12], got {selectors:?}"
            );
        }
        Ok(YearMonthRequest(driver.clone()))
    }

    /// Request covering `year` plus the month on either side of it.
    ///
    /// `for_year(2015)` is `{2014: [12], 2015: [1..=12], 2016: [1]}`.
    pub fn for_year(year: u16) -> Result<Self> {
        ensure!(
            (MIN_YEAR..=MAX_YEAR).contains(&year),
            "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
        );
        let start = Date::from_ymd(year, 1, 1)?;
        let end = Date::from_ymd(year, 12, 31)?;
        Self::between(start, end)
    }

    /// Request covering every month from the one before `start` to the one
    /// after `end`, clamped to the supported date range.
    ///
    /// # Errors
    /// [`InvalidArgument`](hd_core::Error::InvalidArgument) if either date is
    /// null or `start > end`.
    pub fn between(start: Date, end: Date) -> Result<Self> {
        ensure!(!start.is_null(), "start date is required");
        ensure!(!end.is_null(), "end date is required");
        ensure!(start <= end, "start date {start} is after end date {end}");

        let month_index = |d: Date| d.year() as i32 * 12 + d.month() as i32 - 1;
        let first = (month_index(start) - 1).max(MIN_YEAR as i32 * 12);
        let last = (month_index(end) + 1).min(MAX_YEAR as i32 * 12 + 11);

        let mut driver = DatesDriver::new();
        for index in first..=last {
            let (year, month) = ((index / 12) as u16, (index % 12 + 1) as u8);
            driver.entry(year).or_default().push(month);
        }
        Ok(YearMonthRequest(driver))
    }

    /// Years in ascending order with their selectors as given.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &[u8])> {
        self.0.iter().map(|(&year, selectors)| (year, selectors.as_slice()))
    }

    /// Months to evaluate for `year`, with `0` expanded and duplicates
    /// removed.  Empty for a year that is not requested.
    pub fn months(&self, year: u16) -> BTreeSet<Month> {
        let Some(selectors) = self.0.get(&year) else {
            return BTreeSet::new();
        };
        if selectors.contains(&ALL_MONTHS) {
            return Month::ALL.into_iter().collect();
        }
        selectors.iter().filter_map(|&m| Month::from_number(m)).collect()
    }

    /// Number of requested years.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a request cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The underlying driver.
    pub fn as_driver(&self) -> &DatesDriver {
        &self.0
    }
}

impl TryFrom<DatesDriver> for YearMonthRequest {
    type Error = hd_core::Error;

    fn try_from(driver: DatesDriver) -> Result<Self> {
        YearMonthRequest::new(&driver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(entries: Vec<(u16, Vec<u8>)>) -> DatesDriver {
        entries.into_iter().collect()
    }

    #[test]
    fn validates_driver() {
        let good = driver(vec![(2015, vec![0, 1, 2]), (2014, vec![0, 12])]);
        assert!(YearMonthRequest::new(&good).is_ok());

        for bad in [
            driver(vec![]),
            driver(vec![(2015, vec![0, 1, 2]), (2014, vec![])]),
            driver(vec![(2015, vec![13])]),
            driver(vec![(1850, vec![1])]),
        ] {
            let err = YearMonthRequest::new(&bad).unwrap_err();
            assert!(err.is_invalid_argument(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn expands_all_months_once() {
        let request =
            YearMonthRequest::new(&driver(vec![(2015, vec![0, 1, 2]), (2014, vec![12, 12])]))
                .unwrap();
        assert_eq!(request.months(2015).len(), 12);
        assert_eq!(
            request.months(2014).into_iter().collect::<Vec<_>>(),
            [Month::December]
        );
        assert!(request.months(2016).is_empty());
    }

    #[test]
    fn for_year_adds_neighbouring_months() {
        let request = YearMonthRequest::for_year(2015).unwrap();
        let expected = driver(vec![
            (2014, vec![12]),
            (2015, (1..=12).collect()),
            (2016, vec![1]),
        ]);
        assert_eq!(request.as_driver(), &expected);
    }

    #[test]
    fn between_spans_years_and_clamps() {
        let start = Date::from_ymd(2015, 11, 15).unwrap();
        let end = Date::from_ymd(2016, 2, 1).unwrap();
        let request = YearMonthRequest::between(start, end).unwrap();
        assert_eq!(
            request.as_driver(),
            &driver(vec![(2015, vec![10, 11, 12]), (2016, vec![1, 2, 3])])
        );

        let request = YearMonthRequest::for_year(1900).unwrap();
        assert_eq!(request.iter().next(), Some((1900, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12][..])));

        let err = YearMonthRequest::between(end, start).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(YearMonthRequest::between(Date::NULL, end).is_err());
    }
}
