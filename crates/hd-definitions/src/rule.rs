//! Declarative holiday rules.
//!
//! A rule is pure data: the date strategy is a closed enum
//! ([`DayResolution`]) dispatched with a `match`, and region applicability is
//! a flat [`RegionScope`] predicate evaluated against the caller's
//! [`RegionSelector`].

use hd_core::errors::{Error, Result};
use hd_core::fail;
use hd_time::{autumnal_equinox_day, easter_sunday, vernal_equinox_day, Date, Month, Weekday};

use crate::observed::ObservedRule;
use crate::region::{Region, RegionSelector};

/// Date calculations that are not a plain day-of-month or weekday ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Computation {
    /// Western Easter Sunday plus the given number of days (Good Friday is
    /// `-2`, Easter Monday `+1`).  Does not need a month.
    EasterOffset(i16),
    /// Vernal equinox day in the rule's month.
    VernalEquinox,
    /// Autumnal equinox day in the rule's month.
    AutumnalEquinox,
}

/// How a rule picks its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayResolution {
    /// A fixed day of the month.
    Fixed(u8),
    /// The `n`-th `weekday` counting from the start of the month.
    NthWeekday {
        /// 1-based ordinal.
        n: u8,
        /// Day of the week.
        weekday: Weekday,
    },
    /// The `n`-th `weekday` counting back from the end of the month
    /// (`n = 1` is the last one).
    LastWeekday {
        /// 1-based ordinal from the end.
        n: u8,
        /// Day of the week.
        weekday: Weekday,
    },
    /// A named calculation.
    Computed(Computation),
}

impl DayResolution {
    /// Resolve against `year` and, for month-bound strategies, `month`.
    ///
    /// Errors come back as [`Error::Date`]; [`HolidayRule::resolve`] attaches
    /// the rule context.
    fn resolve(&self, year: u16, month: Option<Month>) -> Result<Date> {
        let month_number = || {
            month
                .map(|m| m.number())
                .ok_or_else(|| Error::Date(format!("{self:?} needs a month")))
        };
        match *self {
            DayResolution::Computed(Computation::EasterOffset(offset)) => {
                easter_sunday(year)?.add_days(offset as i32)
            }
            DayResolution::Fixed(day) => Date::from_ymd(year, month_number()?, day),
            DayResolution::NthWeekday { n, weekday } => {
                Date::nth_weekday(n, weekday, year, month_number()?)
            }
            DayResolution::LastWeekday { n, weekday } => {
                Date::last_weekday(n, weekday, year, month_number()?)
            }
            DayResolution::Computed(Computation::VernalEquinox) => {
                Date::from_ymd(year, month_number()?, vernal_equinox_day(year))
            }
            DayResolution::Computed(Computation::AutumnalEquinox) => {
                Date::from_ymd(year, month_number()?, autumnal_equinox_day(year))
            }
        }
    }
}

/// Which regions a rule applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionScope {
    /// Applies where any of these regions is selected.
    Included(Vec<Region>),
    /// Applies everywhere its table is consulted, unless one of these regions
    /// is explicitly selected.
    ExcludedFrom(Vec<Region>),
}

impl RegionScope {
    /// Evaluate the scope against a caller selector.
    pub fn matches(&self, selector: &RegionSelector) -> bool {
        match self {
            RegionScope::Included(regions) => regions.iter().any(|r| selector.covers(r)),
            RegionScope::ExcludedFrom(regions) => !regions.iter().any(|r| selector.names(r)),
        }
    }
}

impl Default for RegionScope {
    fn default() -> Self {
        RegionScope::Included(Vec::new())
    }
}

/// Inclusive range of years in which a rule is in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct YearRange {
    /// First year in force.
    pub from: Option<u16>,
    /// Last year in force.
    pub until: Option<u16>,
}

impl YearRange {
    /// Return `true` if `year` lies within the range.
    pub fn contains(&self, year: u16) -> bool {
        self.from.map_or(true, |from| year >= from) && self.until.map_or(true, |until| year <= until)
    }
}

/// A declarative recurring-holiday definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRule {
    name: String,
    month: Option<Month>,
    day: DayResolution,
    scope: RegionScope,
    informal: bool,
    observed: Option<ObservedRule>,
    years: YearRange,
}

impl HolidayRule {
    /// Create a rule with no regions, formal, no observed shift, in force in
    /// every year.  `month = None` makes the rule floating.
    pub fn new(name: impl Into<String>, month: Option<Month>, day: DayResolution) -> Self {
        Self {
            name: name.into(),
            month,
            day,
            scope: RegionScope::default(),
            informal: false,
            observed: None,
            years: YearRange::default(),
        }
    }

    /// A holiday on a fixed day of a month.
    pub fn fixed(name: impl Into<String>, month: Month, day: u8) -> Self {
        Self::new(name, Some(month), DayResolution::Fixed(day))
    }

    /// A holiday on the `n`-th `weekday` of a month.
    pub fn nth_weekday(name: impl Into<String>, month: Month, n: u8, weekday: Weekday) -> Self {
        Self::new(name, Some(month), DayResolution::NthWeekday { n, weekday })
    }

    /// A holiday on the `n`-th-from-last `weekday` of a month.
    pub fn last_weekday(name: impl Into<String>, month: Month, n: u8, weekday: Weekday) -> Self {
        Self::new(name, Some(month), DayResolution::LastWeekday { n, weekday })
    }

    /// A floating holiday `offset` days from Easter Sunday.
    pub fn easter(name: impl Into<String>, offset: i16) -> Self {
        Self::new(name, None, DayResolution::Computed(Computation::EasterOffset(offset)))
    }

    /// A holiday computed within a given month.
    pub fn computed(name: impl Into<String>, month: Month, computation: Computation) -> Self {
        Self::new(name, Some(month), DayResolution::Computed(computation))
    }

    // ── Builders ─────────────────────────────────────────────────────────────

    /// Restrict the rule to the given regions.
    pub fn regions<I, R>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Region>,
    {
        self.scope = RegionScope::Included(regions.into_iter().map(Into::into).collect());
        self
    }

    /// Apply the rule everywhere its table is consulted except `regions`.
    pub fn except<I, R>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Region>,
    {
        self.scope = RegionScope::ExcludedFrom(regions.into_iter().map(Into::into).collect());
        self
    }

    /// Mark the rule as an informal observance.
    pub fn informal(mut self) -> Self {
        self.informal = true;
        self
    }

    /// Attach a weekend shift.
    pub fn observed(mut self, rule: ObservedRule) -> Self {
        self.observed = Some(rule);
        self
    }

    /// First year the rule is in force.
    pub fn from_year(mut self, year: u16) -> Self {
        self.years.from = Some(year);
        self
    }

    /// Last year the rule is in force.
    pub fn until_year(mut self, year: u16) -> Self {
        self.years.until = Some(year);
        self
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rule's month, or `None` for a floating rule.
    pub fn month(&self) -> Option<Month> {
        self.month
    }

    /// Day strategy.
    pub fn day(&self) -> DayResolution {
        self.day
    }

    /// Region scope.
    pub fn scope(&self) -> &RegionScope {
        &self.scope
    }

    /// Return `true` for informal observances.
    pub fn is_informal(&self) -> bool {
        self.informal
    }

    /// Weekend shift, if any.
    pub fn observed_rule(&self) -> Option<ObservedRule> {
        self.observed
    }

    /// Years in force.
    pub fn years(&self) -> YearRange {
        self.years
    }

    /// Return `true` if the rule is floating (its month follows from the
    /// computed date).
    pub fn is_floating(&self) -> bool {
        self.month.is_none()
    }

    /// The regions the rule declares, empty for an exclusion-scoped rule.
    pub fn declared_regions(&self) -> &[Region] {
        match &self.scope {
            RegionScope::Included(regions) => regions,
            RegionScope::ExcludedFrom(_) => &[],
        }
    }

    /// Resolve the rule's nominal date in `year`.
    ///
    /// # Errors
    /// [`Error::Computation`] if the strategy admits no date in that year
    /// (e.g. a fifth Monday in a four-Monday month).
    pub fn resolve(&self, year: u16) -> Result<Date> {
        let detail = match self.day.resolve(year, self.month) {
            Ok(date) => return Ok(date),
            Err(Error::Date(msg) | Error::Computation(msg) | Error::InvalidArgument(msg)) => msg,
        };
        let when = match self.month {
            Some(m) => format!("{m} {year}"),
            None => year.to_string(),
        };
        fail!("cannot resolve {:?} in {when}: {detail}", self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn fixed_and_weekday_rules() {
        let xmas = HolidayRule::fixed("Christmas Day", Month::December, 25);
        assert_eq!(xmas.resolve(2015).unwrap(), date(2015, 12, 25));

        let mlk = HolidayRule::nth_weekday("MLK Day", Month::January, 3, Weekday::Monday);
        assert_eq!(mlk.resolve(2015).unwrap(), date(2015, 1, 19));

        let memorial = HolidayRule::last_weekday("Memorial Day", Month::May, 1, Weekday::Monday);
        assert_eq!(memorial.resolve(2015).unwrap(), date(2015, 5, 25));
    }

    #[test]
    fn computed_rules() {
        let good_friday = HolidayRule::easter("Good Friday", -2);
        assert!(good_friday.is_floating());
        assert_eq!(good_friday.resolve(2015).unwrap(), date(2015, 4, 3));

        let vernal = HolidayRule::computed("Vernal Equinox Day", Month::March, Computation::VernalEquinox);
        assert_eq!(vernal.resolve(2015).unwrap(), date(2015, 3, 21));
    }

    #[test]
    fn impossible_date_is_a_computation_error() {
        let rule = HolidayRule::nth_weekday("Fifth Monday", Month::February, 5, Weekday::Monday);
        let err = rule.resolve(2015).unwrap_err();
        assert!(err.is_computation());
        assert_eq!(
            err.to_string(),
            "computation error: cannot resolve \"Fifth Monday\" in February 2015: \
             5th Monday does not exist in 2015-02"
        );

        let leap = HolidayRule::fixed("Leap Day", Month::February, 29);
        assert!(leap.resolve(2016).is_ok());
        assert!(leap.resolve(2015).unwrap_err().is_computation());
    }

    #[test]
    fn month_bound_strategy_without_month() {
        let rule = HolidayRule::new("Broken", None, DayResolution::Fixed(1));
        assert!(rule.resolve(2015).unwrap_err().is_computation());
    }

    #[test]
    fn year_range() {
        let rule = HolidayRule::fixed("Juneteenth", Month::June, 19).from_year(2021);
        assert!(!rule.years().contains(2020));
        assert!(rule.years().contains(2021));
        let rule = rule.until_year(2030);
        assert!(!rule.years().contains(2031));
    }

    #[test]
    fn scope_matching() {
        let us = RegionSelector::new(["us"]).unwrap();
        let sct = RegionSelector::new(["gb_sct"]).unwrap();
        let eng = RegionSelector::new(["gb_eng"]).unwrap();

        let included = RegionScope::Included(vec![Region::new("gb")]);
        assert!(included.matches(&sct));
        assert!(!included.matches(&us));

        let excluded = RegionScope::ExcludedFrom(vec![Region::new("gb_sct")]);
        assert!(!excluded.matches(&sct));
        assert!(excluded.matches(&eng));
    }

    #[test]
    fn builders_set_flags() {
        let rule = HolidayRule::fixed("Halloween", Month::October, 31)
            .regions(["us"])
            .informal();
        assert!(rule.is_informal());
        assert_eq!(rule.declared_regions(), &[Region::new("us")]);
        assert_eq!(rule.observed_rule(), None);

        let rule = HolidayRule::easter("Easter Monday", 1).except(["gb_sct"]);
        assert!(rule.declared_regions().is_empty());
    }
}
