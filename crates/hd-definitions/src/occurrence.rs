//! `HolidayOccurrence`: a rule resolved to a concrete date.

use hd_core::errors::Result;
use hd_time::Date;

use crate::observed::ObservedRule;
use crate::region::Region;

/// One resolved holiday.
///
/// Besides the date, name and regions, an occurrence carries the informal flag
/// and weekend shift of the rule that produced it so that queries can filter
/// and adjust without going back to the rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayOccurrence {
    /// Nominal date (or observed date once a query has adjusted it).
    pub date: Date,
    /// Display name, as declared by the rule.
    pub name: String,
    /// Regions the holiday is reported for.
    pub regions: Vec<Region>,
    /// `true` if the rule is an informal observance.
    pub informal: bool,
    /// The rule's weekend shift, if any.
    pub observed: Option<ObservedRule>,
}

impl HolidayOccurrence {
    /// Create a formal occurrence without a weekend shift.
    pub fn new<I, R>(date: Date, name: impl Into<String>, regions: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Region>,
    {
        Self {
            date,
            name: name.into(),
            regions: regions.into_iter().map(Into::into).collect(),
            informal: false,
            observed: None,
        }
    }

    /// Set the informal flag.
    pub fn with_informal(mut self, informal: bool) -> Self {
        self.informal = informal;
        self
    }

    /// Set the weekend shift.
    pub fn with_observed(mut self, observed: Option<ObservedRule>) -> Self {
        self.observed = observed;
        self
    }

    /// The date the holiday is observed on; the nominal date when the rule has
    /// no weekend shift.
    pub fn observed_date(&self) -> Result<Date> {
        match self.observed {
            Some(rule) => rule.apply(self.date),
            None => Ok(self.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_date_uses_rule() {
        let sat = Date::from_ymd(2015, 7, 4).unwrap();
        let plain = HolidayOccurrence::new(sat, "Independence Day", ["us"]);
        assert_eq!(plain.observed_date().unwrap(), sat);

        let shifted = plain.with_observed(Some(ObservedRule::ToWeekdayIfWeekend));
        assert_eq!(
            shifted.observed_date().unwrap(),
            Date::from_ymd(2015, 7, 3).unwrap()
        );
        assert_eq!(shifted.date, sat);
    }
}
