//! Weekend-shifting rules.
//!
//! When a holiday's nominal date lands on a weekend many jurisdictions give
//! the day off on a nearby weekday instead.  [`ObservedRule`] names the shift
//! a rule uses.

use hd_core::errors::Result;
use hd_time::{Date, Weekday};

/// How a holiday moves when its nominal date is not a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservedRule {
    /// Sunday → Monday; Saturday stays.
    ToMondayIfSunday,
    /// Saturday or Sunday → the following Monday.
    ToMondayIfWeekend,
    /// Saturday → Friday, Sunday → Monday.
    ToWeekdayIfWeekend,
    /// For the second of two consecutive holidays (Boxing Day, 2 January):
    /// Saturday or Sunday → two days later, Monday → Tuesday, since the first
    /// holiday will have been moved onto the Monday.
    ToWeekdayIfBoxingWeekend,
}

impl ObservedRule {
    /// Return the observed date for a holiday whose nominal date is `date`.
    ///
    /// # Errors
    /// Fails if the shifted date leaves the supported date range.
    pub fn apply(&self, date: Date) -> Result<Date> {
        let shift = match (self, date.weekday()) {
            (ObservedRule::ToMondayIfSunday, Weekday::Sunday) => 1,
            (ObservedRule::ToMondayIfWeekend, Weekday::Saturday) => 2,
            (ObservedRule::ToMondayIfWeekend, Weekday::Sunday) => 1,
            (ObservedRule::ToWeekdayIfWeekend, Weekday::Saturday) => -1,
            (ObservedRule::ToWeekdayIfWeekend, Weekday::Sunday) => 1,
            (ObservedRule::ToWeekdayIfBoxingWeekend, Weekday::Saturday | Weekday::Sunday) => 2,
            (ObservedRule::ToWeekdayIfBoxingWeekend, Weekday::Monday) => 1,
            _ => 0,
        };
        if shift == 0 {
            return Ok(date);
        }
        date.add_days(shift)
    }
}

impl std::fmt::Display for ObservedRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ObservedRule::ToMondayIfSunday => "to Monday if Sunday",
            ObservedRule::ToMondayIfWeekend => "to Monday if weekend",
            ObservedRule::ToWeekdayIfWeekend => "to weekday if weekend",
            ObservedRule::ToWeekdayIfBoxingWeekend => "to weekday if Boxing weekend",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekday_if_weekend() {
        let rule = ObservedRule::ToWeekdayIfWeekend;
        // July 4, 2015 is a Saturday → Friday July 3
        assert_eq!(rule.apply(date(2015, 7, 4)).unwrap(), date(2015, 7, 3));
        // July 4, 2021 is a Sunday → Monday July 5
        assert_eq!(rule.apply(date(2021, 7, 4)).unwrap(), date(2021, 7, 5));
        // Weekdays stay put
        assert_eq!(rule.apply(date(2016, 7, 4)).unwrap(), date(2016, 7, 4));
    }

    #[test]
    fn monday_if_weekend() {
        let rule = ObservedRule::ToMondayIfWeekend;
        // Dec 25, 2021 is a Saturday → Monday Dec 27
        assert_eq!(rule.apply(date(2021, 12, 25)).unwrap(), date(2021, 12, 27));
        assert_eq!(rule.apply(date(2022, 12, 25)).unwrap(), date(2022, 12, 26));
    }

    #[test]
    fn monday_if_sunday_leaves_saturday() {
        let rule = ObservedRule::ToMondayIfSunday;
        assert_eq!(rule.apply(date(2015, 7, 4)).unwrap(), date(2015, 7, 4));
        assert_eq!(rule.apply(date(2015, 5, 3)).unwrap(), date(2015, 5, 4));
    }

    #[test]
    fn boxing_weekend() {
        let rule = ObservedRule::ToWeekdayIfBoxingWeekend;
        // Boxing Day 2021 is a Sunday → Tuesday Dec 28
        assert_eq!(rule.apply(date(2021, 12, 26)).unwrap(), date(2021, 12, 28));
        // Boxing Day 2020 is a Saturday → Monday Dec 28
        assert_eq!(rule.apply(date(2020, 12, 26)).unwrap(), date(2020, 12, 28));
        // Boxing Day 2022 is a Monday (Christmas took it) → Tuesday Dec 27
        assert_eq!(rule.apply(date(2022, 12, 26)).unwrap(), date(2022, 12, 27));
        // Boxing Day 2019 is a Thursday
        assert_eq!(rule.apply(date(2019, 12, 26)).unwrap(), date(2019, 12, 26));
    }
}
