//! Canada holiday rules.

use hd_time::{Month, Weekday};

use crate::observed::ObservedRule;
use crate::rule::HolidayRule;

/// Federal statutory holidays for `ca`.
///
/// * New Year's Day (Jan 1; weekend → Monday)
/// * Good Friday
/// * Victoria Day (Monday before May 25)
/// * Canada Day (Jul 1; Sunday → Monday)
/// * Labour Day (1st Mon in Sep)
/// * National Day for Truth and Reconciliation (Sep 30, from 2021)
/// * Thanksgiving (2nd Mon in Oct)
/// * Remembrance Day (Nov 11; weekend → Monday)
/// * Christmas Day (Dec 25; weekend → Monday)
/// * Boxing Day (Dec 26)
///
/// Groundhog Day is listed as informal.
pub fn definitions() -> Vec<HolidayRule> {
    use Month::*;
    use ObservedRule::*;
    use Weekday::*;

    let ca = |rule: HolidayRule| rule.regions(["ca"]);
    vec![
        ca(HolidayRule::fixed("New Year's Day", January, 1).observed(ToMondayIfWeekend)),
        ca(HolidayRule::fixed("Groundhog Day", February, 2).informal()),
        ca(HolidayRule::easter("Good Friday", -2)),
        // The second-to-last Monday of May always falls on the 18th–24th.
        ca(HolidayRule::last_weekday("Victoria Day", May, 2, Monday)),
        ca(HolidayRule::fixed("Canada Day", July, 1).observed(ToMondayIfSunday)),
        ca(HolidayRule::nth_weekday("Labour Day", September, 1, Monday)),
        ca(HolidayRule::fixed("National Day for Truth and Reconciliation", September, 30)
            .from_year(2021)),
        ca(HolidayRule::nth_weekday("Thanksgiving", October, 2, Monday)),
        ca(HolidayRule::fixed("Remembrance Day", November, 11).observed(ToMondayIfWeekend)),
        ca(HolidayRule::fixed("Christmas Day", December, 25).observed(ToMondayIfWeekend)),
        ca(HolidayRule::fixed("Boxing Day", December, 26).observed(ToWeekdayIfBoxingWeekend)),
    ]
}
