//! United States holiday rules.

use hd_time::{Month, Weekday};

use crate::observed::ObservedRule;
use crate::rule::HolidayRule;

/// Federal holidays plus common informal observances for `us`.
///
/// Federal (fixed-date ones shift Saturday → Friday, Sunday → Monday):
/// * New Year's Day (Jan 1)
/// * Martin Luther King Jr. Day (3rd Mon in Jan, from 1986)
/// * Washington's Birthday (Feb 22 until 1970; 3rd Mon in Feb since)
/// * Memorial Day (May 30 until 1970; last Mon in May since)
/// * Juneteenth (Jun 19, from 2021)
/// * Independence Day (Jul 4)
/// * Labor Day (1st Mon in Sep)
/// * Columbus Day (Oct 12 until 1970; 2nd Mon in Oct since)
/// * Veterans Day (Nov 11; 4th Mon in Oct 1971–1977)
/// * Thanksgiving (4th Thu in Nov)
/// * Christmas Day (Dec 25)
///
/// Informal: Groundhog Day, Valentine's Day, St. Patrick's Day, Easter
/// Sunday, Mother's Day, Father's Day, Halloween.
pub fn definitions() -> Vec<HolidayRule> {
    use Month::*;
    use ObservedRule::ToWeekdayIfWeekend;
    use Weekday::*;

    let us = |rule: HolidayRule| rule.regions(["us"]);
    vec![
        us(HolidayRule::fixed("New Year's Day", January, 1).observed(ToWeekdayIfWeekend)),
        us(HolidayRule::nth_weekday("Martin Luther King, Jr. Day", January, 3, Monday).from_year(1986)),
        us(HolidayRule::fixed("Groundhog Day", February, 2).informal()),
        us(HolidayRule::fixed("Valentine's Day", February, 14).informal()),
        us(HolidayRule::fixed("Washington's Birthday", February, 22).until_year(1970)),
        us(HolidayRule::nth_weekday("Washington's Birthday", February, 3, Monday).from_year(1971)),
        us(HolidayRule::fixed("St. Patrick's Day", March, 17).informal()),
        us(HolidayRule::easter("Easter Sunday", 0).informal()),
        us(HolidayRule::nth_weekday("Mother's Day", May, 2, Sunday).informal()),
        us(HolidayRule::fixed("Memorial Day", May, 30).until_year(1970)),
        us(HolidayRule::last_weekday("Memorial Day", May, 1, Monday).from_year(1971)),
        us(HolidayRule::nth_weekday("Father's Day", June, 3, Sunday).informal()),
        us(HolidayRule::fixed("Juneteenth National Independence Day", June, 19)
            .from_year(2021)
            .observed(ToWeekdayIfWeekend)),
        us(HolidayRule::fixed("Independence Day", July, 4).observed(ToWeekdayIfWeekend)),
        us(HolidayRule::nth_weekday("Labor Day", September, 1, Monday)),
        us(HolidayRule::fixed("Columbus Day", October, 12).until_year(1970)),
        us(HolidayRule::nth_weekday("Columbus Day", October, 2, Monday).from_year(1971)),
        us(HolidayRule::nth_weekday("Veterans Day", October, 4, Monday)
            .from_year(1971)
            .until_year(1977)),
        us(HolidayRule::fixed("Halloween", October, 31).informal()),
        us(HolidayRule::fixed("Veterans Day", November, 11)
            .until_year(1970)
            .observed(ToWeekdayIfWeekend)),
        us(HolidayRule::fixed("Veterans Day", November, 11)
            .from_year(1978)
            .observed(ToWeekdayIfWeekend)),
        us(HolidayRule::nth_weekday("Thanksgiving", November, 4, Thursday)),
        us(HolidayRule::fixed("Christmas Day", December, 25).observed(ToWeekdayIfWeekend)),
    ]
}

/// District of Columbia (`us_dc`), on top of the federal holidays.
///
/// * DC Emancipation Day (Apr 16, from 2005; Saturday → Friday, Sunday → Monday)
pub fn district_of_columbia() -> Vec<HolidayRule> {
    vec![HolidayRule::fixed("DC Emancipation Day", Month::April, 16)
        .regions(["us_dc"])
        .from_year(2005)
        .observed(ObservedRule::ToWeekdayIfWeekend)]
}
