//! United Kingdom holiday rules.
//!
//! Bank holidays common to the whole UK are registered under `gb`; a few of
//! them are not observed in Scotland and are scoped "everywhere except
//! `gb_sct`".  Scotland and Northern Ireland add tables of their own.

use hd_time::{Month, Weekday};

use crate::observed::ObservedRule;
use crate::rule::HolidayRule;

/// UK-wide bank holidays (`gb`).
///
/// * New Year's Day (Jan 1; weekend → Monday)
/// * Good Friday
/// * Easter Monday (not Scotland)
/// * Early May Bank Holiday (1st Mon in May, from 1978)
/// * Spring Bank Holiday (last Mon in May, from 1971)
/// * Summer Bank Holiday (last Mon in Aug, from 1971; not Scotland)
/// * Christmas Day (Dec 25; weekend → Monday)
/// * Boxing Day (Dec 26; moves past Christmas when either is on a weekend)
pub fn definitions() -> Vec<HolidayRule> {
    use Month::*;
    use ObservedRule::*;
    use Weekday::*;

    let gb = |rule: HolidayRule| rule.regions(["gb"]);
    vec![
        gb(HolidayRule::fixed("New Year's Day", January, 1).observed(ToMondayIfWeekend)),
        gb(HolidayRule::easter("Good Friday", -2)),
        HolidayRule::easter("Easter Monday", 1).except(["gb_sct"]),
        gb(HolidayRule::nth_weekday("Early May Bank Holiday", May, 1, Monday).from_year(1978)),
        gb(HolidayRule::last_weekday("Spring Bank Holiday", May, 1, Monday).from_year(1971)),
        HolidayRule::last_weekday("Summer Bank Holiday", August, 1, Monday)
            .except(["gb_sct"])
            .from_year(1971),
        gb(HolidayRule::fixed("Christmas Day", December, 25).observed(ToMondayIfWeekend)),
        gb(HolidayRule::fixed("Boxing Day", December, 26).observed(ToWeekdayIfBoxingWeekend)),
    ]
}

/// Scotland (`gb_sct`).
///
/// * 2nd January (moves past New Year's Day like Boxing Day past Christmas)
/// * Summer Bank Holiday (1st Mon in Aug)
/// * St Andrew's Day (Nov 30, from 2007; weekend → Monday)
pub fn scotland() -> Vec<HolidayRule> {
    use Month::*;
    use ObservedRule::*;

    let sct = |rule: HolidayRule| rule.regions(["gb_sct"]);
    vec![
        sct(HolidayRule::fixed("2nd January", January, 2).observed(ToWeekdayIfBoxingWeekend)),
        sct(HolidayRule::nth_weekday("Summer Bank Holiday", August, 1, Weekday::Monday)),
        sct(HolidayRule::fixed("St Andrew's Day", November, 30)
            .from_year(2007)
            .observed(ToMondayIfWeekend)),
    ]
}

/// Northern Ireland (`gb_nir`).
///
/// * St Patrick's Day (Mar 17; weekend → Monday)
/// * Battle of the Boyne (Jul 12; weekend → Monday)
pub fn northern_ireland() -> Vec<HolidayRule> {
    use Month::*;
    use ObservedRule::*;

    let nir = |rule: HolidayRule| rule.regions(["gb_nir"]);
    vec![
        nir(HolidayRule::fixed("St Patrick's Day", March, 17).observed(ToMondayIfWeekend)),
        nir(HolidayRule::fixed("Battle of the Boyne", July, 12).observed(ToMondayIfWeekend)),
    ]
}
