//! Japan holiday rules.
//!
//! Fixed-date holidays that fall on a Sunday are observed on the following
//! Monday (*furikae kyūjitsu*).  The one-off moves of 2019–2021 are not
//! modelled.

use hd_time::{Month, Weekday};

use crate::observed::ObservedRule;
use crate::rule::{Computation, HolidayRule};

/// National holidays of Japan (`jp`).
pub fn definitions() -> Vec<HolidayRule> {
    use Month::*;
    use Weekday::Monday;

    let jp = |rule: HolidayRule| rule.regions(["jp"]).observed(ObservedRule::ToMondayIfSunday);
    vec![
        jp(HolidayRule::fixed("New Year's Day", January, 1)),
        jp(HolidayRule::fixed("Coming of Age Day", January, 15).until_year(1999)),
        jp(HolidayRule::nth_weekday("Coming of Age Day", January, 2, Monday).from_year(2000)),
        jp(HolidayRule::fixed("National Foundation Day", February, 11).from_year(1967)),
        jp(HolidayRule::fixed("Emperor's Birthday", February, 23).from_year(2020)),
        jp(HolidayRule::computed("Vernal Equinox Day", March, Computation::VernalEquinox)),
        jp(HolidayRule::fixed("Greenery Day", April, 29).from_year(1989).until_year(2006)),
        jp(HolidayRule::fixed("Showa Day", April, 29).from_year(2007)),
        jp(HolidayRule::fixed("Constitution Memorial Day", May, 3)),
        jp(HolidayRule::fixed("Greenery Day", May, 4).from_year(2007)),
        jp(HolidayRule::fixed("Children's Day", May, 5)),
        jp(HolidayRule::fixed("Marine Day", July, 20).from_year(1996).until_year(2002)),
        jp(HolidayRule::nth_weekday("Marine Day", July, 3, Monday).from_year(2003)),
        jp(HolidayRule::fixed("Mountain Day", August, 11).from_year(2016)),
        jp(HolidayRule::fixed("Respect for the Aged Day", September, 15)
            .from_year(1966)
            .until_year(2002)),
        jp(HolidayRule::nth_weekday("Respect for the Aged Day", September, 3, Monday)
            .from_year(2003)),
        jp(HolidayRule::computed("Autumnal Equinox Day", September, Computation::AutumnalEquinox)),
        jp(HolidayRule::fixed("Sports Day", October, 10).from_year(1966).until_year(1999)),
        jp(HolidayRule::nth_weekday("Sports Day", October, 2, Monday).from_year(2000)),
        jp(HolidayRule::fixed("Culture Day", November, 3)),
        jp(HolidayRule::fixed("Labour Thanksgiving Day", November, 23)),
        jp(HolidayRule::fixed("Emperor's Birthday", December, 23)
            .from_year(1989)
            .until_year(2018)),
    ]
}
