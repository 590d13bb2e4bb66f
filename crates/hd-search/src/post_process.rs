//! Narrowing and ordering of raw engine output, shared by the queries.

use hd_core::errors::Result;
use hd_definitions::HolidayOccurrence;
use hd_time::Date;

/// Drop informal occurrences unless `informal`, move occurrences to their
/// observed date when `observed`, keep those whose final date passes `keep`,
/// and sort by date.  The sort is stable: occurrences on the same date keep
/// the engine's order.
pub(crate) fn finish(
    raw: Vec<HolidayOccurrence>,
    observed: bool,
    informal: bool,
    keep: impl Fn(Date) -> bool,
) -> Result<Vec<HolidayOccurrence>> {
    let mut holidays = Vec::with_capacity(raw.len());
    for mut holiday in raw {
        if holiday.informal && !informal {
            continue;
        }
        if observed {
            holiday.date = holiday.observed_date()?;
        }
        if keep(holiday.date) {
            holidays.push(holiday);
        }
    }
    holidays.sort_by_key(|h| h.date);
    Ok(holidays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hd_definitions::ObservedRule;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn holiday(d: Date, name: &str) -> HolidayOccurrence {
        HolidayOccurrence::new(d, name, ["us"])
    }

    #[test]
    fn filters_then_sorts_stably() {
        let raw = vec![
            holiday(date(2015, 7, 4), "b"),
            holiday(date(2015, 1, 1), "a"),
            holiday(date(2015, 7, 4), "c"),
            holiday(date(2015, 2, 14), "d").with_informal(true),
        ];
        let out = finish(raw, false, false, |_| true).unwrap();
        let names: Vec<_> = out.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn keep_sees_observed_date() {
        // 2022-01-01 is a Saturday, observed on Friday 2021-12-31.
        let raw = vec![
            holiday(date(2021, 12, 31), "Dec 31 2021 (Friday)"),
            holiday(date(2022, 1, 1), "New Year 2022 (Saturday)")
                .with_observed(Some(ObservedRule::ToWeekdayIfWeekend)),
        ];
        let in_2021 = |d: Date| d.year() == 2021;

        let nominal = finish(raw.clone(), false, false, in_2021).unwrap();
        assert_eq!(nominal.len(), 1);

        let observed = finish(raw, true, false, in_2021).unwrap();
        assert_eq!(observed.len(), 2);
        assert_eq!(observed[1].date, date(2021, 12, 31));
        assert_eq!(observed[1].name, "New Year 2022 (Saturday)");
    }
}
