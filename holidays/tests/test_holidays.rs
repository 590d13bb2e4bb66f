//! End-to-end queries through the façade.

use holidays::time::Date;
use holidays::{QueryOptions, Region};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn us_2015_year() {
    init_logging();
    let found = holidays::year_holidays(["us"], date(2015, 3, 1), QueryOptions::default()).unwrap();
    let names: Vec<_> = found.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "New Year's Day",
            "Martin Luther King, Jr. Day",
            "Washington's Birthday",
            "Memorial Day",
            "Independence Day",
            "Labor Day",
            "Columbus Day",
            "Veterans Day",
            "Thanksgiving",
            "Christmas Day",
        ]
    );
}

#[test]
fn observed_new_year_crosses_into_previous_year() {
    init_logging();
    // 2022-01-01 is a Saturday; the US observes it on Friday 2021-12-31.
    let observed = QueryOptions::default().observed();
    let found = holidays::year_holidays(["us"], date(2021, 7, 1), observed).unwrap();
    let last = found.last().unwrap();
    assert_eq!(last.name, "New Year's Day");
    assert_eq!(last.date, date(2021, 12, 31));
    assert!(found.iter().all(|h| h.date.year() == 2021));

    let found = holidays::year_holidays(["us"], date(2022, 7, 1), observed).unwrap();
    assert!(found.iter().all(|h| h.name != "New Year's Day"));
}

#[test]
fn informal_option_adds_observances() {
    let formal = holidays::year_holidays(["us"], date(2015, 1, 1), QueryOptions::default()).unwrap();
    let all = holidays::year_holidays(["us"], date(2015, 1, 1), QueryOptions::default().informal())
        .unwrap();
    assert!(all.len() > formal.len());
    assert!(all.iter().any(|h| h.name == "Halloween" && h.informal));
}

#[test]
fn between_and_on() {
    let found = holidays::between(
        ["gb_sct"],
        date(2015, 12, 1),
        date(2016, 1, 31),
        QueryOptions::default(),
    )
    .unwrap();
    let dates: Vec<_> = found.iter().map(|h| h.date).collect();
    assert_eq!(
        dates,
        [date(2015, 12, 25), date(2015, 12, 26), date(2016, 1, 1), date(2016, 1, 2)]
    );

    let found = holidays::on(["ca"], date(2015, 7, 1), QueryOptions::default()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Canada Day");
    assert_eq!(found[0].regions, [Region::new("ca")]);

    assert!(holidays::on(["ca"], date(2015, 7, 2), QueryOptions::default())
        .unwrap()
        .is_empty());
}

#[test]
fn invalid_input_is_rejected() {
    let opts = QueryOptions::default();
    assert!(holidays::year_holidays(["us"], Date::NULL, opts)
        .unwrap_err()
        .is_invalid_argument());
    assert!(holidays::year_holidays(Vec::<Region>::new(), date(2015, 1, 1), opts)
        .unwrap_err()
        .is_invalid_argument());
    assert!(holidays::between(["us"], date(2016, 1, 1), date(2015, 1, 1), opts)
        .unwrap_err()
        .is_invalid_argument());
}

#[test]
fn available_regions_lists_builtin_tables() {
    let regions = holidays::available_regions();
    assert!(regions.contains(&Region::new("jp")));
    assert!(regions.contains(&Region::new("gb_sct")));
    assert_eq!(regions.len(), 7);
}
