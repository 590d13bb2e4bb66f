//! Vernal and autumnal equinox days.
//!
//! The day of month is taken from the customary approximation
//! `⌊a + 0.242194·(y − 1980) − ⌊(y − b)/4⌋⌋`, whose constants depend on
//! the era.  Good to the day for 1900–2150; later years reuse the last
//! era's constants.

/// (last year of era, vernal constant, autumnal constant, leap base year)
const ERAS: [(u16, f64, f64, i32); 3] = [
    (1979, 20.8357, 23.2588, 1983),
    (2099, 20.8431, 23.2488, 1980),
    (u16::MAX, 21.8510, 24.2488, 1980),
];

fn approximate(year: u16, pick: impl Fn(&(u16, f64, f64, i32)) -> f64) -> u8 {
    let era = ERAS
        .iter()
        .find(|(last, ..)| year <= *last)
        .unwrap_or(&ERAS[ERAS.len() - 1]);
    let y = year as i32;
    // Integer division truncates toward zero, as the formula requires for
    // years before the leap base.
    let leap = (y - era.3) / 4;
    (pick(era) + 0.242194 * (y - 1980) as f64 - leap as f64) as u8
}

/// Day of March on which the vernal equinox falls in `year`.
pub fn vernal_equinox_day(year: u16) -> u8 {
    approximate(year, |era| era.1)
}

/// Day of September on which the autumnal equinox falls in `year`.
pub fn autumnal_equinox_day(year: u16) -> u8 {
    approximate(year, |era| era.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vernal() {
        assert_eq!(vernal_equinox_day(1960), 20);
        assert_eq!(vernal_equinox_day(2015), 21);
        assert_eq!(vernal_equinox_day(2020), 20);
        assert_eq!(vernal_equinox_day(2023), 21);
    }

    #[test]
    fn autumnal() {
        assert_eq!(autumnal_equinox_day(2015), 23);
        assert_eq!(autumnal_equinox_day(2020), 22);
        assert_eq!(autumnal_equinox_day(2023), 23);
    }
}
