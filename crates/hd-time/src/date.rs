//! `Date` type.
//!
//! Dates are stored as a serial number of days.  Serial 1 is
//! **January 1, 1900** (a Monday); serial 0 is reserved as the "null date"
//! sentinel, used by callers to signal a missing date.
//!
//! The supported range is 1900-01-01 to 2199-12-31.

use std::str::FromStr;

use crate::month::Month;
use crate::weekday::Weekday;
use hd_core::errors::{Error, Result};

/// First supported year.
pub const MIN_YEAR: u16 = 1900;

/// Last supported year.
pub const MAX_YEAR: u16 = 2199;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

impl Date {
    /// The null date sentinel (serial 0).
    pub const NULL: Date = Date(0);

    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `true` if this is the null date sentinel.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month()).unwrap_or(Month::January)
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 is a Monday, and Weekday ordinals run 1 (Mon) ..= 7 (Sun).
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).unwrap_or(Weekday::Monday)
    }

    /// Return `true` if the date falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Move by `n` days (negative `n` moves backwards).
    ///
    /// Returns an error if the result leaves the supported range or if `self`
    /// is the null date.
    pub fn add_days(self, n: i32) -> Result<Self> {
        if self.is_null() {
            return Err(Error::Date("arithmetic on the null date".into()));
        }
        let serial = self.0 + n;
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "{self} shifted by {n} days is out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the *n*-th occurrence of `weekday` in `year`/`month`, counting
    /// from the start of the month.
    ///
    /// `nth_weekday(3, Weekday::Monday, 2015, 1)` is Martin Luther King Jr.
    /// Day 2015 (January 19).
    ///
    /// # Errors
    /// Fails if `n` is zero or the month has fewer than `n` such weekdays.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let day = 1 + first.weekday().days_until(weekday) as u16 + 7 * (n as u16 - 1);
        if day > days_in_month(year, month) as u16 {
            return Err(Error::Date(format!(
                "{} {weekday} does not exist in {year}-{month:02}",
                ordinal_word(n)
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }

    /// Return the *n*-th occurrence of `weekday` in `year`/`month`, counting
    /// back from the end of the month (`n = 1` is the last one).
    ///
    /// # Errors
    /// Fails if `n` is zero or the month has fewer than `n` such weekdays.
    pub fn last_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("last_weekday: n must be >= 1".into()));
        }
        let last_day = days_in_month(year, month);
        let last = Date::from_ymd(year, month, last_day)?;
        let back = weekday.days_until(last.weekday()) as u16 + 7 * (n as u16 - 1);
        if back >= last_day as u16 {
            return Err(Error::Date(format!(
                "{} {weekday} from the end does not exist in {year}-{month:02}",
                ordinal_word(n)
            )));
        }
        Date::from_ymd(year, month, last_day - back as u8)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Parsing / display ─────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse `YYYY-MM-DD` (leading zeros on month and day are optional).
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        let [y, m, d] = parts.as_slice() else {
            return Err(Error::Date(format!("cannot parse {s:?} as YYYY-MM-DD")));
        };
        let parse = |field: &str, what: &str| -> Result<u16> {
            field
                .parse::<u16>()
                .map_err(|_| Error::Date(format!("invalid {what} {field:?} in {s:?}")))
        };
        let (y, m, d) = (parse(*y, "year")?, parse(*m, "month")?, parse(*d, "day")?);
        if m > 12 || d > 31 {
            return Err(Error::Date(format!("invalid date {s:?}")));
        }
        Date::from_ymd(y, m as u8, d as u8)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "null date");
        }
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.  Returns 0 for an invalid month.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn ordinal_word(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Days from 1970-01-01 to the given proleptic Gregorian date.
fn days_from_civil(year: i32, month: i32, day: i32) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i32) -> (i32, i32, i32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y, m, d)
}

/// Days from 1970-01-01 back to 1899-12-31 (serial 0).
const EPOCH_OFFSET: i32 = -25_568;

fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    days_from_civil(year as i32, month as i32, day as i32) - EPOCH_OFFSET
}

fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let (y, m, d) = civil_from_days(serial + EPOCH_OFFSET);
    (y as u16, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
