//! # hd-time
//!
//! Date primitives and the date computations holiday rules are built from:
//! nth weekday of a month (from either end), Easter Sunday, and the
//! equinox approximations.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Western (Gregorian) Easter.
pub mod easter;

/// Vernal and autumnal equinox days.
pub mod equinox;

/// `Month`: month of the year.
pub mod month;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use easter::easter_sunday;
pub use equinox::{autumnal_equinox_day, vernal_equinox_day};
pub use month::Month;
pub use weekday::Weekday;
