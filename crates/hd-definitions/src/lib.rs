//! # hd-definitions
//!
//! Declarative holiday rules and the read-only registry that maps regions to
//! them.
//!
//! A [`HolidayRule`] says *when* a holiday falls (a closed set of
//! [`DayResolution`] strategies), *where* it applies ([`RegionScope`]), whether
//! it is informal, and how it moves when it lands on a weekend
//! ([`ObservedRule`]).  Resolving a rule for a year yields a
//! [`HolidayOccurrence`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Weekend-shifting rules for observed dates.
pub mod observed;

/// `HolidayOccurrence`: a rule resolved to a concrete date.
pub mod occurrence;

/// Region identifiers and caller region selectors.
pub mod region;

/// Built-in region rule tables.
pub mod regions;

/// `RuleRegistry`: read-only region → rules mapping.
pub mod registry;

/// `HolidayRule` and its resolution strategies.
pub mod rule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use observed::ObservedRule;
pub use occurrence::HolidayOccurrence;
pub use region::{Region, RegionSelector};
pub use registry::{Candidate, RegistryBuilder, RuleRegistry};
pub use rule::{Computation, DayResolution, HolidayRule, RegionScope, YearRange};
