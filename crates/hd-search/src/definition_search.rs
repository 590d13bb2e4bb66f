//! The definition resolution engine.
//!
//! [`DefinitionSearch`] is the seam the query orchestrators call through, so
//! tests can substitute a stub.  [`RuleSearch`] is the real engine: it expands
//! the rules of a [`RuleRegistry`] and any ad hoc rules over every requested
//! (year, month) pair and returns the raw occurrences, unsorted and with
//! nominal dates.

use hd_core::errors::Result;
use hd_definitions::{HolidayOccurrence, HolidayRule, Region, RegionScope, RegionSelector, RuleRegistry};
use hd_time::date::{MAX_YEAR, MIN_YEAR};
use hd_time::Date;

use crate::dates_driver::YearMonthRequest;

/// Expands holiday rules into occurrences.
pub trait DefinitionSearch {
    /// Resolve every rule applicable to `regions`, plus every rule in
    /// `custom_rules`, for each (year, month) in `request`.
    ///
    /// # Errors
    /// [`Computation`](hd_core::Error::Computation) if a rule admits no date
    /// for a year it is evaluated in.  No partial result is returned.
    fn call(
        &self,
        request: &YearMonthRequest,
        regions: &RegionSelector,
        custom_rules: &[HolidayRule],
    ) -> Result<Vec<HolidayOccurrence>>;
}

impl<T: DefinitionSearch + ?Sized> DefinitionSearch for &T {
    fn call(
        &self,
        request: &YearMonthRequest,
        regions: &RegionSelector,
        custom_rules: &[HolidayRule],
    ) -> Result<Vec<HolidayOccurrence>> {
        (**self).call(request, regions, custom_rules)
    }
}

/// Engine backed by a [`RuleRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct RuleSearch<'r> {
    registry: &'r RuleRegistry,
}

impl<'r> RuleSearch<'r> {
    /// Engine over `registry`.
    pub fn new(registry: &'r RuleRegistry) -> Self {
        Self { registry }
    }

    /// The registry this engine reads.
    pub fn registry(&self) -> &'r RuleRegistry {
        self.registry
    }
}

impl RuleSearch<'static> {
    /// Engine over the built-in registry.
    pub fn global() -> Self {
        Self::new(RuleRegistry::global())
    }
}

impl Default for RuleSearch<'static> {
    fn default() -> Self {
        Self::global()
    }
}

/// A rule to expand and the regions its occurrences report.
struct Applicable<'a> {
    rule: &'a HolidayRule,
    regions: Vec<Region>,
    /// Registry table the rule came from; `None` for an ad hoc rule.
    table: Option<&'a Region>,
}

impl Applicable<'_> {
    fn occurrence(&self, date: Date) -> HolidayOccurrence {
        HolidayOccurrence {
            date,
            name: self.rule.name().to_owned(),
            regions: self.regions.clone(),
            informal: self.rule.is_informal(),
            observed: self.rule.observed_rule(),
        }
    }
}

impl RuleSearch<'_> {
    fn applicable<'a>(
        &'a self,
        regions: &RegionSelector,
        custom_rules: &'a [HolidayRule],
    ) -> Vec<Applicable<'a>> {
        let mut applicable: Vec<Applicable<'a>> = Vec::new();
        for candidate in self.registry.candidates(regions) {
            // A rule shared by two consulted tables is expanded once; repeats
            // within one table are kept.
            let shared = applicable.iter().any(|a| {
                a.rule == candidate.rule && a.table.is_some_and(|t| t != candidate.table)
            });
            if shared {
                continue;
            }
            applicable.push(Applicable {
                rule: candidate.rule,
                regions: candidate.regions(),
                table: Some(candidate.table),
            });
        }
        // Ad hoc rules bypass region matching.
        applicable.extend(custom_rules.iter().map(|rule| Applicable {
            rule,
            regions: match rule.scope() {
                RegionScope::Included(declared) => declared.clone(),
                RegionScope::ExcludedFrom(_) => regions.to_vec(),
            },
            table: None,
        }));
        applicable
    }
}

impl DefinitionSearch for RuleSearch<'_> {
    fn call(
        &self,
        request: &YearMonthRequest,
        regions: &RegionSelector,
        custom_rules: &[HolidayRule],
    ) -> Result<Vec<HolidayOccurrence>> {
        let applicable = self.applicable(regions, custom_rules);
        tracing::debug!(
            years = request.len(),
            ?regions,
            rules = applicable.len(),
            custom = custom_rules.len(),
            "expanding holiday rules"
        );

        let mut occurrences = Vec::new();
        for (year, _) in request.iter() {
            let floating = floating_dates(&applicable, year)?;

            for month in request.months(year) {
                for (index, a) in applicable.iter().enumerate() {
                    match a.rule.month() {
                        Some(m) if m == month && a.rule.years().contains(year) => {
                            let date = a.rule.resolve(year)?;
                            tracing::trace!(name = a.rule.name(), %date, "resolved");
                            occurrences.push(a.occurrence(date));
                        }
                        Some(_) => {}
                        None => {
                            let dates = floating
                                .iter()
                                .filter(|&&(i, d)| i == index && d.month_of_year() == month);
                            for &(_, date) in dates {
                                tracing::trace!(name = a.rule.name(), %date, "resolved");
                                occurrences.push(a.occurrence(date));
                            }
                        }
                    }
                }
            }
        }

        tracing::debug!(occurrences = occurrences.len(), "holiday rules expanded");
        Ok(occurrences)
    }
}

/// Dates of the floating rules that fall in `year`, keyed by index into
/// `applicable`.
///
/// A floating rule resolved for a neighbouring year can land in `year` (an
/// Easter offset of a hundred days or more), so the years either side are
/// resolved too.  The rule's year range applies to the year it is resolved
/// for.  Only a failure for `year` itself is an error; the neighbours are
/// looked at speculatively.
fn floating_dates(applicable: &[Applicable<'_>], year: u16) -> Result<Vec<(usize, Date)>> {
    let mut dates = Vec::new();
    for (index, a) in applicable.iter().enumerate() {
        if !a.rule.is_floating() {
            continue;
        }
        for base in year.saturating_sub(1)..=year.saturating_add(1) {
            if !(MIN_YEAR..=MAX_YEAR).contains(&base) || !a.rule.years().contains(base) {
                continue;
            }
            let date = match a.rule.resolve(base) {
                Ok(date) => date,
                Err(e) if base == year => return Err(e),
                Err(_) => continue,
            };
            if date.year() == year {
                dates.push((index, date));
            }
        }
    }
    Ok(dates)
}
