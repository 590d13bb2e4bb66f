//! The region rule registry.
//!
//! [`RuleRegistry`] is an ordered, read-only mapping from a region to the
//! rules registered for it.  The built-in registry is a process-wide
//! singleton built on first use through a `std::sync::OnceLock`, so
//! concurrent first callers all see one fully built instance.

use std::sync::OnceLock;

use crate::region::{Region, RegionSelector};
use crate::regions;
use crate::rule::{HolidayRule, RegionScope};

/// A rule considered for a query, together with the table it came from.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// The rule.
    pub rule: &'a HolidayRule,
    /// Region of the table the rule is registered in.
    pub table: &'a Region,
}

impl Candidate<'_> {
    /// Regions an occurrence of this candidate is reported for: the rule's
    /// declared regions, or the table's region for an exclusion-scoped rule.
    pub fn regions(&self) -> Vec<Region> {
        match self.rule.scope() {
            RegionScope::Included(regions) => regions.clone(),
            RegionScope::ExcludedFrom(_) => vec![self.table.clone()],
        }
    }
}

/// Read-only region → rules mapping.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    tables: Vec<(Region, Vec<HolidayRule>)>,
}

static BUILTIN: OnceLock<RuleRegistry> = OnceLock::new();

impl RuleRegistry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The built-in registry (`us`, `us_dc`, `ca`, `gb` and its subregions,
    /// `jp`).
    pub fn global() -> &'static RuleRegistry {
        BUILTIN.get_or_init(|| {
            let registry = regions::builtin();
            tracing::debug!(
                tables = registry.tables.len(),
                rules = registry.len(),
                "built-in holiday registry initialised"
            );
            registry
        })
    }

    /// Regions that have a table, in registration order.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.tables.iter().map(|(region, _)| region)
    }

    /// Rules registered for exactly `region`.
    pub fn rules_for(&self, region: &Region) -> &[HolidayRule] {
        self.tables
            .iter()
            .find(|(r, _)| r == region)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of registered rules.
    pub fn len(&self) -> usize {
        self.tables.iter().map(|(_, rules)| rules.len()).sum()
    }

    /// Return `true` if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rules that apply to `selector`, in registration order.
    ///
    /// A table is consulted when the selector covers its region; within a
    /// consulted table a rule is kept when its [`RegionScope`] matches.
    pub fn candidates(&self, selector: &RegionSelector) -> Vec<Candidate<'_>> {
        self.tables
            .iter()
            .filter(|(table, _)| selector.covers(table))
            .flat_map(|(table, rules)| rules.iter().map(move |rule| Candidate { rule, table }))
            .filter(|c| c.rule.scope().matches(selector))
            .collect()
    }
}

/// Builder for [`RuleRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    tables: Vec<(Region, Vec<HolidayRule>)>,
}

impl RegistryBuilder {
    /// Register `rules` under `region`.  Registering the same region twice
    /// appends to its table.
    pub fn table(mut self, region: impl Into<Region>, rules: Vec<HolidayRule>) -> Self {
        let region = region.into();
        match self.tables.iter_mut().find(|(r, _)| *r == region) {
            Some((_, existing)) => existing.extend(rules),
            None => self.tables.push((region, rules)),
        }
        self
    }

    /// Finish building.
    pub fn build(self) -> RuleRegistry {
        RuleRegistry {
            tables: self.tables,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hd_time::Month;

    fn registry() -> RuleRegistry {
        RuleRegistry::builder()
            .table(
                "gb",
                vec![
                    HolidayRule::fixed("New Year's Day", Month::January, 1).regions(["gb"]),
                    HolidayRule::easter("Easter Monday", 1).except(["gb_sct"]),
                ],
            )
            .table(
                "gb_sct",
                vec![HolidayRule::fixed("St Andrew's Day", Month::November, 30).regions(["gb_sct"])],
            )
            .table(
                "us",
                vec![HolidayRule::fixed("Independence Day", Month::July, 4).regions(["us"])],
            )
            .build()
    }

    fn names(registry: &RuleRegistry, regions: &[&str]) -> Vec<String> {
        let selector = RegionSelector::new(regions.iter().copied()).unwrap();
        registry
            .candidates(&selector)
            .iter()
            .map(|c| c.rule.name().to_string())
            .collect()
    }

    #[test]
    fn plain_region() {
        assert_eq!(names(&registry(), &["us"]), ["Independence Day"]);
        assert_eq!(names(&registry(), &["gb"]), ["New Year's Day", "Easter Monday"]);
    }

    #[test]
    fn subregion_inherits_parent_and_honours_exclusions() {
        assert_eq!(
            names(&registry(), &["gb_sct"]),
            ["New Year's Day", "St Andrew's Day"]
        );
        assert_eq!(names(&registry(), &["gb_eng"]), ["New Year's Day", "Easter Monday"]);
    }

    #[test]
    fn wildcard_and_unknown_regions() {
        assert_eq!(
            names(&registry(), &["gb_"]),
            ["New Year's Day", "Easter Monday", "St Andrew's Day"]
        );
        assert!(names(&registry(), &["fr"]).is_empty());
    }

    #[test]
    fn exclusion_scoped_rule_reports_its_table() {
        let registry = registry();
        let selector = RegionSelector::new(["gb_eng"]).unwrap();
        let candidates = registry.candidates(&selector);
        assert_eq!(candidates[1].regions(), vec![Region::new("gb")]);
        assert_eq!(candidates[0].regions(), vec![Region::new("gb")]);
    }

    #[test]
    fn tables() {
        let registry = registry();
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.rules_for(&Region::new("gb")).len(), 2);
        assert!(registry.rules_for(&Region::new("fr")).is_empty());
        let regions: Vec<_> = registry.regions().map(Region::as_str).collect();
        assert_eq!(regions, ["gb", "gb_sct", "us"]);
    }

    #[test]
    fn global_registry_is_shared() {
        let a = RuleRegistry::global() as *const RuleRegistry;
        let b = RuleRegistry::global() as *const RuleRegistry;
        assert_eq!(a, b);
        assert!(!RuleRegistry::global().is_empty());
    }
}
