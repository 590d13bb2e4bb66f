//! Built-in region rule tables.
//!
//! Each submodule holds the rules of one country and its subregions as plain
//! data.  [`builtin`] assembles them into the registry behind
//! [`RuleRegistry::global`](crate::registry::RuleRegistry::global).

use crate::registry::RuleRegistry;

/// Canada.
pub mod canada;

/// Japan.
pub mod japan;

/// United Kingdom and its constituent countries.
pub mod united_kingdom;

/// United States and the District of Columbia.
pub mod united_states;

/// Assemble every built-in table.
pub(crate) fn builtin() -> RuleRegistry {
    RuleRegistry::builder()
        .table("us", united_states::definitions())
        .table("us_dc", united_states::district_of_columbia())
        .table("ca", canada::definitions())
        .table("gb", united_kingdom::definitions())
        .table("gb_sct", united_kingdom::scotland())
        .table("gb_nir", united_kingdom::northern_ireland())
        .table("jp", japan::definitions())
        .build()
}
