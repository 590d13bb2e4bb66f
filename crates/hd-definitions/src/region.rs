//! Region identifiers and caller region selectors.
//!
//! Regions are opaque lower-case codes such as `us`, `gb` or `gb_sct`.  An
//! underscore separates a subregion from its parent, so `gb_sct` lies within
//! `gb`.  In a selector, a trailing underscore (`gb_`) is a wildcard for the
//! region and all of its subregions.

use std::borrow::Cow;
use std::collections::BTreeSet;

use hd_core::ensure;
use hd_core::errors::Result;

/// A region identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Region(Cow<'static, str>);

impl Region {
    /// Create a region from a code, normalising it to lower case.
    pub fn new(code: impl AsRef<str>) -> Self {
        Region(Cow::Owned(code.as_ref().trim().to_ascii_lowercase()))
    }

    /// Create a region from a code known to be lower case already.
    pub const fn from_static(code: &'static str) -> Self {
        Region(Cow::Borrowed(code))
    }

    /// The region code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return `true` for a wildcard selector entry such as `gb_`.
    pub fn is_wildcard(&self) -> bool {
        self.0.len() > 1 && self.0.ends_with('_')
    }

    /// Return `true` if `self` is `parent` or one of its subregions.
    ///
    /// `gb_sct` is within `gb`; `gbx` is not.
    pub fn is_within(&self, parent: &Region) -> bool {
        within(&self.0, &parent.0)
    }

    /// Return `true` if this selector entry picks up rules declared for
    /// `declared`.
    ///
    /// A plain entry picks up its own rules and those of its parents; a
    /// wildcard entry picks up the base region and every subregion.
    pub fn covers(&self, declared: &Region) -> bool {
        if self.is_wildcard() {
            within(&declared.0, &self.0[..self.0.len() - 1])
        } else {
            self.is_within(declared)
        }
    }
}

fn within(code: &str, parent: &str) -> bool {
    match code.strip_prefix(parent) {
        Some(rest) => rest.is_empty() || rest.starts_with('_'),
        None => false,
    }
}

impl From<&str> for Region {
    fn from(code: &str) -> Self {
        Region::new(code)
    }
}

impl From<String> for Region {
    fn from(code: String) -> Self {
        Region::new(code)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The non-empty set of regions a caller asks about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSelector(BTreeSet<Region>);

impl RegionSelector {
    /// Build a selector.
    ///
    /// # Errors
    /// [`InvalidArgument`](hd_core::Error::InvalidArgument) if `regions` is
    /// empty or contains a blank code.
    pub fn new<I, R>(regions: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<Region>,
    {
        let set: BTreeSet<Region> = regions.into_iter().map(Into::into).collect();
        ensure!(!set.is_empty(), "regions must not be empty");
        ensure!(
            set.iter().all(|r| !r.as_str().is_empty() && r.as_str() != "_"),
            "regions must not contain blank codes"
        );
        Ok(RegionSelector(set))
    }

    /// Iterate over the selected regions in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.0.iter()
    }

    /// Number of selected regions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a selector cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return `true` if any entry covers `declared` (see [`Region::covers`]).
    pub fn covers(&self, declared: &Region) -> bool {
        self.0.iter().any(|r| r.covers(declared))
    }

    /// Return `true` if the selector explicitly names `region` or one of its
    /// subregions.  Wildcard entries never name anything.
    pub fn names(&self, region: &Region) -> bool {
        self.0
            .iter()
            .any(|r| !r.is_wildcard() && r.is_within(region))
    }

    /// The selected regions as a vector.
    pub fn to_vec(&self) -> Vec<Region> {
        self.0.iter().cloned().collect()
    }
}
