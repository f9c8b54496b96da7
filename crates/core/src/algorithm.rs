//! The boundary between item preparation and packing heuristics.
//!
//! No heuristic lives in this crate. An algorithm receives a container and
//! a set of padded items by value, decides placements, and hands the same
//! items back split into packed and unpacked. Ownership passing keeps each
//! item with exactly one worker for a pad, pack, unpad cycle.

use crate::container::Container;
use crate::item::Item;
use crate::Result;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a packing algorithm.
///
/// The set is open: [`AlgorithmId::EB_AFIT`] is the one built-in value and
/// further identifiers can be registered at runtime. Existing values are
/// never renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AlgorithmId(pub u32);

impl AlgorithmId {
    /// The EB-AFIT layer-building heuristic.
    pub const EB_AFIT: AlgorithmId = AlgorithmId(1);

    /// Returns the numeric value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Name of a built-in identifier, if this is one.
    pub fn builtin_name(self) -> Option<&'static str> {
        match self {
            Self::EB_AFIT => Some("EB-AFIT"),
            _ => None,
        }
    }
}

impl From<u32> for AlgorithmId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.builtin_name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "#{}", self.0),
        }
    }
}

/// Items handed back by an algorithm.
#[derive(Debug, Clone, Default)]
pub struct PackOutcome {
    /// Items that were placed, annotated with coordinates and packed dims.
    pub packed: Vec<Item>,
    /// Items that did not fit.
    pub unpacked: Vec<Item>,
}

impl PackOutcome {
    /// Creates an outcome from its two halves.
    pub fn new(packed: Vec<Item>, unpacked: Vec<Item>) -> Self {
        Self { packed, unpacked }
    }

    /// Total units (sum of quantities) across both halves.
    pub fn unit_count(&self) -> u64 {
        count_units(self.packed.iter().chain(&self.unpacked))
    }
}

/// Sum of quantities.
pub fn count_units<'a>(items: impl IntoIterator<Item = &'a Item>) -> u64 {
    items.into_iter().map(|item| u64::from(item.quantity())).sum()
}

/// A 3D packing heuristic.
pub trait PackingAlgorithm: Send + Sync {
    /// Identifier this algorithm is registered under.
    fn id(&self) -> AlgorithmId;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Packs `items` (see [`Item::is_pack_ready`]) into `container`.
    ///
    /// Every unit received must come back, either in `packed` with its
    /// placement set or in `unpacked`. Quantities may be split across
    /// returned items but their sum must not change.
    fn pack(&self, container: &Container, items: Vec<Item>) -> Result<PackOutcome>;
}
