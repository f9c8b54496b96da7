//! Shape identity for containers.
//!
//! Two containers are the same physical box when their length, width and
//! height are exactly equal, whatever their IDs or weight limits. Packing
//! runs once per distinct shape, so callers collapse their container list
//! with [`group_by_shape`] or [`dedup_by_shape`] first.
//!
//! Comparison is exact decimal equality with no tolerance. `10` and `10.0`
//! are equal and hash identically.

use crate::container::Container;
use rust_decimal::Decimal;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The physical envelope of a container, usable as a map or set key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerShape {
    /// Length.
    pub length: Decimal,
    /// Width.
    pub width: Decimal,
    /// Height.
    pub height: Decimal,
}

/// Returns true if `a` and `b` describe the same physical box.
pub fn same_shape(a: &Container, b: &Container) -> bool {
    std::ptr::eq(a, b)
        || (a.length() == b.length() && a.width() == b.width() && a.height() == b.height())
}

/// Shape comparison over possibly absent containers.
///
/// Two absent containers are equal; an absent one never equals a present one.
pub fn same_shape_opt(a: Option<&Container>, b: Option<&Container>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => same_shape(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Feeds the shape of `container` into `state`.
pub fn hash_shape<H: Hasher>(container: &Container, state: &mut H) {
    container.shape().hash(state);
}

/// A standalone hash of the container's shape.
pub fn shape_hash(container: &Container) -> u64 {
    let mut hasher = DefaultHasher::new();
    hash_shape(container, &mut hasher);
    hasher.finish()
}

/// Wraps a container so that `Eq` and `Hash` follow shape identity.
#[derive(Debug, Clone, Copy)]
pub struct ByShape<'a>(pub &'a Container);

impl PartialEq for ByShape<'_> {
    fn eq(&self, other: &Self) -> bool {
        same_shape(self.0, other.0)
    }
}

impl Eq for ByShape<'_> {}

impl Hash for ByShape<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_shape(self.0, state);
    }
}

/// Containers sharing one shape.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeGroup {
    /// The shared envelope.
    pub shape: ContainerShape,
    /// First container seen with this shape.
    pub representative: Container,
    /// IDs of every container with this shape, representative first.
    pub member_ids: Vec<String>,
}

impl ShapeGroup {
    /// IDs of the members other than the representative.
    pub fn equivalent_ids(&self) -> &[String] {
        self.member_ids.get(1..).unwrap_or_default()
    }
}

/// Groups containers by shape, in first-seen order.
pub fn group_by_shape(containers: &[Container]) -> Vec<ShapeGroup> {
    let mut index: HashMap<ContainerShape, usize> = HashMap::new();
    let mut groups: Vec<ShapeGroup> = Vec::new();

    for container in containers {
        let shape = container.shape();
        match index.get(&shape) {
            Some(&i) => groups[i].member_ids.push(container.id().to_string()),
            None => {
                index.insert(shape, groups.len());
                groups.push(ShapeGroup {
                    shape,
                    representative: container.clone(),
                    member_ids: vec![container.id().to_string()],
                });
            }
        }
    }

    groups
}

/// One container per distinct shape, keeping the first of each.
pub fn dedup_by_shape(containers: &[Container]) -> Vec<Container> {
    group_by_shape(containers)
        .into_iter()
        .map(|group| group.representative)
        .collect()
}
