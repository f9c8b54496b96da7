//! # U-Packing Core
//!
//! Item geometry normalization and container identity for 3D container
//! packing.
//!
//! This crate prepares the inputs of a packing run and takes its outputs
//! back. It does not contain a packing heuristic; algorithms plug in through
//! the [`PackingAlgorithm`] trait.
//!
//! ## Core Components
//!
//! - **Items**: `Item` with material-buffer padding and unpadding
//! - **Containers**: `Container` and shape identity (`ContainerShape`, `ByShape`)
//! - **Algorithm boundary**: `PackingAlgorithm`, `AlgorithmId`, `PackOutcome`
//! - **Results**: per-algorithm and per-container packing results
//!
//! All lengths are exact decimals ([`rust_decimal::Decimal`]), so adding and
//! removing a buffer any number of times never drifts.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod algorithm;
pub mod config;
pub mod container;
pub mod error;
pub mod identity;
pub mod item;
pub mod numeric;
pub mod result;

// Re-exports
pub use algorithm::{AlgorithmId, PackOutcome, PackingAlgorithm};
pub use config::Config;
pub use container::Container;
pub use error::{Error, Result};
pub use identity::{
    dedup_by_shape, group_by_shape, same_shape, same_shape_opt, shape_hash, ByShape,
    ContainerShape, ShapeGroup,
};
pub use item::{Item, ItemBuilder};
pub use numeric::{vec3, Vec3};
pub use result::{AlgorithmPackingResult, ContainerPackingResult, PackingSummary};
pub use rust_decimal::Decimal;
