//! # U-Packing
//!
//! Item normalization and container identity for 3D container packing.
//!
//! This crate provides:
//! - **Material-buffer padding**: exact decimal padding and unpadding of item dimensions
//! - **Shape identity**: deduplication of containers that are the same physical box
//! - **Orchestration**: running registered packing algorithms over items and containers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use u_packing::d3::{AlgorithmRegistry, Packer3D};
//! use u_packing::{Container, Decimal, Item};
//!
//! let item = Item::builder("A", Decimal::from(3), Decimal::from(4), Decimal::from(5))
//!     .quantity(2)
//!     .material_buffer(Decimal::ONE)
//!     .build()?;
//! let container = Container::new("BOX-1", Decimal::from(10), Decimal::from(10), Decimal::from(10))?;
//!
//! let mut registry = AlgorithmRegistry::new();
//! registry.register(my_algorithm)?;
//! let results = Packer3D::with_registry(registry).pack(&[container], &[item])?;
//! ```
//!
//! ## Feature Flags
//!
//! - `d3` (default): algorithm registry and packing orchestration
//! - `serde`: Serialization support

/// Core items, containers and identity rules.
pub use u_packing_core as core;

/// Packing orchestration.
#[cfg(feature = "d3")]
pub use u_packing_d3 as d3;

// Re-export commonly used types at root level
pub use u_packing_core::{
    AlgorithmId, Config, Container, ContainerShape, Decimal, Error, Item, PackingAlgorithm, Result,
};
