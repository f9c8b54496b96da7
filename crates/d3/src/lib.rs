//! # U-Packing 3D
//!
//! Algorithm registry and pad, pack, unpad orchestration for 3D container
//! packing.
//!
//! This crate does not ship a packing heuristic. Register implementations of
//! [`PackingAlgorithm`] in an [`AlgorithmRegistry`] and hand it to a
//! [`Packer3D`].

pub mod packer;
pub mod registry;

// Re-exports
pub use packer::Packer3D;
pub use registry::AlgorithmRegistry;
pub use u_packing_core::{
    AlgorithmId, AlgorithmPackingResult, Config, Container, ContainerPackingResult, Error, Item,
    PackOutcome, PackingAlgorithm, Result,
};
