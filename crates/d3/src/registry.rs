//! Runtime registry of packing algorithms.

use std::collections::BTreeMap;
use std::fmt;
use u_packing_core::{AlgorithmId, Error, PackingAlgorithm, Result};

/// Maps [`AlgorithmId`]s to algorithm implementations.
///
/// Identifiers are not restricted to the built-in ones, so downstream crates
/// can add algorithms without touching this crate.
#[derive(Default)]
pub struct AlgorithmRegistry {
    algorithms: BTreeMap<AlgorithmId, Box<dyn PackingAlgorithm>>,
}

impl AlgorithmRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an algorithm under its own ID.
    ///
    /// Fails if the ID is already taken.
    pub fn register(&mut self, algorithm: impl PackingAlgorithm + 'static) -> Result<()> {
        self.register_boxed(Box::new(algorithm))
    }

    /// Registers a boxed algorithm under its own ID.
    pub fn register_boxed(&mut self, algorithm: Box<dyn PackingAlgorithm>) -> Result<()> {
        let id = algorithm.id();
        if let Some(existing) = self.algorithms.get(&id) {
            return Err(Error::ConfigError(format!(
                "Algorithm ID {} is already registered to '{}'",
                id,
                existing.name()
            )));
        }

        log::debug!("Registered packing algorithm '{}' as {}", algorithm.name(), id);
        self.algorithms.insert(id, algorithm);
        Ok(())
    }

    /// Removes and returns the algorithm registered under `id`.
    pub fn unregister(&mut self, id: AlgorithmId) -> Option<Box<dyn PackingAlgorithm>> {
        self.algorithms.remove(&id)
    }

    /// Looks up an algorithm.
    pub fn get(&self, id: AlgorithmId) -> Option<&dyn PackingAlgorithm> {
        self.algorithms.get(&id).map(|a| a.as_ref())
    }

    /// Looks up an algorithm, failing if it is not registered.
    pub fn resolve(&self, id: AlgorithmId) -> Result<&dyn PackingAlgorithm> {
        self.get(id).ok_or(Error::UnknownAlgorithm(id.value()))
    }

    /// Returns true if `id` is registered.
    pub fn contains(&self, id: AlgorithmId) -> bool {
        self.algorithms.contains_key(&id)
    }

    /// Registered IDs in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = AlgorithmId> + '_ {
        self.algorithms.keys().copied()
    }

    /// Number of registered algorithms.
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

impl fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.algorithms.iter().map(|(id, a)| (id, a.name())))
            .finish()
    }
}
