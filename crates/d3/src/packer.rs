//! 3D container packing orchestration.
//!
//! [`Packer3D`] runs the pad, pack, unpad cycle: it collapses containers that
//! share a shape, hands every selected algorithm its own padded copy of the
//! items, checks that the algorithm returned every unit, and converts the
//! results back to unpadded coordinates.

use crate::registry::AlgorithmRegistry;
use u_packing_core::algorithm::count_units;
use u_packing_core::{
    group_by_shape, AlgorithmPackingResult, Config, Container, ContainerPackingResult, Error,
    Item, PackingAlgorithm, Result, ShapeGroup,
};

use std::time::Instant;

/// 3D container packing service.
#[derive(Debug)]
pub struct Packer3D {
    config: Config,
    registry: AlgorithmRegistry,
}

impl Packer3D {
    /// Creates a packer with the given configuration and algorithms.
    pub fn new(config: Config, registry: AlgorithmRegistry) -> Self {
        Self { config, registry }
    }

    /// Creates a packer with default configuration.
    pub fn with_registry(registry: AlgorithmRegistry) -> Self {
        Self::new(Config::default(), registry)
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the algorithm registry.
    pub fn registry(&self) -> &AlgorithmRegistry {
        &self.registry
    }

    /// Returns the algorithm registry for registering more algorithms.
    pub fn registry_mut(&mut self) -> &mut AlgorithmRegistry {
        &mut self.registry
    }

    /// Packs `items` into each container (or each distinct shape) with every
    /// configured algorithm.
    ///
    /// The caller's items are not modified; each algorithm run works on its
    /// own padded copies.
    pub fn pack(
        &self,
        containers: &[Container],
        items: &[Item],
    ) -> Result<Vec<ContainerPackingResult>> {
        self.config.validate()?;
        for container in containers {
            container.validate()?;
        }

        let algorithms = self.selected_algorithms()?;

        if containers.is_empty() {
            log::warn!("No containers given, nothing to pack");
            return Ok(Vec::new());
        }

        let groups = self.container_groups(containers);
        log::debug!(
            "Packing {} item records into {} container shape(s) from {} container(s)",
            items.len(),
            groups.len(),
            containers.len()
        );

        let prepared = prepare_items(items)?;

        let mut results = Vec::with_capacity(groups.len());
        for group in &groups {
            let mut container_result = ContainerPackingResult::new(group.representative.id());
            container_result.equivalent_container_ids = group.equivalent_ids().to_vec();

            for algorithm in &algorithms {
                let result = self.run_algorithm(*algorithm, &group.representative, prepared.clone())?;
                container_result.algorithm_results.push(result);
            }

            results.push(container_result);
        }

        Ok(results)
    }

    fn selected_algorithms(&self) -> Result<Vec<&dyn PackingAlgorithm>> {
        let mut selected = Vec::with_capacity(self.config.algorithms.len());

        for &id in &self.config.algorithms {
            match self.registry.get(id) {
                Some(algorithm) => selected.push(algorithm),
                None if self.config.skip_unknown_algorithms => {
                    log::warn!("Packing algorithm {} is not registered, skipping", id);
                }
                None => return Err(Error::UnknownAlgorithm(id.value())),
            }
        }

        if selected.is_empty() {
            return Err(Error::ConfigError(
                "None of the selected algorithms is registered".into(),
            ));
        }

        Ok(selected)
    }

    fn container_groups(&self, containers: &[Container]) -> Vec<ShapeGroup> {
        if self.config.deduplicate_containers {
            return group_by_shape(containers);
        }

        containers
            .iter()
            .map(|container| ShapeGroup {
                shape: container.shape(),
                representative: container.clone(),
                member_ids: vec![container.id().to_string()],
            })
            .collect()
    }

    fn run_algorithm(
        &self,
        algorithm: &dyn PackingAlgorithm,
        container: &Container,
        items: Vec<Item>,
    ) -> Result<AlgorithmPackingResult> {
        let expected_units = count_units(&items);

        let start = Instant::now();
        let outcome = algorithm.pack(container, items)?;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        let returned_units = outcome.unit_count();
        if returned_units != expected_units {
            return Err(Error::AlgorithmContract {
                algorithm: algorithm.name().to_string(),
                reason: format!(
                    "received {} units but returned {}",
                    expected_units, returned_units
                ),
            });
        }

        let mut result = AlgorithmPackingResult::from_outcome(
            algorithm.id(),
            algorithm.name(),
            container,
            outcome,
            elapsed_ms,
        )?;

        if self.config.unpad_results {
            for item in &mut result.packed_items {
                item.unpad_measurements()?;
            }
            // Unplaced items get their raw dimensions back but no position.
            for item in &mut result.unpacked_items {
                item.unpad_measurements()?;
                item.clear_placement();
            }
        }

        log::debug!(
            "{} packed {}/{} units into '{}' ({}% of container) in {}ms",
            algorithm.name(),
            result.packed_count(),
            expected_units,
            container.id(),
            result.percent_container_volume_packed,
            elapsed_ms
        );

        Ok(result)
    }
}

/// Clones the caller's items in pack-ready form.
///
/// Items declared as already padded are passed through as given.
fn prepare_items(items: &[Item]) -> Result<Vec<Item>> {
    items
        .iter()
        .map(|item| {
            let mut prepared = item.clone();
            prepared.clear_placement();
            if !prepared.is_pack_ready() {
                prepared.pad_measurements()?;
            }
            Ok(prepared)
        })
        .collect()
}
