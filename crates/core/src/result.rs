//! Packing result representation.

use crate::algorithm::{count_units, AlgorithmId, PackOutcome};
use crate::container::Container;
use crate::item::Item;
use crate::numeric;
use crate::Result;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of running one algorithm against one container.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlgorithmPackingResult {
    /// Algorithm that produced this result.
    pub algorithm_id: AlgorithmId,

    /// Display name of the algorithm.
    pub algorithm_name: String,

    /// Items that were placed.
    pub packed_items: Vec<Item>,

    /// Items that did not fit.
    pub unpacked_items: Vec<Item>,

    /// Whether every unit was placed.
    pub is_complete_pack: bool,

    /// Wall time spent inside the algorithm, in milliseconds.
    pub pack_time_ms: u64,

    /// Packed item volume as a percentage of the container volume.
    pub percent_container_volume_packed: Decimal,

    /// Packed item volume as a percentage of all item volume.
    pub percent_item_volume_packed: Decimal,
}

impl AlgorithmPackingResult {
    /// Builds a result from an algorithm's outcome.
    ///
    /// Percentages use each item's stored volume, so they reflect the padded
    /// space the items took while packed. Call this before unpadding or
    /// after; the stored volume is the same either way.
    pub fn from_outcome(
        algorithm_id: AlgorithmId,
        algorithm_name: impl Into<String>,
        container: &Container,
        outcome: PackOutcome,
        pack_time_ms: u64,
    ) -> Result<Self> {
        let packed_volume = numeric::checked_sum(
            outcome
                .packed
                .iter()
                .map(Item::total_volume)
                .collect::<Result<Vec<_>>>()?,
        )?;
        let unpacked_volume = numeric::checked_sum(
            outcome
                .unpacked
                .iter()
                .map(Item::total_volume)
                .collect::<Result<Vec<_>>>()?,
        )?;
        let item_volume = numeric::checked_sum([packed_volume, unpacked_volume])?;

        Ok(Self {
            algorithm_id,
            algorithm_name: algorithm_name.into(),
            is_complete_pack: count_units(&outcome.unpacked) == 0,
            percent_container_volume_packed: numeric::percent(
                packed_volume,
                container.volume()?,
            )?,
            percent_item_volume_packed: numeric::percent(packed_volume, item_volume)?,
            packed_items: outcome.packed,
            unpacked_items: outcome.unpacked,
            pack_time_ms,
        })
    }

    /// Number of packed units.
    pub fn packed_count(&self) -> u64 {
        count_units(&self.packed_items)
    }

    /// Number of unpacked units.
    pub fn unpacked_count(&self) -> u64 {
        count_units(&self.unpacked_items)
    }

    /// Container utilization as a ratio (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        self.percent_container_volume_packed.to_f64().unwrap_or(0.0) / 100.0
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{}%", self.percent_container_volume_packed)
    }
}

/// All algorithm results for one container shape.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerPackingResult {
    /// The container the algorithms ran against.
    pub container_id: String,

    /// Other containers with the same shape, which share this result.
    pub equivalent_container_ids: Vec<String>,

    /// One entry per algorithm, in configured order.
    pub algorithm_results: Vec<AlgorithmPackingResult>,
}

impl ContainerPackingResult {
    /// Creates an empty result for a container.
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            equivalent_container_ids: Vec::new(),
            algorithm_results: Vec::new(),
        }
    }

    /// Returns true if `container_id` is covered by this result.
    pub fn covers(&self, container_id: &str) -> bool {
        self.container_id == container_id
            || self
                .equivalent_container_ids
                .iter()
                .any(|id| id == container_id)
    }

    /// The result produced by `algorithm_id`, if it ran.
    pub fn result_for(&self, algorithm_id: AlgorithmId) -> Option<&AlgorithmPackingResult> {
        self.algorithm_results
            .iter()
            .find(|r| r.algorithm_id == algorithm_id)
    }

    /// The result with the highest container utilization.
    pub fn best_result(&self) -> Option<&AlgorithmPackingResult> {
        self.algorithm_results
            .iter()
            .max_by_key(|r| r.percent_container_volume_packed)
    }
}

/// Summary statistics for one algorithm result.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingSummary {
    /// Container the summary refers to.
    pub container_id: String,
    /// Algorithm name.
    pub algorithm: String,
    /// Total units requested.
    pub total_requested: u64,
    /// Total units placed.
    pub total_packed: u64,
    /// Container volume utilization in percent.
    pub utilization_percent: Decimal,
    /// Computation time in milliseconds.
    pub time_ms: u64,
}

impl PackingSummary {
    /// Summarizes one algorithm result of a container result.
    pub fn new(container: &ContainerPackingResult, result: &AlgorithmPackingResult) -> Self {
        Self {
            container_id: container.container_id.clone(),
            algorithm: result.algorithm_name.clone(),
            total_requested: result.packed_count() + result.unpacked_count(),
            total_packed: result.packed_count(),
            utilization_percent: result.percent_container_volume_packed,
            time_ms: result.pack_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::vec3;
    use approx::assert_relative_eq;

    fn d(v: i64) -> Decimal {
        Decimal::from(v)
    }

    fn unit(id: &str, edge: i64) -> Item {
        Item::builder(id, d(edge), d(edge), d(edge)).build().unwrap()
    }

    #[test]
    fn test_from_outcome_percentages() {
        let container = Container::new("C", d(10), d(10), d(10)).unwrap();
        let mut placed = unit("A", 5);
        placed.set_placement(vec3(d(0), d(0), d(0)), vec3(d(5), d(5), d(5)));
        let outcome = PackOutcome::new(vec![placed], vec![unit("B", 5)]);

        let result =
            AlgorithmPackingResult::from_outcome(AlgorithmId::EB_AFIT, "EB-AFIT", &container, outcome, 3)
                .unwrap();

        assert_eq!(result.percent_container_volume_packed, Decimal::new(1250, 2));
        assert_eq!(result.percent_item_volume_packed, d(50));
        assert!(!result.is_complete_pack);
        assert_eq!(result.packed_count(), 1);
        assert_eq!(result.unpacked_count(), 1);
        assert_relative_eq!(result.utilization(), 0.125, epsilon = 1e-9);
        assert_eq!(result.utilization_percent(), "12.50%");
    }

    #[test]
    fn test_complete_pack_with_empty_input() {
        let container = Container::new("C", d(1), d(1), d(1)).unwrap();
        let result = AlgorithmPackingResult::from_outcome(
            AlgorithmId::EB_AFIT,
            "EB-AFIT",
            &container,
            PackOutcome::default(),
            0,
        )
        .unwrap();

        assert!(result.is_complete_pack);
        assert_eq!(result.percent_item_volume_packed, Decimal::ZERO);
    }

    #[test]
    fn test_container_result_lookup() {
        let container = Container::new("C", d(10), d(10), d(10)).unwrap();
        let low = AlgorithmPackingResult::from_outcome(
            AlgorithmId(2),
            "low",
            &container,
            PackOutcome::new(vec![unit("A", 1)], vec![]),
            0,
        )
        .unwrap();
        let high = AlgorithmPackingResult::from_outcome(
            AlgorithmId::EB_AFIT,
            "high",
            &container,
            PackOutcome::new(vec![unit("A", 5)], vec![]),
            0,
        )
        .unwrap();

        let mut result = ContainerPackingResult::new("C");
        result.equivalent_container_ids.push("C-alt".to_string());
        result.algorithm_results = vec![low, high];

        assert!(result.covers("C"));
        assert!(result.covers("C-alt"));
        assert!(!result.covers("D"));
        assert_eq!(result.result_for(AlgorithmId(2)).unwrap().algorithm_name, "low");
        assert_eq!(result.best_result().unwrap().algorithm_name, "high");

        let summary = PackingSummary::new(&result, &result.algorithm_results[1]);
        assert_eq!(summary.total_packed, 1);
        assert_eq!(summary.utilization_percent, Decimal::new(1250, 2));
    }
}
