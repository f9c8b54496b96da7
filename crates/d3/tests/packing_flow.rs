//! End-to-end tests for the pad, pack, unpad cycle.
//!
//! Tests the full pipeline: Item/Container → Packer3D::pack() → unpadded results.

use u_packing_core::{vec3, Decimal};
use u_packing_d3::{
    AlgorithmId, AlgorithmRegistry, Config, Container, Error, Item, PackOutcome, PackingAlgorithm,
    Packer3D, Result,
};

fn d(v: i64) -> Decimal {
    Decimal::from(v)
}

/// Stacks every unit at the origin, recording the padded dims it saw.
struct OriginStacker;

impl PackingAlgorithm for OriginStacker {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::EB_AFIT
    }

    fn name(&self) -> &str {
        "origin-stacker"
    }

    fn pack(&self, container: &Container, items: Vec<Item>) -> Result<PackOutcome> {
        let mut outcome = PackOutcome::default();
        let mut z = Decimal::ZERO;
        for mut unit in items.iter().flat_map(Item::expand_units) {
            assert!(unit.is_pack_ready(), "algorithms must receive pack-ready items");
            if z + unit.dim3() <= container.height() {
                let dims = *unit.dimensions();
                unit.set_placement(vec3(Decimal::ZERO, Decimal::ZERO, z), dims);
                z += unit.dim3();
                outcome.packed.push(unit);
            } else {
                outcome.unpacked.push(unit);
            }
        }
        Ok(outcome)
    }
}

/// A third-party algorithm under a new identifier that refuses everything.
struct Refuser;

impl PackingAlgorithm for Refuser {
    fn id(&self) -> AlgorithmId {
        AlgorithmId(1000)
    }

    fn name(&self) -> &str {
        "refuser"
    }

    fn pack(&self, _container: &Container, items: Vec<Item>) -> Result<PackOutcome> {
        Ok(PackOutcome::new(Vec::new(), items))
    }
}

/// Fails outright.
struct Broken;

impl PackingAlgorithm for Broken {
    fn id(&self) -> AlgorithmId {
        AlgorithmId(7)
    }

    fn name(&self) -> &str {
        "broken"
    }

    fn pack(&self, _container: &Container, _items: Vec<Item>) -> Result<PackOutcome> {
        Err(Error::AlgorithmFailed {
            algorithm: self.name().to_string(),
            reason: "no layers".into(),
        })
    }
}

fn registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();
    registry.register(OriginStacker).unwrap();
    registry.register(Refuser).unwrap();
    registry.register(Broken).unwrap();
    registry
}

#[test]
fn test_full_cycle_with_two_algorithms() {
    let items = vec![
        Item::builder("A", d(3), d(4), d(5))
            .quantity(2)
            .material_buffer(d(2))
            .build()
            .unwrap(),
        Item::builder("B", d(1), d(1), d(1))
            .material_buffer(Decimal::ZERO)
            .build()
            .unwrap(),
    ];
    let containers = vec![
        Container::new("BOX-1", d(10), d(10), d(20)).unwrap(),
        Container::new("BOX-1-RESOLD", d(10), d(10), d(20)).unwrap(),
    ];

    let config = Config::default().with_algorithms([AlgorithmId::EB_AFIT, AlgorithmId(1000)]);
    let packer = Packer3D::new(config, registry());
    let results = packer.pack(&containers, &items).unwrap();

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.container_id, "BOX-1");
    assert_eq!(result.equivalent_container_ids, vec!["BOX-1-RESOLD"]);
    assert_eq!(result.algorithm_results.len(), 2);

    let stacked = result.result_for(AlgorithmId::EB_AFIT).unwrap();
    // Padded heights are 7 and 7, then 1: total 15 fits in 20.
    assert!(stacked.is_complete_pack);
    assert_eq!(stacked.packed_count(), 3);

    let second_a = &stacked.packed_items[1];
    assert_eq!(second_a.id(), "A");
    assert_eq!(second_a.dimensions(), &vec3(d(3), d(4), d(5)));
    assert_eq!(second_a.position(), &vec3(d(1), d(1), d(8)));
    assert_eq!(second_a.volume(), d(5 * 6 * 7));

    let b = &stacked.packed_items[2];
    assert_eq!(b.position(), &vec3(d(0), d(0), d(14)));

    let refused = result.result_for(AlgorithmId(1000)).unwrap();
    assert_eq!(refused.packed_count(), 0);
    assert_eq!(refused.unpacked_count(), 3);
    assert_eq!(refused.percent_container_volume_packed, Decimal::ZERO);
    assert!(refused.unpacked_items.iter().all(|item| !item.is_padded()));
    assert!(refused
        .unpacked_items
        .iter()
        .all(|item| !item.is_packed() && item.position() == &vec3(d(0), d(0), d(0))));

    assert_eq!(result.best_result().unwrap().algorithm_name, "origin-stacker");
}

#[test]
fn test_algorithm_failure_propagates() {
    let container = Container::new("C", d(10), d(10), d(10)).unwrap();
    let item = Item::builder("A", d(1), d(1), d(1)).build().unwrap();

    let packer = Packer3D::new(
        Config::default().with_algorithms([AlgorithmId(7)]),
        registry(),
    );
    let err = packer.pack(&[container], &[item]).unwrap_err();
    assert!(matches!(err, Error::AlgorithmFailed { .. }));
    assert!(err.to_string().contains("no layers"));
}

#[test]
fn test_registering_after_construction() {
    let mut packer = Packer3D::with_registry(AlgorithmRegistry::new());
    let container = Container::new("C", d(10), d(10), d(10)).unwrap();

    assert!(matches!(
        packer.pack(&[container.clone()], &[]),
        Err(Error::UnknownAlgorithm(1))
    ));

    packer.registry_mut().register(OriginStacker).unwrap();
    assert!(packer.pack(&[container], &[]).is_ok());
}

#[test]
fn test_already_padded_items_are_not_padded_again() {
    let item = Item::builder("P", d(8), d(9), d(10))
        .material_buffer(d(5))
        .already_padded(true)
        .build()
        .unwrap();
    let container = Container::new("C", d(20), d(20), d(20)).unwrap();

    let results = Packer3D::with_registry(registry())
        .pack(&[container], &[item])
        .unwrap();
    let placed = &results[0].algorithm_results[0].packed_items[0];

    // The algorithm planned with the dimensions as given.
    assert_eq!(placed.pack_dimensions(), &vec3(d(8), d(9), d(10)));
    assert_eq!(placed.dimensions(), &vec3(d(8), d(9), d(10)));
    assert_eq!(placed.position(), &vec3(d(0), d(0), d(0)));
}

#[test]
fn test_unplaced_items_keep_origin() {
    let item = Item::builder("TALL", d(1), d(1), d(30))
        .material_buffer(d(4))
        .build()
        .unwrap();
    let container = Container::new("C", d(10), d(10), d(10)).unwrap();

    let results = Packer3D::with_registry(registry())
        .pack(&[container], &[item])
        .unwrap();
    let run = &results[0].algorithm_results[0];

    assert_eq!(run.packed_count(), 0);
    let unplaced = &run.unpacked_items[0];
    assert!(!unplaced.is_packed());
    assert!(!unplaced.is_padded());
    assert_eq!(unplaced.dimensions(), &vec3(d(1), d(1), d(30)));
    assert_eq!(unplaced.position(), &vec3(d(0), d(0), d(0)));
}
