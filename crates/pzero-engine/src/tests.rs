//! Tests for aggregation, the built-in models, subset evaluation and assessment.

use pzero_core::error::EngineError;
use pzero_core::layers::{DefensiveLayer, OffensiveLayer, Target};
use pzero_core::scenario::{ActiveLayers, LayerSet, Scenario};

use crate::aggregate::aggregate;
use crate::assessment::{assess, NOT_COMPUTABLE};
use crate::dispatch::offensive_layer_probability;
use crate::models::{salvo, sampled, standard};
use crate::registry::ModelRegistry;
use crate::subset::{evaluate_active, subset_evaluator};

fn target(hardness: f64) -> Target {
    Target::new(0.0, 0.0, hardness)
}

fn one_interceptor() -> Vec<DefensiveLayer> {
    vec![DefensiveLayer::new("Terminal", 0.9, 0.9, 1)]
}

// ---- Standard model ----

#[test]
fn test_standard_notional_offense() {
    let registry = ModelRegistry::builtin();
    let offensive = vec![OffensiveLayer::notional("ICBM", 0.9, 0.9, 2)];
    let p0 = aggregate(
        registry.default_model(),
        &offensive,
        &one_interceptor(),
        &target(10.0),
    )
    .unwrap();
    assert!((p0 - 0.8461).abs() < 1e-4, "got {p0}");
}

#[test]
fn test_standard_ground_burst_offense() {
    let registry = ModelRegistry::builtin();
    let offensive = vec![OffensiveLayer::ground_burst("ICBM", 1000.0, 100.0, 0.9, 2)];
    let p0 = aggregate(
        registry.default_model(),
        &offensive,
        &one_interceptor(),
        &target(10.0),
    )
    .unwrap();
    assert!((p0 - 0.8290).abs() < 1e-4, "got {p0}");
}

/// With no defense, one layer's P(0) is the complement of its kill probability.
#[test]
fn test_standard_single_layer_no_defense() {
    let layer = OffensiveLayer::ground_burst("SLBM", 750.0, 900.0, 0.75, 1);
    let pk = offensive_layer_probability(&layer, 200.0).unwrap();
    let p0 = standard::aggregate(&[layer], &[], &target(200.0)).unwrap();
    assert!((1.0 - p0 - pk).abs() < 1e-12);
}

#[test]
fn test_standard_multiple_layers_multiply() {
    let offensive = vec![
        OffensiveLayer::notional("A", 0.5, 1.0, 1),
        OffensiveLayer::notional("B", 0.2, 1.0, 1),
    ];
    let p0 = standard::aggregate(&offensive, &[], &target(10.0)).unwrap();
    assert!((p0 - 0.5 * 0.8).abs() < 1e-12);
}

#[test]
fn test_standard_ignores_warhead_count() {
    let one = vec![OffensiveLayer::notional("A", 0.9, 0.9, 1)];
    let many = vec![OffensiveLayer::notional("A", 0.9, 0.9, 12)];
    let d = one_interceptor();
    assert_eq!(
        standard::aggregate(&one, &d, &target(10.0)),
        standard::aggregate(&many, &d, &target(10.0))
    );
}

#[test]
fn test_standard_layer_order_irrelevant() {
    let offensive = vec![
        OffensiveLayer::notional("A", 0.9, 0.8, 1),
        OffensiveLayer::ground_burst("B", 300.0, 250.0, 0.7, 3),
    ];
    let defensive = vec![
        DefensiveLayer::new("Mid", 0.8, 0.6, 2),
        DefensiveLayer::new("Term", 0.95, 0.4, 1),
    ];
    let reversed_o: Vec<_> = offensive.iter().rev().cloned().collect();
    let reversed_d: Vec<_> = defensive.iter().rev().cloned().collect();

    let a = standard::aggregate(&offensive, &defensive, &target(50.0)).unwrap();
    let b = standard::aggregate(&reversed_o, &reversed_d, &target(50.0)).unwrap();
    assert!((a - b).abs() < 1e-15);
}

// ---- Absence and non-finite results ----

#[test]
fn test_no_offense_is_absent() {
    for model in ModelRegistry::builtin().iter() {
        assert_eq!(aggregate(model, &[], &one_interceptor(), &target(10.0)), None);
        assert_eq!(aggregate(model, &[], &[], &target(10.0)), None);
    }
}

#[test]
fn test_unconfigured_offense_is_absent() {
    let offensive = vec![
        OffensiveLayer::unconfigured("New offensive layer"),
        OffensiveLayer::unconfigured("Another"),
    ];
    for model in ModelRegistry::builtin().iter() {
        assert_eq!(
            aggregate(model, &offensive, &one_interceptor(), &target(10.0)),
            None
        );
    }
}

/// Certain failure is zero kill probability, which is not the same as absent.
#[test]
fn test_failed_offense_is_not_absent() {
    let offensive = vec![OffensiveLayer::notional("Dud", 0.9, 0.0, 1)];
    let p0 = standard::aggregate(&offensive, &[], &target(10.0));
    assert_eq!(p0, Some(1.0));
}

#[test]
fn test_non_finite_propagates() {
    let offensive = vec![OffensiveLayer::ground_burst("Dud", 0.0, 100.0, 0.9, 1)];
    let p0 = standard::aggregate(&offensive, &one_interceptor(), &target(0.0)).unwrap();
    assert!(p0.is_nan());

    let offensive = vec![OffensiveLayer::notional("Blank", f64::NAN, 0.9, 1)];
    let p0 = salvo::aggregate(&offensive, &[], &target(10.0)).unwrap();
    assert!(p0.is_nan());
}

#[test]
fn test_defense_without_interceptors_changes_nothing() {
    let offensive = vec![OffensiveLayer::notional("A", 0.9, 0.9, 1)];
    let idle = vec![DefensiveLayer::new("Idle", 0.9, 0.9, 0)];
    assert_eq!(
        standard::aggregate(&offensive, &idle, &target(10.0)),
        standard::aggregate(&offensive, &[], &target(10.0))
    );
}

#[test]
fn test_idempotent() {
    let registry = ModelRegistry::builtin();
    let offensive = vec![
        OffensiveLayer::notional("A", 0.9, 0.8, 2),
        OffensiveLayer::ground_burst("B", 475.0, 150.0, 0.8, 4),
    ];
    let defensive = vec![DefensiveLayer::new("D", 0.7, 0.6, 3)];
    for model in registry.iter() {
        let a = aggregate(model, &offensive, &defensive, &target(1000.0)).unwrap();
        let b = aggregate(model, &offensive, &defensive, &target(1000.0)).unwrap();
        assert_eq!(a.to_bits(), b.to_bits(), "{} not idempotent", model.name);
    }
}

// ---- Alternative models ----

#[test]
fn test_salvo_counts_every_warhead() {
    let offensive = vec![OffensiveLayer::notional("ICBM", 0.9, 0.9, 2)];
    let p0 = salvo::aggregate(&offensive, &one_interceptor(), &target(10.0)).unwrap();
    assert!((p0 - 0.8461 * 0.8461).abs() < 1e-12, "got {p0}");
}

#[test]
fn test_salvo_matches_standard_for_single_warheads() {
    let offensive = vec![
        OffensiveLayer::notional("A", 0.6, 0.9, 1),
        OffensiveLayer::ground_burst("B", 100.0, 300.0, 0.8, 1),
    ];
    let d = one_interceptor();
    let a = standard::aggregate(&offensive, &d, &target(30.0)).unwrap();
    let b = salvo::aggregate(&offensive, &d, &target(30.0)).unwrap();
    assert!((a - b).abs() < 1e-12);
}

#[test]
fn test_salvo_zero_warheads_contribute_nothing() {
    let offensive = vec![OffensiveLayer::notional("Empty", 0.9, 0.9, 0)];
    assert_eq!(salvo::aggregate(&offensive, &[], &target(10.0)), Some(1.0));
}

#[test]
fn test_salvo_blank_warhead_count_is_not_computable() {
    let mut blank = OffensiveLayer::notional("Blank", 0.9, 0.9, 1);
    blank.number = None;
    let offensive = vec![OffensiveLayer::notional("A", 0.5, 0.9, 1), blank];
    let p0 = salvo::aggregate(&offensive, &one_interceptor(), &target(10.0)).unwrap();
    assert!(p0.is_nan(), "got {p0}");

    // Standard ignores the count.
    assert!(standard::aggregate(&offensive, &one_interceptor(), &target(10.0))
        .unwrap()
        .is_finite());
}

#[test]
fn test_salvo_zero_warheads_still_propagate_nan() {
    let offensive = vec![OffensiveLayer::notional("Empty", f64::NAN, 0.9, 0)];
    let p0 = salvo::aggregate(&offensive, &[], &target(10.0)).unwrap();
    assert!(p0.is_nan(), "got {p0}");
}

#[test]
fn test_sampled_tracks_standard() {
    let offensive = vec![
        OffensiveLayer::notional("A", 0.9, 0.9, 1),
        OffensiveLayer::ground_burst("B", 300.0, 400.0, 0.85, 1),
    ];
    let defensive = vec![DefensiveLayer::new("D", 0.8, 0.7, 1)];
    let exact = standard::aggregate(&offensive, &defensive, &target(100.0)).unwrap();
    let sampled = sampled::aggregate(&offensive, &defensive, &target(100.0)).unwrap();
    assert!((exact - sampled).abs() < 0.02, "exact {exact}, sampled {sampled}");
}

#[test]
fn test_sampled_not_computable() {
    let offensive = vec![OffensiveLayer::notional("Blank", f64::NAN, 0.9, 1)];
    let p0 = sampled::aggregate(&offensive, &[], &target(10.0)).unwrap();
    assert!(p0.is_nan());
}

// ---- Active subset ----

fn mixed_stack() -> (Vec<OffensiveLayer>, Vec<DefensiveLayer>) {
    (
        vec![
            OffensiveLayer::notional("A", 0.9, 0.9, 1),
            OffensiveLayer::unconfigured("Draft"),
            OffensiveLayer::ground_burst("C", 1000.0, 100.0, 0.9, 1),
        ],
        vec![
            DefensiveLayer::new("Mid", 0.9, 0.9, 1),
            DefensiveLayer::new("Term", 0.5, 0.5, 2),
        ],
    )
}

#[test]
fn test_subset_matches_filtered_aggregate() {
    let registry = ModelRegistry::builtin();
    let model = registry.default_model();
    let (offensive, defensive) = mixed_stack();

    let active = ActiveLayers::new([0], [0]);
    let subset = evaluate_active(model, &offensive, &defensive, &active, &target(10.0));
    let direct = aggregate(
        model,
        &offensive[..1],
        &defensive[..1],
        &target(10.0),
    );
    assert_eq!(subset, direct);
    assert!((subset.unwrap() - 0.8461).abs() < 1e-4);
}

#[test]
fn test_subset_of_everything_is_full_stack() {
    let registry = ModelRegistry::builtin();
    let model = registry.default_model();
    let (offensive, defensive) = mixed_stack();

    let active = ActiveLayers::uniform(0..3);
    assert_eq!(
        evaluate_active(model, &offensive, &defensive, &active, &target(10.0)),
        aggregate(model, &offensive, &defensive, &target(10.0))
    );
}

#[test]
fn test_subset_without_offense_is_absent() {
    let registry = ModelRegistry::builtin();
    let (offensive, defensive) = mixed_stack();

    let defense_only = ActiveLayers::new([], [0, 1]);
    let draft_only = ActiveLayers::new([1], [0]);
    let model = registry.default_model();
    assert_eq!(
        evaluate_active(model, &offensive, &defensive, &defense_only, &target(10.0)),
        None
    );
    assert_eq!(
        evaluate_active(model, &offensive, &defensive, &draft_only, &target(10.0)),
        None
    );
}

#[test]
fn test_subset_ignores_stale_indices() {
    let registry = ModelRegistry::builtin();
    let (offensive, defensive) = mixed_stack();
    let model = registry.default_model();

    let with_stale = ActiveLayers::new([0, 17], [0, 5]);
    let clean = ActiveLayers::new([0], [0]);
    assert_eq!(
        evaluate_active(model, &offensive, &defensive, &with_stale, &target(10.0)),
        evaluate_active(model, &offensive, &defensive, &clean, &target(10.0))
    );
}

#[test]
fn test_subset_evaluator_is_reusable() {
    let registry = ModelRegistry::builtin();
    let (offensive, defensive) = mixed_stack();
    let model = registry.default_model();
    let p = subset_evaluator(model, &offensive, &defensive, target(10.0));

    let first = p(&ActiveLayers::new([0], [0]));
    let other = p(&ActiveLayers::new([2], []));
    let again = p(&ActiveLayers::new([0], [0]));
    assert_eq!(first, again);
    assert!((other.unwrap() - 0.1).abs() < 1e-12);
}

// ---- Assessment ----

fn share_scenario() -> Scenario {
    let (offensive, defensive) = mixed_stack();
    Scenario {
        model_index: 0,
        target: target(10.0),
        layers: LayerSet {
            offensive,
            defensive,
        },
        active: ActiveLayers::default(),
    }
}

#[test]
fn test_assess_reports_every_layer() {
    let registry = ModelRegistry::builtin();
    let assessment = assess(&registry, &share_scenario()).unwrap();

    assert_eq!(assessment.model, standard::NAME);
    assert_eq!(assessment.offensive.len(), 3);
    assert!((assessment.offensive[0].probability.unwrap() - 0.81).abs() < 1e-12);
    assert_eq!(assessment.offensive[1].probability, None);
    assert_eq!(assessment.offensive[1].name, "Draft");
    assert!((assessment.offensive[2].probability.unwrap() - 0.9).abs() < 1e-12);

    assert_eq!(assessment.defensive.len(), 2);
    assert!((assessment.defensive[0].probability.unwrap() - 0.81).abs() < 1e-12);
    assert!((assessment.defensive[1].probability.unwrap() - 0.375).abs() < 1e-12);

    assert!(assessment.survival.is_some());
    assert!(assessment.subset.is_none());
}

#[test]
fn test_assess_with_active_layers() {
    let registry = ModelRegistry::builtin();
    let mut scenario = share_scenario();
    scenario.active = ActiveLayers::new([0], [0]);

    let assessment = assess(&registry, &scenario).unwrap();
    let subset = assessment.subset.unwrap();
    assert_eq!(subset.offensive, vec![0]);
    assert_eq!(subset.defensive, vec![0]);
    assert!((subset.survival.unwrap() - 0.8461).abs() < 1e-4);
}

#[test]
fn test_assess_selects_model() {
    let registry = ModelRegistry::builtin();
    let mut scenario = share_scenario();
    scenario.model_index = 1;
    assert_eq!(assess(&registry, &scenario).unwrap().model, salvo::NAME);

    scenario.model_index = 7;
    assert_eq!(
        assess(&registry, &scenario).unwrap_err(),
        EngineError::ModelIndexOutOfRange { index: 7, len: 3 }
    );
}

#[test]
fn test_assessment_serializes() {
    let registry = ModelRegistry::builtin();
    let assessment = assess(&registry, &share_scenario()).unwrap();
    let json = serde_json::to_value(&assessment).unwrap();
    assert_eq!(json["model"], standard::NAME);
    assert!(json["offensive"][1]["probability"].is_null());
}

#[test]
fn test_assessment_json_keeps_not_computable_apart_from_absent() {
    let registry = ModelRegistry::builtin();

    let mut broken = share_scenario();
    broken.layers.offensive[0] = OffensiveLayer::notional("A", f64::NAN, 0.9, 1);
    broken.active = ActiveLayers::new([1], []);
    let json = serde_json::to_value(assess(&registry, &broken).unwrap()).unwrap();
    assert_eq!(json["survival"], NOT_COMPUTABLE);
    assert_eq!(json["offensive"][0]["probability"], NOT_COMPUTABLE);
    assert!(json["offensive"][2]["probability"].is_number());
    assert!(json["offensive"][1]["probability"].is_null());
    assert!(json["subset"]["survival"].is_null());

    let empty = Scenario::default();
    let json = serde_json::to_value(assess(&registry, &empty).unwrap()).unwrap();
    assert!(json["survival"].is_null());
    assert!(json["subset"].is_null());
}
