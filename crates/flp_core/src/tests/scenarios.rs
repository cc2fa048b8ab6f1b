//! Scenario store behavior: ownership isolation, soft failure, reset
//! round-trips, and field diffing.

use crate::model::{MaturityLevel, RiskLevel, ScenarioId};
use crate::scenario::{AssetPatch, BASELINE_SCENARIO_ID, DiffField, FieldValue, ScenarioStore};
use crate::seed::baseline_assets;

use super::test_asset;

fn store_with_seed() -> ScenarioStore {
    ScenarioStore::new(baseline_assets())
}

#[test]
fn test_new_store_starts_on_baseline() {
    let store = store_with_seed();
    assert_eq!(store.active_scenario_id().as_str(), BASELINE_SCENARIO_ID);
    assert_eq!(store.scenarios().len(), 1);
    assert!(!store.is_comparing());
    assert!(store.comparison_scenario_id().is_none());
    assert_eq!(store.get_active_assets(), store.baseline_assets());
}

#[test]
fn test_create_scenario_copies_baseline_not_active() {
    let mut store = store_with_seed();
    let first = store.create_scenario("Aggressive", "Push risk levels up");
    store.set_active_scenario(first.clone());

    let asset_id = store.baseline_assets()[0].id.clone();
    store.modify_asset(
        &first,
        &asset_id,
        &AssetPatch {
            risk_level: Some(RiskLevel::Low),
            ..Default::default()
        },
    );

    // A second scenario clones the baseline, not the modified active one
    let second = store.create_scenario("Fresh", "");
    let second_asset = &store.scenario(&second).unwrap().assets[0];
    assert_eq!(second_asset.risk_level, store.baseline_assets()[0].risk_level);
}

#[test]
fn test_modify_is_isolated_to_one_scenario() {
    let mut store = store_with_seed();
    let a = store.create_scenario("A", "");
    let b = store.create_scenario("B", "");
    let asset_id = store.baseline_assets()[0].id.clone();
    let original = store.baseline_assets()[0].clone();

    store.modify_asset(
        &a,
        &asset_id,
        &AssetPatch {
            confidence_score: Some(99),
            maturity_level: Some(MaturityLevel::Operational),
            ..Default::default()
        },
    );

    let in_a = &store.scenario(&a).unwrap().assets[0];
    assert_eq!(in_a.confidence_score, 99);
    assert_eq!(in_a.maturity_level, MaturityLevel::Operational);

    // Baseline, the baseline scenario, and scenario B are all untouched
    assert_eq!(store.baseline_assets()[0], original);
    assert_eq!(
        store
            .scenario(&ScenarioId::new(BASELINE_SCENARIO_ID))
            .unwrap()
            .assets[0],
        original
    );
    assert_eq!(store.scenario(&b).unwrap().assets[0], original);
}

#[test]
fn test_modify_unknown_ids_is_a_no_op() {
    let mut store = store_with_seed();
    let before = store.clone();

    store.modify_asset(
        &ScenarioId::new("no-such-scenario"),
        &store.baseline_assets()[0].id.clone(),
        &AssetPatch {
            confidence_score: Some(1),
            ..Default::default()
        },
    );
    store.modify_asset(
        &ScenarioId::new(BASELINE_SCENARIO_ID),
        &crate::model::AssetId::new("no-such-asset"),
        &AssetPatch {
            confidence_score: Some(1),
            ..Default::default()
        },
    );

    assert_eq!(store.scenarios(), before.scenarios());
}

#[test]
fn test_reset_asset_round_trip() {
    let mut store = store_with_seed();
    let id = store.create_scenario("Edited", "");
    let asset_id = store.baseline_assets()[2].id.clone();
    let original = store.baseline_assets()[2].clone();

    store.modify_asset(
        &id,
        &asset_id,
        &AssetPatch {
            neutron_damage_uncertainty: Some(1),
            risk_level: Some(RiskLevel::Low),
            ..Default::default()
        },
    );
    assert_ne!(store.scenario(&id).unwrap().assets[2], original);

    store.reset_asset(&id, &asset_id);
    assert_eq!(store.scenario(&id).unwrap().assets[2], original);
}

#[test]
fn test_reset_scenario_restores_every_asset() {
    let mut store = store_with_seed();
    let id = store.create_scenario("Edited", "");
    for asset in store.baseline_assets().to_vec() {
        store.modify_asset(
            &id,
            &asset.id,
            &AssetPatch {
                confidence_score: Some(1),
                ..Default::default()
            },
        );
    }

    store.reset_scenario(&id);
    assert_eq!(store.scenario(&id).unwrap().assets, store.baseline_assets());
}

#[test]
fn test_duplicate_copies_modified_assets() {
    let mut store = store_with_seed();
    let source = store.create_scenario("Source", "");
    let asset_id = store.baseline_assets()[0].id.clone();
    store.modify_asset(
        &source,
        &asset_id,
        &AssetPatch {
            confidence_score: Some(77),
            ..Default::default()
        },
    );

    let copy = store.duplicate_scenario(&source, "Copy").unwrap();
    assert_eq!(store.scenario(&copy).unwrap().assets[0].confidence_score, 77);

    // The copy is independent of the source from here on
    store.modify_asset(
        &source,
        &asset_id,
        &AssetPatch {
            confidence_score: Some(11),
            ..Default::default()
        },
    );
    assert_eq!(store.scenario(&copy).unwrap().assets[0].confidence_score, 77);
}

#[test]
fn test_duplicate_unknown_source_returns_none() {
    let mut store = store_with_seed();
    assert!(
        store
            .duplicate_scenario(&ScenarioId::new("missing"), "Copy")
            .is_none()
    );
}

#[test]
fn test_delete_baseline_is_refused() {
    let mut store = store_with_seed();
    store.delete_scenario(&ScenarioId::new(BASELINE_SCENARIO_ID));
    assert_eq!(store.scenarios().len(), 1);
}

#[test]
fn test_delete_active_scenario_falls_back_to_baseline() {
    let mut store = store_with_seed();
    let id = store.create_scenario("Doomed", "");
    store.set_active_scenario(id.clone());
    store.set_comparison_scenario(Some(id.clone()));

    store.delete_scenario(&id);

    assert_eq!(store.active_scenario_id().as_str(), BASELINE_SCENARIO_ID);
    assert!(store.comparison_scenario_id().is_none());
    assert_eq!(store.get_active_assets(), store.baseline_assets());
}

#[test]
fn test_compare_mode_toggling() {
    let mut store = store_with_seed();
    let id = store.create_scenario("Other", "");

    // Selecting a comparison scenario enables the mode
    store.set_comparison_scenario(Some(id.clone()));
    assert!(store.is_comparing());
    assert!(store.get_comparison_assets().is_some());

    // Turning the mode off clears the selection
    store.toggle_compare_mode();
    assert!(!store.is_comparing());
    assert!(store.comparison_scenario_id().is_none());
    assert!(store.get_comparison_assets().is_none());

    // Turning it back on does not auto-select
    store.toggle_compare_mode();
    assert!(store.is_comparing());
    assert!(store.comparison_scenario_id().is_none());
}

#[test]
fn test_active_assets_fall_back_when_id_is_stale() {
    let mut store = store_with_seed();
    store.set_active_scenario(ScenarioId::new("vanished"));
    assert_eq!(store.get_active_assets(), store.baseline_assets());
}

#[test]
fn test_asset_diff_reports_only_changed_fields() {
    let mut store = store_with_seed();
    let id = store.create_scenario("Edited", "");
    let asset_id = store.baseline_assets()[0].id.clone();
    let base_confidence = store.baseline_assets()[0].confidence_score;

    store.modify_asset(
        &id,
        &asset_id,
        &AssetPatch {
            confidence_score: Some(base_confidence + 10),
            risk_level: Some(RiskLevel::Low),
            ..Default::default()
        },
    );
    store.set_active_scenario(id);

    let diffs = store.asset_diff(&asset_id);
    assert_eq!(diffs.len(), 2);

    let confidence = diffs
        .iter()
        .find(|d| d.field == DiffField::ConfidenceScore)
        .unwrap();
    assert_eq!(confidence.baseline, FieldValue::Percent(base_confidence));
    assert_eq!(confidence.modified, FieldValue::Percent(base_confidence + 10));
    assert!(diffs.iter().any(|d| d.field == DiffField::RiskLevel));
}

#[test]
fn test_asset_diff_empty_for_unchanged_or_missing() {
    let mut store = store_with_seed();
    let asset_id = store.baseline_assets()[0].id.clone();
    assert!(store.asset_diff(&asset_id).is_empty());
    assert!(
        store
            .asset_diff(&crate::model::AssetId::new("missing"))
            .is_empty()
    );

    let id = store.create_scenario("Untouched", "");
    store.set_active_scenario(id);
    assert!(store.asset_diff(&asset_id).is_empty());
}

#[test]
fn test_scenario_ids_and_colors_rotate() {
    let mut store = ScenarioStore::new(vec![test_asset(
        "only",
        RiskLevel::Medium,
        10.0,
        1.0,
        2.0,
    )]);
    let a = store.create_scenario("A", "");
    let b = store.create_scenario("B", "");
    assert_eq!(a.as_str(), "scenario-1");
    assert_eq!(b.as_str(), "scenario-2");
    assert_ne!(
        store.scenario(&a).unwrap().color,
        store.scenario(&b).unwrap().color
    );

    // Ids stay unique even after a delete frees a slot
    store.delete_scenario(&a);
    let c = store.create_scenario("C", "");
    assert_eq!(c.as_str(), "scenario-3");
}
