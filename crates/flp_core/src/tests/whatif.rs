//! Bulk what-if adjustments and portfolio delta comparison.

use crate::analysis::{
    AdjustmentTarget, CostDimension, EconomicParams, ParameterAdjustment, WhatIfDelta,
    apply_adjustments, compare_portfolios,
};
use crate::model::{AssetId, RiskLevel, StrategyKind};
use crate::seed::baseline_assets;

use super::test_asset;

fn adjustment(target: AdjustmentTarget, change_percent: f64) -> ParameterAdjustment {
    ParameterAdjustment {
        asset_ids: Vec::new(),
        target,
        change_percent,
        enabled: true,
    }
}

#[test]
fn test_empty_asset_list_targets_everything() {
    let assets = baseline_assets();
    let modified = apply_adjustments(
        &assets,
        &[adjustment(
            AdjustmentTarget::Dimension(CostDimension::MaintenanceCost),
            50.0,
        )],
    );

    for (before, after) in assets.iter().zip(&modified) {
        assert!(
            (after.cost_schedule.annual_maintenance_cost_millions
                - before.cost_schedule.annual_maintenance_cost_millions * 1.5)
                .abs()
                < 1e-9
        );
        // Untargeted dimensions are untouched
        assert_eq!(
            after.cost_schedule.replacement_cost_millions,
            before.cost_schedule.replacement_cost_millions
        );
        assert_eq!(
            after.cost_schedule.downtime_weeks,
            before.cost_schedule.downtime_weeks
        );
    }
}

#[test]
fn test_scoped_adjustment_skips_other_assets() {
    let assets = baseline_assets();
    let target_id = assets[0].id.clone();
    let modified = apply_adjustments(
        &assets,
        &[ParameterAdjustment {
            asset_ids: vec![target_id.clone()],
            target: AdjustmentTarget::All,
            change_percent: -20.0,
            enabled: true,
        }],
    );

    for (before, after) in assets.iter().zip(&modified) {
        if after.id == target_id {
            assert!(
                (after.cost_schedule.replacement_cost_millions
                    - before.cost_schedule.replacement_cost_millions * 0.8)
                    .abs()
                    < 1e-9
            );
        } else {
            assert_eq!(after.cost_schedule, before.cost_schedule);
        }
    }
}

#[test]
fn test_disabled_adjustments_are_ignored() {
    let assets = baseline_assets();
    let modified = apply_adjustments(
        &assets,
        &[ParameterAdjustment {
            asset_ids: Vec::new(),
            target: AdjustmentTarget::All,
            change_percent: 500.0,
            enabled: false,
        }],
    );
    assert_eq!(modified, assets);
}

#[test]
fn test_stacked_adjustments_compose_multiplicatively() {
    let assets = vec![test_asset("stack", RiskLevel::Medium, 100.0, 10.0, 5.0)];
    let modified = apply_adjustments(
        &assets,
        &[
            adjustment(AdjustmentTarget::Dimension(CostDimension::ReplacementCost), 10.0),
            adjustment(AdjustmentTarget::Dimension(CostDimension::ReplacementCost), 10.0),
        ],
    );
    // 100 * 1.1 * 1.1, not 100 * 1.2
    assert!((modified[0].cost_schedule.replacement_cost_millions - 121.0).abs() < 1e-9);
}

#[test]
fn test_adjustment_never_mutates_the_input() {
    let assets = baseline_assets();
    let before = assets.clone();
    let _ = apply_adjustments(&assets, &[adjustment(AdjustmentTarget::All, 300.0)]);
    assert_eq!(assets, before);
}

#[test]
fn test_unknown_asset_id_matches_nothing() {
    let assets = baseline_assets();
    let modified = apply_adjustments(
        &assets,
        &[ParameterAdjustment {
            asset_ids: vec![AssetId::new("no-such-asset")],
            target: AdjustmentTarget::All,
            change_percent: 100.0,
            enabled: true,
        }],
    );
    assert_eq!(modified, assets);
}

#[test]
fn test_compare_portfolios_reports_per_strategy_deltas() {
    let assets = baseline_assets();
    let params = EconomicParams::default();
    let modified = apply_adjustments(
        &assets,
        &[adjustment(
            AdjustmentTarget::Dimension(CostDimension::MaintenanceCost),
            25.0,
        )],
    );

    let deltas = compare_portfolios(&assets, &modified, &params);
    assert_eq!(deltas.len(), 4);

    for delta in &deltas {
        // More maintenance spend raises lifecycle cost under every strategy
        assert!(delta.what_if_npv > delta.baseline_npv);
        assert!(delta.delta > 0.0);
        let expected_pct = (delta.delta / delta.baseline_npv) * 100.0;
        assert!((delta.delta_percent - expected_pct).abs() < 1e-9);
    }
    assert!(deltas.iter().any(|d| d.strategy == StrategyKind::Reactive));
    assert!(deltas.iter().any(|d| d.strategy == StrategyKind::Proactive));
}

#[test]
fn test_identical_portfolios_have_zero_delta() {
    let assets = baseline_assets();
    let deltas = compare_portfolios(&assets, &assets, &EconomicParams::default());
    for delta in deltas {
        assert_eq!(delta.delta, 0.0);
        assert_eq!(delta.delta_percent, 0.0);
    }
}

#[test]
fn test_zero_baseline_delta_percent_is_guarded() {
    let params = EconomicParams {
        planning_horizon_years: 0,
        ..EconomicParams::default()
    };
    let assets = baseline_assets();
    let modified = apply_adjustments(&assets, &[adjustment(AdjustmentTarget::All, 50.0)]);

    let deltas: Vec<WhatIfDelta> = compare_portfolios(&assets, &modified, &params);
    for delta in deltas {
        assert_eq!(delta.baseline_npv, 0.0);
        assert_eq!(delta.delta_percent, 0.0);
    }
}
