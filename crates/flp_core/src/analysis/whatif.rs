//! Bulk what-if adjustments
//!
//! Applies percentage changes to the cost schedules of a subset of the
//! asset collection and compares the resulting portfolio economics against
//! the unmodified collection, per strategy. The adjusted collection is a
//! fresh copy; the input is never mutated.

use serde::{Deserialize, Serialize};

use crate::model::{AssetId, FusionAsset, MAINTENANCE_STRATEGIES, StrategyKind};

use super::config::EconomicParams;
use super::engine::analyze_portfolio;
use super::sensitivity::CostDimension;

/// Which cost figures an adjustment touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjustmentTarget {
    Dimension(CostDimension),
    /// All three cost dimensions at once
    All,
}

/// One bulk adjustment: a percent change applied to the cost schedules of
/// the named assets (all assets when the list is empty)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterAdjustment {
    /// Empty means every asset in the collection
    pub asset_ids: Vec<AssetId>,
    pub target: AdjustmentTarget,
    pub change_percent: f64,
    pub enabled: bool,
}

impl ParameterAdjustment {
    fn applies_to(&self, asset: &FusionAsset) -> bool {
        self.enabled && (self.asset_ids.is_empty() || self.asset_ids.contains(&asset.id))
    }

    fn apply(&self, asset: &mut FusionAsset) {
        let multiplier = 1.0 + self.change_percent / 100.0;
        let schedule = &mut asset.cost_schedule;
        let (replacement, maintenance, downtime) = match self.target {
            AdjustmentTarget::Dimension(CostDimension::ReplacementCost) => (true, false, false),
            AdjustmentTarget::Dimension(CostDimension::MaintenanceCost) => (false, true, false),
            AdjustmentTarget::Dimension(CostDimension::Downtime) => (false, false, true),
            AdjustmentTarget::All => (true, true, true),
        };
        if replacement {
            schedule.replacement_cost_millions *= multiplier;
        }
        if maintenance {
            schedule.annual_maintenance_cost_millions *= multiplier;
        }
        if downtime {
            schedule.downtime_weeks *= multiplier;
        }
    }
}

/// Return a copy of the collection with every enabled adjustment applied.
/// Adjustments compose multiplicatively when several hit the same asset.
#[must_use]
pub fn apply_adjustments(
    assets: &[FusionAsset],
    adjustments: &[ParameterAdjustment],
) -> Vec<FusionAsset> {
    assets
        .iter()
        .map(|asset| {
            let mut modified = asset.clone();
            for adjustment in adjustments {
                if adjustment.applies_to(asset) {
                    adjustment.apply(&mut modified);
                }
            }
            modified
        })
        .collect()
}

/// Per-strategy delta between the unmodified and adjusted portfolios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WhatIfDelta {
    pub strategy: StrategyKind,
    pub baseline_npv: f64,
    pub what_if_npv: f64,
    pub delta: f64,
    /// Percent change relative to the baseline NPV; 0 when the baseline NPV
    /// is zero
    pub delta_percent: f64,
}

/// Compare portfolio NPV per strategy before and after the adjustments.
#[must_use]
pub fn compare_portfolios(
    baseline_assets: &[FusionAsset],
    modified_assets: &[FusionAsset],
    params: &EconomicParams,
) -> Vec<WhatIfDelta> {
    let baseline = analyze_portfolio(baseline_assets, params);
    let what_if = analyze_portfolio(modified_assets, params);

    MAINTENANCE_STRATEGIES
        .iter()
        .map(|strategy| {
            let baseline_npv = baseline
                .iter()
                .find(|r| r.strategy == strategy.kind)
                .map_or(0.0, |r| r.npv);
            let what_if_npv = what_if
                .iter()
                .find(|r| r.strategy == strategy.kind)
                .map_or(0.0, |r| r.npv);
            let delta = what_if_npv - baseline_npv;
            WhatIfDelta {
                strategy: strategy.kind,
                baseline_npv,
                what_if_npv,
                delta,
                delta_percent: if baseline_npv != 0.0 {
                    (delta / baseline_npv) * 100.0
                } else {
                    0.0
                },
            }
        })
        .collect()
}
