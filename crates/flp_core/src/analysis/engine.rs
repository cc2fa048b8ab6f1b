//! Discounted lifecycle cost projection per maintenance strategy
//!
//! This is the single formula path for the whole crate: the per-asset view,
//! the portfolio view, the sensitivity engine, and the what-if comparison
//! all go through [`strategy_breakdown`]. Results are recomputed from
//! scratch on every call; the only caching is [`AnalysisCache`], keyed on
//! the exact input tuple.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::{
    AssetId, FusionAsset, MAINTENANCE_STRATEGIES, MaintenanceStrategy, PortfolioResult, RiskLevel,
    StrategyKind, StrategyResult,
};

use super::config::EconomicParams;

/// Pre-multipliers applied to the asset's three cost dimensions before the
/// per-year loop. Unity for the unperturbed case; the sensitivity engine
/// passes perturbed values. Deliberately unclamped: a multiplier at or below
/// zero drives the underlying cost to zero or negative and propagates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostMultipliers {
    pub replacement: f64,
    pub maintenance: f64,
    pub downtime: f64,
}

impl CostMultipliers {
    /// The unperturbed case
    pub const BASE: CostMultipliers = CostMultipliers {
        replacement: 1.0,
        maintenance: 1.0,
        downtime: 1.0,
    };
}

impl Default for CostMultipliers {
    fn default() -> Self {
        Self::BASE
    }
}

/// Accumulated figures from one (asset, strategy) projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NpvBreakdown {
    pub npv: f64,
    pub total_maintenance_cost: f64,
    pub total_downtime_cost: f64,
    pub total_replacement_cost: f64,
    pub annual_maintenance_cost: f64,
    pub expected_downtime_weeks: f64,
    pub adjusted_failure_rate: f64,
}

/// Project one asset under one strategy over the planning horizon.
///
/// A zero horizon skips the loop entirely, leaving every accumulator at
/// zero. Nothing is clamped.
#[must_use]
pub fn strategy_breakdown(
    asset: &FusionAsset,
    strategy: &MaintenanceStrategy,
    params: &EconomicParams,
    multipliers: CostMultipliers,
) -> NpvBreakdown {
    let replacement_cost = asset.cost_schedule.replacement_cost_millions * multipliers.replacement;
    let base_annual_maintenance =
        asset.cost_schedule.annual_maintenance_cost_millions * multipliers.maintenance;
    let base_downtime = asset.cost_schedule.downtime_weeks * multipliers.downtime;

    let weekly_revenue = params.weekly_revenue();
    let annual_maintenance_cost = base_annual_maintenance * (1.0 + strategy.cost_multiplier);
    let expected_downtime_weeks = base_downtime * (1.0 - strategy.downtime_reduction);
    let downtime_cost_per_event = expected_downtime_weeks * weekly_revenue;

    let adjusted_failure_rate =
        asset.risk_level.base_failure_rate() * (1.0 - strategy.failure_risk_reduction);

    let mut npv = 0.0;
    let mut total_maintenance_cost = 0.0;
    let mut total_downtime_cost = 0.0;
    let mut total_replacement_cost = 0.0;

    for year in 1..=params.planning_horizon_years {
        let discount_factor = params.discount_factor(year);

        total_maintenance_cost += annual_maintenance_cost;
        npv += annual_maintenance_cost * discount_factor;

        let expected_failure_cost =
            adjusted_failure_rate * (replacement_cost + downtime_cost_per_event);
        total_replacement_cost += adjusted_failure_rate * replacement_cost;
        total_downtime_cost += adjusted_failure_rate * downtime_cost_per_event;
        npv += expected_failure_cost * discount_factor;
    }

    NpvBreakdown {
        npv,
        total_maintenance_cost,
        total_downtime_cost,
        total_replacement_cost,
        annual_maintenance_cost,
        expected_downtime_weeks,
        adjusted_failure_rate,
    }
}

/// NPV only, for callers that do not need the breakdown.
#[must_use]
pub fn strategy_npv(
    asset: &FusionAsset,
    strategy: &MaintenanceStrategy,
    params: &EconomicParams,
    multipliers: CostMultipliers,
) -> f64 {
    strategy_breakdown(asset, strategy, params, multipliers).npv
}

/// Full per-strategy results for one asset, ROI post-pass included.
///
/// ROI is relative to the reactive baseline but denominated in each
/// strategy's own NPV; it is guarded to exactly 0 whenever either the
/// reactive NPV or the strategy's own NPV is non-positive. Savings are
/// unguarded (reactive NPV minus own NPV), so reactive itself always lands
/// at 0.
#[must_use]
pub fn analyze_asset(asset: &FusionAsset, params: &EconomicParams) -> Vec<StrategyResult> {
    let horizon = f64::from(params.planning_horizon_years);

    let mut results: Vec<StrategyResult> = MAINTENANCE_STRATEGIES
        .iter()
        .map(|strategy| {
            let bd = strategy_breakdown(asset, strategy, params, CostMultipliers::BASE);
            StrategyResult {
                strategy: *strategy,
                npv: bd.npv,
                annual_maintenance_cost: bd.annual_maintenance_cost,
                expected_downtime_weeks: bd.expected_downtime_weeks,
                expected_failures: bd.adjusted_failure_rate * horizon,
                total_maintenance_cost: bd.total_maintenance_cost,
                total_downtime_cost: bd.total_downtime_cost,
                total_replacement_cost: bd.total_replacement_cost,
                total_cost: bd.total_maintenance_cost
                    + bd.total_downtime_cost
                    + bd.total_replacement_cost,
                availability_gain: strategy.downtime_reduction * 100.0,
                risk_reduction: strategy.failure_risk_reduction * 100.0,
                roi: 0.0,
                savings: 0.0,
            }
        })
        .collect();

    let reactive_npv = results
        .iter()
        .find(|r| r.strategy.kind == StrategyKind::Reactive)
        .map_or(0.0, |r| r.npv);

    for result in &mut results {
        result.roi = if reactive_npv > 0.0 && result.npv > 0.0 {
            ((reactive_npv - result.npv) / result.npv) * 100.0
        } else {
            0.0
        };
        result.savings = reactive_npv - result.npv;
    }

    results
}

/// Portfolio aggregates: the same projection summed over every asset.
///
/// Totals are additive sums, never averages. The availability figure is a
/// display-only fleet heuristic unrelated to the failure-rate model.
#[must_use]
pub fn analyze_portfolio(assets: &[FusionAsset], params: &EconomicParams) -> Vec<PortfolioResult> {
    MAINTENANCE_STRATEGIES
        .iter()
        .map(|strategy| {
            let mut npv = 0.0;
            let mut maintenance_cost = 0.0;
            let mut downtime_cost = 0.0;

            for asset in assets {
                let bd = strategy_breakdown(asset, strategy, params, CostMultipliers::BASE);
                npv += bd.npv;
                maintenance_cost += bd.total_maintenance_cost;
                downtime_cost += bd.total_downtime_cost;
            }

            PortfolioResult {
                strategy: strategy.kind,
                npv,
                maintenance_cost,
                downtime_cost,
                availability: (1.0 - strategy.downtime_reduction * 0.1) * 100.0,
            }
        })
        .collect()
}

/// Cache key covering every input the projection reads. Floats are keyed by
/// bit pattern, so -0.0 and 0.0 are distinct keys; both map to the same
/// result, which only costs one redundant entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    asset_id: AssetId,
    risk_level: RiskLevel,
    replacement_bits: u64,
    maintenance_bits: u64,
    downtime_bits: u64,
    horizon_years: u32,
    discount_bits: u64,
    price_bits: u64,
    capacity_bits: u64,
}

impl CacheKey {
    fn new(asset: &FusionAsset, params: &EconomicParams) -> Self {
        Self {
            asset_id: asset.id.clone(),
            risk_level: asset.risk_level,
            replacement_bits: asset.cost_schedule.replacement_cost_millions.to_bits(),
            maintenance_bits: asset
                .cost_schedule
                .annual_maintenance_cost_millions
                .to_bits(),
            downtime_bits: asset.cost_schedule.downtime_weeks.to_bits(),
            horizon_years: params.planning_horizon_years,
            discount_bits: params.discount_rate_pct.to_bits(),
            price_bits: params.electricity_price_per_mwh.to_bits(),
            capacity_bits: params.plant_capacity_mw.to_bits(),
        }
    }
}

/// Memoized front end to [`analyze_asset`], for callers that re-render on
/// unrelated state changes. Safe to drop at any time; there is no
/// invalidation to get wrong because the key covers every input.
#[derive(Debug, Default)]
pub struct AnalysisCache {
    results: FxHashMap<CacheKey, Vec<StrategyResult>>,
}

impl AnalysisCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze one asset, reusing a prior result when every relevant input
    /// matches bit-for-bit.
    pub fn analyze_asset(&mut self, asset: &FusionAsset, params: &EconomicParams) -> &[StrategyResult] {
        self.results
            .entry(CacheKey::new(asset, params))
            .or_insert_with(|| analyze_asset(asset, params))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }
}
