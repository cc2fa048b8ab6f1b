//! Sensitivity and tornado analysis
//!
//! Quantifies how the ROI of one strategy against a chosen baseline strategy
//! responds to independent percentage perturbations of the three cost
//! dimensions. Every NPV here goes through the engine's single formula path;
//! there is no second copy of the projection.

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::model::{FusionAsset, MAINTENANCE_STRATEGIES, MaintenanceStrategy};

use super::config::EconomicParams;
use super::engine::{CostMultipliers, strategy_npv};

/// Fixed symmetric grid of percent changes for the sensitivity curves
pub const SENSITIVITY_RANGE_PCT: [f64; 9] =
    [-40.0, -30.0, -20.0, -10.0, 0.0, 10.0, 20.0, 30.0, 40.0];

/// Tornado bars perturb each dimension by this much in both directions
pub const TORNADO_PERTURBATION_PCT: f64 = 20.0;

/// One of the three perturbable cost dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostDimension {
    ReplacementCost,
    MaintenanceCost,
    Downtime,
}

impl CostDimension {
    pub const ALL: [CostDimension; 3] = [
        Self::ReplacementCost,
        Self::MaintenanceCost,
        Self::Downtime,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ReplacementCost => "Replacement Cost",
            Self::MaintenanceCost => "Maintenance Cost",
            Self::Downtime => "Downtime Duration",
        }
    }

    /// Multiplier set perturbing only this dimension, the other two held at
    /// unity.
    #[must_use]
    pub fn multipliers(self, multiplier: f64) -> CostMultipliers {
        let mut m = CostMultipliers::BASE;
        match self {
            Self::ReplacementCost => m.replacement = multiplier,
            Self::MaintenanceCost => m.maintenance = multiplier,
            Self::Downtime => m.downtime = multiplier,
        }
        m
    }
}

/// ROI of `primary` against `baseline` under the given perturbation.
///
/// Denominated in the primary strategy's own NPV and guarded to 0 when that
/// NPV is non-positive; the guard is the only safety rail.
#[must_use]
pub fn roi_between(
    asset: &FusionAsset,
    primary: &MaintenanceStrategy,
    baseline: &MaintenanceStrategy,
    params: &EconomicParams,
    multipliers: CostMultipliers,
) -> f64 {
    let primary_npv = strategy_npv(asset, primary, params, multipliers);
    if primary_npv <= 0.0 {
        return 0.0;
    }
    let baseline_npv = strategy_npv(asset, baseline, params, multipliers);
    ((baseline_npv - primary_npv) / primary_npv) * 100.0
}

/// One grid point of the ROI sensitivity curves: the same percent change
/// applied to each dimension in isolation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub percent_change: f64,
    pub replacement_cost_roi: f64,
    pub maintenance_cost_roi: f64,
    pub downtime_roi: f64,
}

/// Three ROI series over the fixed percent grid, one per cost dimension.
#[must_use]
pub fn sensitivity_curves(
    asset: &FusionAsset,
    primary: &MaintenanceStrategy,
    baseline: &MaintenanceStrategy,
    params: &EconomicParams,
) -> Vec<SensitivityPoint> {
    let point = |percent_change: &f64| {
        let multiplier = 1.0 + percent_change / 100.0;
        SensitivityPoint {
            percent_change: *percent_change,
            replacement_cost_roi: roi_between(
                asset,
                primary,
                baseline,
                params,
                CostDimension::ReplacementCost.multipliers(multiplier),
            ),
            maintenance_cost_roi: roi_between(
                asset,
                primary,
                baseline,
                params,
                CostDimension::MaintenanceCost.multipliers(multiplier),
            ),
            downtime_roi: roi_between(
                asset,
                primary,
                baseline,
                params,
                CostDimension::Downtime.multipliers(multiplier),
            ),
        }
    };

    #[cfg(feature = "parallel")]
    let points: Vec<SensitivityPoint> = SENSITIVITY_RANGE_PCT.par_iter().map(point).collect();

    #[cfg(not(feature = "parallel"))]
    let points: Vec<SensitivityPoint> = SENSITIVITY_RANGE_PCT.iter().map(point).collect();

    points
}

/// One tornado bar: ROI swing of a single dimension at ±20%
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TornadoEntry {
    pub dimension: CostDimension,
    pub base_roi: f64,
    pub low_roi: f64,
    pub high_roi: f64,
    /// `|high_roi - low_roi|`; the sort key
    pub swing: f64,
    pub low_delta: f64,
    pub high_delta: f64,
}

/// Tornado data for the three cost dimensions, sorted descending by swing.
/// The first entry is the most sensitive dimension.
#[must_use]
pub fn tornado(
    asset: &FusionAsset,
    primary: &MaintenanceStrategy,
    baseline: &MaintenanceStrategy,
    params: &EconomicParams,
) -> Vec<TornadoEntry> {
    let base_roi = roi_between(asset, primary, baseline, params, CostMultipliers::BASE);
    let low_multiplier = 1.0 - TORNADO_PERTURBATION_PCT / 100.0;
    let high_multiplier = 1.0 + TORNADO_PERTURBATION_PCT / 100.0;

    let mut entries: Vec<TornadoEntry> = CostDimension::ALL
        .iter()
        .map(|&dimension| {
            let low_roi = roi_between(
                asset,
                primary,
                baseline,
                params,
                dimension.multipliers(low_multiplier),
            );
            let high_roi = roi_between(
                asset,
                primary,
                baseline,
                params,
                dimension.multipliers(high_multiplier),
            );
            TornadoEntry {
                dimension,
                base_roi,
                low_roi,
                high_roi,
                swing: (high_roi - low_roi).abs(),
                low_delta: low_roi - base_roi,
                high_delta: high_roi - base_roi,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.swing.total_cmp(&a.swing));
    entries
}

/// NPV of every strategy at one replacement-cost perturbation point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyNpvPoint {
    pub percent_change: f64,
    pub reactive: f64,
    pub preventive: f64,
    pub predictive: f64,
    pub proactive: f64,
}

/// NPV (not ROI) for all four strategies over the fixed percent grid, under
/// a replacement-cost-only perturbation. Used as a comparison overlay.
#[must_use]
pub fn strategy_npv_sensitivity(
    asset: &FusionAsset,
    params: &EconomicParams,
) -> Vec<StrategyNpvPoint> {
    SENSITIVITY_RANGE_PCT
        .iter()
        .map(|&percent_change| {
            let multipliers =
                CostDimension::ReplacementCost.multipliers(1.0 + percent_change / 100.0);
            let npv =
                |strategy: &MaintenanceStrategy| strategy_npv(asset, strategy, params, multipliers);
            StrategyNpvPoint {
                percent_change,
                reactive: npv(&MAINTENANCE_STRATEGIES[0]),
                preventive: npv(&MAINTENANCE_STRATEGIES[1]),
                predictive: npv(&MAINTENANCE_STRATEGIES[2]),
                proactive: npv(&MAINTENANCE_STRATEGIES[3]),
            }
        })
        .collect()
}
