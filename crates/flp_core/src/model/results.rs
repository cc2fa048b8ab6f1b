//! Derived financial result shapes
//!
//! These are never stored: every result is recomputed from scratch whenever
//! an input changes (scenario edit, parameter slider). Monetary values are
//! in currency-millions.

use serde::{Deserialize, Serialize};

use super::strategies::{MaintenanceStrategy, StrategyKind};

/// Per-asset (or single-asset view) outcome for one maintenance policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    pub strategy: MaintenanceStrategy,
    /// Discounted lifecycle cost over the planning horizon
    pub npv: f64,
    pub annual_maintenance_cost: f64,
    /// Weeks per failure event after the policy's downtime reduction
    pub expected_downtime_weeks: f64,
    /// Expected failure count over the whole horizon
    pub expected_failures: f64,
    pub total_maintenance_cost: f64,
    pub total_downtime_cost: f64,
    pub total_replacement_cost: f64,
    pub total_cost: f64,
    /// Percent, `downtime_reduction * 100`
    pub availability_gain: f64,
    /// Percent, `failure_risk_reduction * 100`
    pub risk_reduction: f64,
    /// Percent relative to the reactive baseline, denominated in this
    /// strategy's own NPV; 0 when that NPV is non-positive
    pub roi: f64,
    /// Absolute savings relative to reactive (reactive NPV minus own NPV)
    pub savings: f64,
}

/// Portfolio-level aggregate for one maintenance policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioResult {
    pub strategy: StrategyKind,
    /// Additive sum of per-asset NPVs
    pub npv: f64,
    pub maintenance_cost: f64,
    pub downtime_cost: f64,
    /// Display-only fleet availability heuristic,
    /// `(1 - downtime_reduction * 0.1) * 100`
    pub availability: f64,
}
