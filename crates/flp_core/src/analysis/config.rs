//! Global economic parameters for the strategy analysis

use serde::{Deserialize, Serialize};

/// Hours in a week of continuous operation
pub const HOURS_PER_WEEK: f64 = 168.0;

/// Assumed plant capacity factor for revenue-loss estimates
pub const CAPACITY_FACTOR: f64 = 0.8;

/// Inputs shared by every strategy computation.
///
/// The engine applies no validation or clamping: a zero horizon yields zero
/// costs everywhere, and negative prices or capacities propagate
/// mathematically. Guard rails, if wanted, belong at the presentation
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicParams {
    /// Planning horizon in whole years
    pub planning_horizon_years: u32,
    /// Annual discount rate in percent (5 means 5%)
    pub discount_rate_pct: f64,
    /// Electricity price in currency per MWh
    pub electricity_price_per_mwh: f64,
    /// Plant capacity in MW
    pub plant_capacity_mw: f64,
}

impl EconomicParams {
    /// Revenue lost per week of downtime, in currency-millions.
    #[must_use]
    pub fn weekly_revenue(&self) -> f64 {
        (self.plant_capacity_mw * HOURS_PER_WEEK * self.electricity_price_per_mwh * CAPACITY_FACTOR)
            / 1_000_000.0
    }

    /// Present-value factor for a cash flow `year` years out.
    #[must_use]
    pub fn discount_factor(&self, year: u32) -> f64 {
        (1.0 + self.discount_rate_pct / 100.0).powi(-(year as i32))
    }
}

impl Default for EconomicParams {
    /// Dashboard slider defaults; the engine itself never assumes them.
    fn default() -> Self {
        Self {
            planning_horizon_years: 20,
            discount_rate_pct: 5.0,
            electricity_price_per_mwh: 80.0,
            plant_capacity_mw: 500.0,
        }
    }
}
