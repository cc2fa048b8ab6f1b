//! Fusion component lifecycle economics library
//!
//! This crate models maintenance-strategy economics for a portfolio of
//! fusion plant components. It supports:
//! - A baseline asset registry with per-component cost schedules
//! - Copy-on-write scenario overlays with field-level diffing
//! - Discounted lifecycle cost projection for four maintenance strategies
//! - Per-asset and portfolio NPV, ROI, and savings figures
//! - Cost-dimension sensitivity curves and tornado ranking
//! - Bulk what-if adjustments with per-strategy portfolio deltas
//!
//! # Example
//!
//! ```ignore
//! use flp_core::analysis::{EconomicParams, analyze_portfolio};
//! use flp_core::scenario::ScenarioStore;
//! use flp_core::seed::baseline_assets;
//!
//! let store = ScenarioStore::new(baseline_assets());
//! let params = EconomicParams::default();
//! let portfolio = analyze_portfolio(store.get_active_assets(), &params);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod scenario;
pub mod seed;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::EconomicParams;
pub use model::{FusionAsset, MAINTENANCE_STRATEGIES, StrategyKind};
pub use scenario::ScenarioStore;
