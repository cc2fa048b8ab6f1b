//! Strategy analysis, sensitivity, and what-if engines.
//!
//! Everything in this module is a pure function of (assets, parameters):
//! nothing here holds state besides the opt-in memoization cache, and every
//! result is recomputed from scratch when any input changes.
//!
//! ```ignore
//! use flp_core::analysis::{EconomicParams, analyze_asset, tornado};
//! use flp_core::model::StrategyKind;
//!
//! let params = EconomicParams::default();
//! let results = analyze_asset(&asset, &params);
//!
//! let bars = tornado(
//!     &asset,
//!     StrategyKind::Proactive.strategy(),
//!     StrategyKind::Reactive.strategy(),
//!     &params,
//! );
//! let most_sensitive = bars.first();
//! ```

mod config;
mod engine;
mod sensitivity;
mod whatif;

pub use config::*;
pub use engine::*;
pub use sensitivity::*;
pub use whatif::*;
