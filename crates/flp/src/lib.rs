//! Fusion lifecycle passport CLI
//!
//! Command-line front end for the `flp_core` economics engine: loads an
//! asset dataset (bundled seed or a JSON file), runs strategy, sensitivity,
//! and what-if analyses, and renders tables or JSON reports.

pub mod dataset;
pub mod logging;
pub mod report;
pub mod util;

pub use logging::init_logging;
