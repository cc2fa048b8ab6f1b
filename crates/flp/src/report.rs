//! Analysis report assembly and rendering
//!
//! A report is a plain serializable snapshot of one full analysis run:
//! the economic parameters, every per-asset strategy result, and the
//! portfolio rollup. Rendering to text tables and exporting to JSON both
//! read the same snapshot.

use std::fmt::Write as _;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use flp_core::analysis::{EconomicParams, TornadoEntry, analyze_asset, analyze_portfolio};
use flp_core::model::{FusionAsset, PortfolioResult, StrategyResult};

use crate::util::format::{format_millions, format_percent, format_weeks};
use crate::util::io::atomic_write;

/// Strategy results for one asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetReport {
    pub id: String,
    pub name: String,
    pub criticality_score: f64,
    pub results: Vec<StrategyResult>,
}

/// One full analysis run as a serializable snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: Timestamp,
    pub params: EconomicParams,
    pub assets: Vec<AssetReport>,
    pub portfolio: Vec<PortfolioResult>,
}

/// Run the full analysis over the collection and collect a report.
#[must_use]
pub fn build_report(assets: &[FusionAsset], params: &EconomicParams) -> AnalysisReport {
    AnalysisReport {
        generated_at: Timestamp::now(),
        params: *params,
        assets: assets
            .iter()
            .map(|asset| AssetReport {
                id: asset.id.as_str().to_owned(),
                name: asset.name.clone(),
                criticality_score: asset.criticality_score(),
                results: analyze_asset(asset, params),
            })
            .collect(),
        portfolio: analyze_portfolio(assets, params),
    }
}

impl AnalysisReport {
    /// Export as pretty-printed JSON via an atomic write.
    pub fn write_json(&self, path: &Path) -> color_eyre::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        atomic_write(path, &json)
            .wrap_err_with(|| format!("failed to write report {}", path.display()))?;
        tracing::info!(path = %path.display(), "Report written");
        Ok(())
    }
}

/// Asset registry table: id, name, maturity, risk, criticality.
#[must_use]
pub fn render_assets_table(assets: &[FusionAsset]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<18} {:<28} {:<12} {:<10} {:>12}",
        "ID", "NAME", "MATURITY", "RISK", "CRITICALITY"
    );
    for asset in assets {
        let _ = writeln!(
            out,
            "{:<18} {:<28} {:<12} {:<10} {:>12.2}",
            asset.id.as_str(),
            asset.name,
            asset.maturity_level.label(),
            asset.risk_level.label(),
            asset.criticality_score(),
        );
    }
    out
}

/// Per-strategy table for one asset's results.
#[must_use]
pub fn render_strategy_table(results: &[StrategyResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:>12} {:>12} {:>10} {:>10} {:>10}",
        "STRATEGY", "NPV COST", "TOTAL COST", "DOWNTIME", "ROI", "SAVINGS"
    );
    for result in results {
        let _ = writeln!(
            out,
            "{:<12} {:>12} {:>12} {:>10} {:>10} {:>10}",
            result.strategy.kind.short_name(),
            format_millions(result.npv),
            format_millions(result.total_cost),
            format_weeks(result.expected_downtime_weeks),
            format_percent(result.roi),
            format_millions(result.savings),
        );
    }
    out
}

/// Portfolio rollup table.
#[must_use]
pub fn render_portfolio_table(portfolio: &[PortfolioResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:>12} {:>14} {:>14} {:>14}",
        "STRATEGY", "NPV COST", "MAINTENANCE", "DOWNTIME", "AVAILABILITY"
    );
    for result in portfolio {
        let _ = writeln!(
            out,
            "{:<12} {:>12} {:>14} {:>14} {:>14}",
            result.strategy.short_name(),
            format_millions(result.npv),
            format_millions(result.maintenance_cost),
            format_millions(result.downtime_cost),
            format_percent(result.availability),
        );
    }
    out
}

/// Tornado table, most sensitive dimension first.
#[must_use]
pub fn render_tornado_table(entries: &[TornadoEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<20} {:>10} {:>10} {:>10} {:>10}",
        "DIMENSION", "BASE ROI", "LOW", "HIGH", "SWING"
    );
    for entry in entries {
        let _ = writeln!(
            out,
            "{:<20} {:>10} {:>10} {:>10} {:>10}",
            entry.dimension.label(),
            format_percent(entry.base_roi),
            format_percent(entry.low_roi),
            format_percent(entry.high_roi),
            format_percent(entry.swing),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use flp_core::seed::baseline_assets;
    use tempfile::tempdir;

    #[test]
    fn test_report_covers_every_asset_and_strategy() {
        let assets = baseline_assets();
        let report = build_report(&assets, &EconomicParams::default());

        assert_eq!(report.assets.len(), assets.len());
        assert_eq!(report.portfolio.len(), 4);
        for asset_report in &report.assets {
            assert_eq!(asset_report.results.len(), 4);
        }
    }

    #[test]
    fn test_report_json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        let report = build_report(&baseline_assets(), &EconomicParams::default());
        report.write_json(&path).unwrap();

        let loaded: AnalysisReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, report);
    }

    #[test]
    fn test_tables_have_one_row_per_entry() {
        let assets = baseline_assets();
        let params = EconomicParams::default();

        let table = render_assets_table(&assets);
        assert_eq!(table.lines().count(), assets.len() + 1);

        let portfolio = analyze_portfolio(&assets, &params);
        let table = render_portfolio_table(&portfolio);
        assert_eq!(table.lines().count(), 5);
        assert!(table.contains("Reactive"));
        assert!(table.contains("Proactive"));
    }
}
