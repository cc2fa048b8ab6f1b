use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::eyre;

use flp::dataset::load_assets;
use flp::init_logging;
use flp::report::{
    build_report, render_assets_table, render_portfolio_table, render_strategy_table,
    render_tornado_table,
};
use flp::util::format::format_millions;
use flp_core::analysis::{
    AdjustmentTarget, CostDimension, EconomicParams, ParameterAdjustment, analyze_asset,
    apply_adjustments, compare_portfolios, sensitivity_curves, tornado,
};
use flp_core::model::{AssetId, FusionAsset, StrategyKind};

#[derive(Parser, Debug)]
#[command(name = "flp")]
#[command(about = "Maintenance-strategy economics for fusion plant components")]
struct Args {
    /// Path to a JSON asset dataset (default: bundled seed data)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Planning horizon in years
    #[arg(long, default_value_t = 20)]
    horizon: u32,

    /// Annual discount rate in percent
    #[arg(long, default_value_t = 5.0)]
    discount_rate: f64,

    /// Electricity price in $/MWh
    #[arg(long, default_value_t = 80.0)]
    price: f64,

    /// Plant capacity in MW
    #[arg(long, default_value_t = 500.0)]
    capacity: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the asset registry
    Assets,
    /// Strategy comparison for one asset, or the portfolio rollup
    Analyze {
        /// Asset id; omit for the portfolio view
        #[arg(short, long)]
        asset: Option<String>,
    },
    /// ROI sensitivity curves and tornado ranking for one asset
    Sensitivity {
        #[arg(short, long)]
        asset: String,

        /// Strategy under evaluation
        #[arg(short, long, default_value = "proactive", value_parser = parse_strategy)]
        strategy: StrategyKind,

        /// Baseline strategy for the ROI comparison
        #[arg(short, long, default_value = "reactive", value_parser = parse_strategy)]
        baseline: StrategyKind,
    },
    /// Portfolio deltas under a bulk cost adjustment
    Whatif {
        /// Percent change applied to the targeted costs
        #[arg(short, long, allow_hyphen_values = true)]
        change: f64,

        /// Cost dimension to adjust
        #[arg(short = 't', long, default_value = "all", value_parser = parse_target)]
        target: AdjustmentTarget,

        /// Asset ids to adjust; omit for every asset
        #[arg(short, long)]
        asset: Vec<String>,
    },
    /// Write the full analysis report as JSON
    Export {
        /// Output path
        #[arg(short, long, default_value = "flp-report.json")]
        output: PathBuf,
    },
}

fn parse_strategy(s: &str) -> Result<StrategyKind, String> {
    match s.to_ascii_lowercase().as_str() {
        "reactive" => Ok(StrategyKind::Reactive),
        "preventive" => Ok(StrategyKind::Preventive),
        "predictive" => Ok(StrategyKind::Predictive),
        "proactive" => Ok(StrategyKind::Proactive),
        _ => Err(format!(
            "unknown strategy '{s}' (expected reactive, preventive, predictive, or proactive)"
        )),
    }
}

fn parse_target(s: &str) -> Result<AdjustmentTarget, String> {
    match s.to_ascii_lowercase().as_str() {
        "replacement" => Ok(AdjustmentTarget::Dimension(CostDimension::ReplacementCost)),
        "maintenance" => Ok(AdjustmentTarget::Dimension(CostDimension::MaintenanceCost)),
        "downtime" => Ok(AdjustmentTarget::Dimension(CostDimension::Downtime)),
        "all" => Ok(AdjustmentTarget::All),
        _ => Err(format!(
            "unknown target '{s}' (expected replacement, maintenance, downtime, or all)"
        )),
    }
}

fn find_asset<'a>(assets: &'a [FusionAsset], id: &str) -> color_eyre::Result<&'a FusionAsset> {
    assets
        .iter()
        .find(|a| a.id.as_str() == id)
        .ok_or_else(|| eyre!("no asset with id '{id}'"))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let assets = load_assets(args.data.as_deref())?;
    let params = EconomicParams {
        planning_horizon_years: args.horizon,
        discount_rate_pct: args.discount_rate,
        electricity_price_per_mwh: args.price,
        plant_capacity_mw: args.capacity,
    };

    match args.command {
        Command::Assets => {
            print!("{}", render_assets_table(&assets));
        }
        Command::Analyze { asset: Some(id) } => {
            let asset = find_asset(&assets, &id)?;
            println!("{} ({})\n", asset.name, asset.id);
            print!("{}", render_strategy_table(&analyze_asset(asset, &params)));
        }
        Command::Analyze { asset: None } => {
            let report = build_report(&assets, &params);
            print!("{}", render_portfolio_table(&report.portfolio));
        }
        Command::Sensitivity {
            asset,
            strategy,
            baseline,
        } => {
            let asset = find_asset(&assets, &asset)?;
            let primary = strategy.strategy();
            let base = baseline.strategy();

            println!(
                "{} ROI vs {} for {}\n",
                strategy.short_name(),
                baseline.short_name(),
                asset.name
            );
            println!(
                "{:<8} {:>14} {:>14} {:>14}",
                "CHANGE", "REPLACEMENT", "MAINTENANCE", "DOWNTIME"
            );
            for point in sensitivity_curves(asset, primary, base, &params) {
                println!(
                    "{:>+7.0}% {:>13.1}% {:>13.1}% {:>13.1}%",
                    point.percent_change,
                    point.replacement_cost_roi,
                    point.maintenance_cost_roi,
                    point.downtime_roi,
                );
            }

            println!();
            print!(
                "{}",
                render_tornado_table(&tornado(asset, primary, base, &params))
            );
        }
        Command::Whatif {
            change,
            target,
            asset,
        } => {
            let adjustment = ParameterAdjustment {
                asset_ids: asset.into_iter().map(AssetId::new).collect(),
                target,
                change_percent: change,
                enabled: true,
            };
            for id in &adjustment.asset_ids {
                // Fail early on a typo rather than silently adjusting nothing
                find_asset(&assets, id.as_str())?;
            }

            let modified = apply_adjustments(&assets, &[adjustment]);
            println!(
                "{:<12} {:>14} {:>14} {:>12} {:>10}",
                "STRATEGY", "BASELINE NPV", "WHAT-IF NPV", "DELTA", "DELTA %"
            );
            for delta in compare_portfolios(&assets, &modified, &params) {
                println!(
                    "{:<12} {:>14} {:>14} {:>12} {:>9.1}%",
                    delta.strategy.short_name(),
                    format_millions(delta.baseline_npv),
                    format_millions(delta.what_if_npv),
                    format_millions(delta.delta),
                    delta.delta_percent,
                );
            }
        }
        Command::Export { output } => {
            build_report(&assets, &params).write_json(&output)?;
            println!("wrote {}", output.display());
        }
    }

    Ok(())
}
