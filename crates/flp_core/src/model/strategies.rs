//! Fixed maintenance-strategy catalog
//!
//! Exactly four policies, shared read-only by every computation. The
//! multipliers are dimensionless: `cost_multiplier` scales annual
//! maintenance spend, `downtime_reduction` and `failure_risk_reduction` are
//! 0-1 fractions, and `lead_time_impact` is carried for display only (it
//! does not enter the NPV formula).

use serde::{Deserialize, Serialize};

/// One of the four fixed maintenance policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    Reactive,
    Preventive,
    Predictive,
    Proactive,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        Self::Reactive,
        Self::Preventive,
        Self::Predictive,
        Self::Proactive,
    ];

    /// Short name used in tables and chart legends
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Reactive => "Reactive",
            Self::Preventive => "Preventive",
            Self::Predictive => "Predictive",
            Self::Proactive => "Proactive",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Reactive => "Reactive (Run-to-Failure)",
            Self::Preventive => "Preventive (Time-Based)",
            Self::Predictive => "Predictive (Condition-Based)",
            Self::Proactive => "Proactive (RCM)",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Reactive => {
                "Replace only when failure occurs. Lowest upfront cost, highest risk."
            }
            Self::Preventive => {
                "Scheduled replacement at fixed intervals regardless of condition."
            }
            Self::Predictive => {
                "Replace based on monitored condition indicators and degradation trends."
            }
            Self::Proactive => {
                "Full reliability-centered maintenance with root cause elimination."
            }
        }
    }

    /// The catalog entry for this policy.
    #[must_use]
    pub fn strategy(self) -> &'static MaintenanceStrategy {
        &MAINTENANCE_STRATEGIES[self as usize]
    }
}

/// Multiplier set for one maintenance policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceStrategy {
    pub kind: StrategyKind,
    pub cost_multiplier: f64,
    /// 0-1 fraction of downtime avoided
    pub downtime_reduction: f64,
    /// 0-1 fraction of failure risk avoided
    pub failure_risk_reduction: f64,
    /// Display-only lead-time scaling
    pub lead_time_impact: f64,
}

/// The fixed policy catalog. Never mutated; indexable by `StrategyKind`.
pub const MAINTENANCE_STRATEGIES: [MaintenanceStrategy; 4] = [
    MaintenanceStrategy {
        kind: StrategyKind::Reactive,
        cost_multiplier: 0.3,
        downtime_reduction: 0.0,
        failure_risk_reduction: 0.0,
        lead_time_impact: 1.5,
    },
    MaintenanceStrategy {
        kind: StrategyKind::Preventive,
        cost_multiplier: 0.6,
        downtime_reduction: 0.4,
        failure_risk_reduction: 0.5,
        lead_time_impact: 1.0,
    },
    MaintenanceStrategy {
        kind: StrategyKind::Predictive,
        cost_multiplier: 0.8,
        downtime_reduction: 0.7,
        failure_risk_reduction: 0.75,
        lead_time_impact: 0.8,
    },
    MaintenanceStrategy {
        kind: StrategyKind::Proactive,
        cost_multiplier: 1.0,
        downtime_reduction: 0.85,
        failure_risk_reduction: 0.9,
        lead_time_impact: 0.6,
    },
];
