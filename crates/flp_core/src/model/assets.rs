//! Asset records for the lifecycle passport
//!
//! A [`FusionAsset`] describes one physical component category of the plant:
//! its criticality factors, maturity, risk classification, cost schedule, and
//! the descriptive sub-records shown on the passport detail view. Only the
//! risk level and the cost schedule feed the financial engine; everything
//! else is carried for display and diffing.

use serde::{Deserialize, Serialize};

use super::ids::AssetId;

/// Clamp a criticality-style score to the 1-5 integer scale.
#[must_use]
pub fn clamp_scale(value: i64) -> u8 {
    value.clamp(1, 5) as u8
}

/// Clamp a confidence score to the 0-100 integer percent range.
#[must_use]
pub fn clamp_confidence(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

/// Physical component category of the plant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetCategory {
    PlasmaFacing,
    Magnets,
    Blanket,
    Structural,
    Auxiliary,
}

impl AssetCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PlasmaFacing => "Plasma-Facing",
            Self::Magnets => "Magnets",
            Self::Blanket => "Blanket",
            Self::Structural => "Structural",
            Self::Auxiliary => "Auxiliary",
        }
    }
}

/// Engineering maturity, ordered from concept to operational
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MaturityLevel {
    Concept,
    Design,
    Prototype,
    Qualified,
    Operational,
}

impl MaturityLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Concept => "Concept",
            Self::Design => "Design",
            Self::Prototype => "Prototype",
            Self::Qualified => "Qualified",
            Self::Operational => "Operational",
        }
    }
}

/// Risk classification, ordered from low to critical
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Annual failure probability used by the financial engine.
    #[must_use]
    pub fn base_failure_rate(self) -> f64 {
        match self {
            Self::Critical => 0.15,
            Self::High => 0.10,
            Self::Medium => 0.05,
            Self::Low => 0.02,
        }
    }
}

/// R&D learning priority, ordered from low to immediate
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LearningPriority {
    Low,
    Medium,
    High,
    Immediate,
}

impl LearningPriority {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Immediate => "Immediate",
        }
    }
}

/// Spare-parts availability ordinal (best to worst)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SparePartsAvailability {
    High,
    Medium,
    Low,
    Critical,
}

/// Confidence in a degradation hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HypothesisConfidence {
    High,
    Medium,
    Low,
    Unknown,
}

/// Supply-chain maturity for a replacement strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplyChainRealism {
    Proven,
    Developing,
    Uncertain,
}

/// Impact magnitude used in the system-value sub-record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImpactLevel {
    Critical,
    Major,
    Moderate,
    Minor,
}

/// Three-step uncertainty ordinal
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum UncertaintyLevel {
    Low,
    Medium,
    High,
}

/// Disposal complexity ordinal
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DisposalComplexity {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Cost and schedule figures consumed by the financial engine.
///
/// Monetary values are in currency-millions; durations in the units their
/// names state. Only the first three fields enter the NPV formula; the rest
/// are carried for comparison views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSchedule {
    pub replacement_cost_millions: f64,
    pub annual_maintenance_cost_millions: f64,
    pub downtime_weeks: f64,
    pub lead_time_months: f64,
    pub spare_parts_availability: SparePartsAvailability,
    pub classification_uncertainty: UncertaintyLevel,
    pub disposal_complexity: DisposalComplexity,
}

/// One hypothesized degradation mechanism (display payload)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegradationHypothesis {
    pub mechanism: String,
    pub confidence: HypothesisConfidence,
    pub description: String,
    pub known_unknown: bool,
}

/// One monitored parameter and its measurement approach (display payload)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoringStrategy {
    pub parameter: String,
    pub method: String,
    pub purpose: String,
    pub uncertainty_reduction: String,
    pub fallback: String,
}

/// Maintainability constraints (display payload)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintainabilityInfo {
    pub access_constraints: String,
    pub replacement_strategy: String,
    pub estimated_duration: String,
    pub remote_handling: bool,
    pub supply_chain_realism: SupplyChainRealism,
}

/// System-value impact summary (display payload)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemValueImpact {
    pub availability_impact: ImpactLevel,
    pub flexibility_impact: ImpactLevel,
    pub output_impact: String,
    pub energy_system_links: Vec<String>,
}

/// End-of-life handling assumptions (display payload)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndOfLifeAssumptions {
    pub waste_classification: String,
    pub classification_uncertainty: UncertaintyLevel,
    pub cooling_period: String,
    pub handling_requirements: String,
    pub disposal_complexity: DisposalComplexity,
}

/// One physical component category of the plant.
///
/// Created once from seed data and never destroyed; mutation happens only on
/// the deep copies owned by scenarios, never on the baseline record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionAsset {
    pub id: AssetId,
    pub name: String,
    pub category: AssetCategory,

    // Identity and design intent
    pub functional_role: String,
    pub operating_envelope: String,
    pub duty_cycle: String,
    pub design_margins: String,
    pub constraints: Vec<String>,

    // Criticality matrix position, 1-5 scales
    pub neutron_damage_uncertainty: u8,
    pub replaceability_difficulty: u8,
    pub system_value_impact: u8,

    // Status
    pub maturity_level: MaturityLevel,
    /// 0-100 integer percent
    pub confidence_score: u8,
    pub risk_level: RiskLevel,

    // Economics
    pub cost_schedule: CostSchedule,

    // Detailed sections (presentation payloads, not used in computation)
    pub degradation_hypotheses: Vec<DegradationHypothesis>,
    pub monitoring_strategy: Vec<MonitoringStrategy>,
    pub maintainability: MaintainabilityInfo,
    pub system_value: SystemValueImpact,
    pub end_of_life: EndOfLifeAssumptions,

    // Learning and R&D
    pub learning_priority: LearningPriority,
    pub rd_investment_justification: String,
    /// 1-5 scale
    pub instrumentation_priority: u8,
}

impl FusionAsset {
    /// Composite 1-5 criticality ranking used for investment prioritization.
    ///
    /// Mean of the three criticality-matrix factors. Display-only; the
    /// financial engine never reads it.
    #[must_use]
    pub fn criticality_score(&self) -> f64 {
        f64::from(
            u16::from(self.neutron_damage_uncertainty)
                + u16::from(self.replaceability_difficulty)
                + u16::from(self.system_value_impact),
        ) / 3.0
    }
}
