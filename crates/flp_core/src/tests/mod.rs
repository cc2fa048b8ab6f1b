//! Integration tests for the lifecycle economics engine
//!
//! Tests are organized by topic:
//! - `scenarios` - Scenario store isolation, reset, and diff behavior
//! - `analysis` - NPV projection, ROI guards, portfolio aggregation
//! - `sensitivity` - Sensitivity curves and tornado ranking
//! - `whatif` - Bulk adjustments and portfolio deltas

mod scenarios;
mod whatif;

use crate::model::{
    AssetCategory, AssetId, CostSchedule, DisposalComplexity, EndOfLifeAssumptions, FusionAsset,
    ImpactLevel, LearningPriority, MaintainabilityInfo, MaturityLevel, RiskLevel,
    SparePartsAvailability, SupplyChainRealism, SystemValueImpact, UncertaintyLevel,
};

/// Minimal asset with the given financial inputs; display payloads are
/// placeholders.
pub fn test_asset(
    id: &str,
    risk_level: RiskLevel,
    replacement_cost_millions: f64,
    annual_maintenance_cost_millions: f64,
    downtime_weeks: f64,
) -> FusionAsset {
    FusionAsset {
        id: AssetId::new(id),
        name: format!("Test Asset {id}"),
        category: AssetCategory::Auxiliary,
        functional_role: String::new(),
        operating_envelope: String::new(),
        duty_cycle: String::new(),
        design_margins: String::new(),
        constraints: Vec::new(),
        neutron_damage_uncertainty: 3,
        replaceability_difficulty: 3,
        system_value_impact: 3,
        maturity_level: MaturityLevel::Prototype,
        confidence_score: 50,
        risk_level,
        cost_schedule: CostSchedule {
            replacement_cost_millions,
            annual_maintenance_cost_millions,
            downtime_weeks,
            lead_time_months: 6.0,
            spare_parts_availability: SparePartsAvailability::Medium,
            classification_uncertainty: UncertaintyLevel::Medium,
            disposal_complexity: DisposalComplexity::Medium,
        },
        degradation_hypotheses: Vec::new(),
        monitoring_strategy: Vec::new(),
        maintainability: MaintainabilityInfo {
            access_constraints: String::new(),
            replacement_strategy: String::new(),
            estimated_duration: String::new(),
            remote_handling: false,
            supply_chain_realism: SupplyChainRealism::Proven,
        },
        system_value: SystemValueImpact {
            availability_impact: ImpactLevel::Moderate,
            flexibility_impact: ImpactLevel::Moderate,
            output_impact: String::new(),
            energy_system_links: Vec::new(),
        },
        end_of_life: EndOfLifeAssumptions {
            waste_classification: String::new(),
            classification_uncertainty: UncertaintyLevel::Low,
            cooling_period: String::new(),
            handling_requirements: String::new(),
            disposal_complexity: DisposalComplexity::Low,
        },
        learning_priority: LearningPriority::Medium,
        rd_investment_justification: String::new(),
        instrumentation_priority: 3,
    }
}
