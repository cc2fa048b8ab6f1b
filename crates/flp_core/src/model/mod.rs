mod assets;
mod ids;
mod results;
mod strategies;

pub use assets::{
    AssetCategory, CostSchedule, DegradationHypothesis, DisposalComplexity, EndOfLifeAssumptions,
    FusionAsset, HypothesisConfidence, ImpactLevel, LearningPriority, MaintainabilityInfo,
    MaturityLevel, MonitoringStrategy, RiskLevel, SparePartsAvailability, SupplyChainRealism,
    SystemValueImpact, UncertaintyLevel, clamp_confidence, clamp_scale,
};
pub use ids::{AssetId, ScenarioId};
pub use results::{PortfolioResult, StrategyResult};
pub use strategies::{MAINTENANCE_STRATEGIES, MaintenanceStrategy, StrategyKind};
