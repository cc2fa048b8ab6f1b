//! Scenario store: named what-if overlays of the baseline asset set
//!
//! The store owns every scenario outright. Each scenario holds its own
//! `Vec<FusionAsset>`, populated by cloning at every creation, duplication,
//! and reset boundary, so editing one scenario can never be observed through
//! another scenario or the baseline. There is no shared backing storage and
//! no reference-counted aliasing anywhere in this module.
//!
//! Lookups fail softly: an unknown scenario or asset id produces a no-op, a
//! baseline fallback, or `None`, never an error. The store performs no value
//! validation either; range clamping belongs to whoever builds the patch.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::model::{
    AssetId, CostSchedule, FusionAsset, LearningPriority, MaturityLevel, RiskLevel, ScenarioId,
};

/// Id of the undeletable baseline scenario
pub const BASELINE_SCENARIO_ID: &str = "baseline";

/// Rotating identity palette. Color reuse once more than five scenarios
/// exist is expected and acceptable.
pub const SCENARIO_COLORS: [&str; 5] = [
    "hsl(221, 83%, 53%)", // blue (baseline)
    "hsl(142, 71%, 45%)", // green
    "hsl(262, 83%, 58%)", // purple
    "hsl(25, 95%, 53%)",  // orange
    "hsl(349, 89%, 60%)", // pink
];

/// A named, independently owned snapshot of the full asset collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub assets: Vec<FusionAsset>,
    pub color: String,
}

/// Partial update applied to one asset inside one scenario.
///
/// Covers the scalar fields the editor exposes plus the cost schedule the
/// what-if builder rewrites. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetPatch {
    pub neutron_damage_uncertainty: Option<u8>,
    pub replaceability_difficulty: Option<u8>,
    pub system_value_impact: Option<u8>,
    pub maturity_level: Option<MaturityLevel>,
    pub confidence_score: Option<u8>,
    pub risk_level: Option<RiskLevel>,
    pub learning_priority: Option<LearningPriority>,
    pub instrumentation_priority: Option<u8>,
    pub cost_schedule: Option<CostSchedule>,
}

impl AssetPatch {
    fn apply(&self, asset: &mut FusionAsset) {
        if let Some(v) = self.neutron_damage_uncertainty {
            asset.neutron_damage_uncertainty = v;
        }
        if let Some(v) = self.replaceability_difficulty {
            asset.replaceability_difficulty = v;
        }
        if let Some(v) = self.system_value_impact {
            asset.system_value_impact = v;
        }
        if let Some(v) = self.maturity_level {
            asset.maturity_level = v;
        }
        if let Some(v) = self.confidence_score {
            asset.confidence_score = v;
        }
        if let Some(v) = self.risk_level {
            asset.risk_level = v;
        }
        if let Some(v) = self.learning_priority {
            asset.learning_priority = v;
        }
        if let Some(v) = self.instrumentation_priority {
            asset.instrumentation_priority = v;
        }
        if let Some(v) = &self.cost_schedule {
            asset.cost_schedule = v.clone();
        }
    }
}

/// The fixed scalar field set compared by [`ScenarioStore::asset_diff`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiffField {
    NeutronDamageUncertainty,
    ReplaceabilityDifficulty,
    SystemValueImpact,
    MaturityLevel,
    ConfidenceScore,
    RiskLevel,
    LearningPriority,
    InstrumentationPriority,
}

impl DiffField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NeutronDamageUncertainty => "Neutron Damage Uncertainty",
            Self::ReplaceabilityDifficulty => "Replaceability Difficulty",
            Self::SystemValueImpact => "System Value Impact",
            Self::MaturityLevel => "Maturity Level",
            Self::ConfidenceScore => "Confidence Score",
            Self::RiskLevel => "Risk Level",
            Self::LearningPriority => "Learning Priority",
            Self::InstrumentationPriority => "Instrumentation Priority",
        }
    }
}

/// A compared field value, tagged with its kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Scale(u8),
    Percent(u8),
    Maturity(MaturityLevel),
    Risk(RiskLevel),
    Priority(LearningPriority),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scale(v) => write!(f, "{v}"),
            Self::Percent(v) => write!(f, "{v}%"),
            Self::Maturity(v) => f.write_str(v.label()),
            Self::Risk(v) => f.write_str(v.label()),
            Self::Priority(v) => f.write_str(v.label()),
        }
    }
}

/// One field that differs between the baseline and the active scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDiff {
    pub field: DiffField,
    pub baseline: FieldValue,
    pub modified: FieldValue,
}

/// In-memory registry of scenarios plus the active/comparison selection.
///
/// Passed explicitly to consumers; there is no ambient global instance.
#[derive(Debug, Clone)]
pub struct ScenarioStore {
    /// Immutable ground truth seeded at construction. Never mutated; the
    /// template for every new scenario and every reset.
    baseline: Vec<FusionAsset>,
    scenarios: Vec<Scenario>,
    active_scenario_id: ScenarioId,
    comparison_scenario_id: Option<ScenarioId>,
    is_comparing: bool,
    next_seq: u32,
}

impl ScenarioStore {
    /// Build a store around a seed dataset. The baseline scenario starts as
    /// an independent copy of the seed.
    #[must_use]
    pub fn new(baseline: Vec<FusionAsset>) -> Self {
        let baseline_scenario = Scenario {
            id: ScenarioId::new(BASELINE_SCENARIO_ID),
            name: "Baseline".to_owned(),
            description: "Original asset data from the lifecycle passport model".to_owned(),
            created_at: Timestamp::now(),
            assets: baseline.clone(),
            color: SCENARIO_COLORS[0].to_owned(),
        };
        Self {
            baseline,
            scenarios: vec![baseline_scenario],
            active_scenario_id: ScenarioId::new(BASELINE_SCENARIO_ID),
            comparison_scenario_id: None,
            is_comparing: false,
            next_seq: 1,
        }
    }

    /// All scenarios, baseline first
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    #[must_use]
    pub fn scenario(&self, id: &ScenarioId) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| &s.id == id)
    }

    #[must_use]
    pub fn active_scenario_id(&self) -> &ScenarioId {
        &self.active_scenario_id
    }

    #[must_use]
    pub fn comparison_scenario_id(&self) -> Option<&ScenarioId> {
        self.comparison_scenario_id.as_ref()
    }

    #[must_use]
    pub fn is_comparing(&self) -> bool {
        self.is_comparing
    }

    /// The immutable seed dataset
    #[must_use]
    pub fn baseline_assets(&self) -> &[FusionAsset] {
        &self.baseline
    }

    fn next_id(&mut self) -> ScenarioId {
        let id = ScenarioId::new(format!("scenario-{}", self.next_seq));
        self.next_seq += 1;
        id
    }

    fn next_color(&self) -> String {
        SCENARIO_COLORS[self.scenarios.len() % SCENARIO_COLORS.len()].to_owned()
    }

    /// Allocate a new scenario as a fresh copy of the baseline (not of the
    /// currently active scenario). Names are not required to be unique.
    pub fn create_scenario(&mut self, name: &str, description: &str) -> ScenarioId {
        let id = self.next_id();
        let color = self.next_color();
        self.scenarios.push(Scenario {
            id: id.clone(),
            name: name.to_owned(),
            description: description.to_owned(),
            created_at: Timestamp::now(),
            assets: self.baseline.clone(),
            color,
        });
        id
    }

    /// Copy an existing scenario's assets into a new scenario. Returns
    /// `None` when the source id does not resolve.
    pub fn duplicate_scenario(&mut self, source_id: &ScenarioId, name: &str) -> Option<ScenarioId> {
        let source = self.scenario(source_id)?;
        let assets = source.assets.clone();
        let description = format!("Duplicated from {}", source.name);
        let id = self.next_id();
        let color = self.next_color();
        self.scenarios.push(Scenario {
            id: id.clone(),
            name: name.to_owned(),
            description,
            created_at: Timestamp::now(),
            assets,
            color,
        });
        Some(id)
    }

    /// Remove a scenario. No-op for the baseline. Deleting the active
    /// scenario resets active to baseline; deleting the comparison scenario
    /// clears the comparison slot.
    pub fn delete_scenario(&mut self, id: &ScenarioId) {
        if id.as_str() == BASELINE_SCENARIO_ID {
            return;
        }
        self.scenarios.retain(|s| &s.id != id);
        if &self.active_scenario_id == id {
            self.active_scenario_id = ScenarioId::new(BASELINE_SCENARIO_ID);
        }
        if self.comparison_scenario_id.as_ref() == Some(id) {
            self.comparison_scenario_id = None;
        }
    }

    pub fn set_active_scenario(&mut self, id: ScenarioId) {
        self.active_scenario_id = id;
    }

    /// Setting a concrete comparison scenario implicitly enables comparison
    /// mode; clearing it leaves the mode flag untouched.
    pub fn set_comparison_scenario(&mut self, id: Option<ScenarioId>) {
        let enables = id.is_some();
        self.comparison_scenario_id = id;
        if enables {
            self.is_comparing = true;
        }
    }

    /// Flip comparison mode. Turning it off clears the comparison scenario;
    /// turning it on does not auto-select one.
    pub fn toggle_compare_mode(&mut self) {
        if self.is_comparing {
            self.comparison_scenario_id = None;
        }
        self.is_comparing = !self.is_comparing;
    }

    /// Shallow-merge `patch` onto one asset inside one scenario. Every other
    /// scenario and the baseline are untouched. Soft no-op when either id
    /// does not resolve.
    pub fn modify_asset(&mut self, scenario_id: &ScenarioId, asset_id: &AssetId, patch: &AssetPatch) {
        if let Some(scenario) = self.scenarios.iter_mut().find(|s| &s.id == scenario_id)
            && let Some(asset) = scenario.assets.iter_mut().find(|a| &a.id == asset_id)
        {
            patch.apply(asset);
        }
    }

    /// Replace one asset in the scenario with a fresh copy of the baseline
    /// asset of the same id. No-op when the baseline has no such asset.
    pub fn reset_asset(&mut self, scenario_id: &ScenarioId, asset_id: &AssetId) {
        let Some(base_asset) = self.baseline.iter().find(|a| &a.id == asset_id) else {
            return;
        };
        let base_asset = base_asset.clone();
        if let Some(scenario) = self.scenarios.iter_mut().find(|s| &s.id == scenario_id)
            && let Some(asset) = scenario.assets.iter_mut().find(|a| &a.id == asset_id)
        {
            *asset = base_asset;
        }
    }

    /// Replace the scenario's entire asset collection with a fresh baseline
    /// copy.
    pub fn reset_scenario(&mut self, scenario_id: &ScenarioId) {
        let assets = self.baseline.clone();
        if let Some(scenario) = self.scenarios.iter_mut().find(|s| &s.id == scenario_id) {
            scenario.assets = assets;
        }
    }

    /// Assets of the active scenario, falling back to the raw baseline when
    /// the active id does not resolve.
    #[must_use]
    pub fn get_active_assets(&self) -> &[FusionAsset] {
        self.scenario(&self.active_scenario_id)
            .map_or(&self.baseline, |s| &s.assets)
    }

    /// Assets of the comparison scenario, or `None` when no comparison
    /// scenario is set (or its id no longer resolves).
    #[must_use]
    pub fn get_comparison_assets(&self) -> Option<&[FusionAsset]> {
        let id = self.comparison_scenario_id.as_ref()?;
        self.scenario(id).map(|s| s.assets.as_slice())
    }

    /// Compare the fixed scalar field set between the baseline asset and the
    /// same asset in the active scenario, returning only the fields that
    /// differ. Empty when either side is missing.
    #[must_use]
    pub fn asset_diff(&self, asset_id: &AssetId) -> Vec<FieldDiff> {
        let Some(base) = self.baseline.iter().find(|a| &a.id == asset_id) else {
            return Vec::new();
        };
        let Some(modified) = self
            .scenario(&self.active_scenario_id)
            .and_then(|s| s.assets.iter().find(|a| &a.id == asset_id))
        else {
            return Vec::new();
        };

        let mut diffs = Vec::new();
        let mut push = |field: DiffField, baseline: FieldValue, current: FieldValue| {
            if baseline != current {
                diffs.push(FieldDiff {
                    field,
                    baseline,
                    modified: current,
                });
            }
        };

        push(
            DiffField::NeutronDamageUncertainty,
            FieldValue::Scale(base.neutron_damage_uncertainty),
            FieldValue::Scale(modified.neutron_damage_uncertainty),
        );
        push(
            DiffField::ReplaceabilityDifficulty,
            FieldValue::Scale(base.replaceability_difficulty),
            FieldValue::Scale(modified.replaceability_difficulty),
        );
        push(
            DiffField::SystemValueImpact,
            FieldValue::Scale(base.system_value_impact),
            FieldValue::Scale(modified.system_value_impact),
        );
        push(
            DiffField::MaturityLevel,
            FieldValue::Maturity(base.maturity_level),
            FieldValue::Maturity(modified.maturity_level),
        );
        push(
            DiffField::ConfidenceScore,
            FieldValue::Percent(base.confidence_score),
            FieldValue::Percent(modified.confidence_score),
        );
        push(
            DiffField::RiskLevel,
            FieldValue::Risk(base.risk_level),
            FieldValue::Risk(modified.risk_level),
        );
        push(
            DiffField::LearningPriority,
            FieldValue::Priority(base.learning_priority),
            FieldValue::Priority(modified.learning_priority),
        );
        push(
            DiffField::InstrumentationPriority,
            FieldValue::Scale(base.instrumentation_priority),
            FieldValue::Scale(modified.instrumentation_priority),
        );

        diffs
    }
}
