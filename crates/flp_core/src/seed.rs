//! Baseline asset dataset
//!
//! The six component categories tracked by the lifecycle passport, loaded
//! once at startup and treated as immutable ground truth. All mutation
//! happens on scenario-owned copies; nothing in the crate writes to the
//! collection returned here.

use crate::model::{
    AssetCategory, AssetId, CostSchedule, DegradationHypothesis, DisposalComplexity,
    EndOfLifeAssumptions, FusionAsset, HypothesisConfidence, ImpactLevel, LearningPriority,
    MaintainabilityInfo, MaturityLevel, MonitoringStrategy, RiskLevel, SparePartsAvailability,
    SupplyChainRealism, SystemValueImpact, UncertaintyLevel,
};

/// The ordered baseline collection.
#[must_use]
pub fn baseline_assets() -> Vec<FusionAsset> {
    vec![
        breeding_blanket(),
        divertor(),
        first_wall(),
        tf_coils(),
        vacuum_vessel(),
        tritium_plant(),
    ]
}

fn breeding_blanket() -> FusionAsset {
    FusionAsset {
        id: AssetId::new("blanket-breeding"),
        name: "Breeding Blanket Module".to_owned(),
        category: AssetCategory::Blanket,
        functional_role:
            "Tritium breeding, neutron multiplication, heat extraction to the primary coolant loop"
                .to_owned(),
        operating_envelope:
            "14.1 MeV neutron flux, 300-500C operating temperature, 2-5 MW/m2 heat flux".to_owned(),
        duty_cycle: "Continuous during plasma burn, 70-80% availability target".to_owned(),
        design_margins: "20% thermal margin, 50% structural safety factor on first-of-kind"
            .to_owned(),
        constraints: vec![
            "Must achieve tritium breeding ratio above 1.1".to_owned(),
            "Coolant compatibility with structural materials".to_owned(),
            "Limited in-service inspection access".to_owned(),
        ],
        neutron_damage_uncertainty: 5,
        replaceability_difficulty: 4,
        system_value_impact: 5,
        maturity_level: MaturityLevel::Concept,
        confidence_score: 35,
        risk_level: RiskLevel::Critical,
        cost_schedule: CostSchedule {
            replacement_cost_millions: 250.0,
            annual_maintenance_cost_millions: 12.0,
            downtime_weeks: 8.0,
            lead_time_months: 24.0,
            spare_parts_availability: SparePartsAvailability::Low,
            classification_uncertainty: UncertaintyLevel::High,
            disposal_complexity: DisposalComplexity::VeryHigh,
        },
        degradation_hypotheses: vec![
            DegradationHypothesis {
                mechanism: "Neutron-induced swelling".to_owned(),
                confidence: HypothesisConfidence::Medium,
                description: "Volumetric change from helium and hydrogen transmutation products"
                    .to_owned(),
                known_unknown: false,
            },
            DegradationHypothesis {
                mechanism: "Lithium burnup and redistribution".to_owned(),
                confidence: HypothesisConfidence::Low,
                description: "Breeding performance drift over the operational lifetime".to_owned(),
                known_unknown: true,
            },
        ],
        monitoring_strategy: vec![
            MonitoringStrategy {
                parameter: "Tritium production rate".to_owned(),
                method: "Online tritium accounting system".to_owned(),
                purpose: "Verify breeding performance and detect degradation".to_owned(),
                uncertainty_reduction: "Reduces TBR uncertainty from +/-30% to +/-10%".to_owned(),
                fallback: "Periodic destructive sampling during maintenance".to_owned(),
            },
            MonitoringStrategy {
                parameter: "Coolant outlet temperature profile".to_owned(),
                method: "Distributed fiber optic sensors".to_owned(),
                purpose: "Detect local hotspots indicating degradation".to_owned(),
                uncertainty_reduction: "Early warning of thermal degradation".to_owned(),
                fallback: "Reduced spatial resolution with discrete sensors".to_owned(),
            },
        ],
        maintainability: MaintainabilityInfo {
            access_constraints:
                "Removal through a dedicated maintenance port in a high radiation environment"
                    .to_owned(),
            replacement_strategy: "Segment replacement by remote handling, full module exchange"
                .to_owned(),
            estimated_duration: "4-8 weeks per module including cooling and decontamination"
                .to_owned(),
            remote_handling: true,
            supply_chain_realism: SupplyChainRealism::Developing,
        },
        system_value: SystemValueImpact {
            availability_impact: ImpactLevel::Critical,
            flexibility_impact: ImpactLevel::Major,
            output_impact: "Direct 1:1 relationship with thermal power output".to_owned(),
            energy_system_links: vec![
                "Primary heat source for power conversion".to_owned(),
                "Tritium self-sufficiency for the fuel cycle".to_owned(),
                "Sets the plant capacity factor ceiling".to_owned(),
            ],
        },
        end_of_life: EndOfLifeAssumptions {
            waste_classification: "Intermediate to high level waste".to_owned(),
            classification_uncertainty: UncertaintyLevel::High,
            cooling_period: "50-100 years estimated".to_owned(),
            handling_requirements: "Remote handling, shielded transport, specialized disposal route"
                .to_owned(),
            disposal_complexity: DisposalComplexity::VeryHigh,
        },
        learning_priority: LearningPriority::Immediate,
        rd_investment_justification:
            "Critical path for fusion economics and fuel self-sufficiency".to_owned(),
        instrumentation_priority: 5,
    }
}

fn divertor() -> FusionAsset {
    FusionAsset {
        id: AssetId::new("divertor"),
        name: "Divertor Assembly".to_owned(),
        category: AssetCategory::PlasmaFacing,
        functional_role: "Exhaust heat and helium ash removal, plasma purity control".to_owned(),
        operating_envelope: "10-20 MW/m2 peak heat flux, particle flux 1e23-1e24 m-2 s-1"
            .to_owned(),
        duty_cycle: "Continuous during plasma operation, replacement expected every 1-2 years"
            .to_owned(),
        design_margins: "Operating at or near material limits, minimal margin".to_owned(),
        constraints: vec![
            "Most extreme thermal environment in the device".to_owned(),
            "Must survive transient events (ELMs, disruptions)".to_owned(),
            "Tungsten surface integrity critical for plasma purity".to_owned(),
        ],
        neutron_damage_uncertainty: 4,
        replaceability_difficulty: 3,
        system_value_impact: 5,
        maturity_level: MaturityLevel::Prototype,
        confidence_score: 55,
        risk_level: RiskLevel::Critical,
        cost_schedule: CostSchedule {
            replacement_cost_millions: 120.0,
            annual_maintenance_cost_millions: 8.0,
            downtime_weeks: 6.0,
            lead_time_months: 12.0,
            spare_parts_availability: SparePartsAvailability::Medium,
            classification_uncertainty: UncertaintyLevel::Medium,
            disposal_complexity: DisposalComplexity::High,
        },
        degradation_hypotheses: vec![
            DegradationHypothesis {
                mechanism: "Surface erosion and redeposition".to_owned(),
                confidence: HypothesisConfidence::High,
                description: "Tungsten sputtering and co-deposition with fuel species".to_owned(),
                known_unknown: false,
            },
            DegradationHypothesis {
                mechanism: "Tungsten recrystallization".to_owned(),
                confidence: HypothesisConfidence::High,
                description: "Grain growth reducing mechanical properties above 1300C".to_owned(),
                known_unknown: false,
            },
        ],
        monitoring_strategy: vec![
            MonitoringStrategy {
                parameter: "Surface temperature distribution".to_owned(),
                method: "Infrared thermography through diagnostic ports".to_owned(),
                purpose: "Track hotspot evolution and coating loss".to_owned(),
                uncertainty_reduction: "Localizes damage before leading-edge melting".to_owned(),
                fallback: "Campaign-boundary visual inspection".to_owned(),
            },
            MonitoringStrategy {
                parameter: "Coolant pressure drop per cassette".to_owned(),
                method: "Differential pressure instrumentation".to_owned(),
                purpose: "Detect channel blockage or erosion-driven leaks".to_owned(),
                uncertainty_reduction: "Continuous integrity signal between inspections".to_owned(),
                fallback: "Helium leak testing during shutdowns".to_owned(),
            },
        ],
        maintainability: MaintainabilityInfo {
            access_constraints: "Cassette extraction through lower ports, remote handling only"
                .to_owned(),
            replacement_strategy: "Scheduled cassette rotation with refurbished spares".to_owned(),
            estimated_duration: "3-6 weeks per cassette campaign".to_owned(),
            remote_handling: true,
            supply_chain_realism: SupplyChainRealism::Developing,
        },
        system_value: SystemValueImpact {
            availability_impact: ImpactLevel::Critical,
            flexibility_impact: ImpactLevel::Moderate,
            output_impact: "Limits pulse length and power exhaust capability".to_owned(),
            energy_system_links: vec![
                "Gates sustained burn operation".to_owned(),
                "Drives the planned-outage calendar".to_owned(),
            ],
        },
        end_of_life: EndOfLifeAssumptions {
            waste_classification: "Intermediate level waste".to_owned(),
            classification_uncertainty: UncertaintyLevel::Medium,
            cooling_period: "20-50 years estimated".to_owned(),
            handling_requirements: "Remote handling, activated tungsten segregation".to_owned(),
            disposal_complexity: DisposalComplexity::High,
        },
        learning_priority: LearningPriority::Immediate,
        rd_investment_justification:
            "Highest heat-flux component; replacement cadence dominates availability".to_owned(),
        instrumentation_priority: 5,
    }
}

fn first_wall() -> FusionAsset {
    FusionAsset {
        id: AssetId::new("first-wall"),
        name: "First Wall Panels".to_owned(),
        category: AssetCategory::PlasmaFacing,
        functional_role: "Plasma boundary protection and nuclear heat capture".to_owned(),
        operating_envelope: "0.5-1 MW/m2 steady heat flux with transient excursions".to_owned(),
        duty_cycle: "Continuous plasma exposure over the full campaign".to_owned(),
        design_margins: "Moderate thermal margin, armor thickness sized for erosion allowance"
            .to_owned(),
        constraints: vec![
            "Armor erosion budget shared with plasma scenarios".to_owned(),
            "Panel alignment tolerances in the millimeter range".to_owned(),
        ],
        neutron_damage_uncertainty: 4,
        replaceability_difficulty: 4,
        system_value_impact: 4,
        maturity_level: MaturityLevel::Design,
        confidence_score: 45,
        risk_level: RiskLevel::High,
        cost_schedule: CostSchedule {
            replacement_cost_millions: 90.0,
            annual_maintenance_cost_millions: 6.0,
            downtime_weeks: 5.0,
            lead_time_months: 10.0,
            spare_parts_availability: SparePartsAvailability::Medium,
            classification_uncertainty: UncertaintyLevel::Medium,
            disposal_complexity: DisposalComplexity::High,
        },
        degradation_hypotheses: vec![
            DegradationHypothesis {
                mechanism: "Armor sputtering".to_owned(),
                confidence: HypothesisConfidence::High,
                description: "Steady-state erosion of beryllium or tungsten armor".to_owned(),
                known_unknown: false,
            },
            DegradationHypothesis {
                mechanism: "Neutron embrittlement of heat sink joints".to_owned(),
                confidence: HypothesisConfidence::Medium,
                description: "Bond integrity loss between armor and copper alloy heat sink"
                    .to_owned(),
                known_unknown: true,
            },
        ],
        monitoring_strategy: vec![MonitoringStrategy {
            parameter: "Panel surface erosion depth".to_owned(),
            method: "In-vessel metrology during maintenance windows".to_owned(),
            purpose: "Track erosion budget consumption".to_owned(),
            uncertainty_reduction: "Converts erosion allowance into a measured trend".to_owned(),
            fallback: "Conservative replacement on calendar schedule".to_owned(),
        }],
        maintainability: MaintainabilityInfo {
            access_constraints: "Panel-by-panel replacement through equatorial ports".to_owned(),
            replacement_strategy: "Modular panel exchange, staged over several outages".to_owned(),
            estimated_duration: "2-5 weeks per sector".to_owned(),
            remote_handling: true,
            supply_chain_realism: SupplyChainRealism::Developing,
        },
        system_value: SystemValueImpact {
            availability_impact: ImpactLevel::Major,
            flexibility_impact: ImpactLevel::Moderate,
            output_impact: "Erosion limits constrain allowable plasma scenarios".to_owned(),
            energy_system_links: vec!["Shields the blanket and vessel from plasma contact"
                .to_owned()],
        },
        end_of_life: EndOfLifeAssumptions {
            waste_classification: "Intermediate level waste".to_owned(),
            classification_uncertainty: UncertaintyLevel::Medium,
            cooling_period: "20-40 years estimated".to_owned(),
            handling_requirements: "Remote handling, surface tritium recovery before disposal"
                .to_owned(),
            disposal_complexity: DisposalComplexity::High,
        },
        learning_priority: LearningPriority::High,
        rd_investment_justification:
            "Erosion and joint lifetime data transfer directly to blanket design".to_owned(),
        instrumentation_priority: 4,
    }
}

fn tf_coils() -> FusionAsset {
    FusionAsset {
        id: AssetId::new("tf-coils"),
        name: "Toroidal Field Coils".to_owned(),
        category: AssetCategory::Magnets,
        functional_role: "Primary magnetic confinement field".to_owned(),
        operating_envelope: "12 T peak field on conductor, 4.5 K operating temperature".to_owned(),
        duty_cycle: "Energized continuously across campaigns, thermal cycles on maintenance"
            .to_owned(),
        design_margins: "Temperature and current margins sized for nuclear heating uncertainty"
            .to_owned(),
        constraints: vec![
            "Quench protection response under 2 seconds".to_owned(),
            "Insulation dose limit sets shield thickness".to_owned(),
            "Effectively irreplaceable without major machine disassembly".to_owned(),
        ],
        neutron_damage_uncertainty: 3,
        replaceability_difficulty: 5,
        system_value_impact: 5,
        maturity_level: MaturityLevel::Qualified,
        confidence_score: 75,
        risk_level: RiskLevel::High,
        cost_schedule: CostSchedule {
            replacement_cost_millions: 400.0,
            annual_maintenance_cost_millions: 5.0,
            downtime_weeks: 16.0,
            lead_time_months: 36.0,
            spare_parts_availability: SparePartsAvailability::Critical,
            classification_uncertainty: UncertaintyLevel::Low,
            disposal_complexity: DisposalComplexity::Medium,
        },
        degradation_hypotheses: vec![
            DegradationHypothesis {
                mechanism: "Insulation radiation damage".to_owned(),
                confidence: HypothesisConfidence::Medium,
                description: "Epoxy insulation degradation from accumulated neutron and gamma dose"
                    .to_owned(),
                known_unknown: false,
            },
            DegradationHypothesis {
                mechanism: "Conductor fatigue from thermal cycling".to_owned(),
                confidence: HypothesisConfidence::Medium,
                description: "Strand degradation accumulating over cooldown and warmup cycles"
                    .to_owned(),
                known_unknown: true,
            },
        ],
        monitoring_strategy: vec![
            MonitoringStrategy {
                parameter: "Quench precursor voltage".to_owned(),
                method: "Co-wound voltage taps with fast acquisition".to_owned(),
                purpose: "Detect normal-zone growth before full quench".to_owned(),
                uncertainty_reduction: "Distinguishes benign flux jumps from degradation".to_owned(),
                fallback: "Conservative operating current derating".to_owned(),
            },
            MonitoringStrategy {
                parameter: "Helium outlet temperature per pancake".to_owned(),
                method: "Cryogenic flow instrumentation".to_owned(),
                purpose: "Track nuclear heating margin consumption".to_owned(),
                uncertainty_reduction: "Validates shielding performance predictions".to_owned(),
                fallback: "Bulk cryoplant load trending".to_owned(),
            },
        ],
        maintainability: MaintainabilityInfo {
            access_constraints: "Buried beneath vessel and cryostat; replacement is a rebuild"
                .to_owned(),
            replacement_strategy: "Design for no replacement; spares limited to leads and feeders"
                .to_owned(),
            estimated_duration: "Years, machine-level disassembly".to_owned(),
            remote_handling: false,
            supply_chain_realism: SupplyChainRealism::Proven,
        },
        system_value: SystemValueImpact {
            availability_impact: ImpactLevel::Critical,
            flexibility_impact: ImpactLevel::Minor,
            output_impact: "Total loss of confinement capability on failure".to_owned(),
            energy_system_links: vec!["Single-point machine lifetime determinant".to_owned()],
        },
        end_of_life: EndOfLifeAssumptions {
            waste_classification: "Low level waste after shield credit".to_owned(),
            classification_uncertainty: UncertaintyLevel::Low,
            cooling_period: "Under 10 years".to_owned(),
            handling_requirements: "Conventional heavy lift after activation survey".to_owned(),
            disposal_complexity: DisposalComplexity::Medium,
        },
        learning_priority: LearningPriority::High,
        rd_investment_justification:
            "Irreplaceable component; insulation lifetime margin drives plant life".to_owned(),
        instrumentation_priority: 5,
    }
}

fn vacuum_vessel() -> FusionAsset {
    FusionAsset {
        id: AssetId::new("vacuum-vessel"),
        name: "Vacuum Vessel".to_owned(),
        category: AssetCategory::Structural,
        functional_role: "Primary vacuum and tritium confinement boundary".to_owned(),
        operating_envelope: "Ultra-high vacuum, 100-200C bakeout, seismic and disruption loads"
            .to_owned(),
        duty_cycle: "Permanent structure for the plant lifetime".to_owned(),
        design_margins: "Code-qualified pressure boundary with large structural margins".to_owned(),
        constraints: vec![
            "Licensing-credited confinement barrier".to_owned(),
            "Weld inspection access limited after assembly".to_owned(),
        ],
        neutron_damage_uncertainty: 2,
        replaceability_difficulty: 5,
        system_value_impact: 5,
        maturity_level: MaturityLevel::Qualified,
        confidence_score: 80,
        risk_level: RiskLevel::Medium,
        cost_schedule: CostSchedule {
            replacement_cost_millions: 600.0,
            annual_maintenance_cost_millions: 3.0,
            downtime_weeks: 24.0,
            lead_time_months: 48.0,
            spare_parts_availability: SparePartsAvailability::Critical,
            classification_uncertainty: UncertaintyLevel::Low,
            disposal_complexity: DisposalComplexity::Medium,
        },
        degradation_hypotheses: vec![
            DegradationHypothesis {
                mechanism: "Weld embrittlement".to_owned(),
                confidence: HypothesisConfidence::Medium,
                description: "Slow toughness loss at field welds under modest neutron dose"
                    .to_owned(),
                known_unknown: false,
            },
            DegradationHypothesis {
                mechanism: "Helium generation at re-weld locations".to_owned(),
                confidence: HypothesisConfidence::Low,
                description: "Limits future repair weldability of activated material".to_owned(),
                known_unknown: true,
            },
        ],
        monitoring_strategy: vec![MonitoringStrategy {
            parameter: "Leak tightness".to_owned(),
            method: "Residual gas analysis and accumulation tests".to_owned(),
            purpose: "Confirm confinement boundary integrity".to_owned(),
            uncertainty_reduction: "Continuous boundary health signal".to_owned(),
            fallback: "Sector-level helium spray testing".to_owned(),
        }],
        maintainability: MaintainabilityInfo {
            access_constraints: "Not replaceable; local repair only".to_owned(),
            replacement_strategy: "In-situ weld repair with remote tooling".to_owned(),
            estimated_duration: "Months for a port-region repair".to_owned(),
            remote_handling: true,
            supply_chain_realism: SupplyChainRealism::Proven,
        },
        system_value: SystemValueImpact {
            availability_impact: ImpactLevel::Critical,
            flexibility_impact: ImpactLevel::Minor,
            output_impact: "Plant-terminating on unrepairable breach".to_owned(),
            energy_system_links: vec!["Licensing basis for tritium confinement".to_owned()],
        },
        end_of_life: EndOfLifeAssumptions {
            waste_classification: "Low to intermediate level waste".to_owned(),
            classification_uncertainty: UncertaintyLevel::Low,
            cooling_period: "10-30 years".to_owned(),
            handling_requirements: "Segmentation in-situ, shielded packaging".to_owned(),
            disposal_complexity: DisposalComplexity::Medium,
        },
        learning_priority: LearningPriority::Medium,
        rd_investment_justification:
            "Mature technology; investment limited to inspection and repair tooling".to_owned(),
        instrumentation_priority: 3,
    }
}

fn tritium_plant() -> FusionAsset {
    FusionAsset {
        id: AssetId::new("tritium-plant"),
        name: "Tritium Processing Plant".to_owned(),
        category: AssetCategory::Auxiliary,
        functional_role: "Fuel cycle processing, isotope separation, tritium accountancy"
            .to_owned(),
        operating_envelope: "Gram-scale tritium inventory, continuous throughput".to_owned(),
        duty_cycle: "Continuous operation with periodic regeneration cycles".to_owned(),
        design_margins: "Redundant process trains, generous inventory buffers".to_owned(),
        constraints: vec![
            "Regulatory limits on site tritium inventory".to_owned(),
            "Permeation losses accumulate across every interface".to_owned(),
        ],
        neutron_damage_uncertainty: 1,
        replaceability_difficulty: 2,
        system_value_impact: 4,
        maturity_level: MaturityLevel::Prototype,
        confidence_score: 60,
        risk_level: RiskLevel::High,
        cost_schedule: CostSchedule {
            replacement_cost_millions: 80.0,
            annual_maintenance_cost_millions: 7.0,
            downtime_weeks: 3.0,
            lead_time_months: 8.0,
            spare_parts_availability: SparePartsAvailability::High,
            classification_uncertainty: UncertaintyLevel::Medium,
            disposal_complexity: DisposalComplexity::High,
        },
        degradation_hypotheses: vec![
            DegradationHypothesis {
                mechanism: "Getter bed saturation".to_owned(),
                confidence: HypothesisConfidence::High,
                description: "Capacity loss in uranium and zirconium storage beds over cycles"
                    .to_owned(),
                known_unknown: false,
            },
            DegradationHypothesis {
                mechanism: "Membrane permeator fouling".to_owned(),
                confidence: HypothesisConfidence::Medium,
                description: "Palladium membrane throughput decline from impurity exposure"
                    .to_owned(),
                known_unknown: false,
            },
        ],
        monitoring_strategy: vec![MonitoringStrategy {
            parameter: "Tritium inventory balance".to_owned(),
            method: "Continuous accountancy across process streams".to_owned(),
            purpose: "Detect losses and regulatory compliance drift".to_owned(),
            uncertainty_reduction: "Closes the fuel-cycle mass balance daily".to_owned(),
            fallback: "Batch accountancy at campaign boundaries".to_owned(),
        }],
        maintainability: MaintainabilityInfo {
            access_constraints: "Glovebox and hot-cell maintenance, hands-on with protection"
                .to_owned(),
            replacement_strategy: "Skid-level replacement of process trains".to_owned(),
            estimated_duration: "1-3 weeks per train swap".to_owned(),
            remote_handling: false,
            supply_chain_realism: SupplyChainRealism::Developing,
        },
        system_value: SystemValueImpact {
            availability_impact: ImpactLevel::Major,
            flexibility_impact: ImpactLevel::Major,
            output_impact: "Fuel throughput ceiling on sustained operation".to_owned(),
            energy_system_links: vec![
                "Closes the tritium fuel cycle with the blanket".to_owned(),
                "Inventory limits constrain burn scenarios".to_owned(),
            ],
        },
        end_of_life: EndOfLifeAssumptions {
            waste_classification: "Tritiated low level waste".to_owned(),
            classification_uncertainty: UncertaintyLevel::Medium,
            cooling_period: "Decay storage, 12-25 years for tritium".to_owned(),
            handling_requirements: "Detritiation before conventional disposal".to_owned(),
            disposal_complexity: DisposalComplexity::High,
        },
        learning_priority: LearningPriority::High,
        rd_investment_justification:
            "Fuel-cycle closure is unproven at plant scale; operating data is scarce".to_owned(),
        instrumentation_priority: 4,
    }
}
