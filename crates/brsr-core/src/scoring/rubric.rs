use super::rules::{Rule, Threshold};
use crate::metrics::{DerivedMetrics, NOT_APPLICABLE};
use crate::record::{coerce::parse_percentage, Principle};
use serde_json::Value;

/// One scored question: indicator key, field aliases inside the principle
/// block (canonical first), and the rule applied to the resolved value.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorRule {
    pub key: &'static str,
    pub paths: &'static [&'static str],
    pub rule: Rule,
}

const fn boolean(yes: i32, no: i32) -> Rule {
    Rule::Boolean { yes, no }
}

const fn disclosure(points: i32) -> Rule {
    Rule::Disclosure { points }
}

const fn constant(points: i32) -> Rule {
    Rule::Constant { points }
}

const fn tiers(thresholds: &'static [Threshold]) -> Rule {
    Rule::Percentage { thresholds }
}

const fn at(min: f64, points: i32) -> Threshold {
    Threshold { min, points }
}

const QUARTILE_100: &[Threshold] = &[at(90.0, 100), at(75.0, 75), at(50.0, 50), at(25.0, 25)];
const INVESTMENT_200: &[Threshold] = &[at(20.0, 200), at(10.0, 150), at(5.0, 100), at(1.0, 50)];
const COVERAGE_200: &[Threshold] = &[at(100.0, 200), at(75.0, 150), at(50.0, 100), at(25.0, 50)];
const SOURCING_150: &[Threshold] = &[at(75.0, 150), at(50.0, 100), at(25.0, 50)];
const SPENDING_50: &[Threshold] = &[at(2.0, 50), at(1.0, 35), at(0.5, 25)];
const TRAINING_100: &[Threshold] = &[at(75.0, 100), at(50.0, 70), at(25.0, 40)];
const HUMAN_RIGHTS_TRAINING_150: &[Threshold] = &[at(90.0, 150), at(60.0, 100), at(30.0, 50)];
const MINIMUM_WAGE_150: &[Threshold] = &[at(100.0, 150), at(90.0, 100), at(75.0, 50)];
const ASSESSMENT_100: &[Threshold] = &[at(100.0, 100), at(50.0, 50)];
const RENEWABLE_300: &[Threshold] = &[at(50.0, 300), at(25.0, 200), at(10.0, 100)];
const WATER_RECYCLED_200: &[Threshold] = &[at(50.0, 200), at(25.0, 150), at(10.0, 75)];
const WASTE_RECOVERED_200: &[Threshold] = &[at(75.0, 200), at(50.0, 150), at(25.0, 75)];
const MSME_100: &[Threshold] = &[at(50.0, 100), at(25.0, 75), at(10.0, 50)];
const PRODUCT_INFORMATION_150: &[Threshold] = &[at(100.0, 150), at(75.0, 100), at(50.0, 50)];

const ETHICS: &[IndicatorRule] = &[
    IndicatorRule {
        key: "anti_corruption_policy",
        paths: &[
            "essential_indicators.anti_corruption_policy.has_policy",
            "anti_corruption_policy.has_policy",
            "essential_indicators.has_anti_corruption_policy",
        ],
        rule: boolean(100, -10),
    },
    IndicatorRule {
        key: "anti_corruption_policy_details",
        paths: &[
            "essential_indicators.anti_corruption_policy.details",
            "anti_corruption_policy.details",
        ],
        rule: disclosure(50),
    },
    IndicatorRule {
        key: "awareness_programme_coverage",
        paths: &[
            "essential_indicators.awareness_programmes.coverage_percentage",
            "essential_indicators.training_coverage_percentage",
        ],
        rule: tiers(QUARTILE_100),
    },
    IndicatorRule {
        key: "disciplinary_actions",
        paths: &["essential_indicators.disciplinary_actions.details"],
        rule: disclosure(50),
    },
    IndicatorRule {
        key: "conflict_of_interest_complaints",
        paths: &["essential_indicators.conflict_of_interest_complaints.remarks"],
        rule: disclosure(50),
    },
    IndicatorRule {
        key: "fines_and_penalties",
        paths: &[
            "essential_indicators.fines_penalties.details",
            "essential_indicators.fines_and_penalties",
        ],
        rule: disclosure(50),
    },
    IndicatorRule {
        key: "conflict_of_interest_process",
        paths: &["leadership_indicators.conflict_of_interest_process.has_process"],
        rule: boolean(100, 0),
    },
];

const SUSTAINABLE_PRODUCTS: &[IndicatorRule] = &[
    IndicatorRule {
        key: "rd_sustainable_investment",
        paths: &["essential_indicators.rd_capex_investments.rd_current_year_percentage"],
        rule: tiers(INVESTMENT_200),
    },
    IndicatorRule {
        key: "capex_sustainable_investment",
        paths: &["essential_indicators.rd_capex_investments.capex_current_year_percentage"],
        rule: tiers(INVESTMENT_200),
    },
    IndicatorRule {
        key: "sustainable_sourcing_procedures",
        paths: &[
            "essential_indicators.sustainable_sourcing.has_procedures",
            "essential_indicators.has_sustainable_sourcing",
        ],
        rule: boolean(150, -20),
    },
    IndicatorRule {
        key: "sustainable_sourcing_share",
        paths: &["essential_indicators.sustainable_sourcing.percentage_inputs_sourced_sustainably"],
        rule: tiers(SOURCING_150),
    },
    IndicatorRule {
        key: "product_reclamation_process",
        paths: &["essential_indicators.reclaim_processes.description"],
        rule: disclosure(100),
    },
    IndicatorRule {
        key: "epr_applicable",
        paths: &["essential_indicators.epr_applicable"],
        rule: boolean(100, 0),
    },
    IndicatorRule {
        key: "life_cycle_assessment",
        paths: &[
            "leadership_indicators.lca_conducted",
            "leadership_indicators.life_cycle_assessments.conducted",
        ],
        rule: boolean(100, 0),
    },
];

const EMPLOYEE_WELLBEING: &[IndicatorRule] = &[
    IndicatorRule {
        key: "employee_wellbeing_coverage",
        paths: &["essential_indicators.wellbeing_measures.employees_coverage_percentage"],
        rule: tiers(COVERAGE_200),
    },
    IndicatorRule {
        key: "worker_wellbeing_coverage",
        paths: &["essential_indicators.wellbeing_measures.workers_coverage_percentage"],
        rule: tiers(COVERAGE_200),
    },
    IndicatorRule {
        key: "wellbeing_spending",
        paths: &["essential_indicators.wellbeing_spending_percentage"],
        rule: tiers(SPENDING_50),
    },
    IndicatorRule {
        key: "retirement_benefits",
        paths: &["essential_indicators.retirement_benefits.details"],
        rule: disclosure(100),
    },
    IndicatorRule {
        key: "accessible_workplaces",
        paths: &["essential_indicators.accessibility_of_workplaces.is_accessible"],
        rule: boolean(100, -10),
    },
    IndicatorRule {
        key: "equal_opportunity_policy",
        paths: &[
            "essential_indicators.equal_opportunity_policy.has_policy",
            "essential_indicators.has_equal_opportunity_policy",
        ],
        rule: boolean(100, -10),
    },
    IndicatorRule {
        key: "grievance_mechanism",
        paths: &["essential_indicators.grievance_mechanism.available"],
        rule: boolean(100, -10),
    },
    IndicatorRule {
        key: "health_safety_management_system",
        paths: &["essential_indicators.health_safety_management_system.implemented"],
        rule: boolean(150, -20),
    },
    IndicatorRule {
        key: "safety_incidents",
        paths: &["essential_indicators.safety_incidents.details"],
        rule: disclosure(50),
    },
    IndicatorRule {
        key: "training_coverage",
        paths: &["essential_indicators.training_details.employees_trained_percentage"],
        rule: tiers(TRAINING_100),
    },
    IndicatorRule {
        key: "performance_reviews",
        paths: &["essential_indicators.performance_reviews"],
        rule: constant(50),
    },
];

const STAKEHOLDER_RESPONSIVENESS: &[IndicatorRule] = &[
    IndicatorRule {
        key: "stakeholder_identification_process",
        paths: &["essential_indicators.stakeholder_identification_process"],
        rule: disclosure(75),
    },
    IndicatorRule {
        key: "board_consultation",
        paths: &["leadership_indicators.board_consultation.has_process"],
        rule: boolean(75, 0),
    },
    IndicatorRule {
        key: "vulnerable_groups_engagement",
        paths: &["leadership_indicators.vulnerable_groups_engagement.details"],
        rule: disclosure(75),
    },
    IndicatorRule {
        key: "stakeholder_engagement_frequency",
        paths: &["essential_indicators.engagement_frequency"],
        rule: constant(75),
    },
];

const HUMAN_RIGHTS: &[IndicatorRule] = &[
    IndicatorRule {
        key: "human_rights_training",
        paths: &["essential_indicators.human_rights_training.employees_percentage"],
        rule: tiers(HUMAN_RIGHTS_TRAINING_150),
    },
    IndicatorRule {
        key: "minimum_wage_coverage",
        paths: &["essential_indicators.minimum_wages.employees_paid_minimum_percentage"],
        rule: tiers(MINIMUM_WAGE_150),
    },
    IndicatorRule {
        key: "human_rights_focal_point",
        paths: &["essential_indicators.focal_point.exists"],
        rule: boolean(100, -10),
    },
    IndicatorRule {
        key: "grievance_redressal_mechanism",
        paths: &["essential_indicators.grievance_mechanisms.description"],
        rule: disclosure(100),
    },
    IndicatorRule {
        key: "complainant_protection",
        paths: &["essential_indicators.complainant_protection_mechanisms"],
        rule: disclosure(100),
    },
    IndicatorRule {
        key: "human_rights_in_contracts",
        paths: &["essential_indicators.human_rights_in_contracts"],
        rule: boolean(100, 0),
    },
    IndicatorRule {
        key: "plant_office_assessments",
        paths: &["essential_indicators.assessments.plants_offices_assessed_percentage"],
        rule: tiers(ASSESSMENT_100),
    },
];

const ENVIRONMENT: &[IndicatorRule] = &[
    IndicatorRule {
        key: "renewable_energy_share",
        paths: &["essential_indicators.energy_consumption.renewable_percentage"],
        rule: tiers(RENEWABLE_300),
    },
    IndicatorRule {
        key: "energy_efficiency_initiatives",
        paths: &["essential_indicators.energy_efficiency_initiatives"],
        rule: disclosure(100),
    },
    IndicatorRule {
        key: "pat_scheme_designated",
        paths: &["essential_indicators.pat_scheme.is_designated_consumer"],
        rule: boolean(100, 0),
    },
    IndicatorRule {
        key: "water_recycled",
        paths: &["essential_indicators.water_consumption.recycled_percentage"],
        rule: tiers(WATER_RECYCLED_200),
    },
    IndicatorRule {
        key: "zero_liquid_discharge",
        paths: &["essential_indicators.zero_liquid_discharge.implemented"],
        rule: boolean(150, 0),
    },
    IndicatorRule {
        key: "air_emissions",
        paths: &["essential_indicators.air_emissions.details"],
        rule: disclosure(100),
    },
    IndicatorRule {
        key: "ghg_reduction_projects",
        paths: &["essential_indicators.ghg_reduction_projects.details"],
        rule: disclosure(150),
    },
    IndicatorRule {
        key: "waste_recovered",
        paths: &["essential_indicators.waste_management.recovered_percentage"],
        rule: tiers(WASTE_RECOVERED_200),
    },
    IndicatorRule {
        key: "waste_management_practices",
        paths: &["essential_indicators.waste_management.practices"],
        rule: disclosure(100),
    },
    IndicatorRule {
        key: "environmental_compliance",
        paths: &["essential_indicators.environmental_compliance.is_compliant"],
        rule: boolean(100, -50),
    },
    IndicatorRule {
        key: "eia_conducted",
        paths: &["essential_indicators.environmental_impact_assessments"],
        rule: constant(50),
    },
    IndicatorRule {
        key: "scope_3_emissions",
        paths: &["leadership_indicators.scope_3_emissions.details"],
        rule: disclosure(50),
    },
];

const POLICY_ADVOCACY: &[IndicatorRule] = &[
    IndicatorRule {
        key: "trade_associations",
        paths: &["essential_indicators.trade_associations.details"],
        rule: disclosure(100),
    },
    IndicatorRule {
        key: "anti_competitive_corrective_action",
        paths: &["essential_indicators.anti_competitive_conduct.corrective_action"],
        rule: disclosure(100),
    },
    IndicatorRule {
        key: "public_policy_positions",
        paths: &["leadership_indicators.public_policy_positions.details"],
        rule: disclosure(100),
    },
];

const INCLUSIVE_GROWTH: &[IndicatorRule] = &[
    IndicatorRule {
        key: "social_impact_assessments",
        paths: &["essential_indicators.social_impact_assessments.details"],
        rule: disclosure(100),
    },
    IndicatorRule {
        key: "rehabilitation_resettlement",
        paths: &["essential_indicators.rehabilitation_resettlement.details"],
        rule: disclosure(50),
    },
    IndicatorRule {
        key: "community_grievance_mechanism",
        paths: &["essential_indicators.community_grievance_mechanism"],
        rule: disclosure(50),
    },
    IndicatorRule {
        key: "msme_sourcing",
        paths: &["essential_indicators.input_material_sourcing.msme_percentage"],
        rule: tiers(MSME_100),
    },
    IndicatorRule {
        key: "csr_aspirational_districts",
        paths: &["leadership_indicators.csr_aspirational_districts.undertaken"],
        rule: boolean(100, 0),
    },
];

const CONSUMER_VALUE: &[IndicatorRule] = &[
    IndicatorRule {
        key: "consumer_complaint_mechanism",
        paths: &["essential_indicators.consumer_complaint_mechanism"],
        rule: disclosure(150),
    },
    IndicatorRule {
        key: "product_information_coverage",
        paths: &["essential_indicators.product_information.turnover_percentage"],
        rule: tiers(PRODUCT_INFORMATION_150),
    },
    IndicatorRule {
        key: "cyber_security_policy",
        paths: &[
            "essential_indicators.cyber_security_policy.has_policy",
            "essential_indicators.has_cyber_security_policy",
        ],
        rule: boolean(150, -20),
    },
    IndicatorRule {
        key: "data_privacy_policy_link",
        paths: &["essential_indicators.cyber_security_policy.weblink"],
        rule: disclosure(50),
    },
    IndicatorRule {
        key: "product_recalls",
        paths: &["essential_indicators.product_recalls.details"],
        rule: disclosure(100),
    },
    IndicatorRule {
        key: "data_breaches",
        paths: &["essential_indicators.data_breaches.details"],
        rule: disclosure(100),
    },
    IndicatorRule {
        key: "customer_satisfaction_survey",
        paths: &["leadership_indicators.customer_satisfaction_survey.conducted"],
        rule: boolean(100, 0),
    },
];

/// Fixed indicator table for a principle, in question order.
pub fn indicator_rules(principle: Principle) -> &'static [IndicatorRule] {
    match principle {
        Principle::EthicsTransparency => ETHICS,
        Principle::SustainableProducts => SUSTAINABLE_PRODUCTS,
        Principle::EmployeeWellbeing => EMPLOYEE_WELLBEING,
        Principle::StakeholderResponsiveness => STAKEHOLDER_RESPONSIVENESS,
        Principle::HumanRights => HUMAN_RIGHTS,
        Principle::Environment => ENVIRONMENT,
        Principle::PolicyAdvocacy => POLICY_ADVOCACY,
        Principle::InclusiveGrowth => INCLUSIVE_GROWTH,
        Principle::ConsumerValue => CONSUMER_VALUE,
    }
}

/// Derived figures the rubric prefers over a self-reported answer.
///
/// The renewable share is read from the same [`DerivedMetrics`] string the
/// document displays, so both agree. `None` leaves the disclosed field in
/// charge, including when the derived share is `N/A`.
pub(crate) fn computed_value(
    principle: Principle,
    key: &str,
    metrics: Option<&DerivedMetrics>,
) -> Option<Value> {
    match (principle, key) {
        (Principle::Environment, "renewable_energy_share") => {
            let share = metrics?.environment.renewable_energy_share.as_str();
            if share == NOT_APPLICABLE {
                return None;
            }
            parse_percentage(&Value::from(share)).map(Value::from)
        }
        _ => None,
    }
}
