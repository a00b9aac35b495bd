use super::{
    column, list, metric, number, percent, text, yes_no, Column, MetricRef, QuestionGroup,
    QuestionSpec,
};
use crate::document::format::Format;
use crate::metrics::{
    NON_RENEWABLE_ENERGY_PATHS, RENEWABLE_ENERGY_PATHS, SCOPE_1_PATHS, SCOPE_2_PATHS, WATER_PATHS,
};
use crate::record::Principle;

const ESSENTIAL: &str = "Essential Indicators";
const LEADERSHIP: &str = "Leadership Indicators";

const fn groups(
    essential: &'static [QuestionSpec],
    leadership: &'static [QuestionSpec],
) -> [QuestionGroup; 2] {
    [
        QuestionGroup {
            title: ESSENTIAL,
            questions: essential,
        },
        QuestionGroup {
            title: LEADERSHIP,
            questions: leadership,
        },
    ]
}

// Principle 1

const AWARENESS_COLUMNS: &[Column] = &[
    column("Segment", &["segment"], Format::Text),
    column(
        "Total Number of Programmes Held",
        &["programmes"],
        Format::Number,
    ),
    column("Topics / Principles Covered", &["topics"], Format::Text),
    column(
        "% of Persons Covered",
        &["coverage_percentage"],
        Format::Percent,
    ),
];

const FINE_COLUMNS: &[Column] = &[
    column("NGRBC Principle", &["principle"], Format::Text),
    column("Regulatory / Enforcement Agency", &["agency"], Format::Text),
    column("Amount (in Rs.)", &["amount"], Format::Number),
    column("Brief of the Case", &["brief"], Format::Text),
    column("Appeal Preferred", &["appeal_preferred"], Format::YesNo),
];

const VALUE_CHAIN_AWARENESS_COLUMNS: &[Column] = &[
    column(
        "Total Number of Programmes Held",
        &["programmes"],
        Format::Number,
    ),
    column("Topics / Principles Covered", &["topics"], Format::Text),
    column(
        "% of Value Chain Partners Covered",
        &["coverage_percentage"],
        Format::Percent,
    ),
];

const ETHICS_ESSENTIAL: &[QuestionSpec] = &[
    percent(
        "Coverage of Training and Awareness Programmes",
        &[
            "essential_indicators.awareness_programmes.coverage_percentage",
            "essential_indicators.training_coverage_percentage",
        ],
    ),
    list(
        "Training and Awareness Programmes by Segment",
        &["essential_indicators.awareness_programmes.segments"],
        AWARENESS_COLUMNS,
        "No training data available.",
    ),
    yes_no(
        "Anti-Corruption or Anti-Bribery Policy in Place",
        &[
            "essential_indicators.anti_corruption_policy.has_policy",
            "anti_corruption_policy.has_policy",
            "essential_indicators.has_anti_corruption_policy",
        ],
    ),
    text(
        "Anti-Corruption Policy Details",
        &[
            "essential_indicators.anti_corruption_policy.details",
            "anti_corruption_policy.details",
        ],
    ),
    text(
        "Web Link to the Anti-Corruption Policy",
        &["essential_indicators.anti_corruption_policy.weblink"],
    ),
    list(
        "Fines, Penalties, Punishments and Settlements",
        &["essential_indicators.fines_penalties.cases"],
        FINE_COLUMNS,
        "No fines or penalties data available.",
    ),
    text(
        "Fines and Penalties Summary",
        &[
            "essential_indicators.fines_penalties.details",
            "essential_indicators.fines_and_penalties",
        ],
    ),
    text(
        "Disciplinary Action by Law Enforcement Agencies",
        &["essential_indicators.disciplinary_actions.details"],
    ),
    text(
        "Complaints Regarding Conflict of Interest",
        &["essential_indicators.conflict_of_interest_complaints.remarks"],
    ),
];

const ETHICS_LEADERSHIP: &[QuestionSpec] = &[
    yes_no(
        "Processes to Avoid Conflicts of Interest Involving Board Members",
        &["leadership_indicators.conflict_of_interest_process.has_process"],
    ),
    text(
        "Conflict of Interest Process Details",
        &["leadership_indicators.conflict_of_interest_process.details"],
    ),
    list(
        "Awareness Programmes for Value Chain Partners",
        &["leadership_indicators.value_chain_awareness"],
        VALUE_CHAIN_AWARENESS_COLUMNS,
        "No value chain awareness data available.",
    ),
];

// Principle 2

const LCA_COLUMNS: &[Column] = &[
    column("NIC Code", &["nic_code"], Format::Text),
    column(
        "Name of Product / Service",
        &["product_service", "name"],
        Format::Text,
    ),
    column(
        "% of Turnover Contributed",
        &["turnover_percentage"],
        Format::Percent,
    ),
    column("Boundary of the Assessment", &["boundary"], Format::Text),
    column(
        "Conducted by Independent External Agency",
        &["independent_agency"],
        Format::YesNo,
    ),
];

const SUSTAINABLE_PRODUCTS_ESSENTIAL: &[QuestionSpec] = &[
    percent(
        "R&D Investment in Sustainable Technologies (Current Year)",
        &["essential_indicators.rd_capex_investments.rd_current_year_percentage"],
    ),
    percent(
        "R&D Investment in Sustainable Technologies (Previous Year)",
        &["essential_indicators.rd_capex_investments.rd_previous_year_percentage"],
    ),
    percent(
        "Capex Investment in Sustainable Technologies (Current Year)",
        &["essential_indicators.rd_capex_investments.capex_current_year_percentage"],
    ),
    percent(
        "Capex Investment in Sustainable Technologies (Previous Year)",
        &["essential_indicators.rd_capex_investments.capex_previous_year_percentage"],
    ),
    yes_no(
        "Procedures in Place for Sustainable Sourcing",
        &[
            "essential_indicators.sustainable_sourcing.has_procedures",
            "essential_indicators.has_sustainable_sourcing",
        ],
    ),
    percent(
        "Inputs Sourced Sustainably",
        &["essential_indicators.sustainable_sourcing.percentage_inputs_sourced_sustainably"],
    ),
    text(
        "Processes to Reclaim Products at End of Life",
        &["essential_indicators.reclaim_processes.description"],
    ),
    yes_no(
        "Extended Producer Responsibility Applicable",
        &["essential_indicators.epr_applicable"],
    ),
];

const SUSTAINABLE_PRODUCTS_LEADERSHIP: &[QuestionSpec] = &[
    yes_no(
        "Life Cycle Assessments Conducted",
        &[
            "leadership_indicators.lca_conducted",
            "leadership_indicators.life_cycle_assessments.conducted",
        ],
    ),
    list(
        "Life Cycle Assessments",
        &["leadership_indicators.life_cycle_assessments.products"],
        LCA_COLUMNS,
        "No life cycle assessment data available.",
    ),
    percent(
        "Recycled or Reused Input Material",
        &["leadership_indicators.recycled_input_percentage"],
    ),
];

// Principle 3

const RETIREMENT_COLUMNS: &[Column] = &[
    column("Benefit", &["benefit", "name"], Format::Text),
    column(
        "Employees Covered",
        &["employees_covered_percentage"],
        Format::Percent,
    ),
    column(
        "Workers Covered",
        &["workers_covered_percentage"],
        Format::Percent,
    ),
    column(
        "Deducted and Deposited with the Authority",
        &["deposited"],
        Format::YesNo,
    ),
];

const SAFETY_INCIDENT_COLUMNS: &[Column] = &[
    column("Safety Incident / Number", &["incident"], Format::Text),
    column("Category", &["category"], Format::Text),
    column("Current Year", &["current_year"], Format::Number),
    column("Previous Year", &["previous_year"], Format::Number),
];

const EMPLOYEE_WELLBEING_ESSENTIAL: &[QuestionSpec] = &[
    percent(
        "Well-being Measures Coverage for Employees",
        &["essential_indicators.wellbeing_measures.employees_coverage_percentage"],
    ),
    percent(
        "Well-being Measures Coverage for Workers",
        &["essential_indicators.wellbeing_measures.workers_coverage_percentage"],
    ),
    percent(
        "Spending on Well-being Measures as a Share of Total Revenue",
        &["essential_indicators.wellbeing_spending_percentage"],
    ),
    list(
        "Retirement Benefits",
        &["essential_indicators.retirement_benefits.schemes"],
        RETIREMENT_COLUMNS,
        "No retirement benefit data available.",
    ),
    text(
        "Retirement Benefits Details",
        &["essential_indicators.retirement_benefits.details"],
    ),
    yes_no(
        "Premises Accessible to Differently Abled Employees and Workers",
        &["essential_indicators.accessibility_of_workplaces.is_accessible"],
    ),
    yes_no(
        "Equal Opportunity Policy",
        &[
            "essential_indicators.equal_opportunity_policy.has_policy",
            "essential_indicators.has_equal_opportunity_policy",
        ],
    ),
    yes_no(
        "Grievance Redressal Mechanism Available",
        &["essential_indicators.grievance_mechanism.available"],
    ),
    yes_no(
        "Occupational Health and Safety Management System Implemented",
        &["essential_indicators.health_safety_management_system.implemented"],
    ),
    list(
        "Safety Related Incidents",
        &["essential_indicators.safety_incidents.records"],
        SAFETY_INCIDENT_COLUMNS,
        "No safety incident data available.",
    ),
    text(
        "Safety Incidents Summary",
        &["essential_indicators.safety_incidents.details"],
    ),
    percent(
        "Employees Trained on Health, Safety and Skill Upgradation",
        &["essential_indicators.training_details.employees_trained_percentage"],
    ),
    percent(
        "Performance and Career Development Reviews",
        &["essential_indicators.performance_reviews"],
    ),
];

const EMPLOYEE_WELLBEING_LEADERSHIP: &[QuestionSpec] = &[
    yes_no(
        "Life Insurance or Compensatory Package in the Event of Death",
        &["leadership_indicators.death_compensation.employees"],
    ),
    text(
        "Transition Assistance Programmes",
        &["leadership_indicators.transition_assistance"],
    ),
];

// Principle 4

const STAKEHOLDER_COLUMNS: &[Column] = &[
    column(
        "Stakeholder Group",
        &["stakeholder_group", "group"],
        Format::Text,
    ),
    column(
        "Vulnerable or Marginalized Group",
        &["vulnerable"],
        Format::YesNo,
    ),
    column("Channels of Communication", &["channels"], Format::Text),
    column("Frequency of Engagement", &["frequency"], Format::Text),
    column(
        "Purpose and Scope of Engagement",
        &["purpose"],
        Format::Text,
    ),
];

const STAKEHOLDER_ESSENTIAL: &[QuestionSpec] = &[
    text(
        "Processes for Identifying Key Stakeholder Groups",
        &["essential_indicators.stakeholder_identification_process"],
    ),
    list(
        "Key Stakeholder Groups",
        &["essential_indicators.stakeholder_groups"],
        STAKEHOLDER_COLUMNS,
        "No stakeholder engagement data available.",
    ),
    text(
        "Frequency of Engagement",
        &["essential_indicators.engagement_frequency"],
    ),
];

const STAKEHOLDER_LEADERSHIP: &[QuestionSpec] = &[
    yes_no(
        "Board Consulted on Economic, Environmental and Social Topics",
        &["leadership_indicators.board_consultation.has_process"],
    ),
    text(
        "Consultation Process Details",
        &["leadership_indicators.board_consultation.details"],
    ),
    text(
        "Engagement with Vulnerable or Marginalized Groups",
        &["leadership_indicators.vulnerable_groups_engagement.details"],
    ),
];

// Principle 5

const REMUNERATION_COLUMNS: &[Column] = &[
    column("Category", &["category"], Format::Text),
    column(
        "Median Remuneration (Male)",
        &["male_median"],
        Format::Number,
    ),
    column(
        "Median Remuneration (Female)",
        &["female_median"],
        Format::Number,
    ),
];

const HUMAN_RIGHTS_COMPLAINT_COLUMNS: &[Column] = &[
    column("Category", &["category"], Format::Text),
    column("Filed During the Year", &["filed"], Format::Number),
    column(
        "Pending Resolution at the End of Year",
        &["pending"],
        Format::Number,
    ),
    column("Remarks", &["remarks"], Format::Text),
];

const HUMAN_RIGHTS_ESSENTIAL: &[QuestionSpec] = &[
    percent(
        "Employees Trained on Human Rights Issues",
        &["essential_indicators.human_rights_training.employees_percentage"],
    ),
    percent(
        "Employees Paid Equal to or More than Minimum Wages",
        &["essential_indicators.minimum_wages.employees_paid_minimum_percentage"],
    ),
    list(
        "Median Remuneration",
        &["essential_indicators.remuneration"],
        REMUNERATION_COLUMNS,
        "No remuneration data available.",
    ),
    yes_no(
        "Focal Point Responsible for Human Rights Impacts",
        &["essential_indicators.focal_point.exists"],
    ),
    text(
        "Internal Mechanisms to Redress Human Rights Grievances",
        &["essential_indicators.grievance_mechanisms.description"],
    ),
    text(
        "Mechanisms to Prevent Adverse Consequences to Complainants",
        &["essential_indicators.complainant_protection_mechanisms"],
    ),
    yes_no(
        "Human Rights Requirements in Business Agreements",
        &["essential_indicators.human_rights_in_contracts"],
    ),
    percent(
        "Plants and Offices Assessed",
        &["essential_indicators.assessments.plants_offices_assessed_percentage"],
    ),
    list(
        "Complaints Made by Employees and Workers",
        &["essential_indicators.complaints"],
        HUMAN_RIGHTS_COMPLAINT_COLUMNS,
        "No human rights complaint data available.",
    ),
];

const HUMAN_RIGHTS_LEADERSHIP: &[QuestionSpec] = &[
    text(
        "Business Processes Modified Due to Human Rights Grievances",
        &["leadership_indicators.process_modifications"],
    ),
    text(
        "Scope and Coverage of Human Rights Due Diligence",
        &["leadership_indicators.due_diligence"],
    ),
];

// Principle 6

const AIR_EMISSION_COLUMNS: &[Column] = &[
    column("Parameter", &["parameter"], Format::Text),
    column("Unit", &["unit"], Format::Text),
    column("Current Year", &["current_year"], Format::Number),
    column("Previous Year", &["previous_year"], Format::Number),
];

const EIA_COLUMNS: &[Column] = &[
    column(
        "Name and Brief Details of Project",
        &["project", "name"],
        Format::Text,
    ),
    column(
        "EIA Notification Number",
        &["notification_number"],
        Format::Text,
    ),
    column("Date", &["date"], Format::Text),
    column(
        "Conducted by Independent External Agency",
        &["independent_agency"],
        Format::YesNo,
    ),
    column(
        "Results Communicated in Public Domain",
        &["public_domain"],
        Format::YesNo,
    ),
];

const WATER_STRESS_COLUMNS: &[Column] = &[
    column("Facility", &["facility", "name"], Format::Text),
    column("Water Withdrawal (KL)", &["withdrawal"], Format::Number),
    column("Water Consumption (KL)", &["consumption"], Format::Number),
];

const ENVIRONMENT_ESSENTIAL: &[QuestionSpec] = &[
    number(
        "Total Energy from Renewable Sources (GJ)",
        RENEWABLE_ENERGY_PATHS,
    ),
    number(
        "Total Energy from Non-Renewable Sources (GJ)",
        NON_RENEWABLE_ENERGY_PATHS,
    ),
    metric(
        "Renewable Share of Energy Consumption",
        &["essential_indicators.energy_consumption.renewable_percentage"],
        MetricRef::RenewableEnergyShare,
    ),
    metric(
        "Energy Intensity per Rupee of Turnover",
        &["essential_indicators.energy_consumption.intensity"],
        MetricRef::EnergyIntensity,
    ),
    text(
        "Energy Efficiency Initiatives",
        &["essential_indicators.energy_efficiency_initiatives"],
    ),
    yes_no(
        "Designated Consumer under the PAT Scheme",
        &["essential_indicators.pat_scheme.is_designated_consumer"],
    ),
    number("Total Water Consumption (KL)", WATER_PATHS),
    metric(
        "Water Intensity per Rupee of Turnover",
        &["essential_indicators.water_consumption.intensity"],
        MetricRef::WaterIntensity,
    ),
    percent(
        "Water Recycled",
        &["essential_indicators.water_consumption.recycled_percentage"],
    ),
    yes_no(
        "Zero Liquid Discharge Implemented",
        &["essential_indicators.zero_liquid_discharge.implemented"],
    ),
    list(
        "Air Emissions (Other than GHG Emissions)",
        &["essential_indicators.air_emissions.parameters"],
        AIR_EMISSION_COLUMNS,
        "No air emissions data available.",
    ),
    text(
        "Air Emissions Details",
        &["essential_indicators.air_emissions.details"],
    ),
    number("Scope 1 Emissions (tCO2e)", SCOPE_1_PATHS),
    number("Scope 2 Emissions (tCO2e)", SCOPE_2_PATHS),
    metric(
        "GHG Emission Intensity per Rupee of Turnover",
        &["essential_indicators.ghg_emissions.intensity"],
        MetricRef::GhgIntensity,
    ),
    text(
        "Projects for Reducing Greenhouse Gas Emissions",
        &["essential_indicators.ghg_reduction_projects.details"],
    ),
    percent(
        "Waste Recovered through Recycling or Re-use",
        &["essential_indicators.waste_management.recovered_percentage"],
    ),
    text(
        "Waste Management Practices",
        &["essential_indicators.waste_management.practices"],
    ),
    yes_no(
        "Compliant with Applicable Environmental Laws",
        &["essential_indicators.environmental_compliance.is_compliant"],
    ),
    list(
        "Environmental Impact Assessments",
        &["essential_indicators.environmental_impact_assessments"],
        EIA_COLUMNS,
        "No environmental impact assessment data available.",
    ),
];

const ENVIRONMENT_LEADERSHIP: &[QuestionSpec] = &[
    text(
        "Scope 3 Emissions",
        &["leadership_indicators.scope_3_emissions.details"],
    ),
    list(
        "Water Withdrawal in Areas of Water Stress",
        &["leadership_indicators.water_stress_areas"],
        WATER_STRESS_COLUMNS,
        "No water stress data available.",
    ),
    text(
        "Business Continuity and Disaster Management Plan",
        &["leadership_indicators.disaster_management_plan"],
    ),
];

// Principle 7

const TRADE_ASSOCIATION_COLUMNS: &[Column] = &[
    column(
        "Name of the Trade and Industry Chamber",
        &["name"],
        Format::Text,
    ),
    column("Reach (State / National)", &["reach"], Format::Text),
];

const POLICY_ADVOCACY_COLUMNS: &[Column] = &[
    column("Public Policy Advocated", &["policy"], Format::Text),
    column(
        "Method Resorted for Such Advocacy",
        &["method"],
        Format::Text,
    ),
    column(
        "Available in Public Domain",
        &["public_domain"],
        Format::YesNo,
    ),
    column(
        "Frequency of Review by Board",
        &["review_frequency"],
        Format::Text,
    ),
];

const POLICY_ADVOCACY_ESSENTIAL: &[QuestionSpec] = &[
    number(
        "Number of Affiliations with Trade and Industry Chambers",
        &["essential_indicators.trade_associations.count"],
    ),
    list(
        "Trade and Industry Chambers",
        &["essential_indicators.trade_associations.list"],
        TRADE_ASSOCIATION_COLUMNS,
        "No trade association data available.",
    ),
    text(
        "Trade Association Details",
        &["essential_indicators.trade_associations.details"],
    ),
    text(
        "Corrective Action on Anti-Competitive Conduct",
        &["essential_indicators.anti_competitive_conduct.corrective_action"],
    ),
];

const POLICY_ADVOCACY_LEADERSHIP: &[QuestionSpec] = &[
    text(
        "Public Policy Positions Advocated",
        &["leadership_indicators.public_policy_positions.details"],
    ),
    list(
        "Public Policy Advocacy",
        &["leadership_indicators.public_policy_positions.list"],
        POLICY_ADVOCACY_COLUMNS,
        "No public policy advocacy data available.",
    ),
];

// Principle 8

const SIA_COLUMNS: &[Column] = &[
    column(
        "Name and Brief Details of Project",
        &["project", "name"],
        Format::Text,
    ),
    column(
        "SIA Notification Number",
        &["notification_number"],
        Format::Text,
    ),
    column("Date", &["date"], Format::Text),
    column(
        "Conducted by Independent External Agency",
        &["independent_agency"],
        Format::YesNo,
    ),
    column(
        "Results Communicated in Public Domain",
        &["public_domain"],
        Format::YesNo,
    ),
];

const CSR_BENEFICIARY_COLUMNS: &[Column] = &[
    column("CSR Project", &["project", "name"], Format::Text),
    column("Persons Benefitted", &["beneficiaries"], Format::Number),
    column(
        "% from Vulnerable and Marginalized Groups",
        &["vulnerable_percentage"],
        Format::Percent,
    ),
];

const INCLUSIVE_GROWTH_ESSENTIAL: &[QuestionSpec] = &[
    text(
        "Social Impact Assessments",
        &["essential_indicators.social_impact_assessments.details"],
    ),
    list(
        "Social Impact Assessment Projects",
        &["essential_indicators.social_impact_assessments.projects"],
        SIA_COLUMNS,
        "No social impact assessment data available.",
    ),
    text(
        "Rehabilitation and Resettlement",
        &["essential_indicators.rehabilitation_resettlement.details"],
    ),
    text(
        "Mechanisms to Receive Community Grievances",
        &["essential_indicators.community_grievance_mechanism"],
    ),
    percent(
        "Input Material Sourced from MSMEs and Small Producers",
        &["essential_indicators.input_material_sourcing.msme_percentage"],
    ),
];

const INCLUSIVE_GROWTH_LEADERSHIP: &[QuestionSpec] = &[
    yes_no(
        "CSR Projects in Aspirational Districts",
        &["leadership_indicators.csr_aspirational_districts.undertaken"],
    ),
    list(
        "CSR Beneficiaries",
        &["leadership_indicators.csr_beneficiaries"],
        CSR_BENEFICIARY_COLUMNS,
        "No CSR beneficiary data available.",
    ),
];

// Principle 9

const CONSUMER_COMPLAINT_COLUMNS: &[Column] = &[
    column("Category", &["category"], Format::Text),
    column("Received During the Year", &["received"], Format::Number),
    column(
        "Pending Resolution at End of Year",
        &["pending"],
        Format::Number,
    ),
    column("Remarks", &["remarks"], Format::Text),
];

const CONSUMER_VALUE_ESSENTIAL: &[QuestionSpec] = &[
    text(
        "Mechanisms to Receive Consumer Complaints and Feedback",
        &["essential_indicators.consumer_complaint_mechanism"],
    ),
    percent(
        "Turnover from Products Carrying Environmental and Social Information",
        &["essential_indicators.product_information.turnover_percentage"],
    ),
    list(
        "Consumer Complaints",
        &["essential_indicators.consumer_complaints"],
        CONSUMER_COMPLAINT_COLUMNS,
        "No consumer complaint data available.",
    ),
    yes_no(
        "Cyber Security and Data Privacy Policy",
        &[
            "essential_indicators.cyber_security_policy.has_policy",
            "essential_indicators.has_cyber_security_policy",
        ],
    ),
    text(
        "Web Link to the Data Privacy Policy",
        &["essential_indicators.cyber_security_policy.weblink"],
    ),
    text(
        "Product Recalls",
        &["essential_indicators.product_recalls.details"],
    ),
    text(
        "Data Breaches",
        &["essential_indicators.data_breaches.details"],
    ),
];

const CONSUMER_VALUE_LEADERSHIP: &[QuestionSpec] = &[
    yes_no(
        "Consumer Satisfaction Survey Conducted",
        &["leadership_indicators.customer_satisfaction_survey.conducted"],
    ),
    text(
        "Channels for Product and Service Information",
        &["leadership_indicators.information_channels"],
    ),
];

const ETHICS: [QuestionGroup; 2] = groups(ETHICS_ESSENTIAL, ETHICS_LEADERSHIP);
const SUSTAINABLE_PRODUCTS: [QuestionGroup; 2] = groups(
    SUSTAINABLE_PRODUCTS_ESSENTIAL,
    SUSTAINABLE_PRODUCTS_LEADERSHIP,
);
const EMPLOYEE_WELLBEING: [QuestionGroup; 2] =
    groups(EMPLOYEE_WELLBEING_ESSENTIAL, EMPLOYEE_WELLBEING_LEADERSHIP);
const STAKEHOLDER_RESPONSIVENESS: [QuestionGroup; 2] =
    groups(STAKEHOLDER_ESSENTIAL, STAKEHOLDER_LEADERSHIP);
const HUMAN_RIGHTS: [QuestionGroup; 2] = groups(HUMAN_RIGHTS_ESSENTIAL, HUMAN_RIGHTS_LEADERSHIP);
const ENVIRONMENT: [QuestionGroup; 2] = groups(ENVIRONMENT_ESSENTIAL, ENVIRONMENT_LEADERSHIP);
const POLICY_ADVOCACY: [QuestionGroup; 2] =
    groups(POLICY_ADVOCACY_ESSENTIAL, POLICY_ADVOCACY_LEADERSHIP);
const INCLUSIVE_GROWTH: [QuestionGroup; 2] =
    groups(INCLUSIVE_GROWTH_ESSENTIAL, INCLUSIVE_GROWTH_LEADERSHIP);
const CONSUMER_VALUE: [QuestionGroup; 2] =
    groups(CONSUMER_VALUE_ESSENTIAL, CONSUMER_VALUE_LEADERSHIP);

/// Essential and leadership question groups for a principle.
pub(crate) fn principle_groups(principle: Principle) -> &'static [QuestionGroup] {
    match principle {
        Principle::EthicsTransparency => &ETHICS,
        Principle::SustainableProducts => &SUSTAINABLE_PRODUCTS,
        Principle::EmployeeWellbeing => &EMPLOYEE_WELLBEING,
        Principle::StakeholderResponsiveness => &STAKEHOLDER_RESPONSIVENESS,
        Principle::HumanRights => &HUMAN_RIGHTS,
        Principle::Environment => &ENVIRONMENT,
        Principle::PolicyAdvocacy => &POLICY_ADVOCACY,
        Principle::InclusiveGrowth => &INCLUSIVE_GROWTH,
        Principle::ConsumerValue => &CONSUMER_VALUE,
    }
}
