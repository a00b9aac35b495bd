use super::{
    column, headcount, list, metric, number, percent, text, yes_no, Column, HeadcountRef,
    MetricRef, QuestionGroup, QuestionSpec,
};
use crate::document::format::Format;
use crate::metrics::TURNOVER_PATHS;

const BUSINESS_ACTIVITY_COLUMNS: &[Column] = &[
    column(
        "Description of Main Activity",
        &["description_main_activity", "main_activity"],
        Format::Text,
    ),
    column(
        "Description of Business Activity",
        &["description_business_activity", "business_activity"],
        Format::Text,
    ),
    column(
        "% of Turnover of the Entity",
        &["turnover_percentage"],
        Format::Percent,
    ),
];

const PRODUCT_COLUMNS: &[Column] = &[
    column(
        "Product/Service",
        &["product_service", "name"],
        Format::Text,
    ),
    column("NIC Code", &["nic_code"], Format::Text),
    column(
        "% of Total Turnover Contributed",
        &["turnover_contributed", "turnover_percentage"],
        Format::Percent,
    ),
];

const GROUP_COMPANY_COLUMNS: &[Column] = &[
    column("Name of the Company", &["name"], Format::Text),
    column(
        "Holding / Subsidiary / Associate / Joint Venture",
        &["type", "relationship"],
        Format::Text,
    ),
    column(
        "% of Shares Held",
        &["shares_held_percentage"],
        Format::Percent,
    ),
    column(
        "Participates in Business Responsibility Initiatives",
        &["participates_in_br"],
        Format::YesNo,
    ),
];

const COMPLAINT_COLUMNS: &[Column] = &[
    column("Stakeholder Group", &["stakeholder_group"], Format::Text),
    column(
        "Grievance Redressal Mechanism in Place",
        &["mechanism_in_place"],
        Format::YesNo,
    ),
    column(
        "Filed During the Year",
        &["filed", "filed_current_year"],
        Format::Number,
    ),
    column(
        "Pending Resolution at Close of the Year",
        &["pending", "pending_current_year"],
        Format::Number,
    ),
    column("Remarks", &["remarks"], Format::Text),
];

const MATERIAL_ISSUE_COLUMNS: &[Column] = &[
    column("Material Issue Identified", &["issue"], Format::Text),
    column(
        "Risk or Opportunity",
        &["risk_or_opportunity"],
        Format::Text,
    ),
    column("Rationale", &["rationale"], Format::Text),
    column(
        "Approach to Adapt or Mitigate",
        &["mitigation_approach"],
        Format::Text,
    ),
    column(
        "Financial Implications",
        &["financial_implications"],
        Format::Text,
    ),
];

const ENTITY_DETAILS: &[QuestionSpec] = &[
    text(
        "Corporate Identity Number (CIN)",
        &["sa_entity_details.cin", "cin"],
    ),
    text(
        "Name of the Listed Entity",
        &[
            "sa_entity_details.name",
            "name_of_listed_entity",
            "company_name",
        ],
    ),
    number(
        "Year of Incorporation",
        &[
            "sa_entity_details.year_of_incorporation",
            "year_of_incorporation",
        ],
    ),
    text(
        "Registered Office Address",
        &[
            "sa_entity_details.registered_office_address",
            "registered_office_address",
        ],
    ),
    text(
        "Corporate Address",
        &["sa_entity_details.corporate_address", "corporate_address"],
    ),
    text("E-mail", &["sa_entity_details.email", "email"]),
    text("Telephone", &["sa_entity_details.telephone", "telephone"]),
    text("Website", &["sa_entity_details.website", "website"]),
    text(
        "Financial Year for which Reporting is Being Done",
        &[
            "sa_entity_details.financial_year",
            "financial_year",
            "reporting_year",
        ],
    ),
    text(
        "Name of the Stock Exchange(s) where Shares are Listed",
        &["sa_entity_details.stock_exchanges", "stock_exchanges"],
    ),
    number(
        "Paid-up Capital",
        &["sa_entity_details.paid_up_capital", "paid_up_capital"],
    ),
    text(
        "Contact Person for Queries on the BRSR",
        &[
            "sa_entity_details.contact_person.name",
            "contact_person_name",
        ],
    ),
    text(
        "Reporting Boundary",
        &["sa_entity_details.reporting_boundary", "reporting_boundary"],
    ),
];

const PRODUCTS_SERVICES: &[QuestionSpec] = &[
    list(
        "Details of Business Activities",
        &["sa_business_activities", "business_activities"],
        BUSINESS_ACTIVITY_COLUMNS,
        "No business activity data available.",
    ),
    list(
        "Products/Services Sold by the Entity",
        &["sa_products_services", "products_services"],
        PRODUCT_COLUMNS,
        "No product or service data available.",
    ),
];

const OPERATIONS: &[QuestionSpec] = &[
    number(
        "Number of National Plants",
        &["sa_operations.national_plants"],
    ),
    number(
        "Number of National Offices",
        &["sa_operations.national_offices"],
    ),
    number(
        "Number of International Plants",
        &["sa_operations.international_plants"],
    ),
    number(
        "Number of International Offices",
        &["sa_operations.international_offices"],
    ),
    number(
        "Markets Served: Number of States",
        &["sa_markets_served.national_states"],
    ),
    number(
        "Markets Served: Number of Countries",
        &["sa_markets_served.international_countries"],
    ),
    percent(
        "Contribution of Exports to Total Turnover",
        &["sa_markets_served.exports_percentage"],
    ),
    text("Types of Customers", &["sa_markets_served.customer_types"]),
];

const EMPLOYEES: &[QuestionSpec] = &[
    headcount("Employees", HeadcountRef::Employees),
    headcount("Workers", HeadcountRef::Workers),
    headcount(
        "Differently Abled Employees",
        HeadcountRef::DifferentlyAbledEmployees,
    ),
    headcount(
        "Differently Abled Workers",
        HeadcountRef::DifferentlyAbledWorkers,
    ),
    metric(
        "Women on the Board of Directors",
        &["sa_women_representation_details.board_percentage"],
        MetricRef::BoardWomen,
    ),
    metric(
        "Women among Key Managerial Personnel",
        &["sa_women_representation_details.kmp_percentage"],
        MetricRef::KmpWomen,
    ),
    percent(
        "Turnover Rate for Permanent Employees",
        &[
            "sa_turnover_rate.permanent_employees",
            "sa_employee_turnover.employees",
        ],
    ),
    percent(
        "Turnover Rate for Permanent Workers",
        &[
            "sa_turnover_rate.permanent_workers",
            "sa_employee_turnover.workers",
        ],
    ),
];

const GROUP_COMPANIES: &[QuestionSpec] = &[list(
    "Holding, Subsidiary and Associate Companies",
    &[
        "sa_holding_subsidiary_associate_companies",
        "sa_subsidiaries",
    ],
    GROUP_COMPANY_COLUMNS,
    "No holding, subsidiary or associate company data available.",
)];

const CSR_DETAILS: &[QuestionSpec] = &[
    yes_no(
        "CSR Applicable as per Section 135 of the Companies Act, 2013",
        &["sa_csr_details.csr_applicable"],
    ),
    number("Turnover (in Rs.)", TURNOVER_PATHS),
    number("Net Worth (in Rs.)", &["sa_csr_details.net_worth"]),
];

const TRANSPARENCY: &[QuestionSpec] = &[
    list(
        "Complaints and Grievances on Responsible Business Conduct",
        &["sa_transparency_complaints", "sa_complaints"],
        COMPLAINT_COLUMNS,
        "No complaints data available.",
    ),
    list(
        "Material Responsible Business Conduct Issues",
        &["sa_material_issues", "material_issues"],
        MATERIAL_ISSUE_COLUMNS,
        "No material issues data available.",
    ),
];

pub(crate) const GENERAL_DISCLOSURES: &[QuestionGroup] = &[
    QuestionGroup {
        title: "Details of the Listed Entity",
        questions: ENTITY_DETAILS,
    },
    QuestionGroup {
        title: "Products / Services",
        questions: PRODUCTS_SERVICES,
    },
    QuestionGroup {
        title: "Operations",
        questions: OPERATIONS,
    },
    QuestionGroup {
        title: "Employees",
        questions: EMPLOYEES,
    },
    QuestionGroup {
        title: "Holding, Subsidiary and Associate Companies",
        questions: GROUP_COMPANIES,
    },
    QuestionGroup {
        title: "CSR Details",
        questions: CSR_DETAILS,
    },
    QuestionGroup {
        title: "Transparency and Disclosures Compliances",
        questions: TRANSPARENCY,
    },
];
