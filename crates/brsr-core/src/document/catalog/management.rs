use super::{column, list, principle_matrix, text, yes_no, Column, QuestionGroup, QuestionSpec};
use crate::document::format::Format;

const POLICY_COLUMNS: &[Column] = &[
    column(
        "Policy Covers the Principle",
        &["has_policy", "policy_exists"],
        Format::YesNo,
    ),
    column("Approved by the Board", &["board_approved"], Format::YesNo),
    column(
        "Web Link of the Policy",
        &["web_link", "weblink"],
        Format::Text,
    ),
    column(
        "Translated into Procedures",
        &["translated_to_procedures"],
        Format::YesNo,
    ),
    column(
        "Extends to Value Chain Partners",
        &["extends_to_value_chain"],
        Format::YesNo,
    ),
    column(
        "National / International Standards Adopted",
        &["certifications", "standards"],
        Format::Text,
    ),
    column(
        "Specific Commitments, Goals and Targets",
        &["commitments", "targets"],
        Format::Text,
    ),
];

const REVIEW_COLUMNS: &[Column] = &[
    column("Subject for Review", &["subject"], Format::Text),
    column(
        "Reviewed by Director / Committee / Other",
        &["reviewed_by"],
        Format::Text,
    ),
    column("Frequency", &["frequency"], Format::Text),
];

const POLICY_PROCESSES: &[QuestionSpec] = &[principle_matrix(
    "Policy and Management Processes",
    &["policy_matrix", "policies", "sb_policies"],
    POLICY_COLUMNS,
)];

const GOVERNANCE: &[QuestionSpec] = &[
    text(
        "Statement by the Director Responsible for the Business Responsibility Report",
        &["director_statement", "governance.director_statement"],
    ),
    text(
        "Highest Authority Responsible for Implementation and Oversight",
        &[
            "oversight_authority.details",
            "governance.oversight_authority",
        ],
    ),
    yes_no(
        "Board Committee Responsible for Sustainability Decision Making",
        &[
            "sustainability_committee.exists",
            "governance.has_sustainability_committee",
        ],
    ),
    text(
        "Details of the Committee",
        &["sustainability_committee.details"],
    ),
    list(
        "Review of NGRBCs by the Company",
        &["ngrbc_reviews", "reviews"],
        REVIEW_COLUMNS,
        "No review data available.",
    ),
    yes_no(
        "Independent Assessment of the Working of Policies by an External Agency",
        &["independent_assessment.conducted"],
    ),
    text(
        "Name of the Assessing Agency",
        &["independent_assessment.agency"],
    ),
];

pub(crate) const MANAGEMENT_PROCESS: &[QuestionGroup] = &[
    QuestionGroup {
        title: "Policy and Management Processes",
        questions: POLICY_PROCESSES,
    },
    QuestionGroup {
        title: "Governance, Leadership and Oversight",
        questions: GOVERNANCE,
    },
];
