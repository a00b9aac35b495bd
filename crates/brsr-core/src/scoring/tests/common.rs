use serde_json::{json, Value};

use crate::record::DisclosureRecord;
use crate::scoring::{ScoringConfig, ScoringEngine};

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

pub(super) fn record(value: Value) -> DisclosureRecord {
    DisclosureRecord::from_value(value).expect("test records are objects")
}

pub(super) fn ethics_block() -> Value {
    json!({
        "essential_indicators": {
            "anti_corruption_policy": {
                "has_policy": true,
                "details":
                    "Board-approved anti-bribery and anti-corruption policy covering all employees."
            },
            "awareness_programmes": { "coverage_percentage": "92%" },
            "disciplinary_actions": {
                "details": "No disciplinary action taken by any law enforcement agency."
            },
            "conflict_of_interest_complaints": { "remarks": "Nil complaints received." },
            "fines_penalties": {
                "details": "No fines, penalties or settlements in the reporting year."
            }
        },
        "leadership_indicators": {
            "conflict_of_interest_process": { "has_process": true }
        }
    })
}

pub(super) fn consumer_block() -> Value {
    json!({
        "essential_indicators": {
            "consumer_complaint_mechanism":
                "Toll-free helpline and e-mail desk with a 48 hour response commitment.",
            "product_information": { "turnover_percentage": 100 },
            "cyber_security_policy": {
                "has_policy": "Yes",
                "weblink": "https://example.com/privacy"
            },
            "product_recalls": { "details": "No recalls." },
            "data_breaches": { "details": "No breaches of customer data." }
        },
        "leadership_indicators": {
            "customer_satisfaction_survey": { "conducted": true }
        }
    })
}
