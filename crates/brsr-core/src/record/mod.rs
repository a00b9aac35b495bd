//! The nested disclosure record and the accessors that locate its blocks.
//!
//! Records arrive in several historical layouts. Every block is located through
//! an ordered alias list, canonical key first, and every field inside a block
//! through [`resolve`].

pub mod coerce;
mod lookup;

pub use lookup::{lookup, resolve};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::io::Read;
use std::sync::OnceLock;

const GENERAL_DISCLOSURE_KEYS: &[&str] =
    &["general_disclosures", "section_a", "sa_general_disclosures"];
const MANAGEMENT_PROCESS_KEYS: &[&str] =
    &["management_process", "section_b", "sb_management_process"];

/// Boundary errors raised before a record reaches the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("disclosure record must be a JSON object, found {0}")]
    NotAnObject(&'static str),
    #[error("invalid disclosure JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read disclosure record: {0}")]
    Io(#[from] std::io::Error),
}

/// One company's disclosure for one reporting period.
///
/// The record is read-only for the whole pipeline; every accessor borrows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct DisclosureRecord {
    root: Value,
}

impl DisclosureRecord {
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(_) => Ok(Self { root: value }),
            other => Err(RecordError::NotAnObject(json_kind(&other))),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, RecordError> {
        Self::from_value(serde_json::from_str(raw)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RecordError> {
        Self::from_value(serde_json::from_reader(reader)?)
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Section A. Flat legacy records keep the `sa_*` keys at the top level, so
    /// the root itself is used when no section key is present.
    pub fn general_disclosures(&self) -> &Value {
        resolve(&self.root, GENERAL_DISCLOSURE_KEYS).unwrap_or(&self.root)
    }

    /// Section B, or an empty block.
    pub fn management_process(&self) -> &Value {
        resolve(&self.root, MANAGEMENT_PROCESS_KEYS).unwrap_or_else(|| empty_block())
    }

    /// The block for one principle, or an empty block.
    pub fn principle(&self, principle: Principle) -> &Value {
        resolve(&self.root, principle.aliases()).unwrap_or_else(|| empty_block())
    }

    pub fn company_name(&self) -> Option<&str> {
        coerce::non_empty_text(resolve(
            self.general_disclosures(),
            &[
                "sa_entity_details.name",
                "name_of_listed_entity",
                "company_name",
                "name_of_company",
            ],
        ))
    }

    pub fn financial_year(&self) -> Option<&str> {
        coerce::non_empty_text(resolve(
            self.general_disclosures(),
            &[
                "sa_entity_details.financial_year",
                "financial_year",
                "reporting_year",
            ],
        ))
    }
}

impl TryFrom<Value> for DisclosureRecord {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<DisclosureRecord> for Value {
    fn from(record: DisclosureRecord) -> Self {
        record.root
    }
}

fn empty_block() -> &'static Value {
    static EMPTY: OnceLock<Value> = OnceLock::new();
    EMPTY.get_or_init(|| Value::Object(Map::new()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The nine principles of the disclosure framework.
///
/// Serialized as `topic1`..`topic9`, the keys used by the score output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Principle {
    #[serde(rename = "topic1")]
    EthicsTransparency,
    #[serde(rename = "topic2")]
    SustainableProducts,
    #[serde(rename = "topic3")]
    EmployeeWellbeing,
    #[serde(rename = "topic4")]
    StakeholderResponsiveness,
    #[serde(rename = "topic5")]
    HumanRights,
    #[serde(rename = "topic6")]
    Environment,
    #[serde(rename = "topic7")]
    PolicyAdvocacy,
    #[serde(rename = "topic8")]
    InclusiveGrowth,
    #[serde(rename = "topic9")]
    ConsumerValue,
}

impl Principle {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::EthicsTransparency,
            Self::SustainableProducts,
            Self::EmployeeWellbeing,
            Self::StakeholderResponsiveness,
            Self::HumanRights,
            Self::Environment,
            Self::PolicyAdvocacy,
            Self::InclusiveGrowth,
            Self::ConsumerValue,
        ]
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::EthicsTransparency => 1,
            Self::SustainableProducts => 2,
            Self::EmployeeWellbeing => 3,
            Self::StakeholderResponsiveness => 4,
            Self::HumanRights => 5,
            Self::Environment => 6,
            Self::PolicyAdvocacy => 7,
            Self::InclusiveGrowth => 8,
            Self::ConsumerValue => 9,
        }
    }

    /// Record keys for this principle, canonical first.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::EthicsTransparency => &["principle_1", "sc_p1_ethical_conduct", "p1"],
            Self::SustainableProducts => &["principle_2", "sc_p2_sustainable_safe_goods", "p2"],
            Self::EmployeeWellbeing => &["principle_3", "sc_p3_employee_wellbeing", "p3"],
            Self::StakeholderResponsiveness => {
                &["principle_4", "sc_p4_stakeholder_responsiveness", "p4"]
            }
            Self::HumanRights => &["principle_5", "sc_p5_human_rights", "p5"],
            Self::Environment => &["principle_6", "sc_p6_environment_protection", "p6"],
            Self::PolicyAdvocacy => &["principle_7", "sc_p7_policy_advocacy", "p7"],
            Self::InclusiveGrowth => &["principle_8", "sc_p8_inclusive_growth", "p8"],
            Self::ConsumerValue => &["principle_9", "sc_p9_consumer_value", "p9"],
        }
    }

    pub const fn key(self) -> &'static str {
        self.aliases()[0]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EthicsTransparency => "Ethics, Transparency & Accountability",
            Self::SustainableProducts => "Sustainable & Safe Goods and Services",
            Self::EmployeeWellbeing => "Employee Well-being",
            Self::StakeholderResponsiveness => "Stakeholder Responsiveness",
            Self::HumanRights => "Human Rights",
            Self::Environment => "Environment Protection",
            Self::PolicyAdvocacy => "Public & Regulatory Policy",
            Self::InclusiveGrowth => "Inclusive Growth",
            Self::ConsumerValue => "Consumer Value",
        }
    }

    pub const fn statement(self) -> &'static str {
        match self {
            Self::EthicsTransparency => {
                "Businesses should conduct and govern themselves with integrity, and in a manner that is Ethical, Transparent and Accountable."
            }
            Self::SustainableProducts => {
                "Businesses should provide goods and services in a manner that is sustainable and safe."
            }
            Self::EmployeeWellbeing => {
                "Businesses should respect and promote the well-being of all employees, including those in their value chains."
            }
            Self::StakeholderResponsiveness => {
                "Businesses should respect the interests of and be responsive to all its stakeholders."
            }
            Self::HumanRights => "Businesses should respect and promote human rights.",
            Self::Environment => {
                "Businesses should respect and make efforts to protect and restore the environment."
            }
            Self::PolicyAdvocacy => {
                "Businesses, when engaging in influencing public and regulatory policy, should do so in a manner that is responsible and transparent."
            }
            Self::InclusiveGrowth => {
                "Businesses should promote inclusive growth and equitable development."
            }
            Self::ConsumerValue => {
                "Businesses should engage with and provide value to their consumers in a responsible manner."
            }
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principle {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_object_records() {
        let err = DisclosureRecord::from_value(json!([1, 2])).expect_err("arrays rejected");
        assert!(matches!(err, RecordError::NotAnObject("an array")));

        let err = DisclosureRecord::from_json_str("{ not json").expect_err("bad json");
        assert!(matches!(err, RecordError::Json(_)));
    }

    #[test]
    fn principle_prefers_canonical_key() {
        let record = DisclosureRecord::from_value(json!({
            "principle_1": { "marker": "canonical" },
            "p1": { "marker": "legacy" },
        }))
        .expect("object record");

        assert_eq!(
            record.principle(Principle::EthicsTransparency)["marker"],
            json!("canonical")
        );
    }

    #[test]
    fn principle_falls_back_through_legacy_keys() {
        let record = DisclosureRecord::from_value(json!({
            "sc_p6_environment_protection": { "marker": "named legacy" },
            "p6": { "marker": "short legacy" },
        }))
        .expect("object record");

        assert_eq!(
            record.principle(Principle::Environment)["marker"],
            json!("named legacy")
        );
        assert_eq!(record.principle(Principle::HumanRights), &json!({}));
    }

    #[test]
    fn flat_records_expose_root_as_general_disclosures() {
        let record = DisclosureRecord::from_value(json!({
            "company_name": "Flat Ltd",
            "sa_employee_details": { "permanent_male": 3 },
        }))
        .expect("object record");

        assert_eq!(record.company_name(), Some("Flat Ltd"));
        let general = record.general_disclosures();
        assert!(general.get("sa_employee_details").is_some());
        assert_eq!(record.management_process(), &json!({}));
    }

    #[test]
    fn deserializes_through_serde() {
        let record: DisclosureRecord =
            serde_json::from_str(r#"{ "section_a": { "financial_year": "2023-24" } }"#)
                .expect("record deserializes");
        assert_eq!(record.financial_year(), Some("2023-24"));

        let err = serde_json::from_str::<DisclosureRecord>("42");
        assert!(err.is_err());
    }
}
