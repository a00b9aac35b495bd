use crate::record::coerce::{is_truthy, non_empty_text, parse_percentage};
use serde::Serialize;
use serde_json::Value;

/// Minimum disclosed percentage required to earn `points`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Threshold {
    pub min: f64,
    pub points: i32,
}

/// Scoring rule attached to a single indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rule {
    /// `yes` for a truthy answer, otherwise `no` (which may be a penalty).
    Boolean { yes: i32, no: i32 },
    /// `points` for any non-blank free-text answer.
    Disclosure { points: i32 },
    /// Thresholds ordered from most to least demanding.
    Percentage { thresholds: &'static [Threshold] },
    /// Fixed award independent of the answer.
    Constant { points: i32 },
}

impl Rule {
    /// Best achievable outcome under this rule.
    pub fn max_points(&self) -> i32 {
        match self {
            Rule::Boolean { yes, no } => (*yes).max(*no),
            Rule::Disclosure { points } | Rule::Constant { points } => *points,
            Rule::Percentage { thresholds } => thresholds
                .iter()
                .map(|threshold| threshold.points)
                .max()
                .unwrap_or(0),
        }
    }
}

pub fn apply_rule(value: Option<&Value>, rule: &Rule) -> i32 {
    match rule {
        Rule::Boolean { yes, no } => {
            if is_truthy(value) {
                *yes
            } else {
                *no
            }
        }
        Rule::Disclosure { points } => {
            if non_empty_text(value).is_some() {
                *points
            } else {
                0
            }
        }
        Rule::Percentage { thresholds } => match value.and_then(parse_percentage) {
            Some(disclosed) => thresholds
                .iter()
                .find(|threshold| disclosed >= threshold.min)
                .map(|threshold| threshold.points)
                .unwrap_or(0),
            None => 0,
        },
        Rule::Constant { points } => *points,
    }
}
