use crate::record::Principle;
use serde::{Deserialize, Serialize};

/// Fixed maxima of the external scoring rubric. These are configured, never
/// recomputed from the indicator tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreMaxima {
    pub environmental: i32,
    pub social: i32,
    pub governance: i32,
    pub overall: i32,
}

pub const RUBRIC_MAXIMA: ScoreMaxima = ScoreMaxima {
    environmental: 2600,
    social: 2800,
    governance: 1500,
    overall: 6900,
};

impl Default for ScoreMaxima {
    fn default() -> Self {
        RUBRIC_MAXIMA
    }
}

/// Rubric ceiling per principle, shown next to each principle total.
pub const fn principle_maximum(principle: Principle) -> i32 {
    match principle {
        Principle::EthicsTransparency => 500,
        Principle::SustainableProducts => 1000,
        Principle::EmployeeWellbeing => 1200,
        Principle::StakeholderResponsiveness => 300,
        Principle::HumanRights => 800,
        Principle::Environment => 1600,
        Principle::PolicyAdvocacy => 300,
        Principle::InclusiveGrowth => 400,
        Principle::ConsumerValue => 800,
    }
}

/// Scoring configuration handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub maxima: ScoreMaxima,
}
