mod config;
mod export;
mod pillar;
mod rubric;
mod rules;

#[cfg(test)]
mod tests;

pub use config::{principle_maximum, ScoreMaxima, ScoringConfig, RUBRIC_MAXIMA};
pub use export::{score_rows, write_csv, ScoreRow};
pub use pillar::Pillar;
pub use rubric::{indicator_rules, IndicatorRule};
pub use rules::{apply_rule, Rule, Threshold};

use crate::metrics::percentage::round_to;
use crate::metrics::{DerivedMetrics, DerivedMetricsCalculator};
use crate::record::{resolve, DisclosureRecord, Principle};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Points awarded for one indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorScore {
    pub key: &'static str,
    pub points: i32,
}

/// Indicator breakdown for a principle. `total` is the plain sum and is
/// negative when penalties outweigh awards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicScore {
    pub indicator_scores: Vec<IndicatorScore>,
    pub total: i32,
}

impl TopicScore {
    pub fn points_for(&self, key: &str) -> Option<i32> {
        self.indicator_scores
            .iter()
            .find(|score| score.key == key)
            .map(|score| score.points)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarScores {
    pub environment: i32,
    pub social: i32,
    pub governance: i32,
    pub environment_percentage: f64,
    pub social_percentage: f64,
    pub governance_percentage: f64,
}

impl PillarScores {
    pub fn total(&self, pillar: Pillar) -> i32 {
        match pillar {
            Pillar::Environmental => self.environment,
            Pillar::Social => self.social,
            Pillar::Governance => self.governance,
        }
    }

    pub fn percentage(&self, pillar: Pillar) -> f64 {
        match pillar {
            Pillar::Environmental => self.environment_percentage,
            Pillar::Social => self.social_percentage,
            Pillar::Governance => self.governance_percentage,
        }
    }
}

/// Overall score of a disclosure record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceScore {
    pub topic_scores: BTreeMap<Principle, TopicScore>,
    pub pillar_scores: PillarScores,
    pub total_score: i32,
    pub max_score: i32,
    pub percentage: f64,
}

impl ComplianceScore {
    pub fn topic(&self, principle: Principle) -> Option<&TopicScore> {
        self.topic_scores.get(&principle)
    }
}

/// Stateless engine that applies the fixed rubric to a record.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one principle block. Missing fields score `0`, or the `no`
    /// value of boolean rules.
    pub fn score_topic(&self, principle: Principle, block: &Value) -> TopicScore {
        self.score_topic_with(principle, block, None)
    }

    /// Score one principle block, taking derived figures from `metrics` where
    /// the rubric prefers them over the disclosed answer.
    pub fn score_topic_with(
        &self,
        principle: Principle,
        block: &Value,
        metrics: Option<&DerivedMetrics>,
    ) -> TopicScore {
        let indicator_scores: Vec<IndicatorScore> = indicator_rules(principle)
            .iter()
            .map(|indicator| {
                let computed = rubric::computed_value(principle, indicator.key, metrics);
                let disclosed = resolve(block, indicator.paths);
                let value = computed.as_ref().or(disclosed);
                IndicatorScore {
                    key: indicator.key,
                    points: apply_rule(value, &indicator.rule),
                }
            })
            .collect();

        let total: i32 = indicator_scores.iter().map(|score| score.points).sum();
        debug!(%principle, total, "scored principle");

        TopicScore {
            indicator_scores,
            total,
        }
    }

    /// Resolve every principle through its key aliases and score it against
    /// metrics derived with default precision.
    pub fn score_record(&self, record: &DisclosureRecord) -> ComplianceScore {
        let metrics = DerivedMetricsCalculator::default().compute(record);
        self.score_record_with(record, &metrics)
    }

    /// Score a record against metrics already derived from it.
    pub fn score_record_with(
        &self,
        record: &DisclosureRecord,
        metrics: &DerivedMetrics,
    ) -> ComplianceScore {
        let topic_scores = Principle::ordered()
            .into_iter()
            .map(|principle| {
                let block = record.principle(principle);
                let score = self.score_topic_with(principle, block, Some(metrics));
                (principle, score)
            })
            .collect();

        self.aggregate(topic_scores)
    }

    /// Roll topic totals into pillars. Absent topics contribute nothing.
    pub fn aggregate(&self, topic_scores: BTreeMap<Principle, TopicScore>) -> ComplianceScore {
        let maxima = &self.config.maxima;
        let pillar_total = |pillar: Pillar| -> i32 {
            pillar
                .principles()
                .filter_map(|principle| topic_scores.get(&principle))
                .map(|score| score.total)
                .sum()
        };

        let environment = pillar_total(Pillar::Environmental);
        let social = pillar_total(Pillar::Social);
        let governance = pillar_total(Pillar::Governance);
        let total_score = environment + social + governance;

        let pillar_scores = PillarScores {
            environment,
            social,
            governance,
            environment_percentage: share(environment, Pillar::Environmental.maximum(maxima)),
            social_percentage: share(social, Pillar::Social.maximum(maxima)),
            governance_percentage: share(governance, Pillar::Governance.maximum(maxima)),
        };

        ComplianceScore {
            topic_scores,
            pillar_scores,
            total_score,
            max_score: maxima.overall,
            percentage: share(total_score, maxima.overall),
        }
    }
}

/// Score a record with the standard rubric.
pub fn score_record(record: &DisclosureRecord) -> ComplianceScore {
    ScoringEngine::default().score_record(record)
}

fn share(points: i32, maximum: i32) -> f64 {
    if maximum == 0 {
        return 0.0;
    }
    round_to(f64::from(points) / f64::from(maximum) * 100.0, 2)
}
