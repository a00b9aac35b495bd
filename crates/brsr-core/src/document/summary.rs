use super::format::format_percent;
use super::node::DocumentNode;
use crate::metrics::NOT_APPLICABLE;
use crate::record::Principle;
use crate::scoring::{principle_maximum, ComplianceScore, Pillar, ScoreMaxima};

pub(crate) const TITLE: &str = "Score Summary";

pub(crate) fn summary_nodes(score: &ComplianceScore, maxima: &ScoreMaxima) -> Vec<DocumentNode> {
    let pillar_rows = Pillar::ordered()
        .into_iter()
        .map(|pillar| {
            vec![
                pillar.label().to_string(),
                score.pillar_scores.total(pillar).to_string(),
                pillar.maximum(maxima).to_string(),
                format_percent(score.pillar_scores.percentage(pillar)),
            ]
        })
        .collect();

    let principle_rows = Principle::ordered()
        .into_iter()
        .map(|principle| {
            vec![
                principle.to_string(),
                Pillar::of(principle).label().to_string(),
                score
                    .topic(principle)
                    .map(|topic| topic.total.to_string())
                    .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
                principle_maximum(principle).to_string(),
            ]
        })
        .collect();

    vec![
        DocumentNode::heading(1, TITLE),
        DocumentNode::heading(2, "Pillar Scores"),
        DocumentNode::table(["Pillar", "Score", "Maximum", "Percentage"], pillar_rows),
        DocumentNode::heading(2, "Principle Scores"),
        DocumentNode::table(["Principle", "Pillar", "Score", "Maximum"], principle_rows),
        DocumentNode::key_value(
            "Total score",
            format!("{} / {}", score.total_score, score.max_score),
        ),
        DocumentNode::key_value("Overall percentage", format_percent(score.percentage)),
    ]
}
