use super::{ComplianceScore, Pillar};
use serde::Serialize;
use std::io::Write;

/// One indicator of a score, flattened for tabular export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRow {
    pub principle: u8,
    pub pillar: &'static str,
    pub indicator: &'static str,
    pub points: i32,
}

/// Indicator rows in principle order, then rubric order.
pub fn score_rows(score: &ComplianceScore) -> Vec<ScoreRow> {
    score
        .topic_scores
        .iter()
        .flat_map(|(principle, topic)| {
            let pillar = Pillar::of(*principle).label();
            let indicators = &topic.indicator_scores;
            indicators.iter().map(move |indicator| ScoreRow {
                principle: principle.number(),
                pillar,
                indicator: indicator.key,
                points: indicator.points,
            })
        })
        .collect()
}

/// Write `score` as CSV with a `principle,pillar,indicator,points` header.
pub fn write_csv<W: Write>(score: &ComplianceScore, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in score_rows(score) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
