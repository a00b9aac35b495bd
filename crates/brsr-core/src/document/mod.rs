//! Maps a record, its derived metrics and its score into ordered report
//! sections of renderer-agnostic nodes.
//!
//! Node order depends only on the fixed question catalogs, so an empty record
//! and a fully populated one produce the same headings and key-value labels.

mod catalog;
mod format;
mod node;
mod render;
mod summary;

pub use node::{Document, DocumentNode, DocumentSection};

use crate::metrics::{DerivedMetrics, NOT_APPLICABLE};
use crate::record::{DisclosureRecord, Principle};
use crate::scoring::{indicator_rules, principle_maximum, ComplianceScore, ScoreMaxima, TopicScore};
use catalog::{principle_groups, GENERAL_DISCLOSURES, MANAGEMENT_PROCESS};
use render::render_groups;
use serde_json::Value;
use tracing::debug;

pub const REPORT_TITLE: &str = "Business Responsibility and Sustainability Report";
pub const GENERAL_DISCLOSURES_KEY: &str = "general_disclosures";
pub const MANAGEMENT_PROCESS_KEY: &str = "management_process";
pub const SCORE_SUMMARY_KEY: &str = "score_summary";

const GENERAL_DISCLOSURES_PAGE: usize = 1;
const MANAGEMENT_PROCESS_PAGE: usize = 2;
const SCORE_SUMMARY_PAGE: usize = 12;

/// Page of a principle section: after sections A and B, in numeric order.
pub const fn principle_page(principle: Principle) -> usize {
    MANAGEMENT_PROCESS_PAGE + principle.number() as usize
}

#[derive(Debug, Clone, Default)]
pub struct DocumentCompiler {
    maxima: ScoreMaxima,
}

impl DocumentCompiler {
    pub fn new(maxima: ScoreMaxima) -> Self {
        Self { maxima }
    }

    pub fn compile_general_disclosures(
        &self,
        record: &DisclosureRecord,
        metrics: &DerivedMetrics,
    ) -> DocumentSection {
        let title = "Section A: General Disclosures";
        let mut nodes = vec![DocumentNode::heading(1, title)];
        render_groups(
            GENERAL_DISCLOSURES,
            record.general_disclosures(),
            metrics,
            &mut nodes,
        );
        section(
            GENERAL_DISCLOSURES_KEY,
            title,
            GENERAL_DISCLOSURES_PAGE,
            nodes,
        )
    }

    pub fn compile_management_process(
        &self,
        record: &DisclosureRecord,
        metrics: &DerivedMetrics,
    ) -> DocumentSection {
        let title = "Section B: Management and Process Disclosures";
        let mut nodes = vec![DocumentNode::heading(1, title)];
        render_groups(
            MANAGEMENT_PROCESS,
            record.management_process(),
            metrics,
            &mut nodes,
        );
        section(
            MANAGEMENT_PROCESS_KEY,
            title,
            MANAGEMENT_PROCESS_PAGE,
            nodes,
        )
    }

    /// One principle section: its questions, then the indicator breakdown and
    /// the principle total against its rubric ceiling.
    pub fn compile_section(
        &self,
        principle: Principle,
        block: &Value,
        metrics: &DerivedMetrics,
        topic_score: &TopicScore,
    ) -> DocumentSection {
        let title = format!("{principle}: {}", principle.label());
        let mut nodes = vec![
            DocumentNode::heading(1, title.as_str()),
            DocumentNode::paragraph(principle.statement()),
        ];
        render_groups(principle_groups(principle), block, metrics, &mut nodes);

        let indicator_rows = indicator_rules(principle)
            .iter()
            .map(|indicator| {
                let points = topic_score
                    .points_for(indicator.key)
                    .map(|points| points.to_string())
                    .unwrap_or_else(|| NOT_APPLICABLE.to_string());
                vec![indicator.key.to_string(), points]
            })
            .collect();

        nodes.push(DocumentNode::heading(2, "Indicator Scores"));
        nodes.push(DocumentNode::table(["Indicator", "Points"], indicator_rows));
        nodes.push(DocumentNode::key_value(
            "Principle score",
            format!("{} / {}", topic_score.total, principle_maximum(principle)),
        ));

        section(principle.key(), title, principle_page(principle), nodes)
    }

    pub fn compile_score_summary(&self, score: &ComplianceScore) -> DocumentSection {
        section(
            SCORE_SUMMARY_KEY,
            summary::TITLE,
            SCORE_SUMMARY_PAGE,
            summary::summary_nodes(score, &self.maxima),
        )
    }

    /// Full document: sections A and B, the nine principles, then the score
    /// summary.
    pub fn compile_document(
        &self,
        record: &DisclosureRecord,
        metrics: &DerivedMetrics,
        score: &ComplianceScore,
    ) -> Document {
        let unscored = TopicScore::default();
        let mut sections = Vec::with_capacity(SCORE_SUMMARY_PAGE);
        sections.push(self.compile_general_disclosures(record, metrics));
        sections.push(self.compile_management_process(record, metrics));
        for principle in Principle::ordered() {
            let topic_score = score.topic(principle).unwrap_or(&unscored);
            sections.push(self.compile_section(
                principle,
                record.principle(principle),
                metrics,
                topic_score,
            ));
        }
        sections.push(self.compile_score_summary(score));

        Document {
            title: REPORT_TITLE.to_string(),
            company_name: record.company_name().map(str::to_string),
            financial_year: record.financial_year().map(str::to_string),
            sections,
        }
    }
}

pub fn compile_section(
    principle: Principle,
    block: &Value,
    metrics: &DerivedMetrics,
    topic_score: &TopicScore,
) -> DocumentSection {
    DocumentCompiler::default().compile_section(principle, block, metrics, topic_score)
}

pub fn compile_document(
    record: &DisclosureRecord,
    metrics: &DerivedMetrics,
    score: &ComplianceScore,
) -> Document {
    DocumentCompiler::default().compile_document(record, metrics, score)
}

fn section(
    key: &str,
    title: impl Into<String>,
    page: usize,
    nodes: Vec<DocumentNode>,
) -> DocumentSection {
    debug!(
        section = key,
        page,
        nodes = nodes.len(),
        "compiled document section"
    );
    DocumentSection {
        key: key.to_string(),
        title: title.into(),
        page,
        nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_derived_metrics;
    use crate::scoring::ScoringEngine;
    use serde_json::json;

    fn ethics_section(block: Value) -> DocumentSection {
        let record = DisclosureRecord::from_value(json!({ "principle_1": block.clone() }))
            .expect("object record");
        let metrics = compute_derived_metrics(&record);
        let topic = ScoringEngine::default().score_topic(Principle::EthicsTransparency, &block);
        compile_section(Principle::EthicsTransparency, &block, &metrics, &topic)
    }

    #[test]
    fn section_opens_with_title_and_closes_with_score() {
        let section = ethics_section(json!({
            "essential_indicators": { "anti_corruption_policy": { "has_policy": false } }
        }));

        assert_eq!(section.key, "principle_1");
        assert_eq!(section.page, 3);
        let title = "Principle 1: Ethics, Transparency & Accountability";
        let heading = DocumentNode::heading(1, title);
        assert_eq!(section.nodes.first(), Some(&heading));
        assert_eq!(section.value_of("Principle score"), Some("-10 / 500"));
        assert_eq!(
            section.value_of("Anti-Corruption or Anti-Bribery Policy in Place"),
            Some("No")
        );
        match section.table_under("Training and Awareness Programmes by Segment") {
            Some(DocumentNode::Paragraph { text }) => {
                assert_eq!(text, "No training data available.")
            }
            other => panic!("expected fallback paragraph, got {other:?}"),
        }
    }

    #[test]
    fn indicator_table_lists_every_rubric_indicator() {
        let section = ethics_section(json!({}));
        let table = section
            .nodes
            .iter()
            .rev()
            .find(|node| matches!(node, DocumentNode::Table { .. }))
            .expect("indicator table");

        match table {
            DocumentNode::Table { headers, rows } => {
                let rules = indicator_rules(Principle::EthicsTransparency);
                assert_eq!(headers, &["Indicator", "Points"]);
                assert_eq!(rows.len(), rules.len());
                assert_eq!(rows[0], ["anti_corruption_policy", "-10"]);
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn principle_pages_follow_numeric_order() {
        let pages = Principle::ordered().map(principle_page);
        assert_eq!(pages, [3, 4, 5, 6, 7, 8, 9, 10, 11]);

        let last_principle = principle_page(Principle::ConsumerValue);
        assert_eq!(SCORE_SUMMARY_PAGE, last_principle + 1);
    }
}
