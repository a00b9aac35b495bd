use crate::document::{Document, DocumentCompiler};
use crate::metrics::{DerivedMetrics, DerivedMetricsCalculator, MetricsConfig};
use crate::record::DisclosureRecord;
use crate::scoring::{ComplianceScore, ScoringConfig, ScoringEngine};
use serde::Serialize;
use tracing::info;

/// Everything derived from one record in a single pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportArtifacts {
    pub metrics: DerivedMetrics,
    pub score: ComplianceScore,
    pub document: Document,
}

/// Runs metrics, scoring and document compilation in that order.
#[derive(Debug, Clone, Default)]
pub struct ReportPipeline {
    calculator: DerivedMetricsCalculator,
    engine: ScoringEngine,
    compiler: DocumentCompiler,
}

impl ReportPipeline {
    pub fn new(metrics: MetricsConfig, scoring: ScoringConfig) -> Self {
        Self {
            calculator: DerivedMetricsCalculator::new(metrics),
            engine: ScoringEngine::new(scoring),
            compiler: DocumentCompiler::new(scoring.maxima),
        }
    }

    pub fn metrics(&self, record: &DisclosureRecord) -> DerivedMetrics {
        self.calculator.compute(record)
    }

    pub fn score(&self, record: &DisclosureRecord) -> ComplianceScore {
        let metrics = self.calculator.compute(record);
        self.engine.score_record_with(record, &metrics)
    }

    pub fn run(&self, record: &DisclosureRecord) -> ReportArtifacts {
        let metrics = self.calculator.compute(record);
        let score = self.engine.score_record_with(record, &metrics);
        let document = self.compiler.compile_document(record, &metrics, &score);

        info!(
            company = record.company_name().unwrap_or("unnamed"),
            total_score = score.total_score,
            max_score = score.max_score,
            percentage = score.percentage,
            sections = document.sections.len(),
            "compiled disclosure report"
        );

        ReportArtifacts {
            metrics,
            score,
            document,
        }
    }
}
