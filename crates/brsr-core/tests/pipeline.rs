use brsr_core::document::compile_document;
use brsr_core::metrics::{compute_derived_metrics, MetricsConfig};
use brsr_core::record::DisclosureRecord;
use brsr_core::scoring::{score_record, ScoringConfig};
use brsr_core::ReportPipeline;
use serde_json::json;

fn sample_record() -> DisclosureRecord {
    let data = include_bytes!("fixtures/sample_disclosure.json");
    DisclosureRecord::from_reader(&data[..]).expect("sample disclosure parses")
}

#[test]
fn pipeline_matches_individual_components() {
    let record = sample_record();
    let artifacts = ReportPipeline::default().run(&record);

    let metrics = compute_derived_metrics(&record);
    let score = score_record(&record);
    assert_eq!(artifacts.metrics, metrics);
    assert_eq!(artifacts.score, score);
    assert_eq!(
        artifacts.document,
        compile_document(&record, &metrics, &score)
    );
}

#[test]
fn pipeline_is_deterministic_and_leaves_record_untouched() {
    let record = sample_record();
    let before = record.clone();
    let pipeline = ReportPipeline::new(MetricsConfig::default(), ScoringConfig::default());

    let first = pipeline.run(&record);
    let second = pipeline.run(&record);

    assert_eq!(first, second);
    assert_eq!(record, before);
}

#[test]
fn artifacts_serialize_for_renderers() {
    let artifacts = ReportPipeline::default().run(&sample_record());
    let value = serde_json::to_value(&artifacts).expect("artifacts serialize");

    assert_eq!(value["score"]["maxScore"], json!(6900));
    assert_eq!(value["score"]["totalScore"], json!(5235));
    assert_eq!(value["metrics"]["employees"]["grand_total"], json!(1588.0));
    assert_eq!(
        value["document"]["sections"].as_array().map(Vec::len),
        Some(12)
    );
}

#[test]
fn non_object_records_are_rejected_at_the_boundary() {
    let err = DisclosureRecord::from_json_str("[1, 2, 3]").expect_err("arrays rejected");
    assert!(err.to_string().contains("JSON object"));

    let err = DisclosureRecord::from_json_str("{ not json").expect_err("malformed json rejected");
    assert!(err.to_string().starts_with("invalid disclosure JSON"));
}
