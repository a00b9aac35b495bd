use brsr_core::document::{compile_document, Document, DocumentNode, DocumentSection};
use brsr_core::metrics::compute_derived_metrics;
use brsr_core::record::{DisclosureRecord, Principle};
use brsr_core::scoring::{apply_rule, indicator_rules, score_record};
use brsr_core::ReportPipeline;
use serde_json::{json, Value};

fn sample_record() -> DisclosureRecord {
    let data = include_bytes!("fixtures/sample_disclosure.json");
    DisclosureRecord::from_reader(&data[..]).expect("sample disclosure parses")
}

fn compile(record: &DisclosureRecord) -> Document {
    let metrics = compute_derived_metrics(record);
    let score = score_record(record);
    compile_document(record, &metrics, &score)
}

fn compile_value(value: Value) -> Document {
    compile(&DisclosureRecord::from_value(value).expect("object record"))
}

fn section<'a>(document: &'a Document, key: &str) -> &'a DocumentSection {
    document
        .section(key)
        .unwrap_or_else(|| panic!("section {key} missing"))
}

fn table_rows<'a>(section: &'a DocumentSection, label: &str) -> &'a [Vec<String>] {
    match section.table_under(label) {
        Some(DocumentNode::Table { rows, .. }) => rows,
        other => panic!("expected table under {label}, got {other:?}"),
    }
}

fn structure(section: &DocumentSection) -> Vec<String> {
    section
        .nodes
        .iter()
        .filter_map(|node| match node {
            DocumentNode::Heading { level, text } => Some(format!("h{level}:{text}")),
            DocumentNode::KeyValue { label, .. } => Some(format!("kv:{label}")),
            DocumentNode::Table { .. } | DocumentNode::Paragraph { .. } => None,
        })
        .collect()
}

#[test]
fn sections_follow_fixed_order_and_pagination() {
    let document = compile(&sample_record());

    let keys: Vec<&str> = document
        .sections
        .iter()
        .map(|section| section.key.as_str())
        .collect();
    let mut expected = vec!["general_disclosures", "management_process"];
    expected.extend(Principle::ordered().into_iter().map(Principle::key));
    expected.push("score_summary");
    assert_eq!(keys, expected);

    let pages: Vec<usize> = document
        .sections
        .iter()
        .map(|section| section.page)
        .collect();
    assert_eq!(pages, (1..=12).collect::<Vec<_>>());
    assert_eq!(
        document.company_name.as_deref(),
        Some("Greenfield Industries Limited")
    );
    assert_eq!(document.financial_year.as_deref(), Some("2023-24"));
}

#[test]
fn empty_and_populated_records_share_structure() {
    let populated = compile(&sample_record());
    let empty = compile_value(json!({}));

    assert_eq!(populated.sections.len(), empty.sections.len());
    for (full, bare) in populated.sections.iter().zip(&empty.sections) {
        assert_eq!(structure(full), structure(bare), "section {}", full.key);
        assert_eq!(full.key_values().count(), bare.key_values().count());
    }
}

#[test]
fn tables_are_never_empty() {
    for document in [compile(&sample_record()), compile_value(json!({}))] {
        for section in &document.sections {
            for node in &section.nodes {
                if let DocumentNode::Table { headers, rows } = node {
                    assert!(!rows.is_empty(), "empty table in {}", section.key);
                    assert!(rows.iter().all(|row| row.len() == headers.len()));
                }
            }
        }
    }
}

#[test]
fn absent_values_render_fallbacks() {
    let document = compile_value(json!({}));

    let general = section(&document, "general_disclosures");
    assert_eq!(general.value_of("Name of the Listed Entity"), Some("N/A"));

    let environment = section(&document, "principle_6");
    assert_eq!(
        environment.table_under("Air Emissions (Other than GHG Emissions)"),
        Some(&DocumentNode::paragraph("No air emissions data available."))
    );
    assert_eq!(
        environment.value_of("Renewable Share of Energy Consumption"),
        Some("N/A")
    );
    assert_eq!(document.company_name, None);
}

#[test]
fn booleans_render_as_yes_or_no() {
    let document = compile(&sample_record());

    let ethics = section(&document, "principle_1");
    assert_eq!(
        ethics.value_of("Anti-Corruption or Anti-Bribery Policy in Place"),
        Some("Yes")
    );

    let wellbeing = section(&document, "principle_3");
    assert_eq!(
        wellbeing.value_of("Premises Accessible to Differently Abled Employees and Workers"),
        Some("No")
    );

    let stakeholders = section(&document, "principle_4");
    let rows = table_rows(stakeholders, "Key Stakeholder Groups");
    assert_eq!(rows[0][1], "No");
    assert_eq!(rows[1][1], "Yes");
}

#[test]
fn derived_metrics_take_precedence_over_reported_figures() {
    let document = compile(&sample_record());

    let environment = section(&document, "principle_6");
    assert_eq!(
        environment.value_of("Renewable Share of Energy Consumption"),
        Some("24.00%")
    );
    assert_eq!(
        environment.value_of("Energy Intensity per Rupee of Turnover"),
        Some("0.0001 GJ per rupee of turnover")
    );
    assert_eq!(
        environment.value_of("Total Water Consumption (KL)"),
        Some("25000")
    );

    let general = section(&document, "general_disclosures");
    assert_eq!(
        general.value_of("Women on the Board of Directors"),
        Some("30.00%")
    );
}

#[test]
fn reported_figure_is_shown_when_metric_is_not_applicable() {
    let document = compile_value(json!({
        "principle_6": {
            "essential_indicators": { "energy_consumption": { "renewable_percentage": "30%" } }
        }
    }));

    let environment = section(&document, "principle_6");
    assert_eq!(
        environment.value_of("Renewable Share of Energy Consumption"),
        Some("30%")
    );
}

fn renewable_share_shown_and_scored(
    turnover: Option<u32>,
    reported: Option<&str>,
) -> (String, i32) {
    let mut energy = json!({ "renewable_energy": 300, "non_renewable_energy": 700 });
    if let Some(reported) = reported {
        energy["renewable_percentage"] = json!(reported);
    }
    let mut value = json!({
        "principle_6": { "essential_indicators": { "energy_consumption": energy } }
    });
    if let Some(turnover) = turnover {
        value["general_disclosures"] = json!({ "sa_business_details": { "turnover": turnover } });
    }
    let record = DisclosureRecord::from_value(value).expect("object record");

    let artifacts = ReportPipeline::default().run(&record);
    let shown = section(&artifacts.document, "principle_6")
        .value_of("Renewable Share of Energy Consumption")
        .expect("renewable share row")
        .to_string();
    let points = artifacts
        .score
        .topic(Principle::Environment)
        .and_then(|topic| topic.points_for("renewable_energy_share"))
        .expect("renewable share scored");

    (shown, points)
}

fn points_for_displayed_share(shown: &str) -> i32 {
    let rule = indicator_rules(Principle::Environment)
        .iter()
        .find(|indicator| indicator.key == "renewable_energy_share")
        .expect("renewable share rule");
    apply_rule(Some(&Value::from(shown)), &rule.rule)
}

#[test]
fn renewable_share_cell_matches_scored_value_with_turnover() {
    let (shown, points) = renewable_share_shown_and_scored(Some(10_000), Some("60%"));

    assert_eq!(shown, "30.00%");
    assert_eq!(points, 200);
    assert_eq!(points_for_displayed_share(&shown), points);
}

#[test]
fn renewable_share_cell_matches_scored_value_without_turnover() {
    let (shown, points) = renewable_share_shown_and_scored(None, Some("60%"));

    assert_eq!(shown, "60%");
    assert_eq!(points, 300);
    assert_eq!(points_for_displayed_share(&shown), points);
}

#[test]
fn unreported_share_without_turnover_is_neither_shown_nor_scored() {
    let (shown, points) = renewable_share_shown_and_scored(None, None);

    assert_eq!(shown, "N/A");
    assert_eq!(points, 0);
    assert_eq!(points_for_displayed_share(&shown), points);
}

#[test]
fn headcount_tables_come_from_derived_metrics() {
    let document = compile(&sample_record());
    let general = section(&document, "general_disclosures");

    let employees = table_rows(general, "Employees");
    assert_eq!(
        employees[0],
        vec!["Permanent", "1502", "86", "1588", "5.42%"]
    );
    assert_eq!(
        employees[1],
        vec!["Other than Permanent", "0", "0", "0", "N/A"]
    );
    assert_eq!(employees[2], vec!["Total", "1502", "86", "1588", "5.42%"]);

    let workers = table_rows(general, "Workers");
    assert_eq!(workers[2], vec!["Total", "840", "160", "1000", "16.00%"]);
}

#[test]
fn policy_matrix_has_a_row_per_principle() {
    let document = compile(&sample_record());
    let management = section(&document, "management_process");

    let rows = table_rows(management, "Policy and Management Processes");
    assert_eq!(rows.len(), 9);
    assert_eq!(
        &rows[0][..4],
        ["P1", "Yes", "Yes", "https://greenfield.example/policies/ethics"]
    );
    assert_eq!(&rows[5][..3], ["P6", "Yes", "No"]);
    assert!(rows[1][1..].iter().all(|cell| cell == "N/A"));
}

#[test]
fn list_rows_render_numbers_and_percentages() {
    let document = compile(&sample_record());
    let ethics = section(&document, "principle_1");

    let rows = table_rows(ethics, "Training and Awareness Programmes by Segment");
    assert_eq!(
        rows[0],
        vec!["Board of Directors", "2", "Code of conduct", "100%"]
    );
    assert_eq!(rows[1], vec!["Employees", "14", "Ethics, POSH", "88.5%"]);
    assert_eq!(ethics.value_of("Principle score"), Some("500 / 500"));
}

#[test]
fn canonical_topic_key_wins_in_document() {
    let document = compile_value(json!({
        "principle_1": {
            "essential_indicators": { "anti_corruption_policy": { "has_policy": true } }
        },
        "sc_p1_ethical_conduct": {
            "essential_indicators": { "anti_corruption_policy": { "has_policy": false } }
        }
    }));

    let ethics = section(&document, "principle_1");
    assert_eq!(
        ethics.value_of("Anti-Corruption or Anti-Bribery Policy in Place"),
        Some("Yes")
    );
    assert_eq!(ethics.value_of("Principle score"), Some("100 / 500"));
}

#[test]
fn score_summary_reports_overall_totals() {
    let document = compile(&sample_record());
    let summary = section(&document, "score_summary");

    assert_eq!(summary.value_of("Total score"), Some("5235 / 6900"));
    assert_eq!(summary.value_of("Overall percentage"), Some("75.87%"));
    match &summary.nodes[2] {
        DocumentNode::Table { rows, .. } => {
            assert_eq!(rows[0], vec!["Environmental", "1750", "2600", "67.31%"]);
            assert_eq!(rows[2], vec!["Governance", "1250", "1500", "83.33%"]);
        }
        other => panic!("expected pillar table, got {other:?}"),
    }
}

#[test]
fn nodes_serialize_with_kind_tag() {
    let document = compile_value(json!({}));
    let value = serde_json::to_value(&document).expect("document serializes");

    let first = &value["sections"][0]["nodes"][0];
    assert_eq!(first["kind"], json!("heading"));
    assert_eq!(first["level"], json!(1));
    assert_eq!(value["sections"][11]["key"], json!("score_summary"));
    assert!(value.get("company_name").is_none());
}
