use super::catalog::{Column, QuestionGroup, QuestionSpec, Render};
use super::format::{format_number, render_value, Format};
use super::node::DocumentNode;
use crate::metrics::{DerivedMetrics, HeadcountTotals, NOT_APPLICABLE};
use crate::record::{resolve, Principle};
use serde_json::Value;
use std::iter;

const HEADCOUNT_HEADERS: [&str; 5] = ["Category", "Male", "Female", "Total", "% Female"];

/// Appends every group of questions resolved against `block`.
pub(crate) fn render_groups(
    groups: &[QuestionGroup],
    block: &Value,
    metrics: &DerivedMetrics,
    nodes: &mut Vec<DocumentNode>,
) {
    for group in groups {
        nodes.push(DocumentNode::heading(2, group.title));
        for question in group.questions {
            render_question(question, block, metrics, nodes);
        }
    }
}

fn render_question(
    question: &QuestionSpec,
    block: &Value,
    metrics: &DerivedMetrics,
    nodes: &mut Vec<DocumentNode>,
) {
    let value = resolve(block, question.paths);
    let fallback = || question.fallback.to_string();

    match question.render {
        Render::Field(format) => {
            nodes.push(DocumentNode::key_value(
                question.label,
                render_value(value, format).unwrap_or_else(fallback),
            ));
        }
        Render::Metric(metric) => {
            let derived = metric.derived(metrics);
            let shown = if derived == NOT_APPLICABLE {
                render_value(value, metric.disclosed_format())
            } else {
                Some(derived.to_string())
            };
            nodes.push(DocumentNode::key_value(question.label, shown.unwrap_or_else(fallback)));
        }
        Render::List(columns) => {
            nodes.push(DocumentNode::heading(3, question.label));
            let rows = list_rows(value, columns);
            if rows.is_empty() {
                nodes.push(DocumentNode::paragraph(question.fallback));
            } else {
                nodes.push(DocumentNode::table(headers(columns), rows));
            }
        }
        Render::Headcount(headcount) => {
            nodes.push(DocumentNode::heading(3, question.label));
            nodes.push(headcount_table(headcount.totals(metrics)));
        }
        Render::PrincipleMatrix(columns) => {
            nodes.push(DocumentNode::heading(3, question.label));
            nodes.push(principle_matrix(value, columns));
        }
    }
}

fn headers(columns: &[Column]) -> Vec<&'static str> {
    columns.iter().map(|column| column.header).collect()
}

fn cell(value: Option<&Value>, format: Format) -> String {
    render_value(value, format).unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

fn list_rows(value: Option<&Value>, columns: &[Column]) -> Vec<Vec<String>> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| !item.is_null())
        .map(|item| match item {
            Value::Object(_) => columns
                .iter()
                .map(|column| cell(resolve(item, column.paths), column.format))
                .collect::<Vec<String>>(),
            // A bare scalar fills the first column only.
            scalar => columns
                .iter()
                .enumerate()
                .map(|(index, column)| {
                    if index == 0 {
                        cell(Some(scalar), column.format)
                    } else {
                        NOT_APPLICABLE.to_string()
                    }
                })
                .collect::<Vec<String>>(),
        })
        .collect()
}

fn headcount_table(totals: &HeadcountTotals) -> DocumentNode {
    let share = &totals.women_percentage;
    let rows = vec![
        vec![
            "Permanent".to_string(),
            format_number(totals.permanent_male),
            format_number(totals.permanent_female),
            format_number(totals.permanent_total),
            share.permanent.clone(),
        ],
        vec![
            "Other than Permanent".to_string(),
            format_number(totals.other_male),
            format_number(totals.other_female),
            format_number(totals.other_total),
            share.other.clone(),
        ],
        vec![
            "Total".to_string(),
            format_number(totals.total_male),
            format_number(totals.total_female),
            format_number(totals.grand_total),
            share.total.clone(),
        ],
    ];

    DocumentNode::table(HEADCOUNT_HEADERS, rows)
}

fn principle_matrix(matrix: Option<&Value>, columns: &[Column]) -> DocumentNode {
    let rows = Principle::ordered()
        .into_iter()
        .map(|principle| {
            let entry = matrix.and_then(|matrix| resolve(matrix, principle.aliases()));
            let cells = columns.iter().map(|column| {
                let value = entry.and_then(|entry| resolve(entry, column.paths));
                cell(value, column.format)
            });
            iter::once(format!("P{}", principle.number()))
                .chain(cells)
                .collect::<Vec<String>>()
        })
        .collect();

    DocumentNode::table(iter::once("Principle").chain(headers(columns)), rows)
}
