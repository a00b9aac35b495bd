use serde::Serialize;

/// Renderer-agnostic unit of report content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentNode {
    Heading { level: u8, text: String },
    KeyValue { label: String, value: String },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Paragraph { text: String },
}

impl DocumentNode {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn key_value(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::KeyValue {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn table<H: Into<String>>(
        headers: impl IntoIterator<Item = H>,
        rows: Vec<Vec<String>>,
    ) -> Self {
        Self::Table {
            headers: headers.into_iter().map(Into::into).collect(),
            rows,
        }
    }

    pub const fn is_key_value(&self) -> bool {
        matches!(self, Self::KeyValue { .. })
    }
}

/// One page-group of the report. `page` is the 1-based section position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSection {
    pub key: String,
    pub title: String,
    pub page: usize,
    pub nodes: Vec<DocumentNode>,
}

impl DocumentSection {
    /// Value of the first key-value node with `label`.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.key_values()
            .find(|(found, _)| *found == label)
            .map(|(_, value)| value)
    }

    pub fn key_values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes.iter().filter_map(|node| match node {
            DocumentNode::KeyValue { label, value } => Some((label.as_str(), value.as_str())),
            _ => None,
        })
    }

    /// Table emitted directly after the level-3 heading `label`.
    pub fn table_under(&self, label: &str) -> Option<&DocumentNode> {
        self.nodes
            .windows(2)
            .find(|pair| {
                matches!(&pair[0], DocumentNode::Heading { level: 3, text } if text == label)
            })
            .map(|pair| &pair[1])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_year: Option<String>,
    pub sections: Vec<DocumentSection>,
}

impl Document {
    pub fn section(&self, key: &str) -> Option<&DocumentSection> {
        self.sections.iter().find(|section| section.key == key)
    }
}
