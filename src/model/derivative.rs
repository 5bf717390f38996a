//! Derivative-specific provenance fields

use serde_json::{json, Map, Value};

use super::repeatable::RepeatableList;

/// Sub-document describing how a derivative dataset was produced.
///
/// Exists exactly while the dataset type is set to derivative; switching
/// away discards it. Its keys merge flat into the top-level document on
/// serialization, never nested under a `Derivative` key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Derivative {
    /// URL of the source dataset
    pub source_url: String,
    /// DOI of the source dataset
    pub source_doi: String,
    /// Version of the source dataset
    pub source_version: String,
    /// Pipelines or tools that generated the dataset, in entry order
    pub generated_by: RepeatableList,
}

impl Derivative {
    /// Create an empty derivative sub-document
    pub fn new() -> Self {
        Self::default()
    }

    /// Project the derivative fields into their serialized key/value pairs
    pub fn to_document(&self) -> Map<String, Value> {
        let generated_by: Vec<Value> = self
            .generated_by
            .iter()
            .map(|name| json!({ "Name": name }))
            .collect();

        let mut doc = Map::new();
        doc.insert("GeneratedBy".to_string(), Value::Array(generated_by));
        doc.insert(
            "SourceDatasets".to_string(),
            json!([{
                "URL": self.source_url,
                "DOI": self.source_doi,
                "Version": self.source_version,
            }]),
        );
        doc
    }
}
