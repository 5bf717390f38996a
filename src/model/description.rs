//! The dataset description document and its JSON projection

use serde_json::{Map, Value};

use super::derivative::Derivative;
use super::fields::{BidsVersion, DatasetType, License, ListField, TextField};
use super::repeatable::RepeatableList;

/// In-memory state of the dataset description form.
///
/// One instance is created empty at session start and mutated in place by
/// field edits and list add/remove operations.
/// [`to_document`](Self::to_document) projects the current state into the
/// mapping that gets written to disk; saving does not clear the state.
#[derive(Debug, Clone, Default)]
pub struct DatasetDescription {
    name: String,
    bids_version: BidsVersion,
    dataset_type: DatasetType,
    license: License,
    authors: RepeatableList,
    acknowledgements: String,
    how_to_acknowledge: String,
    funding: RepeatableList,
    ethics_approvals: RepeatableList,
    references_and_links: RepeatableList,
    dataset_doi: String,
    derivative: Option<Derivative>,
}

impl DatasetDescription {
    /// Create an empty description
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a free-text scalar field
    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TextField::Name => self.name = value,
            TextField::Acknowledgements => self.acknowledgements = value,
            TextField::HowToAcknowledge => self.how_to_acknowledge = value,
            TextField::DatasetDoi => self.dataset_doi = value,
        }
    }

    /// Current text of a scalar field
    pub fn field(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Acknowledgements => &self.acknowledgements,
            TextField::HowToAcknowledge => &self.how_to_acknowledge,
            TextField::DatasetDoi => &self.dataset_doi,
        }
    }

    /// Select the dataset license
    pub fn set_license(&mut self, license: License) {
        self.license = license;
    }

    /// Currently selected license
    pub fn license(&self) -> License {
        self.license
    }

    /// BIDS specification version the document declares
    pub fn bids_version(&self) -> BidsVersion {
        self.bids_version
    }

    /// Currently selected dataset type
    pub fn dataset_type(&self) -> DatasetType {
        self.dataset_type
    }

    /// Select the dataset type, creating or discarding the derivative
    /// sub-document as a side effect.
    ///
    /// Switching to derivative constructs a fresh empty sub-document only
    /// if none is present; switching to any other value discards the
    /// sub-document along with its edits (no undo).
    pub fn set_dataset_type(&mut self, dataset_type: DatasetType) {
        self.dataset_type = dataset_type;
        if dataset_type == DatasetType::Derivative {
            if self.derivative.is_none() {
                self.derivative = Some(Derivative::new());
            }
        } else {
            self.derivative = None;
        }
    }

    /// The derivative sub-document, while the dataset type is derivative
    pub fn derivative(&self) -> Option<&Derivative> {
        self.derivative.as_ref()
    }

    /// Mutable access to the derivative sub-document
    pub fn derivative_mut(&mut self) -> Option<&mut Derivative> {
        self.derivative.as_mut()
    }

    /// One of the four repeatable sections
    pub fn list(&self, field: ListField) -> &RepeatableList {
        match field {
            ListField::Authors => &self.authors,
            ListField::Funding => &self.funding,
            ListField::EthicsApprovals => &self.ethics_approvals,
            ListField::ReferencesAndLinks => &self.references_and_links,
        }
    }

    /// Mutable access to one of the repeatable sections
    pub fn list_mut(&mut self, field: ListField) -> &mut RepeatableList {
        match field {
            ListField::Authors => &mut self.authors,
            ListField::Funding => &mut self.funding,
            ListField::EthicsApprovals => &mut self.ethics_approvals,
            ListField::ReferencesAndLinks => &mut self.references_and_links,
        }
    }

    /// Append an empty entry to a repeatable section, returning its index
    pub fn append_to_list(&mut self, field: ListField) -> usize {
        self.list_mut(field).append()
    }

    /// Remove the last entry of a repeatable section; no-op when empty
    pub fn remove_last(&mut self, field: ListField) {
        self.list_mut(field).remove_last();
    }

    /// Replace the text of an existing entry in a repeatable section
    pub fn set_entry(&mut self, field: ListField, index: usize, value: impl Into<String>) {
        self.list_mut(field).set(index, value);
    }

    /// Project the current state into the serialized key/value mapping.
    ///
    /// Keys appear in the fixed order the output file uses. While a
    /// derivative sub-document exists, its keys merge flat at the end.
    pub fn to_document(&self) -> Map<String, Value> {
        let mut doc = Map::new();
        doc.insert("Name".to_string(), Value::String(self.name.clone()));
        doc.insert(
            "BIDSVersion".to_string(),
            Value::String(self.bids_version.as_str().to_string()),
        );
        doc.insert(
            "DatasetType".to_string(),
            Value::String(self.dataset_type.as_str().to_string()),
        );
        doc.insert(
            "License".to_string(),
            Value::String(self.license.as_str().to_string()),
        );
        doc.insert("Authors".to_string(), entries_value(&self.authors));
        doc.insert(
            "Acknowledgements".to_string(),
            Value::String(self.acknowledgements.clone()),
        );
        doc.insert(
            "HowToAcknowledge".to_string(),
            Value::String(self.how_to_acknowledge.clone()),
        );
        doc.insert("Funding".to_string(), entries_value(&self.funding));
        doc.insert(
            "EthicsApprovals".to_string(),
            entries_value(&self.ethics_approvals),
        );
        doc.insert(
            "ReferencesAndLinks".to_string(),
            entries_value(&self.references_and_links),
        );
        doc.insert(
            "DatasetDOI".to_string(),
            Value::String(self.dataset_doi.clone()),
        );

        if let Some(derivative) = &self.derivative {
            doc.extend(derivative.to_document());
        }

        doc
    }
}

/// Serialize a repeatable section as an ordered array of strings
fn entries_value(list: &RepeatableList) -> Value {
    Value::Array(
        list.iter()
            .map(|entry| Value::String(entry.to_string()))
            .collect(),
    )
}
