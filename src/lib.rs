//! Form document model for BIDS dataset descriptions
//!
//! Holds the in-memory state behind a dataset-description form (fixed
//! scalar fields, repeatable entry lists, and the conditional derivative
//! sub-document), projects it into the `dataset_description.json`
//! mapping, and drives the save / save-as flow that writes the file.
//! Rendering is left entirely to the embedding application: widgets feed
//! edits into [`DatasetDescription`] and read current values back from it.

pub mod config;
pub mod dialog;
pub mod model;
pub mod save;

pub use config::AppConfig;
pub use dialog::NativeSavePrompt;
pub use model::{
    BidsVersion, DatasetDescription, DatasetType, Derivative, License, ListField, RepeatableList,
    TextField,
};
pub use save::{SaveError, SaveFlow, SaveOutcome, SavePrompt, SaveResult};
