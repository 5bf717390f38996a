//! The form document model: field vocabulary, repeatable lists, and the
//! dataset description document itself

pub mod derivative;
pub mod description;
pub mod fields;
pub mod repeatable;

pub use derivative::Derivative;
pub use description::DatasetDescription;
pub use fields::{BidsVersion, DatasetType, License, ListField, TextField};
pub use repeatable::RepeatableList;
