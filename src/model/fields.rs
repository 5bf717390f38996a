//! Field vocabulary for the dataset description form
//!
//! Naming follows the official BIDS specification (v1.4.0).

use std::fmt;

/// Free-text scalar fields the UI boundary can address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Acknowledgements,
    HowToAcknowledge,
    DatasetDoi,
}

/// Repeatable list sections the UI boundary can address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Authors,
    Funding,
    EthicsApprovals,
    ReferencesAndLinks,
}

/// Dataset type choice; the derivative variant gates the derivative
/// sub-document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatasetType {
    #[default]
    Unspecified,
    Raw,
    Derivative,
}

impl DatasetType {
    /// Choices in the order the form offers them
    pub const ALL: [DatasetType; 3] = [
        DatasetType::Unspecified,
        DatasetType::Raw,
        DatasetType::Derivative,
    ];

    /// Label used in the serialized document
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetType::Unspecified => "unspecified",
            DatasetType::Raw => "raw",
            DatasetType::Derivative => "derivative",
        }
    }
}

impl fmt::Display for DatasetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dataset license choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum License {
    #[default]
    Unspecified,
    Pd,
    Pddl,
    Cc0,
}

impl License {
    /// Choices in the order the form offers them
    pub const ALL: [License; 4] = [
        License::Unspecified,
        License::Pd,
        License::Pddl,
        License::Cc0,
    ];

    /// Label used in the serialized document
    pub fn as_str(&self) -> &'static str {
        match self {
            License::Unspecified => "unspecified",
            License::Pd => "PD",
            License::Pddl => "PDDL",
            License::Cc0 => "CC0",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported BIDS specification versions.
///
/// Single-valued for now; the form shows it as a fixed choice until more
/// versions are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BidsVersion {
    #[default]
    V1_4_0,
}

impl BidsVersion {
    /// Supported versions in release order
    pub const ALL: [BidsVersion; 1] = [BidsVersion::V1_4_0];

    /// Version string used in the serialized document
    pub fn as_str(&self) -> &'static str {
        match self {
            BidsVersion::V1_4_0 => "1.4.0",
        }
    }
}

impl fmt::Display for BidsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
