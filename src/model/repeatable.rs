//! Ordered entry lists backing the repeatable form sections

/// An ordered list of free-text entries that grows and shrinks one entry
/// at a time, mirroring the form's `+` / `-` buttons.
///
/// Entries are appended empty and edited in place; only the last entry can
/// be removed. Entries the user never filled in stay as empty strings and
/// still serialize.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepeatableList {
    entries: Vec<String>,
}

impl RepeatableList {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an empty entry and return its index
    pub fn append(&mut self) -> usize {
        self.entries.push(String::new());
        self.entries.len() - 1
    }

    /// Remove the last entry; removing from an empty list is a no-op
    pub fn remove_last(&mut self) {
        self.entries.pop();
    }

    /// Replace the text of an existing entry; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, value: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(index) {
            *entry = value.into();
        }
    }

    /// Get an entry's current text
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current entries in append order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Iterate over the entries in append order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
