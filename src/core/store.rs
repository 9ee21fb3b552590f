//! # Contact Store
//!
//! The ordered in-memory collection. Order is insertion order; removing a
//! record closes the gap, so every later record's index drops by one.
//! Index access is checked and reports [`StoreError::OutOfRange`] so callers
//! can decide whether to surface or ignore a bad selection.

use thiserror::Error;

use crate::core::record::Contact;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("index {index} out of range for {len} records")]
    OutOfRange { index: usize, len: usize },
}

/// A search match: the record's current index and its summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub index: usize,
    pub summary: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactStore {
    records: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Contact>) -> Self {
        Self { records }
    }

    pub fn add(&mut self, record: Contact) {
        self.records.push(record);
    }

    pub fn get(&self, index: usize) -> Result<&Contact, StoreError> {
        let len = self.records.len();
        self.records.get(index).ok_or(StoreError::OutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Contact, StoreError> {
        let len = self.records.len();
        self.records
            .get_mut(index)
            .ok_or(StoreError::OutOfRange { index, len })
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Contact, StoreError> {
        let len = self.records.len();
        if index >= len {
            return Err(StoreError::OutOfRange { index, len });
        }
        Ok(self.records.remove(index))
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Contact] {
        &self.records
    }

    /// Case-insensitive substring search over every searchable field.
    ///
    /// A record appears once per matching field, so a record matching on
    /// both name and surname is listed twice. Hits keep store order.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let needle = query.to_lowercase();
        let mut hits = Vec::new();
        for (index, record) in self.records.iter().enumerate() {
            for value in record.searchable_fields() {
                if value.to_lowercase().contains(&needle) {
                    hits.push(SearchHit {
                        index,
                        summary: record.summary_line(),
                    });
                }
            }
        }
        hits
    }
}
