//! Record sources - ordered rows of named, optional text fields.

mod sparql_json;

use crate::Result;
use std::collections::VecDeque;

pub use self::sparql_json::SparqlJsonSource;

/// An ordered mapping from field name to an optional text value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, Option<String>)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field with a value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, Some(value.into()));
        self
    }

    /// Adds or replaces a field, keeping its original position when replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Returns true if the field is present and bound to a value.
    pub fn has_field(&self, name: &str) -> bool {
        self.value_of(name).is_some()
    }

    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Value of a field, or the empty string when it is absent.
    pub fn value_or_empty(&self, name: &str) -> &str {
        self.value_of(name).unwrap_or_default()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, Some(value.into()));
        }
        record
    }
}

/// Produces records in order.
pub trait RecordSource {
    /// Names of the fields records may carry, in declaration order.
    fn field_names(&self) -> &[String];

    /// Returns the next record, or `None` when the source is exhausted.
    fn next_record(&mut self) -> Result<Option<Record>>;

    /// Releases any underlying resources.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A record source backed by records held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    field_names: Vec<String>,
    records: VecDeque<Record>,
}

impl MemorySource {
    pub fn new(field_names: Vec<String>, records: Vec<Record>) -> Self {
        Self {
            field_names,
            records: records.into(),
        }
    }

    /// Creates a source whose field names are collected from the records in
    /// first-seen order.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut field_names: Vec<String> = Vec::new();
        for record in &records {
            for name in record.field_names() {
                if !field_names.iter().any(|n| n == name) {
                    field_names.push(name.to_string());
                }
            }
        }
        Self::new(field_names, records)
    }

    pub fn remaining(&self) -> usize {
        self.records.len()
    }
}

impl RecordSource for MemorySource {
    fn field_names(&self) -> &[String] {
        &self.field_names
    }

    fn next_record(&mut self) -> Result<Option<Record>> {
        Ok(self.records.pop_front())
    }

    fn close(&mut self) -> Result<()> {
        self.records.clear();
        Ok(())
    }
}
