use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use crate::{Record, RecordField, RecordId, Result};

/// The ordered list of records that makes up the field value.
///
/// Insertion order is display order. The reducers ([`appended`],
/// [`with_field`], [`without`]) never modify `self`; they compute the next
/// list so the caller can hand it to the host in full.
///
/// [`appended`]: RecordList::appended
/// [`with_field`]: RecordList::with_field
/// [`without`]: RecordList::without
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordList(Vec<Record>);

impl RecordList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Decodes a value delivered by the host.
    ///
    /// Returns `Ok(None)` when the value is not array-shaped, which callers
    /// treat as "keep what you have". An array whose elements are not all
    /// records is an error.
    pub fn decode(value: &Value) -> Result<Option<Self>> {
        if !value.is_array() {
            return Ok(None);
        }
        let records: Vec<Record> = serde_json::from_value(value.clone())?;
        Ok(Some(Self(records)))
    }

    /// Encodes the list in the layout the host persists.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.0.iter()
    }

    /// First record with the given identifier.
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.0.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Position of the first record with the given identifier.
    pub fn position(&self, id: &RecordId) -> Option<usize> {
        self.0.iter().position(|r| &r.id == id)
    }

    /// True when no two records share an identifier.
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0.iter().all(|r| seen.insert(&r.id))
    }

    /// The next list after appending one blank record.
    ///
    /// The new identifier is guaranteed absent from `self`.
    #[must_use]
    pub fn appended(&self) -> Self {
        let mut record = Record::new();
        while self.contains(&record.id) {
            record = Record::new();
        }
        self.appended_record(record)
    }

    /// The next list after appending the given record.
    #[must_use]
    pub fn appended_record(&self, record: Record) -> Self {
        let mut next = Vec::with_capacity(self.0.len() + 1);
        next.extend(self.0.iter().cloned());
        next.push(record);
        Self(next)
    }

    /// The next list after replacing one field of the record `id`.
    ///
    /// Only the first record carrying `id` is edited. When no record matches
    /// the result equals `self`.
    #[must_use]
    pub fn with_field(&self, id: &RecordId, field: RecordField, text: &str) -> Self {
        let Some(pos) = self.position(id) else {
            return self.clone();
        };
        let mut next = self.0.clone();
        next[pos] = next[pos].with_field(field, text);
        Self(next)
    }

    /// The next list after removing every record carrying `id`.
    #[must_use]
    pub fn without(&self, id: &RecordId) -> Self {
        Self(self.0.iter().filter(|r| &r.id != id).cloned().collect())
    }
}

impl From<Vec<Record>> for RecordList {
    fn from(records: Vec<Record>) -> Self {
        Self(records)
    }
}

impl FromIterator<Record> for RecordList {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for RecordList {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordList {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
