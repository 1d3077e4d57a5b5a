//! Key-value records emitted while replaying episodes.
use crate::error::RtxError;
use chrono::prelude::{DateTime, Local};
use std::collections::{
    btree_map::Iter,
    BTreeMap,
};

/// A value stored in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single floating-point value, e.g., one dimension of an action.
    Scalar(f32),

    /// A timestamp with local timezone.
    DateTime(DateTime<Local>),

    /// A text value, e.g., a language instruction.
    String(String),
}

/// A container of named values.
///
/// Keys are kept sorted, so iterating a record always visits its entries
/// in the same order.
///
/// ```rust
/// use rtx_core::record::{Record, RecordValue};
///
/// let mut record = Record::from_scalar("step", 0.0);
/// record.insert("ground_truth/world_vector_0", RecordValue::Scalar(1.74));
///
/// assert_eq!(record.get_scalar("ground_truth/world_vector_0").unwrap(), 1.74);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(BTreeMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        let mut record = Self::empty();
        record.insert(name, RecordValue::Scalar(value));
        record
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Returns an iterator over the key-value pairs in the record.
    pub fn iter(&self) -> Iter<'_, String, RecordValue> {
        self.0.iter()
    }

    /// Gets a reference to the value associated with the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Merges another record into this one in place.
    ///
    /// Values of `record` overwrite values of `self` with the same key.
    pub fn merge_inplace(&mut self, record: Record) {
        self.0.extend(record.0);
    }

    /// Gets a scalar value from the record.
    pub fn get_scalar(&self, k: &str) -> Result<f32, RtxError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(RtxError::RecordValueType("Scalar".to_string())),
            None => Err(RtxError::RecordKey(k.to_string())),
        }
    }

    /// Gets a string value from the record.
    pub fn get_string(&self, k: &str) -> Result<String, RtxError> {
        match self.0.get(k) {
            Some(RecordValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(RtxError::RecordValueType("String".to_string())),
            None => Err(RtxError::RecordKey(k.to_string())),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
