//! Collection helpers for untyped JSON input.
//!
//! Values arriving from deserialized payloads are not known to be arrays.
//! Every operation here checks that first and fails with `NotASequence`
//! otherwise; past that check each one behaves like its typed counterpart on
//! [`Collections`]. Indices are signed, as they would be in a payload.

use farmbuild_common::{Result, error::Error, sink::LogSink};
use serde_json::Value;

use crate::{
    collections::Collections,
    validations::{Equality, is_array, type_name},
};

/// Borrowed view of a [`Collections`] operating on `serde_json::Value`
/// sequences. Obtained through [`Collections::json`].
#[derive(Debug)]
pub struct JsonCollections<'c, E, S> {
    collections: &'c Collections<E, S>,
}

impl<E, S> Clone for JsonCollections<'_, E, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, S> Copy for JsonCollections<'_, E, S> {}

impl<'c, E, S> JsonCollections<'c, E, S> {
    pub(crate) fn new(collections: &'c Collections<E, S>) -> Self {
        JsonCollections { collections }
    }

    pub fn size(&self, sequence: &Value) -> Result<usize> {
        let items = as_array(sequence)?;
        Ok(self.collections.size(items))
    }

    pub fn is_empty(&self, sequence: &Value) -> Result<bool> {
        let items = as_array(sequence)?;
        Ok(self.collections.is_empty(items))
    }

    /// Returns the item at `index`; negative or past-the-end indices yield `None`.
    pub fn at<'v>(&self, sequence: &'v Value, index: i64) -> Result<Option<&'v Value>> {
        let items = as_array(sequence)?;
        Ok(usize::try_from(index)
            .ok()
            .and_then(|index| self.collections.at(items, index)))
    }

    pub fn first<'v>(&self, sequence: &'v Value) -> Result<Option<&'v Value>> {
        let items = as_array(sequence)?;
        Ok(self.collections.first(items))
    }

    pub fn last<'v>(&self, sequence: &'v Value) -> Result<Option<&'v Value>> {
        let items = as_array(sequence)?;
        Ok(self.collections.last(items))
    }

    /// Inserts `item` at `index`, or appends it when no index is given.
    ///
    /// The index is resolved the way a splice resolves it: a negative index
    /// counts back from the end (stopping at the front), and an index past the
    /// end appends.
    pub fn insert<'v>(
        &self,
        sequence: &'v mut Value,
        item: Value,
        index: Option<i64>,
    ) -> Result<&'v mut Value> {
        let items = as_array_mut(sequence)?;
        let index = index.map(|index| splice_index(index, items.len()));
        self.collections.insert(items, item, index);
        Ok(sequence)
    }
}

impl<'c, E: Equality<Value>, S> JsonCollections<'c, E, S> {
    /// Returns the first object whose `property` member equals `value`.
    ///
    /// A missing property or value finds nothing. Items that are not objects,
    /// or lack the member, are skipped.
    pub fn find_by_property<'v>(
        &self,
        sequence: &'v Value,
        property: Option<&str>,
        value: Option<&Value>,
    ) -> Result<Option<&'v Value>> {
        let items = as_array(sequence)?;
        let (Some(property), Some(value)) = (property, value) else {
            return Ok(None);
        };
        Ok(self.collections.find_by_property(items, property, value))
    }
}

impl<'c, E, S: LogSink> JsonCollections<'c, E, S> {
    /// Removes the item at `index`.
    ///
    /// A value that is not an array is logged and reported as `NotASequence`.
    /// A missing, negative or past-the-end index is logged and the sequence is
    /// returned unchanged.
    pub fn remove_at<'v>(
        &self,
        sequence: &'v mut Value,
        index: Option<i64>,
    ) -> Result<&'v mut Value> {
        let level = self.collections.config().violation_level;
        if !is_array(sequence) {
            self.collections.emit(
                level,
                format_args!("collection is not an array, returning as it is: {sequence}"),
            );
            return Err(not_a_sequence(sequence));
        }
        let items = as_array_mut(sequence)?;
        match index.and_then(|index| usize::try_from(index).ok()) {
            Some(index) => {
                self.collections.remove_at(items, index);
            }
            None => self.collections.emit(
                level,
                format_args!(
                    "index is out of range for the array, index: {}, collection.length: {}",
                    describe_index(index),
                    items.len()
                ),
            ),
        }
        Ok(sequence)
    }
}

impl<'c, E: Equality<Value>, S: LogSink> JsonCollections<'c, E, S> {
    /// Removes the items equal to `item`, with the same scan as
    /// [`Collections::remove`].
    ///
    /// Returns `Ok(None)` when `item` is missing, whatever the sequence holds.
    pub fn remove<'v>(
        &self,
        sequence: &'v mut Value,
        item: Option<&Value>,
    ) -> Result<Option<&'v mut Value>> {
        let level = self.collections.config().removal_level;
        let Some(item) = item else {
            self.collections
                .emit(level, format_args!("removing item undefined"));
            return Ok(None);
        };
        self.collections
            .emit(level, format_args!("removing item {item}"));
        let items = as_array_mut(sequence)?;
        self.collections.remove_matching(items, item);
        Ok(Some(sequence))
    }
}

fn as_array(value: &Value) -> Result<&Vec<Value>> {
    value.as_array().ok_or_else(|| not_a_sequence(value))
}

fn as_array_mut(value: &mut Value) -> Result<&mut Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(not_a_sequence(other)),
    }
}

fn not_a_sequence(value: &Value) -> Error {
    Error::not_a_sequence("collection", type_name(value))
}

/// Resolves a signed insertion index against `len`, clamped to `[0, len]`.
fn splice_index(index: i64, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(usize::try_from(index.unsigned_abs()).unwrap_or(usize::MAX))
    } else {
        usize::try_from(index).map_or(len, |index| index.min(len))
    }
}

fn describe_index(index: Option<i64>) -> String {
    index.map_or_else(|| "undefined".to_string(), |index| index.to_string())
}
