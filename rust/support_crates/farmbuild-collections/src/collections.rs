//! Positional and by-value helpers over caller-owned `Vec`s.

use std::fmt::{self, Debug};

use farmbuild_common::{
    Result,
    error::Error,
    sink::{LogCrateSink, LogSink},
};
use log::Level;

use crate::{
    config::CollectionsConfig,
    fields::Fields,
    json::JsonCollections,
    validations::{Equality, JsonEquality, Structural},
};

/// Stateless helpers over ordered sequences, parameterized by the equality
/// used to compare items (`E`) and the sink receiving diagnostics (`S`).
///
/// The helpers never keep a reference to a sequence past the call. Operations
/// that mutate act in place and hand back the same `&mut Vec` so calls can be
/// chained.
///
/// # Examples
///
/// ```
/// use farmbuild_collections::Collections;
///
/// let collections: Collections = Collections::default();
/// let mut crops = vec!["wheat", "barley"];
///
/// collections.insert(&mut crops, "canola", Some(1)).push("oats");
/// assert_eq!(crops, ["wheat", "canola", "barley", "oats"]);
///
/// collections.remove_at(&mut crops, 0);
/// assert_eq!(collections.first(&crops), Some(&"canola"));
/// assert_eq!(collections.last(&crops), Some(&"oats"));
/// assert_eq!(collections.size(&crops), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Collections<E = Structural, S = LogCrateSink> {
    equality: E,
    sink: S,
    config: CollectionsConfig,
}

impl Default for Collections {
    fn default() -> Self {
        Collections::new(Structural, LogCrateSink::default())
    }
}

impl Collections<JsonEquality, LogCrateSink> {
    /// Helpers for JSON items, comparing them with [`JsonEquality`].
    pub fn for_json() -> Self {
        Collections::new(JsonEquality, LogCrateSink::default())
    }
}

impl<E, S> Collections<E, S> {
    pub fn new(equality: E, sink: S) -> Collections<E, S> {
        Collections {
            equality,
            sink,
            config: CollectionsConfig::default(),
        }
    }

    /// Creates the helpers with explicit diagnostic settings.
    pub fn with_config(equality: E, sink: S, config: CollectionsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Collections {
            equality,
            sink,
            config,
        })
    }

    pub fn equality(&self) -> &E {
        &self.equality
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn config(&self) -> &CollectionsConfig {
        &self.config
    }

    /// Inserts `item` at `index`, shifting later items right, or appends it
    /// when no index is given.
    ///
    /// An index past the end appends.
    pub fn insert<'a, T>(
        &self,
        sequence: &'a mut Vec<T>,
        item: T,
        index: Option<usize>,
    ) -> &'a mut Vec<T> {
        match index {
            Some(index) => {
                let index = index.min(sequence.len());
                sequence.insert(index, item);
            }
            None => sequence.push(item),
        }
        sequence
    }

    pub fn is_empty<T>(&self, sequence: &[T]) -> bool {
        sequence.is_empty()
    }

    pub fn size<T>(&self, sequence: &[T]) -> usize {
        sequence.len()
    }

    /// Returns the item at `index`, or `None` when out of range.
    pub fn at<'a, T>(&self, sequence: &'a [T], index: usize) -> Option<&'a T> {
        sequence.get(index)
    }

    pub fn first<'a, T>(&self, sequence: &'a [T]) -> Option<&'a T> {
        self.at(sequence, 0)
    }

    pub fn last<'a, T>(&self, sequence: &'a [T]) -> Option<&'a T> {
        let index = self.size(sequence).checked_sub(1)?;
        self.at(sequence, index)
    }

    /// Removes and returns the item at `index`.
    ///
    /// Fails with `IndexOutOfRange` when `index` is not within `[0, len - 1]`,
    /// leaving the sequence untouched.
    pub fn try_remove_at<T>(&self, sequence: &mut Vec<T>, index: usize) -> Result<T> {
        if index >= sequence.len() {
            return Err(Error::index_out_of_range(index, sequence.len()));
        }
        Ok(sequence.remove(index))
    }

    /// Index of the first item whose `property` field equals `value`.
    pub fn position_by_property<T>(
        &self,
        sequence: &[T],
        property: &str,
        value: &T::Field,
    ) -> Option<usize>
    where
        T: Fields,
        E: Equality<T::Field>,
    {
        sequence.iter().position(|item| {
            item.field(property)
                .is_some_and(|field| self.equality.equals(field, value))
        })
    }

    /// Returns the first item whose `property` field equals `value`.
    ///
    /// Items without the field are skipped.
    pub fn find_by_property<'a, T>(
        &self,
        sequence: &'a [T],
        property: &str,
        value: &T::Field,
    ) -> Option<&'a T>
    where
        T: Fields,
        E: Equality<T::Field>,
    {
        let index = self.position_by_property(sequence, property, value)?;
        self.at(sequence, index)
    }

    /// Removes every item equal to `item` and returns how many were removed.
    pub fn remove_all<T>(&self, sequence: &mut Vec<T>, item: &T) -> usize
    where
        E: Equality<T>,
    {
        let before = sequence.len();
        sequence.retain(|current| !self.equality.equals(current, item));
        before - sequence.len()
    }

    pub fn json(&self) -> JsonCollections<'_, E, S> {
        JsonCollections::new(self)
    }
}

impl<E, S: LogSink> Collections<E, S> {
    /// Removes the item at `index`, shifting later items left.
    ///
    /// An index outside `[0, len - 1]` is logged at the violation level and the
    /// sequence is returned unchanged.
    pub fn remove_at<'a, T>(&self, sequence: &'a mut Vec<T>, index: usize) -> &'a mut Vec<T> {
        if let Err(e) = self.try_remove_at(sequence, index) {
            self.emit(self.config.violation_level, format_args!("{e}"));
        }
        sequence
    }

    /// Removes the items equal to `item`, scanning positions in order.
    ///
    /// Returns `None` when `item` is `None`. Each position of the original
    /// length is visited once, so after a removal the item shifted into the
    /// freed slot is not compared again: `[a, a, b]` minus `a` leaves `[a, b]`.
    /// Use [`remove_all`](Self::remove_all) to drop every occurrence.
    pub fn remove<'a, T>(
        &self,
        sequence: &'a mut Vec<T>,
        item: Option<&T>,
    ) -> Option<&'a mut Vec<T>>
    where
        T: Debug,
        E: Equality<T>,
    {
        let level = self.config.removal_level;
        let Some(item) = item else {
            self.emit(level, format_args!("removing item undefined"));
            return None;
        };
        self.emit(level, format_args!("removing item {item:?}"));
        self.remove_matching(sequence, item);
        Some(sequence)
    }

    pub(crate) fn remove_matching<T>(&self, sequence: &mut Vec<T>, item: &T)
    where
        E: Equality<T>,
    {
        let len = sequence.len();
        for index in 0..len {
            let matches = sequence
                .get(index)
                .is_some_and(|current| self.equality.equals(current, item));
            if matches {
                self.remove_at(sequence, index);
            }
        }
    }

    pub(crate) fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.config.enabled && self.sink.enabled(level) {
            self.sink.log(level, args);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmbuild_common::error::ErrorKind;
    use farmbuild_testkit::RecordingSink;

    fn recording() -> Collections<Structural, RecordingSink> {
        Collections::new(Structural, RecordingSink::new())
    }

    #[test]
    fn test_insert_append_and_index() {
        let collections = recording();
        let mut v = vec![1, 2, 3];
        collections.insert(&mut v, 4, None);
        assert_eq!(v, [1, 2, 3, 4]);
        collections.insert(&mut v, 0, Some(0));
        assert_eq!(v, [0, 1, 2, 3, 4]);
        collections.insert(&mut v, 9, Some(2));
        assert_eq!(v, [0, 1, 9, 2, 3, 4]);
    }

    #[test]
    fn test_insert_past_end_appends() {
        let collections = recording();
        let mut v = vec!['a'];
        collections.insert(&mut v, 'z', Some(10));
        assert_eq!(v, ['a', 'z']);
        assert!(collections.sink().is_empty());
    }

    #[test]
    fn test_insert_chains() {
        let collections = recording();
        let mut v = Vec::new();
        collections
            .insert(&mut v, "b", None)
            .extend_from_slice(&["c", "d"]);
        collections.insert(&mut v, "a", Some(0));
        assert_eq!(v, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_accessors() {
        let collections = recording();
        let v = vec![10, 20, 30];
        assert_eq!(collections.at(&v, 1), Some(&20));
        assert_eq!(collections.at(&v, 3), None);
        assert_eq!(collections.first(&v), Some(&10));
        assert_eq!(collections.last(&v), Some(&30));
        assert_eq!(collections.size(&v), 3);
        assert!(!collections.is_empty(&v));

        let empty: Vec<i32> = Vec::new();
        assert_eq!(collections.first(&empty), None);
        assert_eq!(collections.last(&empty), None);
        assert_eq!(collections.size(&empty), 0);
        assert!(collections.is_empty(&empty));
    }

    #[test]
    fn test_try_remove_at() {
        let collections = recording();
        let mut v = vec!["a", "b", "c"];
        assert_eq!(collections.try_remove_at(&mut v, 1).unwrap(), "b");
        assert_eq!(v, ["a", "c"]);

        let err = collections.try_remove_at(&mut v, 2).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::IndexOutOfRange { index: 2, len: 2 }
        ));
        assert_eq!(v, ["a", "c"]);
    }

    #[test]
    fn test_remove_at_out_of_range_warns() {
        let collections = recording();
        let mut v = vec![1, 2];
        collections.remove_at(&mut v, 2);
        assert_eq!(v, [1, 2]);
        assert_eq!(
            collections.sink().messages_at(Level::Warn),
            ["index is out of range for the array, index: 2, collection.length: 2"]
        );
    }

    #[test]
    fn test_remove_at_huge_index_reports_it() {
        let collections = recording();
        let mut v = vec![1];
        collections.remove_at(&mut v, usize::MAX);
        assert_eq!(v, [1]);
        assert_eq!(
            collections.sink().messages_at(Level::Warn),
            [format!(
                "index is out of range for the array, index: {}, collection.length: 1",
                usize::MAX
            )]
        );
    }

    #[test]
    fn test_remove_at_valid_is_silent() {
        let collections = recording();
        let mut v = vec![1, 2, 3];
        collections.remove_at(&mut v, 0).push(4);
        assert_eq!(v, [2, 3, 4]);
        assert!(collections.sink().is_empty());
    }

    #[test]
    fn test_remove_none_returns_none() {
        let collections = recording();
        let mut v = vec![1, 2];
        assert!(collections.remove(&mut v, None).is_none());
        assert_eq!(v, [1, 2]);
        assert_eq!(
            collections.sink().messages_at(Level::Info),
            ["removing item undefined"]
        );
    }

    #[test]
    fn test_remove_skips_adjacent_duplicate() {
        let collections = recording();
        let mut v = vec!["a", "a", "b"];
        let result = collections.remove(&mut v, Some(&"a")).unwrap();
        assert_eq!(*result, ["a", "b"]);
        assert_eq!(
            collections.sink().messages_at(Level::Info),
            ["removing item \"a\""]
        );
        assert!(collections.sink().messages_at(Level::Warn).is_empty());
    }

    #[test]
    fn test_remove_separated_duplicates() {
        let collections = recording();
        let mut v = vec![1, 2, 1, 3, 1];
        collections.remove(&mut v, Some(&1));
        assert_eq!(v, [2, 3]);
    }

    #[test]
    fn test_remove_missing_item() {
        let collections = recording();
        let mut v = vec![1, 2];
        collections.remove(&mut v, Some(&5));
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn test_remove_all() {
        let collections = recording();
        let mut v = vec!["a", "a", "b", "a"];
        assert_eq!(collections.remove_all(&mut v, &"a"), 3);
        assert_eq!(v, ["b"]);
        assert_eq!(collections.remove_all(&mut v, &"a"), 0);
    }

    #[test]
    fn test_silent_config() {
        let collections =
            Collections::with_config(Structural, RecordingSink::new(), CollectionsConfig::silent())
                .unwrap();
        let mut v = vec![1];
        collections.remove_at(&mut v, 4);
        collections.remove(&mut v, Some(&1));
        assert!(v.is_empty());
        assert!(collections.sink().is_empty());
    }

    #[test]
    fn test_with_config_validates() {
        let config = CollectionsConfig {
            violation_level: Level::Debug,
            ..Default::default()
        };
        assert!(Collections::with_config(Structural, RecordingSink::new(), config).is_err());
    }
}
