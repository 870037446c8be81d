//! Insertion-ordered map from path to value.
//!
//! Every key is stamped with a sequence number when it is first inserted.
//! Values live in a `BTreeMap` keyed by that sequence, so iteration follows
//! insertion order, while a `HashMap` index gives direct lookup by path.
//! Overwriting a key keeps its first sequence number, and so its position.

use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone)]
pub(crate) struct Entries<T> {
    next_seq: u64,
    ordered: BTreeMap<u64, (String, T)>,
    index: HashMap<String, u64>,
}

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Self {
            next_seq: 0,
            ordered: BTreeMap::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Entries<T> {
    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub(crate) fn get(&self, key: &str) -> Option<&T> {
        let seq = self.index.get(key)?;
        self.ordered.get(seq).map(|(_, value)| value)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        let seq = self.index.get(key)?;
        self.ordered.get_mut(seq).map(|(_, value)| value)
    }

    /// Insert or overwrite. Returns the previous value if the key existed.
    pub(crate) fn insert(&mut self, key: String, value: T) -> Option<T> {
        if let Some(seq) = self.index.get(&key) {
            if let Some(slot) = self.ordered.get_mut(seq) {
                return Some(std::mem::replace(&mut slot.1, value));
            }
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(key.clone(), seq);
        self.ordered.insert(seq, (key, value));
        None
    }

    pub(crate) fn remove(&mut self, key: &str) -> Option<T> {
        let seq = self.index.remove(key)?;
        self.ordered.remove(&seq).map(|(_, value)| value)
    }

    pub(crate) fn clear(&mut self) {
        self.ordered.clear();
        self.index.clear();
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.ordered
            .values()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(entries: &Entries<i32>) -> Vec<&str> {
        entries.keys().collect()
    }

    #[test]
    fn new_entries_are_empty() {
        let entries: Entries<i32> = Entries::default();
        assert!(entries.is_empty());
        assert_eq!(entries.len(), 0);
        assert_eq!(entries.iter().count(), 0);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut entries = Entries::default();
        entries.insert("/c".to_string(), 1);
        entries.insert("/a".to_string(), 2);
        entries.insert("/b".to_string(), 3);

        assert_eq!(keys(&entries), vec!["/c", "/a", "/b"]);
        assert_eq!(entries.values().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut entries = Entries::default();
        entries.insert("/a".to_string(), 1);
        entries.insert("/b".to_string(), 2);

        assert_eq!(entries.insert("/a".to_string(), 10), Some(1));
        assert_eq!(keys(&entries), vec!["/a", "/b"]);
        assert_eq!(entries.get("/a"), Some(&10));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn reinsert_after_remove_goes_to_end() {
        let mut entries = Entries::default();
        entries.insert("/a".to_string(), 1);
        entries.insert("/b".to_string(), 2);

        assert_eq!(entries.remove("/a"), Some(1));
        entries.insert("/a".to_string(), 3);

        assert_eq!(keys(&entries), vec!["/b", "/a"]);
    }

    #[test]
    fn remove_missing_is_none() {
        let mut entries: Entries<i32> = Entries::default();
        assert_eq!(entries.remove("/missing"), None);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut entries = Entries::default();
        entries.insert("/a".to_string(), 1);

        if let Some(value) = entries.get_mut("/a") {
            *value = 42;
        }

        assert_eq!(entries.get("/a"), Some(&42));
        assert!(entries.get_mut("/b").is_none());
    }

    #[test]
    fn clear_empties_everything() {
        let mut entries = Entries::default();
        entries.insert("/a".to_string(), 1);
        entries.insert("/b".to_string(), 2);

        entries.clear();

        assert!(entries.is_empty());
        assert!(!entries.contains_key("/a"));
    }
}
