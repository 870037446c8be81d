//! Serde support: a store serializes as an ordered list of entries.
//!
//! ```json
//! [
//!   { "path": "/foo/bar", "value": 1 },
//!   { "path": "/foo/baz", "value": 2 }
//! ]
//! ```
//!
//! A list keeps the enumeration order intact, which a JSON object would not
//! guarantee.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::options::UpdateOptions;
use crate::PathStore;

/// One serialized store entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry<T> {
    pub path: String,
    pub value: T,
}

#[derive(Serialize)]
struct EntryRef<'a, T> {
    path: &'a str,
    value: &'a T,
}

impl<T> PathStore<T> {
    /// Copy the contents out as an ordered list of entries.
    pub fn snapshot(&self) -> Vec<SnapshotEntry<T>>
    where
        T: Clone,
    {
        self.iter()
            .map(|(path, value)| SnapshotEntry {
                path: path.to_owned(),
                value: value.clone(),
            })
            .collect()
    }

    /// Build a store from snapshot entries, keeping their order.
    ///
    /// Fails if any path appears more than once. The new store has no
    /// observers, so nothing is notified.
    pub fn from_snapshot(entries: Vec<SnapshotEntry<T>>) -> Result<Self> {
        let mut store = PathStore::new();
        for entry in entries {
            if store.contains(&entry.path) {
                return Err(Error::DuplicatePath { path: entry.path });
            }
            store.insert_with(entry.path, entry.value, UpdateOptions::silent());
        }
        Ok(store)
    }

    /// Serialize the store to a JSON value.
    pub fn to_json(&self) -> Result<serde_json::Value>
    where
        T: Serialize,
    {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuild a store from a JSON value produced by [`to_json`](Self::to_json).
    pub fn from_json(value: serde_json::Value) -> Result<Self>
    where
        T: DeserializeOwned,
    {
        let entries: Vec<SnapshotEntry<T>> = serde_json::from_value(value)?;
        Self::from_snapshot(entries)
    }
}

impl<T: Serialize> Serialize for PathStore<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|(path, value)| EntryRef { path, value }))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PathStore<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = Vec::<SnapshotEntry<T>>::deserialize(deserializer)?;
        PathStore::from_snapshot(entries).map_err(serde::de::Error::custom)
    }
}
