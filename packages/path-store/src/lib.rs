//! path-store: an in-memory, path-addressed value store.
//!
//! A [`PathStore`] maps slash-delimited string paths to values and treats
//! them as a filesystem without touching real storage:
//! - Subtree removal ([`PathStore::remove`]) and relocation
//!   ([`PathStore::move_path`])
//! - Child queries ([`PathStore::child_paths`], [`PathStore::child_names`],
//!   [`PathStore::children`], [`PathStore::root`])
//! - Transformation into a new store ([`PathStore::map`],
//!   [`PathStore::filter`])
//! - Synchronous change observers ([`PathStore::subscribe`])
//!
//! Hierarchy is literal string prefixing. There are no directory nodes, and
//! `/foobar` counts as being inside `/foo`.
//!
//! # Example
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! use path_store::PathStore;
//!
//! let changes = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&changes);
//!
//! let mut store = PathStore::new();
//! store.subscribe(move |_: &PathStore<u32>| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! store
//!     .insert("/foo/bar/first", 0)
//!     .insert("/foo/bar/second", 1)
//!     .insert("/foo/baz/third", 2)
//!     .move_path("/foo/bar", "/baz");
//!
//! // One replay on subscribe, then one per mutation.
//! assert_eq!(changes.load(Ordering::SeqCst), 5);
//! assert_eq!(store.child_names("/baz"), vec!["first", "second"]);
//! ```

mod children;
mod entries;
mod error;
mod observe;
mod options;
pub mod prefix;
mod snapshot;
mod store;

pub use children::ChildEntry;
pub use error::{Error, Result};
pub use observe::SubscriptionId;
pub use options::UpdateOptions;
pub use snapshot::SnapshotEntry;
pub use store::PathStore;

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn path() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-c]{1,2}", 1..4).prop_map(|segments| {
            let mut path = String::new();
            for segment in segments {
                path.push('/');
                path.push_str(&segment);
            }
            path
        })
    }

    fn store() -> impl Strategy<Value = PathStore<u32>> {
        prop::collection::vec((path(), any::<u32>()), 0..24)
            .prop_map(|pairs| pairs.into_iter().collect::<PathStore<u32>>())
    }

    fn owned(paths: Vec<&str>) -> Vec<String> {
        paths.into_iter().map(str::to_owned).collect()
    }

    proptest! {
        /// Insert then read returns the inserted value.
        #[test]
        fn prop_insert_read(mut store in store(), p in path(), v in any::<u32>()) {
            store.insert(p.clone(), v);
            prop_assert_eq!(store.read(&p), Some(&v));
        }

        /// Removal drops exactly the paths within the prefix.
        #[test]
        fn prop_remove_prefix_closed(mut store in store(), p in path()) {
            let before: Vec<(String, u32)> =
                store.iter().map(|(k, v)| (k.to_owned(), *v)).collect();

            store.remove(&p);

            let expected: Vec<(String, u32)> = before
                .into_iter()
                .filter(|(k, _)| !k.starts_with(&p))
                .collect();
            let after: Vec<(String, u32)> =
                store.iter().map(|(k, v)| (k.to_owned(), *v)).collect();
            prop_assert_eq!(after, expected);
        }

        /// Moving to a fresh location keeps every value and rewrites prefixes.
        #[test]
        fn prop_move_rebases(mut store in store(), p in path()) {
            let to = "/zz";
            let before: Vec<(String, u32)> =
                store.iter().map(|(k, v)| (k.to_owned(), *v)).collect();

            store.move_path(&p, to);

            prop_assert_eq!(store.len(), before.len());
            for (key, value) in &before {
                match prefix::rebase(key, &p, to) {
                    Some(target) => {
                        prop_assert_eq!(store.read(&target), Some(value));
                        prop_assert!(!store.contains(key));
                    }
                    None => {
                        prop_assert_eq!(store.read(key), Some(value));
                    }
                }
            }
        }

        /// Map keeps the path list and its order.
        #[test]
        fn prop_map_preserves_paths(store in store()) {
            let mapped = store.map(|v, _| u64::from(*v) * 2);
            prop_assert_eq!(owned(mapped.paths()), owned(store.paths()));
        }

        /// Filter yields the ordered subset of matching paths.
        #[test]
        fn prop_filter_subset(store in store()) {
            let odd = store.filter(|v, _| v % 2 == 1);
            let expected: Vec<String> = store
                .iter()
                .filter(|(_, v)| *v % 2 == 1)
                .map(|(k, _)| k.to_owned())
                .collect();
            prop_assert_eq!(owned(odd.paths()), expected);
        }

        /// Child names are never duplicated.
        #[test]
        fn prop_child_names_unique(store in store(), p in prop_oneof![Just(String::new()), path()]) {
            let names = store.child_names(&p);
            let unique: BTreeSet<&str> = names.iter().copied().collect();
            prop_assert_eq!(unique.len(), names.len());
        }
    }
}
