//! PathStore: a flat, insertion-ordered map of paths that behaves like a tree.
//!
//! There are no directory nodes. A path is "inside" another when it starts
//! with it as a literal string, so every hierarchical operation here is a
//! prefix scan over the stored keys.

use std::collections::HashSet;
use std::fmt;

use crate::children::ChildEntry;
use crate::entries::Entries;
use crate::observe::{Observers, SubscriptionId};
use crate::options::UpdateOptions;
use crate::prefix;

/// An in-memory, path-addressed value store with change observers.
///
/// Mutating methods return `&mut Self` so calls can be chained. Each call
/// notifies observers once unless given [`UpdateOptions::silent`].
///
/// # Example
///
/// ```rust
/// use path_store::PathStore;
///
/// let mut store = PathStore::new();
/// store
///     .insert("/foo/bar/first", 0)
///     .insert("/foo/bar/second", 1)
///     .insert("/foo/baz/third", 2)
///     .move_path("/foo/bar", "/baz");
///
/// assert_eq!(store.paths(), vec!["/foo/baz/third", "/baz/first", "/baz/second"]);
/// assert_eq!(store.read("/baz/second"), Some(&1));
/// ```
pub struct PathStore<T> {
    entries: Entries<T>,
    observers: Observers<T>,
}

impl<T> Default for PathStore<T> {
    fn default() -> Self {
        Self {
            entries: Entries::default(),
            observers: Observers::default(),
        }
    }
}

/// Clones the contents only. The clone starts with no observers.
impl<T: Clone> Clone for PathStore<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            observers: Observers::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PathStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathStore")
            .field("entries", &DebugEntries(&self.entries))
            .field("observers", &self.observers.len())
            .finish()
    }
}

struct DebugEntries<'a, T>(&'a Entries<T>);

impl<T: fmt::Debug> fmt::Debug for DebugEntries<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<T> PathStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Mutation ====================

    /// Set the value at `path`, overwriting any existing entry.
    pub fn insert(&mut self, path: impl Into<String>, value: T) -> &mut Self {
        self.insert_with(path, value, UpdateOptions::default())
    }

    /// [`insert`](Self::insert) with explicit options.
    pub fn insert_with(
        &mut self,
        path: impl Into<String>,
        value: T,
        options: UpdateOptions,
    ) -> &mut Self {
        let path = path.into();
        log::trace!("insert {:?}", path);
        self.entries.insert(path, value);
        self.finish(options)
    }

    /// Remove `path` and every path that starts with it.
    ///
    /// Removing a path that matches nothing is a no-op, but still notifies.
    pub fn remove(&mut self, path: &str) -> &mut Self {
        self.remove_with(path, UpdateOptions::default())
    }

    /// [`remove`](Self::remove) with explicit options.
    pub fn remove_with(&mut self, path: &str, options: UpdateOptions) -> &mut Self {
        // Snapshot the keys before deleting anything.
        let doomed: Vec<String> = self
            .entries
            .keys()
            .filter(|key| prefix::is_within(key, path))
            .map(str::to_owned)
            .collect();

        for key in &doomed {
            self.entries.remove(key);
        }

        log::trace!("remove {:?}: {} entries", path, doomed.len());
        self.finish(options)
    }

    /// Relocate `path` and all of its descendants under `move_to`.
    ///
    /// The exact entry at `path` becomes `move_to`, and each descendant
    /// `path + rest` becomes `move_to + rest`. Relocated entries are
    /// re-inserted, so they move to the end of the enumeration order unless
    /// the destination already existed. Existing destinations are
    /// overwritten. Moving a path onto itself changes nothing.
    pub fn move_path(&mut self, path: &str, move_to: &str) -> &mut Self {
        self.move_path_with(path, move_to, UpdateOptions::default())
    }

    /// [`move_path`](Self::move_path) with explicit options.
    pub fn move_path_with(
        &mut self,
        path: &str,
        move_to: &str,
        options: UpdateOptions,
    ) -> &mut Self {
        if path != move_to {
            let mut sources: Vec<String> = Vec::new();
            if self.entries.contains_key(path) {
                sources.push(path.to_owned());
            }
            sources.extend(self.child_paths(path).into_iter().map(str::to_owned));

            // All sources leave before any destination is written.
            let mut relocated = Vec::with_capacity(sources.len());
            for source in &sources {
                let Some(target) = prefix::rebase(source, path, move_to) else {
                    continue;
                };
                if let Some(value) = self.entries.remove(source) {
                    relocated.push((target, value));
                }
            }

            log::trace!(
                "move {:?} -> {:?}: {} entries",
                path,
                move_to,
                relocated.len()
            );

            for (target, value) in relocated {
                self.entries.insert(target, value);
            }
        }

        self.finish(options)
    }

    /// Remove every entry.
    pub fn clear(&mut self) -> &mut Self {
        self.clear_with(UpdateOptions::default())
    }

    /// [`clear`](Self::clear) with explicit options.
    pub fn clear_with(&mut self, options: UpdateOptions) -> &mut Self {
        log::trace!("clear: {} entries", self.entries.len());
        self.entries.clear();
        self.finish(options)
    }

    // ==================== Observers ====================

    /// Register an observer.
    ///
    /// The observer is called once immediately with the current store, then
    /// again after every mutation that notifies.
    pub fn subscribe<F>(&mut self, mut observer: F) -> SubscriptionId
    where
        F: FnMut(&PathStore<T>) + Send + 'static,
    {
        observer(&*self);
        self.observers.register(Box::new(observer))
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unregister(id)
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Call every observer with the current store.
    ///
    /// Mutations do this on their own; call it directly to close a batch of
    /// silent mutations.
    pub fn notify(&mut self) -> &mut Self {
        if self.observers.is_empty() {
            return self;
        }

        log::trace!("notify {} observers", self.observers.len());
        // Observers only get `&PathStore`, so none can register or
        // unregister while detached.
        let mut observers = std::mem::take(&mut self.observers);
        observers.notify_all(self);
        self.observers = observers;
        self
    }

    fn finish(&mut self, options: UpdateOptions) -> &mut Self {
        if options.notify {
            self.notify();
        }
        self
    }

    // ==================== Queries ====================

    /// The value stored at exactly `path`.
    pub fn read(&self, path: &str) -> Option<&T> {
        self.entries.get(path)
    }

    /// Mutable access to the value at exactly `path`. Does not notify.
    pub fn read_mut(&mut self, path: &str) -> Option<&mut T> {
        self.entries.get_mut(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All stored paths in enumeration order.
    pub fn paths(&self) -> Vec<&str> {
        self.entries.keys().collect()
    }

    /// All stored values, in the same order as [`paths`](Self::paths).
    pub fn contents(&self) -> Vec<&T> {
        self.entries.values().collect()
    }

    /// Iterate `(path, value)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter()
    }

    /// Every stored path that starts with `path` and is not `path` itself.
    ///
    /// Despite the name this covers descendants at any depth.
    pub fn child_paths(&self, path: &str) -> Vec<&str> {
        self.descendants(path)
    }

    /// Names of the immediate children of `path`, deduplicated in
    /// first-seen order.
    ///
    /// ```rust
    /// use path_store::PathStore;
    ///
    /// let mut store = PathStore::new();
    /// store
    ///     .insert("/foo/bar", ())
    ///     .insert("/foo/bar/second.template", ())
    ///     .insert("/foo/fourth.template/bar", ())
    ///     .insert("/hello/baz", ());
    ///
    /// assert_eq!(store.child_names("/foo"), vec!["bar", "fourth.template"]);
    /// ```
    pub fn child_names(&self, path: &str) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.descendants(path)
            .into_iter()
            .filter_map(|full| prefix::next_segment(full, path))
            .map(|(_, name)| name)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Immediate children of `path` as structured records, deduplicated by
    /// name. The first descendant seen for each name wins.
    pub fn children(&self, path: &str) -> Vec<ChildEntry<'_>> {
        let mut seen = HashSet::new();
        self.descendants(path)
            .into_iter()
            .filter_map(|full| {
                let (offset, name) = prefix::next_segment(full, path)?;
                Some(ChildEntry {
                    full_path: full,
                    name,
                    parent: prefix::segment_before(full, offset),
                })
            })
            .filter(|child| seen.insert(child.name))
            .collect()
    }

    /// Top-level children: [`children`](Self::children) of the empty path.
    pub fn root(&self) -> Vec<ChildEntry<'_>> {
        self.children("")
    }

    fn descendants(&self, path: &str) -> Vec<&str> {
        self.entries
            .keys()
            .filter(|key| prefix::is_descendant(key, path))
            .collect()
    }

    // ==================== Transformation ====================

    /// Build a new store holding `f(value, path)` at every path, in the same
    /// order. `self` is left untouched.
    pub fn map<R, F>(&self, mut f: F) -> PathStore<R>
    where
        F: FnMut(&T, &str) -> R,
    {
        let mut mapped = PathStore::new();
        for (path, value) in self.entries.iter() {
            mapped.insert(path, f(value, path));
        }
        mapped
    }

    /// Build a new store holding only the entries for which `f` returns
    /// true, in the same order. `self` is left untouched.
    pub fn filter<F>(&self, mut f: F) -> PathStore<T>
    where
        T: Clone,
        F: FnMut(&T, &str) -> bool,
    {
        let mut filtered = PathStore::new();
        for (path, value) in self.entries.iter() {
            if f(value, path) {
                filtered.insert(path, value.clone());
            }
        }
        filtered
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for PathStore<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut store = PathStore::new();
        store.extend(iter);
        store
    }
}

/// Inserts every pair silently, then notifies once.
impl<K: Into<String>, T> Extend<(K, T)> for PathStore<T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (path, value) in iter {
            self.insert_with(path, value, UpdateOptions::silent());
        }
        self.notify();
    }
}
