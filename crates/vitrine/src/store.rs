//! Generic indexed collection with O(1) id lookup.
//!
//! [`Store<T>`] keeps two structures in lockstep behind a single lock: an
//! ordered arena (`Vec<T>`, sequence order is significant) and a hash index
//! from item id to arena position. Every mutation updates both under the
//! same write lock, so the pair can never disagree on membership.
//!
//! The store performs no change notification; see
//! [`LuxuryStore`](crate::observable_store::LuxuryStore) for the notifying
//! composition.
//!
//! # Example
//!
//! ```
//! use vitrine::store::Store;
//! use vitrine::factory::LuxuryItemFactory;
//!
//! let store = Store::new();
//! let ring = LuxuryItemFactory::create_jewelry("Ring", 1_200.0, vec![]).unwrap();
//! let id = ring.id.clone();
//!
//! store.add(ring).unwrap();
//! assert!(store.find_by_id(&id).is_some());
//! assert!(store.delete_by_id(&id));
//! assert!(store.find_by_id(&id).is_none());
//! ```

use std::collections::HashMap;

use parking_lot::RwLock;
use vitrine_core::logging::targets;

use crate::error::StoreError;
use crate::item::CatalogItem;

/// The sequence/index pair. Only ever touched under the outer lock.
struct StoreInner<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> StoreInner<T> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

/// A generic, synchronous collection with ordered iteration and O(1) id
/// lookup.
///
/// Methods take `&self`; interior mutability lets one store back several UI
/// surfaces behind an `Arc`. All operations run to completion before
/// returning, and no lock is ever held across caller code.
///
/// # Failure semantics
///
/// Absence of a record is an expected condition reported through the return
/// value (`Option` / `bool`), never an error. The only error the store
/// raises is [`StoreError::DuplicateId`] on insertion, which would otherwise
/// corrupt the sequence/index pair.
pub struct Store<T> {
    inner: RwLock<StoreInner<T>>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Store<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::new()),
        }
    }

    /// Returns the number of items in the store.
    pub fn len(&self) -> usize {
        self.inner.read().items.len()
    }

    /// Returns `true` if the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.inner.read().items.is_empty()
    }
}

impl<T: CatalogItem> Store<T> {
    /// Appends an item to the sequence and indexes it by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] without modifying the store if an
    /// item with the same id is already present.
    pub fn add(&self, item: T) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        let id = item.id().to_string();
        if inner.index.contains_key(&id) {
            tracing::debug!(target: targets::STORE, %id, "rejected duplicate id");
            return Err(StoreError::DuplicateId { id });
        }

        let position = inner.items.len();
        inner.items.push(item);
        inner.index.insert(id.clone(), position);
        tracing::debug!(target: targets::STORE, %id, position, "added item");
        Ok(())
    }

    /// Returns whether an item with this id is present.
    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().index.contains_key(id)
    }

    /// Removes the item with the given id from both the sequence and the
    /// index.
    ///
    /// Returns `false` if the id was absent. Positions of items after the
    /// removed one shift down by one; the index is fixed up accordingly.
    pub fn delete_by_id(&self, id: &str) -> bool {
        let mut inner = self.inner.write();
        let Some(position) = inner.index.remove(id) else {
            return false;
        };

        inner.items.remove(position);
        for slot in inner.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        tracing::debug!(target: targets::STORE, %id, position, "deleted item");
        true
    }

    /// Mutates the item with the given id in place.
    ///
    /// This is the partial-update primitive: the closure receives the stored
    /// item and changes whichever fields it wants, preserving the item's
    /// identity. Returns `false` (and never runs the closure) if the id is
    /// absent.
    ///
    /// The closure must not reassign the item's id; the id is the index key.
    pub fn update<F>(&self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let mut inner = self.inner.write();
        let Some(&position) = inner.index.get(id) else {
            return false;
        };

        f(&mut inner.items[position]);
        debug_assert_eq!(
            inner.items[position].id(),
            id,
            "update closure must not change the item id"
        );
        tracing::debug!(target: targets::STORE, %id, "updated item");
        true
    }
}

impl<T: CatalogItem + Clone> Store<T> {
    /// Returns a clone of the item with the given id, or `None`.
    ///
    /// A missing id is not an error.
    pub fn find_by_id(&self, id: &str) -> Option<T> {
        let inner = self.inner.read();
        inner
            .index
            .get(id)
            .map(|&position| inner.items[position].clone())
    }

    /// Returns clones of all items matching the predicate, in sequence
    /// order. The store is not modified.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.inner
            .read()
            .items
            .iter()
            .filter(|&item| predicate(item))
            .cloned()
            .collect()
    }

    /// Returns an independent copy of the ordered sequence.
    ///
    /// Mutating the returned vector never affects the store. Two calls
    /// without an intervening mutation return equal vectors.
    pub fn get_all(&self) -> Vec<T> {
        self.inner.read().items.clone()
    }
}

static_assertions::assert_impl_all!(Store<crate::item::LuxuryItem>: Send, Sync);
