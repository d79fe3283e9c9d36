//! The notifying store: [`Store`] composed with a [`Signal`].
//!
//! Every successful mutation emits one immutable snapshot (a fresh clone of
//! the full sequence) to every subscriber, in subscription order. Subscribers
//! can never reach the store's internal sequence through the notified value.
//!
//! # Example
//!
//! ```
//! use vitrine::observable_store::LuxuryStore;
//! use vitrine::factory::LuxuryItemFactory;
//!
//! let store = LuxuryStore::new();
//! store.on_store_changed(|snapshot| {
//!     println!("catalog now holds {} items", snapshot.len());
//! });
//!
//! let ring = LuxuryItemFactory::create_jewelry("Ring", 1_200.0, vec![]).unwrap();
//! store.add(ring).unwrap(); // Subscriber prints "catalog now holds 1 items"
//! ```

use vitrine_core::logging::targets;
use vitrine_core::{Signal, Subscription, SubscriptionId};

use crate::error::StoreError;
use crate::item::CatalogItem;
use crate::store::Store;

/// A store whose mutations broadcast a snapshot of the full collection.
///
/// Semantics are exactly those of [`Store`], plus: `add`, `remove_by_id`,
/// and `update` emit the post-mutation snapshot when (and only when) they
/// actually changed the collection. Read paths never notify. Failed
/// mutations (duplicate id, missing id) emit nothing.
///
/// A snapshot delivered to a subscriber equals the result of
/// [`items`](Self::items) taken immediately after the mutation; a subscriber
/// never observes a partially applied change.
pub struct LuxuryStore<T = crate::item::LuxuryItem> {
    store: Store<T>,
    changed: Signal<Vec<T>>,
}

impl<T> Default for LuxuryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LuxuryStore<T> {
    /// Creates an empty observable store.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            changed: Signal::new(),
        }
    }

    /// Returns the number of items. Never notifies.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the store holds no items. Never notifies.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The change signal itself, for scoped subscriptions or blocking.
    pub fn changed(&self) -> &Signal<Vec<T>> {
        &self.changed
    }
}

impl<T: CatalogItem + Clone> LuxuryStore<T> {
    /// Subscribes to collection snapshots; returns the subscription id.
    ///
    /// Convenience wrapper over [`Signal::connect`] on
    /// [`changed`](Self::changed). Disconnect with
    /// [`Signal::disconnect`] or use
    /// [`on_store_changed_scoped`](Self::on_store_changed_scoped) for RAII
    /// cleanup.
    pub fn on_store_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Vec<T>) + Send + Sync + 'static,
    {
        self.changed.connect(callback)
    }

    /// Subscribes with automatic disconnection when the guard drops.
    pub fn on_store_changed_scoped<F>(&self, callback: F) -> Subscription<Vec<T>>
    where
        F: Fn(&Vec<T>) + Send + Sync + 'static,
    {
        self.changed.connect_scoped(callback)
    }

    /// Adds an item and broadcasts the new snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] (and emits nothing) if the id is
    /// already present.
    pub fn add(&self, item: T) -> Result<(), StoreError> {
        self.store.add(item)?;
        self.notify();
        Ok(())
    }

    /// Removes the item with the given id and broadcasts the new snapshot.
    ///
    /// Returns `false` (and emits nothing) if the id was absent.
    pub fn remove_by_id(&self, id: &str) -> bool {
        let removed = self.store.delete_by_id(id);
        if removed {
            self.notify();
        }
        removed
    }

    /// Mutates the item with the given id in place and broadcasts the new
    /// snapshot.
    ///
    /// Returns `false` (and emits nothing) if the id was absent. The closure
    /// must not reassign the item's id.
    pub fn update<F>(&self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let updated = self.store.update(id, f);
        if updated {
            self.notify();
        }
        updated
    }

    /// Returns an independent copy of the ordered sequence. Never notifies.
    pub fn items(&self) -> Vec<T> {
        self.store.get_all()
    }

    /// Returns a clone of the item with the given id. Never notifies.
    pub fn find_by_id(&self, id: &str) -> Option<T> {
        self.store.find_by_id(id)
    }

    /// Returns clones of all items matching the predicate. Never notifies.
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.store.filter(predicate)
    }

    /// Snapshot and emit. Called only after a successful mutation.
    fn notify(&self) {
        let snapshot = self.store.get_all();
        tracing::trace!(
            target: targets::OBSERVABLE_STORE,
            len = snapshot.len(),
            "broadcasting snapshot"
        );
        self.changed.emit(snapshot);
    }
}

static_assertions::assert_impl_all!(LuxuryStore<crate::item::LuxuryItem>: Send, Sync);
