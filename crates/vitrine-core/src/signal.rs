//! Signal/subscription system for Vitrine.
//!
//! This module provides a type-safe publish/subscribe mechanism for change
//! notification. Signals are emitted by stores and controllers when their
//! state changes, and connected subscribers (callbacks) are invoked in
//! response.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The main signal type for emitting notifications
//! - [`SubscriptionId`] - Unique identifier returned when connecting a subscriber
//! - [`Subscription`] - RAII guard that disconnects when dropped
//!
//! # Delivery Model
//!
//! Emission is fully synchronous: `emit` invokes every subscriber in the
//! current thread before returning. Subscribers are invoked in subscription
//! order, and each emission pass operates on a snapshot of the subscriber
//! list taken when the pass begins. Connecting or disconnecting from inside
//! a subscriber therefore never affects which subscribers run in the current
//! pass, and never deadlocks.
//!
//! # Thread Safety
//!
//! `Signal<Args>` is `Send + Sync` and can be shared between threads behind
//! an `Arc`. There is no cross-thread queueing: a subscriber always runs on
//! whichever thread called `emit`.
//!
//! # Example
//!
//! ```
//! use vitrine_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let name_changed = Signal::<String>::new();
//!
//! // Connect a subscriber (closure)
//! let sub_id = name_changed.connect(|name| {
//!     println!("Name changed to: {}", name);
//! });
//!
//! // Emit the signal
//! name_changed.emit("Imperial Collection".to_string());
//!
//! // Disconnect when done
//! name_changed.disconnect(sub_id);
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::logging::targets;

/// A unique identifier for a signal subscription.
///
/// Use this ID to disconnect a specific subscriber via [`Signal::disconnect`].
/// The ID remains valid until the subscription is explicitly disconnected or
/// the signal is dropped. IDs are never reused within a signal.
///
/// # Related
///
/// - [`Signal::connect`] - Returns a `SubscriptionId`
/// - [`Signal::disconnect`] - Removes a subscription by ID
/// - [`Subscription`] - RAII alternative that auto-disconnects
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Internal storage for a single subscription.
struct Connection<Args> {
    id: SubscriptionId,
    /// The subscriber to invoke (Arc-wrapped so emission can run on a
    /// snapshot taken outside the lock).
    subscriber: Arc<dyn Fn(&Args) + Send + Sync>,
}

/// Shared subscriber list, ordered by subscription time.
///
/// Subscription order is part of the delivery contract, so this is a plain
/// `Vec` rather than a keyed map.
type ConnectionList<Args> = Arc<Mutex<Vec<Connection<Args>>>>;

/// A type-safe signal that can have multiple connected subscribers.
///
/// Signals are the core of the observer pattern in Vitrine. When a signal is
/// emitted, all connected subscribers are invoked with a shared reference to
/// the emitted value, in the order they subscribed.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to subscribers. Use `()` for signals
///   with no payload, or a tuple like `(String, usize)` for multiple values.
///
/// # Panics
///
/// A panic inside a subscriber is not isolated: it propagates out of `emit`
/// and aborts delivery to the remaining subscribers in that pass. Subscribers
/// are expected not to panic.
///
/// # Related Types
///
/// - [`SubscriptionId`] - Returned by [`connect`](Self::connect), used to disconnect
/// - [`Subscription`] - RAII-style subscription that auto-disconnects on drop
pub struct Signal<Args> {
    /// All active subscriptions, in subscription order.
    connections: ConnectionList<Args>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
    /// Source of unique, monotonically increasing subscription IDs.
    next_id: AtomicU64,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no subscribers.
    pub fn new() -> Self {
        Self {
            connections: Arc::new(Mutex::new(Vec::new())),
            blocked: AtomicBool::new(false),
            next_id: AtomicU64::new(0),
        }
    }

    /// Connect a subscriber (closure) to this signal.
    ///
    /// Returns a `SubscriptionId` that can be used to disconnect the
    /// subscriber later. Connecting the same closure twice yields two
    /// independent subscriptions, each with its own ID.
    ///
    /// # Example
    ///
    /// ```
    /// use vitrine_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Hello".to_string());
    /// ```
    pub fn connect<F>(&self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.connections.lock().push(Connection {
            id,
            subscriber: Arc::new(subscriber),
        });
        id
    }

    /// Connect a subscriber with automatic disconnection when the returned
    /// guard is dropped.
    ///
    /// The guard holds a shared handle to the subscriber list, so it remains
    /// valid even if it outlives the signal itself (dropping it then is a
    /// no-op).
    ///
    /// # Example
    ///
    /// ```
    /// use vitrine_core::Signal;
    /// use std::sync::atomic::{AtomicI32, Ordering};
    /// use std::sync::Arc;
    ///
    /// let signal = Signal::<i32>::new();
    /// let counter = Arc::new(AtomicI32::new(0));
    /// {
    ///     let counter_clone = counter.clone();
    ///     let _sub = signal.connect_scoped(move |&n| {
    ///         counter_clone.fetch_add(n, Ordering::SeqCst);
    ///     });
    ///     signal.emit(42); // counter = 42
    /// }
    /// signal.emit(43); // Nothing happens - subscription was dropped
    /// assert_eq!(counter.load(Ordering::SeqCst), 42);
    /// ```
    pub fn connect_scoped<F>(&self, subscriber: F) -> Subscription<Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(subscriber);
        Subscription {
            connections: Arc::clone(&self.connections),
            id,
        }
    }

    /// Disconnect a specific subscriber by its subscription ID.
    ///
    /// Returns `true` if the subscription was found and removed, `false`
    /// otherwise.
    pub fn disconnect(&self, id: SubscriptionId) -> bool {
        let mut connections = self.connections.lock();
        let before = connections.len();
        connections.retain(|conn| conn.id != id);
        connections.len() != before
    }

    /// Disconnect all subscribers from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected subscribers.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing. This is useful during
    /// initialization or batch updates to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected subscribers.
    ///
    /// If the signal is blocked, this does nothing. Otherwise every
    /// subscriber registered when the pass begins is invoked synchronously,
    /// in subscription order, each receiving a shared reference to `args`.
    ///
    /// The subscriber list is snapshotted before any subscriber runs, and
    /// the internal lock is released for the duration of the pass. A
    /// subscriber may therefore connect or disconnect (including itself)
    /// without deadlocking; such changes take effect from the next emission.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        // Snapshot the subscribers so the lock is not held across callbacks.
        let subscribers: Vec<Arc<dyn Fn(&Args) + Send + Sync>> = {
            let connections = self.connections.lock();
            connections
                .iter()
                .map(|conn| Arc::clone(&conn.subscriber))
                .collect()
        };

        tracing::trace!(
            target: targets::SIGNAL,
            connection_count = subscribers.len(),
            "emitting signal"
        );

        for subscriber in subscribers {
            subscriber(&args);
        }
    }
}

static_assertions::assert_impl_all!(Signal<Vec<String>>: Send, Sync);

/// A subscription guard that automatically disconnects when dropped.
///
/// This is useful for RAII-style subscription management, ensuring
/// subscriptions are cleaned up when the receiver goes out of scope.
/// Created via [`Signal::connect_scoped`].
///
/// The guard holds a shared handle to the signal's subscriber list rather
/// than a reference to the signal, so it may safely outlive the signal.
///
/// # Related
///
/// - [`Signal::connect_scoped`] - Creates a `Subscription`
/// - [`SubscriptionId`] - Manual subscription management alternative
pub struct Subscription<Args> {
    connections: ConnectionList<Args>,
    id: SubscriptionId,
}

impl<Args> Subscription<Args> {
    /// The ID of the underlying subscription.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl<Args> Drop for Subscription<Args> {
    fn drop(&mut self) {
        self.connections.lock().retain(|conn| conn.id != self.id);
    }
}
