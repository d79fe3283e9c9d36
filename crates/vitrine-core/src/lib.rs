//! Core systems for Vitrine.
//!
//! This crate provides the foundational primitive of the Vitrine model layer:
//!
//! - **Signal/Subscription System**: Type-safe, synchronous change notification
//!
//! Signals are how Vitrine stores and list controllers report state changes to
//! the surfaces rendering them. Emission is synchronous and ordered: every
//! subscriber registered at the start of an emission pass is invoked exactly
//! once, in subscription order, before `emit` returns.
//!
//! # Signal Example
//!
//! ```
//! use vitrine_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a subscriber to handle the signal
//! let sub_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(sub_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{Signal, Subscription, SubscriptionId};
