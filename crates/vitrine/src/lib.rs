//! Vitrine - an observable catalog model layer with virtualized pagination.
//!
//! Vitrine is the in-memory data layer backing a catalog UI: a validated
//! entity model, a generic indexed collection, change notification, and a
//! page-windowed list controller. It is single-process and synchronous —
//! every operation runs to completion before returning, and subscribers see
//! one consistent snapshot per mutation.
//!
//! # Components
//!
//! - [`item`] — the entity model: [`LuxuryItem`](item::LuxuryItem), the
//!   [`CatalogItem`](item::CatalogItem) trait, and the exclusivity rules
//! - [`builder`] — fluent, validating construction
//! - [`factory`] — named constructors with category defaults
//! - [`store`] — generic indexed collection, no notification
//! - [`observable_store`] — store + signal: every mutation broadcasts a
//!   snapshot
//! - [`paginator`] — the page window and the UI-facing
//!   [`VirtualList`](paginator::VirtualList) controller
//!
//! # Example
//!
//! ```
//! use vitrine::prelude::*;
//!
//! let store = LuxuryStore::new();
//! store.on_store_changed(|snapshot| {
//!     println!("{} items in the catalog", snapshot.len());
//! });
//!
//! let necklace = LuxuryItemFactory::create_jewelry(
//!     "Necklace",
//!     20_000.0,
//!     vec!["gold".to_string(), "diamond".to_string()],
//! )?;
//! assert_eq!(necklace.exclusivity, Exclusivity::Exclusive);
//!
//! store.add(necklace)?;
//!
//! let list = VirtualList::new(store.items(), |item: &LuxuryItem| item.name.clone())
//!     .with_key_extractor(|item, _| item.id.clone());
//! assert_eq!(list.visible_rows().len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Data flow
//!
//! ```text
//! ┌────────────┐  mutation  ┌─────────────┐  snapshot  ┌─────────────┐
//! │ UI surface │───────────>│ LuxuryStore │───────────>│ subscribers │
//! └────────────┘            └─────────────┘            └──────┬──────┘
//!                                                             │ set_items
//!                                                      ┌──────▼──────┐
//!                                                      │ VirtualList │
//!                                                      └─────────────┘
//! ```
//!
//! The store applies the mutation, the signal broadcasts the new snapshot in
//! subscription order, and any bound list controller recomputes its visible
//! window from the data it is handed.

pub use vitrine_core::{Signal, Subscription, SubscriptionId};

pub mod builder;
pub mod error;
pub mod factory;
pub mod item;
pub mod observable_store;
pub mod paginator;
pub mod prelude;
pub mod store;

pub use builder::LuxuryItemBuilder;
pub use error::{StoreError, ValidationError};
pub use factory::{CustomItemSpec, LuxuryItemFactory};
pub use item::{CatalogItem, Exclusivity, LuxuryItem};
pub use observable_store::LuxuryStore;
pub use paginator::{PageControls, Paginator, Row, VirtualList};
pub use store::Store;
