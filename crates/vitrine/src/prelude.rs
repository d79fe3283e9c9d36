//! Prelude module for Vitrine.
//!
//! This module re-exports the most commonly used types for convenient
//! importing:
//!
//! ```
//! use vitrine::prelude::*;
//! ```

// ============================================================================
// Entity Model
// ============================================================================

pub use crate::item::{CatalogItem, Exclusivity, LuxuryItem};

// ============================================================================
// Construction
// ============================================================================

pub use crate::builder::LuxuryItemBuilder;
pub use crate::factory::{CustomItemSpec, LuxuryItemFactory};

// ============================================================================
// Collections
// ============================================================================

pub use crate::observable_store::LuxuryStore;
pub use crate::store::Store;

// ============================================================================
// Pagination
// ============================================================================

pub use crate::paginator::{PageControls, Paginator, Row, VirtualList};

// ============================================================================
// Signals and Errors
// ============================================================================

pub use crate::error::{StoreError, ValidationError};
pub use vitrine_core::{Signal, Subscription, SubscriptionId};
