//! The catalog entity model.
//!
//! [`LuxuryItem`] is the record the rest of the crate stores, paginates, and
//! notifies about. Items are produced through the
//! [`builder`](crate::builder) or [`factory`](crate::factory) so that the
//! price invariant (strictly positive, finite) holds for the lifetime of
//! every value; this module only defines the shapes.
//!
//! [`CatalogItem`] is the minimal trait the generic containers require: an
//! immutable string id plus name and price accessors. Any type implementing
//! it can live in a [`Store`](crate::store::Store).

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// The default brand applied when a caller does not supply one.
pub const DEFAULT_BRAND: &str = "LuxuryVista";

/// Material tags that deterministically upgrade jewelry to
/// [`Exclusivity::Exclusive`] at construction time.
pub const PRECIOUS_MATERIALS: &[&str] = &["diamond", "ruby", "emerald"];

/// How scarce an item is.
///
/// Serialized in lowercase (`"limited"`, `"standard"`, ...) to match the
/// wire format of the surrounding catalog services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exclusivity {
    /// Produced in a limited run.
    Limited,
    /// Regular catalog stock.
    #[default]
    Standard,
    /// Contains precious materials or is otherwise rare.
    Exclusive,
    /// Made to order for a single client.
    Bespoke,
}

impl Exclusivity {
    /// Derives the exclusivity level implied by a material list.
    ///
    /// Returns [`Exclusivity::Exclusive`] if any material matches a
    /// recognized precious-material tag (case-insensitive), otherwise
    /// [`Exclusivity::Standard`]. This is a pure construction-time rule; it
    /// is never re-evaluated after an item is built.
    ///
    /// # Example
    ///
    /// ```
    /// use vitrine::item::Exclusivity;
    ///
    /// let materials = vec!["gold".to_string(), "diamond".to_string()];
    /// assert_eq!(Exclusivity::for_materials(&materials), Exclusivity::Exclusive);
    /// assert_eq!(Exclusivity::for_materials(&[]), Exclusivity::Standard);
    /// ```
    pub fn for_materials(materials: &[String]) -> Self {
        let precious = materials.iter().any(|material| {
            PRECIOUS_MATERIALS
                .iter()
                .any(|marker| material.eq_ignore_ascii_case(marker))
        });

        if precious {
            Self::Exclusive
        } else {
            Self::Standard
        }
    }
}

/// The minimal shape the generic containers require of a stored record.
///
/// The id is the index key of [`Store`](crate::store::Store); it must be
/// unique within a store and must not change after insertion.
pub trait CatalogItem: Send + Sync {
    /// The item's unique, immutable identifier.
    fn id(&self) -> &str;

    /// The item's display name.
    fn name(&self) -> &str;

    /// The item's price. Always strictly positive for validated items.
    fn price(&self) -> f64;
}

/// A validated luxury catalog record.
///
/// Construct through [`LuxuryItemBuilder`](crate::builder::LuxuryItemBuilder)
/// or [`LuxuryItemFactory`](crate::factory::LuxuryItemFactory); the fields
/// are public for reading and in-place updates via
/// [`Store::update`](crate::store::Store::update), but the `id` must never be
/// reassigned once the item is inside a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuxuryItem {
    /// Unique identifier, assigned at construction.
    pub id: String,
    /// Display name. Non-empty.
    pub name: String,
    /// Strictly positive, finite price.
    pub price: f64,
    /// Free-form domain tag, e.g. `"jewelry"` or `"watches"`.
    pub category: String,
    /// Brand name; defaults to [`DEFAULT_BRAND`].
    pub brand: String,
    /// Materials in insertion order. May be empty.
    pub materials: Vec<String>,
    /// Scarcity level; defaults to [`Exclusivity::Standard`].
    pub exclusivity: Exclusivity,
}

impl CatalogItem for LuxuryItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }
}

/// Allocates the next process-wide item id.
///
/// Ids are unique within the process and stable for the lifetime of the
/// item. Callers integrating with an external id scheme use
/// [`LuxuryItemBuilder::with_id`](crate::builder::LuxuryItemBuilder::with_id)
/// instead.
pub(crate) fn next_item_id() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    format!("itm-{}", COUNTER.fetch_add(1, Ordering::Relaxed))
}

static_assertions::assert_impl_all!(LuxuryItem: Send, Sync);
