//! Named constructors that bake in catalog classification rules.
//!
//! Each constructor is a pure function of its inputs: no hidden state, no
//! store interaction. They all delegate validation to
//! [`LuxuryItemBuilder`](crate::builder::LuxuryItemBuilder), so the price
//! invariant holds for factory-produced items too.

use crate::builder::LuxuryItemBuilder;
use crate::error::ValidationError;
use crate::item::{Exclusivity, LuxuryItem};

/// Price above which a watch is classified as a limited run.
pub const WATCH_LIMITED_THRESHOLD: f64 = 10_000.0;

/// Full field set for [`LuxuryItemFactory::create_custom`].
///
/// `brand` and `exclusivity` fall back to the builder defaults when `None`.
#[derive(Debug, Clone)]
pub struct CustomItemSpec {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub brand: Option<String>,
    pub materials: Vec<String>,
    pub exclusivity: Option<Exclusivity>,
}

/// Named constructors for the standard catalog categories.
pub struct LuxuryItemFactory;

impl LuxuryItemFactory {
    /// Creates a jewelry item.
    ///
    /// Category is fixed to `"jewelry"` and the brand to the default
    /// sentinel. Exclusivity is derived from the materials: any recognized
    /// precious-material tag upgrades the item to
    /// [`Exclusivity::Exclusive`].
    ///
    /// # Example
    ///
    /// ```
    /// use vitrine::factory::LuxuryItemFactory;
    /// use vitrine::item::Exclusivity;
    ///
    /// let necklace = LuxuryItemFactory::create_jewelry(
    ///     "Necklace",
    ///     20_000.0,
    ///     vec!["gold".to_string(), "diamond".to_string()],
    /// )
    /// .unwrap();
    /// assert_eq!(necklace.exclusivity, Exclusivity::Exclusive);
    /// ```
    pub fn create_jewelry(
        name: impl Into<String>,
        price: f64,
        materials: Vec<String>,
    ) -> Result<LuxuryItem, ValidationError> {
        let exclusivity = Exclusivity::for_materials(&materials);
        LuxuryItemBuilder::new()
            .with_name(name)
            .with_price(price)
            .with_category("jewelry")
            .with_materials(materials)
            .with_exclusivity(exclusivity)
            .build()
    }

    /// Creates a watch.
    ///
    /// Category is fixed to `"watches"` with a steel/sapphire-crystal
    /// material set. Watches priced above [`WATCH_LIMITED_THRESHOLD`] are
    /// classified [`Exclusivity::Limited`].
    pub fn create_watch(
        name: impl Into<String>,
        price: f64,
        brand: impl Into<String>,
    ) -> Result<LuxuryItem, ValidationError> {
        let exclusivity = if price > WATCH_LIMITED_THRESHOLD {
            Exclusivity::Limited
        } else {
            Exclusivity::Standard
        };
        LuxuryItemBuilder::new()
            .with_name(name)
            .with_price(price)
            .with_brand(brand)
            .with_category("watches")
            .with_materials(["steel", "sapphire crystal"])
            .with_exclusivity(exclusivity)
            .build()
    }

    /// Pass-through construction with full caller-supplied fields.
    ///
    /// No classification rules are applied, but the record is still subject
    /// to the same validation as every other item.
    pub fn create_custom(spec: CustomItemSpec) -> Result<LuxuryItem, ValidationError> {
        let mut builder = LuxuryItemBuilder::new()
            .with_name(spec.name)
            .with_price(spec.price)
            .with_category(spec.category)
            .with_materials(spec.materials);
        if let Some(brand) = spec.brand {
            builder = builder.with_brand(brand);
        }
        if let Some(exclusivity) = spec.exclusivity {
            builder = builder.with_exclusivity(exclusivity);
        }
        builder.build()
    }
}
