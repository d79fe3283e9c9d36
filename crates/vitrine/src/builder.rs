//! Fluent, validating construction of [`LuxuryItem`] values.
//!
//! The builder accumulates a partial record through chained `with_*` calls
//! and validates the whole record once, at [`build`](LuxuryItemBuilder::build).
//! Construction is the only place the price invariant is checked; every
//! `LuxuryItem` that exists was either built here or through the
//! [`factory`](crate::factory), which delegates to the same rules.
//!
//! # Example
//!
//! ```
//! use vitrine::builder::LuxuryItemBuilder;
//! use vitrine::item::Exclusivity;
//!
//! let ring = LuxuryItemBuilder::new()
//!     .with_name("Ring")
//!     .with_price(1000.0)
//!     .with_category("jewelry")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(ring.brand, "LuxuryVista");
//! assert_eq!(ring.exclusivity, Exclusivity::Standard);
//! assert!(ring.materials.is_empty());
//! ```

use crate::error::ValidationError;
use crate::item::{next_item_id, Exclusivity, LuxuryItem, DEFAULT_BRAND};

/// Staged builder for [`LuxuryItem`].
///
/// Required fields: name, price, category. Everything else has a default:
/// empty materials, [`DEFAULT_BRAND`], [`Exclusivity::Standard`], and a
/// process-unique generated id.
///
/// The builder is consumed by [`build`](Self::build); construct a fresh one
/// per item.
#[derive(Debug, Clone, Default)]
pub struct LuxuryItemBuilder {
    id: Option<String>,
    name: Option<String>,
    price: Option<f64>,
    category: Option<String>,
    brand: Option<String>,
    materials: Vec<String>,
    exclusivity: Option<Exclusivity>,
}

impl LuxuryItemBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the generated id with an externally assigned one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the display name. Required; must be non-empty.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the price. Required; must be finite and strictly positive.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the category tag. Required.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the brand. Defaults to [`DEFAULT_BRAND`] when omitted.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Sets the material list. Defaults to empty; insertion order is kept.
    pub fn with_materials<I, S>(mut self, materials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.materials = materials.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the exclusivity level. Defaults to [`Exclusivity::Standard`].
    pub fn with_exclusivity(mut self, exclusivity: Exclusivity) -> Self {
        self.exclusivity = Some(exclusivity);
        self
    }

    /// Validates the accumulated record and produces the item.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingField`] naming the first absent required
    ///   field (`name`, `price`, or `category`)
    /// - [`ValidationError::InvalidField`] for an empty name
    /// - [`ValidationError::InvalidPrice`] if the price is non-positive,
    ///   NaN, or infinite
    pub fn build(self) -> Result<LuxuryItem, ValidationError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        if name.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "name",
                message: "name must not be empty".to_string(),
            });
        }

        let price = self.price.ok_or(ValidationError::MissingField("price"))?;
        if !price.is_finite() || price <= 0.0 {
            return Err(ValidationError::InvalidPrice { price });
        }

        let category = self
            .category
            .ok_or(ValidationError::MissingField("category"))?;

        Ok(LuxuryItem {
            id: self.id.unwrap_or_else(next_item_id),
            name,
            price,
            category,
            brand: self.brand.unwrap_or_else(|| DEFAULT_BRAND.to_string()),
            materials: self.materials,
            exclusivity: self.exclusivity.unwrap_or_default(),
        })
    }
}
