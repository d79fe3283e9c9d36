//! Error types for the Vitrine model layer.
//!
//! The taxonomy deliberately splits three kinds of failure:
//!
//! - [`ValidationError`] — bad input at construction time, returned from the
//!   builder and factory.
//! - Not-found — never an error: store lookups return `Option`/`bool`.
//! - [`StoreError`] — structural failures of the collection itself, distinct
//!   from invalid input so callers can tell the two apart.

/// Errors raised when constructing an entity from invalid input.
///
/// Always returned from [`build`](crate::builder::LuxuryItemBuilder::build)
/// or the factory constructors; an invalid value never reaches a store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was never supplied.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// The price is not a strictly positive finite number.
    #[error("price must be a positive finite amount, got {price}")]
    InvalidPrice { price: f64 },

    /// A supplied field value is unusable (e.g. an empty name).
    #[error("invalid value for field '{field}': {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}

/// Structural errors of the collection, as opposed to invalid input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// An item with this id is already indexed.
    ///
    /// Silent duplicate ids would desynchronize the store's sequence and
    /// index, so insertion rejects them.
    #[error("an item with id '{id}' already exists in the store")]
    DuplicateId { id: String },
}
