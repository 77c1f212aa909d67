use serde::{Deserialize, Serialize};

/// A meal category - the catalog's top-level browsing unit
///
/// Identity is the name: the pricing table keys on it and deletes filter by
/// it. Nothing enforces uniqueness when users add their own entries; that
/// matches the upstream behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub thumb_url: String,
    pub description: String,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        thumb_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            thumb_url: thumb_url.into(),
            description: description.into(),
        }
    }
}

/// One entry in the shopping cart
///
/// Quantity lives on the line itself, so there is no parallel array to keep
/// index-aligned with the cart. Never below 1: a decrement at 1 becomes a
/// removal, confirmed at the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub category: Category,
    /// Display price as resolved from the pricing table, e.g. "$25.99"
    pub price: String,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(category: Category, price: impl Into<String>) -> Self {
        Self {
            category,
            price: price.into(),
            quantity: 1,
        }
    }
}
