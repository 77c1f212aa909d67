// Core business logic lives here - the brain of the operation
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod provider;

pub use cart::{CartStore, DecreaseOutcome};
pub use catalog::Catalog;
pub use config::Config;
pub use error::Error;
pub use models::{CartLine, Category};
pub use pricing::PricingTable;
pub use provider::{CatalogProvider, MealDbProvider};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
