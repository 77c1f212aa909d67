// API client for the remote meal catalog
pub mod mealdb;

// Re-export common types
pub use mealdb::{MealDbCategory, MealDbClient, MealDbError};
