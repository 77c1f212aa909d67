use async_trait::async_trait;
use mealdash_api::{MealDbCategory, MealDbClient};

use crate::{models::Category, Error, Result};

/// Trait for catalog sources - makes testing easier and keeps things flexible
///
/// The app only ever talks to this seam; the concrete TheMealDB client hides
/// behind it so tests can swap in a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// List every category the source knows about
    async fn fetch_categories(&self) -> Result<Vec<Category>>;

    /// List the records within one named category
    async fn fetch_category_items(&self, name: &str) -> Result<Vec<Category>>;
}

/// Wrapper around MealDbClient that implements CatalogProvider
pub struct MealDbProvider {
    client: MealDbClient,
}

impl MealDbProvider {
    pub fn new() -> Self {
        Self {
            client: MealDbClient::new(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: MealDbClient::with_base_url(base_url),
        }
    }
}

impl Default for MealDbProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogProvider for MealDbProvider {
    async fn fetch_categories(&self) -> Result<Vec<Category>> {
        let records = self
            .client
            .fetch_categories()
            .await
            .map_err(|e| Error::CatalogError(e.to_string()))?;

        Ok(records.into_iter().map(mealdb_to_category).collect())
    }

    async fn fetch_category_items(&self, name: &str) -> Result<Vec<Category>> {
        let records = self
            .client
            .fetch_category_items(name)
            .await
            .map_err(|e| Error::CatalogError(e.to_string()))?;

        Ok(records.into_iter().map(mealdb_to_category).collect())
    }
}

/// Convert a TheMealDB wire record to our internal Category model
fn mealdb_to_category(record: MealDbCategory) -> Category {
    Category {
        name: record.name,
        thumb_url: record.thumb,
        description: record.description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_record_conversion() {
        let record = MealDbCategory {
            id: "8".into(),
            name: "Seafood".into(),
            thumb: "https://www.themealdb.com/images/category/seafood.png".into(),
            description: "Seafood is any form of sea life.".into(),
        };

        let category = mealdb_to_category(record);
        assert_eq!(category.name, "Seafood");
        assert!(category.thumb_url.ends_with("seafood.png"));
        // The wire id is dropped: the name is the identity everywhere
    }
}
