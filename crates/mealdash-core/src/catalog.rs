use crate::models::Category;
use crate::provider::CatalogProvider;

/// The in-memory category list backing the catalog screen
///
/// Loaded once from the remote provider; user-added entries go straight into
/// the list with no validation, and deletes filter by name. Nothing here is
/// persisted - the list lives for the session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the provider, falling back to an empty catalog on failure
    ///
    /// A failed fetch is logged, not surfaced: the screen simply renders an
    /// empty list and the loading indicator clears.
    pub async fn load_from(provider: &dyn CatalogProvider) -> Self {
        match provider.fetch_categories().await {
            Ok(categories) => {
                tracing::info!(count = categories.len(), "loaded catalog");
                Self { categories }
            }
            Err(e) => {
                tracing::error!("failed to load catalog: {}", e);
                Self::default()
            }
        }
    }

    /// Append a category; no uniqueness or URL checks by contract
    pub fn add(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Remove every category with this name
    pub fn delete(&mut self, name: &str) {
        self.categories.retain(|c| c.name != name);
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl From<Vec<Category>> for Catalog {
    fn from(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockCatalogProvider;
    use crate::Error;

    #[test]
    fn test_add_menu_grows_list_and_prices() {
        use crate::pricing::PricingTable;

        let mut catalog = Catalog::new();
        let mut pricing = PricingTable::empty();
        let before = catalog.len();

        // The "add menu" action: append the category and set its price
        catalog.add(Category::new("Lamb", "https://example.com/lamb.png", "Lamb dishes"));
        pricing.set_price("Lamb", "17.99");

        assert_eq!(catalog.len(), before + 1);
        assert_eq!(pricing.lookup("Lamb"), "$17.99");
    }

    #[test]
    fn test_delete_filters_by_name() {
        let mut catalog = Catalog::from(vec![
            Category::new("Seafood", "", ""),
            Category::new("Dessert", "", ""),
            Category::new("Seafood", "", ""),
        ]);

        catalog.delete("Seafood");

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().name, "Dessert");
    }

    #[tokio::test]
    async fn test_load_from_provider() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_fetch_categories().returning(|| {
            Ok(vec![
                Category::new("Beef", "", ""),
                Category::new("Chicken", "", ""),
            ])
        });

        let catalog = Catalog::load_from(&provider).await;
        assert_eq!(catalog.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_load_yields_empty_catalog() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_fetch_categories()
            .returning(|| Err(Error::CatalogError("connection refused".into())));

        let catalog = Catalog::load_from(&provider).await;
        assert!(catalog.is_empty());
    }
}
