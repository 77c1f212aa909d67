use serde::{Deserialize, Serialize};
use thiserror::Error;

const MEALDB_API_BASE: &str = "https://www.themealdb.com/api/json/v1/1";

#[derive(Error, Debug)]
pub enum MealDbError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Category not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MealDbError>;

pub struct MealDbClient {
    client: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new() -> Self {
        Self::with_base_url(MEALDB_API_BASE.to_string())
    }

    /// For pointing at a mirror or a test server
    pub fn with_base_url(base_url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("MealDash/0.1.0"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }

    /// Fetch the full category list
    pub async fn fetch_categories(&self) -> Result<Vec<MealDbCategory>> {
        let url = format!("{}/categories.php", self.base_url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MealDbError::RequestFailed(format!(
                "Status {}: {}",
                status, body
            )));
        }

        let payload: CategoriesResponse = response.json().await?;
        Ok(payload.categories)
    }

    /// Fetch the records belonging to one named category
    ///
    /// TheMealDB has no per-category endpoint for this shape, so we fetch the
    /// category list and filter by name, same as the upstream app behavior.
    pub async fn fetch_category_items(&self, name: &str) -> Result<Vec<MealDbCategory>> {
        let categories = self.fetch_categories().await?;

        let items: Vec<MealDbCategory> = categories
            .into_iter()
            .filter(|c| c.name == name)
            .collect();

        if items.is_empty() {
            tracing::debug!(category = name, "no items matched category");
        }

        Ok(items)
    }
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire model for a TheMealDB category record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDbCategory {
    #[serde(rename = "idCategory", default)]
    pub id: String,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumb: String,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    categories: Vec<MealDbCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "categories": [
            {
                "idCategory": "1",
                "strCategory": "Beef",
                "strCategoryThumb": "https://www.themealdb.com/images/category/beef.png",
                "strCategoryDescription": "Beef is the culinary name for meat from cattle."
            },
            {
                "idCategory": "8",
                "strCategory": "Seafood",
                "strCategoryThumb": "https://www.themealdb.com/images/category/seafood.png",
                "strCategoryDescription": "Seafood is any form of sea life regarded as food by humans."
            }
        ]
    }"#;

    #[test]
    fn test_decode_categories_response() {
        let payload: CategoriesResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(payload.categories.len(), 2);
        assert_eq!(payload.categories[0].name, "Beef");
        assert_eq!(payload.categories[1].name, "Seafood");
        assert!(payload.categories[1].thumb.contains("seafood.png"));
    }

    #[test]
    fn test_decode_tolerates_missing_optional_fields() {
        // Some mirrors drop the thumb/description fields entirely
        let raw = r#"{"categories": [{"strCategory": "Dessert"}]}"#;
        let payload: CategoriesResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.categories[0].name, "Dessert");
        assert!(payload.categories[0].thumb.is_empty());
        assert!(payload.categories[0].description.is_empty());
    }
}
