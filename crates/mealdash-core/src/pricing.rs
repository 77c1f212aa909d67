use std::collections::HashMap;

/// Price shown for any category the table doesn't know about
pub const FALLBACK_PRICE: &str = "$13.99";

/// Mutable category-name-to-price mapping
///
/// Lookups are total: unmapped names resolve to [`FALLBACK_PRICE`] instead of
/// failing. Writes accept anything - no numeric validation, the raw input is
/// stored with a `$` prefix as given. Malformed prices later resolve to 0 in
/// total computation, which is tolerated upstream behavior, not a bug to fix.
#[derive(Debug, Clone)]
pub struct PricingTable {
    prices: HashMap<String, String>,
}

impl PricingTable {
    /// Empty table - every lookup hits the fallback
    pub fn empty() -> Self {
        Self {
            prices: HashMap::new(),
        }
    }

    /// The default menu prices
    pub fn with_default_menu() -> Self {
        let mut table = Self::empty();
        for (name, price) in [
            ("Seafood", "$25.99"),
            ("Vegetarian", "$15.99"),
            ("Dessert", "$12.99"),
            ("Beef", "$30.99"),
            ("Chicken", "$20.99"),
            ("Pasta", "$18.99"),
            ("Pork", "$29.99"),
            ("Breakfast", "$10.99"),
            ("Lamb", "$17.99"),
        ] {
            table.prices.insert(name.to_string(), price.to_string());
        }
        table
    }

    /// Resolve a display price for a category name, falling back when unmapped
    pub fn lookup(&self, name: &str) -> &str {
        self.prices
            .get(name)
            .map(String::as_str)
            .unwrap_or(FALLBACK_PRICE)
    }

    /// Store `"$" + raw` for a name, unconditionally
    pub fn set_price(&mut self, name: impl Into<String>, raw: &str) {
        self.prices.insert(name.into(), format!("${}", raw));
    }

    /// Current price without the leading `$`, for pre-filling edit forms
    pub fn raw_price(&self, name: &str) -> String {
        self.prices
            .get(name)
            .map(|p| p.trim_start_matches('$').to_string())
            .unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.prices.contains_key(name)
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::with_default_menu()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_category() {
        let table = PricingTable::with_default_menu();
        assert_eq!(table.lookup("Seafood"), "$25.99");
        assert_eq!(table.lookup("Breakfast"), "$10.99");
    }

    #[test]
    fn test_lookup_unmapped_returns_fallback() {
        let table = PricingTable::with_default_menu();
        assert_eq!(table.lookup("Goat"), FALLBACK_PRICE);
        assert_eq!(table.lookup(""), FALLBACK_PRICE);

        let empty = PricingTable::empty();
        assert_eq!(empty.lookup("Seafood"), FALLBACK_PRICE);
    }

    #[test]
    fn test_set_price_overwrites() {
        let mut table = PricingTable::with_default_menu();
        table.set_price("Seafood", "19.99");
        assert_eq!(table.lookup("Seafood"), "$19.99");
    }

    #[test]
    fn test_set_price_accepts_anything() {
        // No validation by contract: garbage in, garbage stored
        let mut table = PricingTable::empty();
        table.set_price("Mystery", "not a number");
        assert_eq!(table.lookup("Mystery"), "$not a number");

        table.set_price("Free", "");
        assert_eq!(table.lookup("Free"), "$");
    }

    #[test]
    fn test_raw_price_strips_dollar_sign() {
        let mut table = PricingTable::empty();
        table.set_price("Pasta", "18.99");
        assert_eq!(table.raw_price("Pasta"), "18.99");
        // Unmapped names pre-fill as empty, not as the fallback
        assert_eq!(table.raw_price("Goat"), "");
    }
}
