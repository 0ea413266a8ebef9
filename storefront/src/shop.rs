//! Shop listing: concurrent catalog load, category mirroring and search.

use tracing::error;
use url::form_urlencoded;

use crate::client::Catalog;
use crate::models::{Product, ALL_CATEGORIES};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load products";

/// Query string of the shop page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShopQuery {
    pub category: Option<String>,
    pub search: String,
    /// Product whose quote form is open
    pub quote: Option<String>,
    /// Every parameter as received, in order
    pub params: Vec<(String, String)>,
}

impl ShopQuery {
    pub fn from_pairs(params: Vec<(String, String)>) -> Self {
        let value = |key: &str| {
            params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };

        Self {
            category: value("category").filter(|c| !c.is_empty()),
            search: value("q").unwrap_or_default(),
            quote: value("quote").filter(|q| !q.is_empty()),
            params,
        }
    }

    /// Category to filter by, `None` for "All"
    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| *c != ALL_CATEGORIES)
    }

    pub fn selected_category(&self) -> &str {
        self.category_filter().unwrap_or(ALL_CATEGORIES)
    }

    /// Query string selecting `category`, keeping the other parameters.
    /// "All" removes the parameter.
    pub fn with_category(&self, category: &str) -> String {
        self.replace_param("category", Some(category).filter(|c| *c != ALL_CATEGORIES))
    }

    /// Query string opening (or with `None`, closing) the quote form
    pub fn with_quote(&self, product_id: Option<&str>) -> String {
        self.replace_param("quote", product_id)
    }

    fn replace_param(&self, key: &str, value: Option<&str>) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let mut pending = value;

        for (k, v) in &self.params {
            if k != key {
                serializer.append_pair(k, v);
            } else if let Some(value) = pending.take() {
                serializer.append_pair(key, value);
            }
        }
        if let Some(value) = pending {
            serializer.append_pair(key, value);
        }

        serializer.finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing {
    Loading,
    Loaded {
        products: Vec<Product>,
        categories: Vec<String>,
    },
    Error,
}

#[derive(Clone, Debug)]
pub struct ShopView {
    pub query: ShopQuery,
    pub listing: Listing,
}

impl ShopView {
    pub fn new(query: ShopQuery) -> Self {
        Self {
            query,
            listing: Listing::Loading,
        }
    }

    /// Fetches products and categories concurrently
    pub async fn load<C: Catalog + ?Sized>(mut self, catalog: &C) -> Self {
        let category = self.query.category_filter();
        self.listing = match tokio::try_join!(catalog.products(category), catalog.categories()) {
            Ok((products, categories)) => Listing::Loaded {
                products,
                categories,
            },
            Err(e) => {
                error!("Error fetching products: {}", e);
                Listing::Error
            }
        };
        self
    }

    pub fn categories(&self) -> &[String] {
        match &self.listing {
            Listing::Loaded { categories, .. } => categories,
            _ => &[],
        }
    }

    /// Loaded products matching the search term
    pub fn visible_products(&self) -> Vec<&Product> {
        match &self.listing {
            Listing::Loaded { products, .. } => products
                .iter()
                .filter(|p| matches_search(p, &self.query.search))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Loaded product whose quote form is open
    pub fn quote_product(&self) -> Option<&Product> {
        let id = self.query.quote.as_deref()?;
        match &self.listing {
            Listing::Loaded { products, .. } => products.iter().find(|p| p.id == id),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        matches!(self.listing, Listing::Error).then_some(LOAD_FAILED_MESSAGE)
    }
}

/// Case-insensitive substring match on name or category
pub fn matches_search(product: &Product, term: &str) -> bool {
    let term = term.to_lowercase();
    product.name.to_lowercase().contains(&term) || product.category.to_lowercase().contains(&term)
}


#[cfg(test)]
mod tests {
    use super::test_support::{product, StubCatalog};
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> ShopQuery {
        ShopQuery::from_pairs(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_selecting_laptops() {
        let catalog = StubCatalog::new();
        let href = query(&[]).with_category("Laptops");
        assert_eq!(href, "category=Laptops");

        let view = ShopView::new(query(&[("category", "Laptops")]))
            .load(&catalog)
            .await;

        assert_eq!(catalog.fetches(), vec![Some("Laptops".to_string())]);
        let names: Vec<&str> = view.visible_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["MacBook Pro 14\" M3", "Dell XPS 13"]);
        assert_eq!(view.query.selected_category(), "Laptops");
    }

    #[tokio::test]
    async fn test_all_category_fetches_unfiltered() {
        let catalog = StubCatalog::new();
        let view = ShopView::new(query(&[("category", "All")])).load(&catalog).await;

        assert_eq!(catalog.fetches(), vec![None]);
        assert_eq!(view.visible_products().len(), 5);
        assert_eq!(view.categories()[0], "All");
    }

    #[tokio::test]
    async fn test_search_filters_loaded_list_without_fetching() {
        let catalog = StubCatalog::new();
        let view = ShopView::new(query(&[("q", "LAPTOP")])).load(&catalog).await;

        assert_eq!(view.visible_products().len(), 2);
        assert_eq!(catalog.fetches().len(), 1);

        let view = ShopView {
            query: query(&[("q", "galaxy")]),
            ..view
        };
        let names: Vec<&str> = view.visible_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Samsung Galaxy S24 Ultra"]);
        assert_eq!(catalog.fetches().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_is_empty_with_notice() {
        let view = ShopView::new(query(&[])).load(&StubCatalog::unavailable()).await;

        assert_eq!(view.listing, Listing::Error);
        assert!(view.visible_products().is_empty());
        assert_eq!(view.notice(), Some("Failed to load products"));
    }

    #[test]
    fn test_category_mirroring_keeps_other_params() {
        let current = query(&[("q", "pro"), ("category", "iPhones")]);
        assert_eq!(current.with_category("UK Used"), "q=pro&category=UK+Used");
        assert_eq!(current.with_category("All"), "q=pro");
        assert_eq!(query(&[]).with_category("All"), "");
    }

    #[test]
    fn test_quote_param_round_trip() {
        let current = query(&[("category", "Laptops")]);
        assert_eq!(current.with_quote(Some("5")), "category=Laptops&quote=5");

        let open = query(&[("category", "Laptops"), ("quote", "5")]);
        assert_eq!(open.with_quote(None), "category=Laptops");
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        let airpods = product("4", "AirPods Pro 2", "Accessories");
        assert!(matches_search(&airpods, "airpods"));
        assert!(matches_search(&airpods, "ACCESS"));
        assert!(matches_search(&airpods, ""));
        assert!(!matches_search(&airpods, "iphone"));
    }

    #[tokio::test]
    async fn test_quote_product_comes_from_loaded_list() {
        let view = ShopView::new(query(&[("quote", "4")]))
            .load(&StubCatalog::new())
            .await;
        assert_eq!(view.quote_product().map(|p| p.name.as_str()), Some("AirPods Pro 2"));
    }
}
