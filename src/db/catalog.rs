use crate::{
    db::{
        models::{Product, RepairService, Testimonial},
        DbClient,
    },
    Result,
};
use diesel::{ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use tracing::{error, info};

/// Pseudo category meaning "no filter"
pub const ALL_CATEGORIES: &str = "All";

const PRODUCTS_CACHE_KEY: &str = "catalog:products";
const REPAIR_SERVICES_CACHE_KEY: &str = "catalog:repair_services";
const TESTIMONIALS_CACHE_KEY: &str = "catalog:testimonials";

/// DbClient helper functions for the read-only catalog tables
impl DbClient {
    /// Retrieves the products, optionally limited to one category
    pub async fn get_products(&self, category: Option<&str>) -> Result<Vec<Product>> {
        let all = self.get_all_products().await?;
        Ok(filter_by_category(all, category))
    }

    /// Retrieves a single product by id
    pub async fn get_product(&self, product_id: &str) -> Result<Option<Product>> {
        let all = self.get_all_products().await?;
        Ok(all.into_iter().find(|p| p.id == product_id))
    }

    /// Category names in catalog order, led by "All"
    pub async fn get_categories(&self) -> Result<Vec<String>> {
        let all = self.get_all_products().await?;
        Ok(categories_of(&all))
    }

    pub async fn get_repair_services(&self) -> Result<Vec<RepairService>> {
        self.cached(REPAIR_SERVICES_CACHE_KEY, || self.load_repair_services())
            .await
    }

    pub async fn get_testimonials(&self) -> Result<Vec<Testimonial>> {
        self.cached(TESTIMONIALS_CACHE_KEY, || self.load_testimonials())
            .await
    }

    async fn get_all_products(&self) -> Result<Vec<Product>> {
        self.cached(PRODUCTS_CACHE_KEY, || self.load_products()).await
    }

    async fn load_products(&self) -> Result<Vec<Product>> {
        use crate::schema::products::dsl::*;

        let conn = &mut self.get_db_conn().await?;
        info!("Loading product catalog");
        products
            .order(position.asc())
            .select(Product::as_select())
            .load::<Product>(conn)
            .await
            .map_err(|e| {
                error!("Failed to fetch products: {}", e);
                e.into()
            })
    }

    async fn load_repair_services(&self) -> Result<Vec<RepairService>> {
        use crate::schema::repair_services::dsl::*;

        let conn = &mut self.get_db_conn().await?;
        repair_services
            .order(position.asc())
            .select(RepairService::as_select())
            .load::<RepairService>(conn)
            .await
            .map_err(|e| {
                error!("Failed to fetch repair services: {}", e);
                e.into()
            })
    }

    async fn load_testimonials(&self) -> Result<Vec<Testimonial>> {
        use crate::schema::testimonials::dsl::*;

        let conn = &mut self.get_db_conn().await?;
        testimonials
            .order(position.asc())
            .select(Testimonial::as_select())
            .load::<Testimonial>(conn)
            .await
            .map_err(|e| {
                error!("Failed to fetch testimonials: {}", e);
                e.into()
            })
    }
}

/// Keeps the products of `category`; "All" or no category keeps everything
pub fn filter_by_category(products: Vec<Product>, category: Option<&str>) -> Vec<Product> {
    match category {
        Some(c) if !c.is_empty() && c != ALL_CATEGORIES => {
            products.into_iter().filter(|p| p.category == c).collect()
        }
        _ => products,
    }
}

/// Distinct categories in first-seen order, led by "All"
pub fn categories_of(products: &[Product]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            storage: "256GB".to_string(),
            condition: "Brand New".to_string(),
            price: "₦1,000,000".to_string(),
            image: String::new(),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product("1", "iPhone 15 Pro Max", "iPhones"),
            product("5", "Samsung Galaxy S24 Ultra", "Samsung"),
            product("9", "iPhone 12 Pro Max", "UK Used"),
            product("17", "MacBook Air M2", "Laptops"),
            product("18", "MacBook Pro 14\" M3", "Laptops"),
        ]
    }

    #[test]
    fn test_filter_by_category() {
        let laptops = filter_by_category(sample(), Some("Laptops"));
        assert_eq!(laptops.len(), 2);
        assert!(laptops.iter().all(|p| p.category == "Laptops"));

        assert_eq!(filter_by_category(sample(), Some("All")).len(), 5);
        assert_eq!(filter_by_category(sample(), None).len(), 5);
        assert_eq!(filter_by_category(sample(), Some("")).len(), 5);
        assert!(filter_by_category(sample(), Some("Tablets")).is_empty());
    }

    #[test]
    fn test_categories_of_keeps_catalog_order() {
        assert_eq!(
            categories_of(&sample()),
            vec!["All", "iPhones", "Samsung", "UK Used", "Laptops"]
        );
        assert_eq!(categories_of(&[]), vec!["All"]);
    }

    #[tokio::test]
    async fn test_get_products() {
        dotenv::dotenv().ok();
        let db_url = std::env::var("TEST_DATABASE_URL").unwrap();
        let redis_url = std::env::var("TEST_REDIS_URL").unwrap();
        let client = DbClient::new(&db_url, &redis_url).unwrap();

        let result = client.get_products(Some("Laptops")).await;
        assert!(result.is_ok());
        assert!(result.unwrap().iter().all(|p| p.category == "Laptops"));
    }

    #[tokio::test]
    async fn test_repair_service_icon_must_be_known() {
        use crate::schema::repair_services::dsl as rs;

        dotenv::dotenv().ok();
        let db_url = std::env::var("TEST_DATABASE_URL").unwrap();
        let redis_url = std::env::var("TEST_REDIS_URL").unwrap();
        let client = DbClient::new(&db_url, &redis_url).unwrap();
        let conn = &mut client.get_db_conn().await.unwrap();

        let inserted = diesel::insert_into(rs::repair_services)
            .values((
                rs::id.eq("icon-check"),
                rs::name.eq("Laser Engraving"),
                rs::description.eq("Not a real service"),
                rs::price_from.eq("₦1,000"),
                rs::icon.eq("laser"),
                rs::position.eq(99),
            ))
            .execute(conn)
            .await;
        assert!(inserted.is_err());

        let services = client.get_repair_services().await.unwrap();
        assert!(services.iter().all(|s| s.id != "icon-check"));
    }
}
