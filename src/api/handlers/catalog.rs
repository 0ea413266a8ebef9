use crate::db::models::{ErrorResponse, Product, ProductsQuery, RepairService, Testimonial};
use crate::db::DbClient;
use crate::errors::ErrorMessages;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info};

type CatalogResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

fn unexpected() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(ErrorMessages::Unexpected.to_string())),
    )
}

/// Handler for listing products
///
/// # Endpoint: GET /api/products?category=<name>
///
/// "All" or a missing category returns the full catalog.
pub(crate) async fn get_products(
    State(db): State<DbClient>,
    Query(query): Query<ProductsQuery>,
) -> CatalogResult<Vec<Product>> {
    match db.get_products(query.category.as_deref()).await {
        Ok(products) => {
            info!(
                "Returning {} products for category {:?}",
                products.len(),
                query.category
            );
            Ok(Json(products))
        }
        Err(err) => {
            error!("Failed to fetch products: {}", err);
            Err(unexpected())
        }
    }
}

/// Handler for a single product
///
/// # Endpoint: GET /api/products/:product_id
pub(crate) async fn get_product(
    State(db): State<DbClient>,
    Path(product_id): Path<String>,
) -> CatalogResult<Product> {
    match db.get_product(&product_id).await {
        Ok(Some(product)) => Ok(Json(product)),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(ErrorMessages::ProductNotFound.to_string())),
        )),
        Err(err) => {
            error!("Failed to fetch product {}: {}", product_id, err);
            Err(unexpected())
        }
    }
}

/// # Endpoint: GET /api/categories
pub(crate) async fn get_categories(State(db): State<DbClient>) -> CatalogResult<Vec<String>> {
    db.get_categories().await.map(Json).map_err(|err| {
        error!("Failed to fetch categories: {}", err);
        unexpected()
    })
}

/// # Endpoint: GET /api/repair-services
pub(crate) async fn get_repair_services(
    State(db): State<DbClient>,
) -> CatalogResult<Vec<RepairService>> {
    db.get_repair_services().await.map(Json).map_err(|err| {
        error!("Failed to fetch repair services: {}", err);
        unexpected()
    })
}

/// # Endpoint: GET /api/testimonials
pub(crate) async fn get_testimonials(State(db): State<DbClient>) -> CatalogResult<Vec<Testimonial>> {
    db.get_testimonials().await.map(Json).map_err(|err| {
        error!("Failed to fetch testimonials: {}", err);
        unexpected()
    })
}
