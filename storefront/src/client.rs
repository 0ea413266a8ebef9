// Gadget Haven API client

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::net::IpAddr;

use crate::errors::StorefrontError;
use crate::models::{Product, RepairService, Testimonial, ALL_CATEGORIES};
use crate::Result;

/// Read side of the API used by the page views
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Products of a category, `None` or "All" lists every product
    async fn products(&self, category: Option<&str>) -> Result<Vec<Product>>;
    async fn product(&self, product_id: &str) -> Result<Product>;
    async fn categories(&self) -> Result<Vec<String>>;
    async fn testimonials(&self) -> Result<Vec<Testimonial>>;
    async fn repair_services(&self) -> Result<Vec<RepairService>>;
}

/// Destination of lead submissions
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// POSTs one lead payload to `endpoint` (e.g. `/contact`)
    async fn submit_lead(&self, endpoint: &str, payload: Value) -> Result<()>;
}

tokio::task_local! {
    static VISITOR: IpAddr;
}

/// Runs `request` with API calls forwarding `visitor` as the client address,
/// so the API rate limits each visitor on its own
pub async fn serve_visitor<F: Future>(visitor: IpAddr, request: F) -> F::Output {
    VISITOR.scope(visitor, request).await
}

pub(crate) fn current_visitor() -> Option<IpAddr> {
    VISITOR.try_with(|visitor| *visitor).ok()
}

pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let request = self.client.request(method, self.url(path));
        match current_visitor() {
            Some(visitor) => request.header("X-Forwarded-For", visitor.to_string()),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let response = self
            .request(reqwest::Method::GET, path)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("GET {} failed with status {}", path, status);
            return Err(StorefrontError::Status(status.as_u16()));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl Catalog for ApiClient {
    async fn products(&self, category: Option<&str>) -> Result<Vec<Product>> {
        match category.filter(|c| *c != ALL_CATEGORIES) {
            Some(category) => self.get_json("/products", &[("category", category)]).await,
            None => self.get_json("/products", &[]).await,
        }
    }

    async fn product(&self, product_id: &str) -> Result<Product> {
        self.get_json(&format!("/products/{}", product_id), &[]).await
    }

    async fn categories(&self) -> Result<Vec<String>> {
        self.get_json("/categories", &[]).await
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>> {
        self.get_json("/testimonials", &[]).await
    }

    async fn repair_services(&self) -> Result<Vec<RepairService>> {
        self.get_json("/repair-services", &[]).await
    }
}

#[async_trait]
impl LeadSink for ApiClient {
    async fn submit_lead(&self, endpoint: &str, payload: Value) -> Result<()> {
        let response = self
            .request(reqwest::Method::POST, endpoint)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("POST {} failed with status {}", endpoint, status);
            return Err(StorefrontError::Status(status.as_u16()));
        }
        Ok(())
    }
}
