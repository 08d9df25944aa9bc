use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::domain::{
    ApiInfo, Department, DepartmentDetail, DepartmentId, Product, ProductId, ProductPage,
};

pub mod config;
pub mod error;
pub mod listing;
pub mod observe;
pub mod views;

pub use config::ClientConfig;
pub use error::ClientError;
pub use listing::{
    fetch_listing, ListingFetch, ListingMode, ListingQuery, ListingState, ListingStatus, PAGE_SIZE,
};
pub use observe::{RequestObserver, TracingObserver};
pub use views::FetchView;

/// The catalog API surface the front ends consume. `CatalogClient` is the
/// HTTP implementation; tests substitute stubs.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_products(&self, page: u32, page_size: u32) -> Result<ProductPage, ClientError>;
    async fn search_products(
        &self,
        term: &str,
        page: u32,
        page_size: u32,
    ) -> Result<ProductPage, ClientError>;
    async fn product_by_id(&self, id: ProductId) -> Result<Product, ClientError>;
    async fn departments(&self) -> Result<Vec<Department>, ClientError>;
    async fn department_by_id(&self, id: DepartmentId) -> Result<DepartmentDetail, ClientError>;
    async fn api_info(&self) -> Result<ApiInfo, ClientError>;
}

/// HTTP client for the catalog API. Base URL and timeout come from an
/// explicit [`ClientConfig`]; request hooks are attached per instance.
pub struct CatalogClient {
    http: Client,
    base_url: String,
    observer: Arc<dyn RequestObserver>,
}

impl CatalogClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| ClientError::Config(err.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            observer: Arc::new(TracingObserver),
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shared GET path: observer hooks, 404 mapping when `not_found` names
    /// the resource, error-body normalization for other non-2xx statuses.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &'static str,
        not_found: Option<&'static str>,
    ) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.base_url);
        self.observer.on_request("GET", &url);

        let response = match self.http.get(&url).query(query).send().await {
            Ok(response) => response,
            Err(err) => {
                let err = ClientError::from_transport(&err, fallback);
                self.observer.on_error(&url, &err);
                return Err(err);
            }
        };

        let status = response.status();
        self.observer.on_response(&url, status.as_u16());

        if status == StatusCode::NOT_FOUND {
            if let Some(what) = not_found {
                let err = ClientError::NotFound { what };
                self.observer.on_error(&url, &err);
                return Err(err);
            }
        }

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let err = ClientError::from_status(status.as_u16(), &body, fallback);
            self.observer.on_error(&url, &err);
            return Err(err);
        }

        match response.json::<T>().await {
            Ok(value) => Ok(value),
            Err(err) => {
                let err = ClientError::from_transport(&err, fallback);
                self.observer.on_error(&url, &err);
                Err(err)
            }
        }
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn list_products(&self, page: u32, page_size: u32) -> Result<ProductPage, ClientError> {
        self.get_json(
            "/api/products",
            &[
                ("page", page.to_string()),
                ("page_size", page_size.to_string()),
            ],
            "Failed to fetch products",
            None,
        )
        .await
    }

    async fn search_products(
        &self,
        term: &str,
        page: u32,
        page_size: u32,
    ) -> Result<ProductPage, ClientError> {
        self.get_json(
            "/api/products/search",
            &[
                ("search", term.to_string()),
                ("page", page.to_string()),
                ("page_size", page_size.to_string()),
            ],
            "Failed to search products",
            None,
        )
        .await
    }

    async fn product_by_id(&self, id: ProductId) -> Result<Product, ClientError> {
        self.get_json(
            &format!("/api/products/{}", id.0),
            &[],
            "Failed to fetch product",
            Some("Product"),
        )
        .await
    }

    async fn departments(&self) -> Result<Vec<Department>, ClientError> {
        self.get_json("/departments", &[], "Failed to fetch departments", None)
            .await
    }

    async fn department_by_id(&self, id: DepartmentId) -> Result<DepartmentDetail, ClientError> {
        self.get_json(
            &format!("/departments/{}", id.0),
            &[],
            "Failed to fetch department",
            Some("Department"),
        )
        .await
    }

    async fn api_info(&self) -> Result<ApiInfo, ClientError> {
        self.get_json("/", &[], "Failed to fetch API information", None)
            .await
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
