//! Products: the top-level entities everything else is scoped to.

use crate::http_utils::HttpClient;
use crate::model::{Product, ProductsResponse};
use crate::pivnet::ApiError;
use reqwest::StatusCode;

pub struct Products<'a> {
    http: &'a HttpClient,
}

impl<'a> Products<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let response: ProductsResponse = self.http.get("/products", StatusCode::OK).await?;
        Ok(response.products)
    }

    pub async fn get(&self, product_slug: &str) -> Result<Product, ApiError> {
        self.http
            .get(&format!("/products/{}", product_slug), StatusCode::OK)
            .await
    }
}
