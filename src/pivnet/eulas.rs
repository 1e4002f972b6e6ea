//! EULAs and their acceptance.

use crate::http_utils::HttpClient;
use crate::model::{Eula, EulaAcceptance, EulasResponse};
use crate::pivnet::ApiError;
use reqwest::StatusCode;

pub struct Eulas<'a> {
    http: &'a HttpClient,
}

impl<'a> Eulas<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Eula>, ApiError> {
        let response: EulasResponse = self.http.get("/eulas", StatusCode::OK).await?;
        Ok(response.eulas)
    }

    pub async fn get(&self, eula_slug: &str) -> Result<Eula, ApiError> {
        self.http
            .get(&format!("/eulas/{}", eula_slug), StatusCode::OK)
            .await
    }

    /// Accept the EULA attached to a release on behalf of the token's user
    pub async fn accept(
        &self,
        product_slug: &str,
        release_id: u64,
    ) -> Result<EulaAcceptance, ApiError> {
        self.http
            .post_empty(
                &format!(
                    "/products/{}/releases/{}/eula_acceptance",
                    product_slug, release_id
                ),
                StatusCode::OK,
            )
            .await
    }
}
