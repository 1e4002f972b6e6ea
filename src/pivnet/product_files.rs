//! Product files, either product-wide or as attached to one release.

use crate::http_utils::HttpClient;
use crate::model::{IdReference, ProductFile, ProductFileEnvelope, ProductFilesResponse};
use crate::pivnet::ApiError;
use crate::resolution_utils::find_exact;
use reqwest::StatusCode;
use serde::Serialize;

pub const DEFAULT_FILE_TYPE: &str = "Software";

/// Fields for registering a file that has already been uploaded to the object store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateProductFileConfig {
    pub product_slug: String,
    pub name: String,
    pub aws_object_key: String,
    pub file_version: String,
    pub md5: String,
    pub description: Option<String>,
    /// Defaults to [`DEFAULT_FILE_TYPE`]
    pub file_type: Option<String>,
}

impl CreateProductFileConfig {
    pub fn to_product_file(&self) -> ProductFile {
        ProductFile {
            name: self.name.clone(),
            aws_object_key: Some(self.aws_object_key.clone()),
            file_version: Some(self.file_version.clone()),
            md5: Some(self.md5.clone()),
            description: self.description.clone(),
            file_type: Some(
                self.file_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_FILE_TYPE.to_string()),
            ),
            ..Default::default()
        }
    }
}

/// `{"product_file": {"id": N}}`
#[derive(Serialize)]
struct ProductFileReference {
    product_file: IdReference,
}

pub struct ProductFiles<'a> {
    http: &'a HttpClient,
}

impl<'a> ProductFiles<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, product_slug: &str) -> Result<Vec<ProductFile>, ApiError> {
        let response: ProductFilesResponse = self
            .http
            .get(
                &format!("/products/{}/product_files", product_slug),
                StatusCode::OK,
            )
            .await?;
        Ok(response.product_files)
    }

    pub async fn list_for_release(
        &self,
        product_slug: &str,
        release_id: u64,
    ) -> Result<Vec<ProductFile>, ApiError> {
        let response: ProductFilesResponse = self
            .http
            .get(
                &format!(
                    "/products/{}/releases/{}/product_files",
                    product_slug, release_id
                ),
                StatusCode::OK,
            )
            .await?;
        Ok(response.product_files)
    }

    pub async fn get(
        &self,
        product_slug: &str,
        product_file_id: u64,
    ) -> Result<ProductFile, ApiError> {
        let response: ProductFileEnvelope = self
            .http
            .get(
                &format!("/products/{}/product_files/{}", product_slug, product_file_id),
                StatusCode::OK,
            )
            .await?;
        Ok(response.product_file)
    }

    pub async fn get_for_release(
        &self,
        product_slug: &str,
        release_id: u64,
        product_file_id: u64,
    ) -> Result<ProductFile, ApiError> {
        let response: ProductFileEnvelope = self
            .http
            .get(
                &format!(
                    "/products/{}/releases/{}/product_files/{}",
                    product_slug, release_id, product_file_id
                ),
                StatusCode::OK,
            )
            .await?;
        Ok(response.product_file)
    }

    /// List the product's files and return the one with exactly this name
    pub async fn find_by_name(
        &self,
        product_slug: &str,
        name: &str,
    ) -> Result<ProductFile, ApiError> {
        let product_files = self.list(product_slug).await?;
        find_exact(product_files, "product file", name, |product_file| {
            product_file.name.as_str()
        })
    }

    pub async fn create(&self, config: &CreateProductFileConfig) -> Result<ProductFile, ApiError> {
        let body = ProductFileEnvelope {
            product_file: config.to_product_file(),
        };
        let response: ProductFileEnvelope = self
            .http
            .post(
                &format!("/products/{}/product_files", config.product_slug),
                StatusCode::CREATED,
                &body,
            )
            .await?;
        Ok(response.product_file)
    }

    pub async fn update(
        &self,
        product_slug: &str,
        product_file: ProductFile,
    ) -> Result<ProductFile, ApiError> {
        let path = format!("/products/{}/product_files/{}", product_slug, product_file.id);
        let body = ProductFileEnvelope { product_file };
        let response: ProductFileEnvelope = self.http.patch(&path, StatusCode::OK, &body).await?;
        Ok(response.product_file)
    }

    /// Delete a product file; the server answers with the deleted file
    pub async fn delete(
        &self,
        product_slug: &str,
        product_file_id: u64,
    ) -> Result<ProductFile, ApiError> {
        let response: ProductFileEnvelope = self
            .http
            .delete(
                &format!("/products/{}/product_files/{}", product_slug, product_file_id),
                StatusCode::OK,
            )
            .await?;
        Ok(response.product_file)
    }

    pub async fn add_to_release(
        &self,
        product_slug: &str,
        release_id: u64,
        product_file_id: u64,
    ) -> Result<(), ApiError> {
        self.http
            .patch_no_content(
                &format!(
                    "/products/{}/releases/{}/add_product_file",
                    product_slug, release_id
                ),
                StatusCode::NO_CONTENT,
                &reference(product_file_id),
            )
            .await
    }

    pub async fn remove_from_release(
        &self,
        product_slug: &str,
        release_id: u64,
        product_file_id: u64,
    ) -> Result<(), ApiError> {
        self.http
            .patch_no_content(
                &format!(
                    "/products/{}/releases/{}/remove_product_file",
                    product_slug, release_id
                ),
                StatusCode::NO_CONTENT,
                &reference(product_file_id),
            )
            .await
    }

    pub async fn add_to_file_group(
        &self,
        product_slug: &str,
        file_group_id: u64,
        product_file_id: u64,
    ) -> Result<(), ApiError> {
        self.http
            .patch_no_content(
                &format!(
                    "/products/{}/file_groups/{}/add_product_file",
                    product_slug, file_group_id
                ),
                StatusCode::NO_CONTENT,
                &reference(product_file_id),
            )
            .await
    }
}

fn reference(product_file_id: u64) -> ProductFileReference {
    ProductFileReference {
        product_file: IdReference {
            id: product_file_id,
        },
    }
}
