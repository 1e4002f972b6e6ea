//! File groups bundle product files under a common name.

use crate::http_utils::HttpClient;
use crate::model::{FileGroup, FileGroupsResponse, IdReference};
use crate::pivnet::ApiError;
use crate::resolution_utils::find_exact;
use reqwest::StatusCode;
use serde::Serialize;

#[derive(Serialize)]
struct FileGroupName<'n> {
    name: &'n str,
}

#[derive(Serialize)]
struct FileGroupBody<T> {
    file_group: T,
}

pub struct FileGroups<'a> {
    http: &'a HttpClient,
}

impl<'a> FileGroups<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, product_slug: &str) -> Result<Vec<FileGroup>, ApiError> {
        let response: FileGroupsResponse = self
            .http
            .get(
                &format!("/products/{}/file_groups", product_slug),
                StatusCode::OK,
            )
            .await?;
        Ok(response.file_groups)
    }

    pub async fn list_for_release(
        &self,
        product_slug: &str,
        release_id: u64,
    ) -> Result<Vec<FileGroup>, ApiError> {
        let response: FileGroupsResponse = self
            .http
            .get(
                &format!(
                    "/products/{}/releases/{}/file_groups",
                    product_slug, release_id
                ),
                StatusCode::OK,
            )
            .await?;
        Ok(response.file_groups)
    }

    pub async fn get(&self, product_slug: &str, file_group_id: u64) -> Result<FileGroup, ApiError> {
        self.http
            .get(
                &format!("/products/{}/file_groups/{}", product_slug, file_group_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn find_by_name(&self, product_slug: &str, name: &str) -> Result<FileGroup, ApiError> {
        let file_groups = self.list(product_slug).await?;
        find_exact(file_groups, "file group", name, |file_group| {
            file_group.name.as_str()
        })
    }

    pub async fn create(&self, product_slug: &str, name: &str) -> Result<FileGroup, ApiError> {
        self.http
            .post(
                &format!("/products/{}/file_groups", product_slug),
                StatusCode::CREATED,
                &FileGroupBody {
                    file_group: FileGroupName { name },
                },
            )
            .await
    }

    /// Rename a file group; only the name is writable
    pub async fn update(&self, product_slug: &str, file_group: &FileGroup) -> Result<FileGroup, ApiError> {
        self.http
            .patch(
                &format!("/products/{}/file_groups/{}", product_slug, file_group.id),
                StatusCode::OK,
                &FileGroupBody {
                    file_group: FileGroupName {
                        name: &file_group.name,
                    },
                },
            )
            .await
    }

    /// Delete a file group; the server answers with the deleted group
    pub async fn delete(&self, product_slug: &str, file_group_id: u64) -> Result<FileGroup, ApiError> {
        self.http
            .delete(
                &format!("/products/{}/file_groups/{}", product_slug, file_group_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn add_to_release(
        &self,
        product_slug: &str,
        release_id: u64,
        file_group_id: u64,
    ) -> Result<(), ApiError> {
        self.http
            .patch_no_content(
                &format!(
                    "/products/{}/releases/{}/add_file_group",
                    product_slug, release_id
                ),
                StatusCode::NO_CONTENT,
                &FileGroupBody {
                    file_group: IdReference { id: file_group_id },
                },
            )
            .await
    }
}
