//! User groups: access control either global or scoped to a product release.

use crate::http_utils::HttpClient;
use crate::model::{IdReference, UserGroup, UserGroupEnvelope, UserGroupsResponse};
use crate::pivnet::ApiError;
use reqwest::StatusCode;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserGroupConfig {
    pub name: String,
    pub description: String,
    /// Member email addresses
    pub members: Vec<String>,
}

#[derive(Serialize)]
struct UserGroupReference {
    user_group: IdReference,
}

pub struct UserGroups<'a> {
    http: &'a HttpClient,
}

impl<'a> UserGroups<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<UserGroup>, ApiError> {
        let response: UserGroupsResponse = self.http.get("/user_groups", StatusCode::OK).await?;
        Ok(response.user_groups)
    }

    pub async fn list_for_release(
        &self,
        product_slug: &str,
        release_id: u64,
    ) -> Result<Vec<UserGroup>, ApiError> {
        let response: UserGroupsResponse = self
            .http
            .get(
                &format!(
                    "/products/{}/releases/{}/user_groups",
                    product_slug, release_id
                ),
                StatusCode::OK,
            )
            .await?;
        Ok(response.user_groups)
    }

    pub async fn get(&self, user_group_id: u64) -> Result<UserGroup, ApiError> {
        self.http
            .get(&format!("/user_groups/{}", user_group_id), StatusCode::OK)
            .await
    }

    pub async fn create(&self, config: &CreateUserGroupConfig) -> Result<UserGroup, ApiError> {
        let body = UserGroupEnvelope {
            user_group: UserGroup {
                name: config.name.clone(),
                description: Some(config.description.clone()),
                members: config.members.clone(),
                ..Default::default()
            },
        };
        self.http
            .post("/user_groups", StatusCode::CREATED, &body)
            .await
    }

    pub async fn delete(&self, user_group_id: u64) -> Result<(), ApiError> {
        self.http
            .delete_no_content(
                &format!("/user_groups/{}", user_group_id),
                StatusCode::NO_CONTENT,
            )
            .await
    }

    pub async fn add_to_release(
        &self,
        product_slug: &str,
        release_id: u64,
        user_group_id: u64,
    ) -> Result<(), ApiError> {
        self.http
            .patch_no_content(
                &format!(
                    "/products/{}/releases/{}/add_user_group",
                    product_slug, release_id
                ),
                StatusCode::NO_CONTENT,
                &UserGroupReference {
                    user_group: IdReference { id: user_group_id },
                },
            )
            .await
    }
}
