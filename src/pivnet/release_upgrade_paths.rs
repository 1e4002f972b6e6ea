use crate::http_utils::HttpClient;
use crate::model::{ReleaseUpgradePath, UpgradePathReference, UpgradePathsResponse};
use crate::pivnet::ApiError;
use reqwest::StatusCode;
use serde::Serialize;

#[derive(Serialize)]
struct UpgradePathBody {
    upgrade_path: UpgradePathReference,
}

pub struct ReleaseUpgradePaths<'a> {
    http: &'a HttpClient,
}

impl<'a> ReleaseUpgradePaths<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Releases that may be upgraded to the given release
    pub async fn get(
        &self,
        product_slug: &str,
        release_id: u64,
    ) -> Result<Vec<ReleaseUpgradePath>, ApiError> {
        let response: UpgradePathsResponse = self
            .http
            .get(
                &format!(
                    "/products/{}/releases/{}/upgrade_paths",
                    product_slug, release_id
                ),
                StatusCode::OK,
            )
            .await?;
        Ok(response.upgrade_paths)
    }

    /// Declare that `previous_release_id` may be upgraded to `release_id`
    pub async fn add(
        &self,
        product_slug: &str,
        release_id: u64,
        previous_release_id: u64,
    ) -> Result<(), ApiError> {
        self.http
            .patch_no_content(
                &format!(
                    "/products/{}/releases/{}/add_upgrade_path",
                    product_slug, release_id
                ),
                StatusCode::NO_CONTENT,
                &UpgradePathBody {
                    upgrade_path: UpgradePathReference {
                        release_id: previous_release_id,
                    },
                },
            )
            .await
    }
}
