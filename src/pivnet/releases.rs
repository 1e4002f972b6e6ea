//! Releases of a product.

use crate::http_utils::HttpClient;
use crate::model::{Eula, Release, ReleaseEnvelope, ReleasesResponse};
use crate::pivnet::ApiError;
use crate::resolution_utils::find_exact;
use reqwest::StatusCode;
use tracing::debug;

/// Availability assigned to new releases unless the config overrides it
pub const DEFAULT_AVAILABILITY: &str = "Admins Only";

/// The OSS compliance acknowledgement the API requires on create and update
pub const OSS_COMPLIANT_CONFIRM: &str = "confirm";

/// Everything needed to create a release.
///
/// The four `String` fields are required. Each `Option` field is only sent
/// when it is `Some`, so `Some(String::new())` sends an explicit empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateReleaseConfig {
    pub product_slug: String,
    pub product_version: String,
    pub release_type: String,
    pub eula_slug: String,
    /// `YYYY-MM-DD`; defaults to today
    pub release_date: Option<String>,
    pub description: Option<String>,
    pub release_notes_url: Option<String>,
    /// Defaults to [`DEFAULT_AVAILABILITY`]
    pub availability: Option<String>,
    /// Defaults to [`OSS_COMPLIANT_CONFIRM`]
    pub oss_compliant: Option<String>,
    pub controlled: Option<bool>,
    pub eccn: Option<String>,
    pub license_exception: Option<String>,
    pub end_of_support_date: Option<String>,
    pub end_of_guidance_date: Option<String>,
    pub end_of_availability_date: Option<String>,
}

impl CreateReleaseConfig {
    /// The release document sent to the server, defaults applied
    pub fn to_release(&self, today: &str) -> Release {
        Release {
            version: self.product_version.clone(),
            release_type: Some(self.release_type.clone()),
            eula: Some(Eula::with_slug(self.eula_slug.clone())),
            release_date: Some(
                self.release_date
                    .clone()
                    .unwrap_or_else(|| today.to_string()),
            ),
            availability: Some(
                self.availability
                    .clone()
                    .unwrap_or_else(|| DEFAULT_AVAILABILITY.to_string()),
            ),
            oss_compliant: Some(
                self.oss_compliant
                    .clone()
                    .unwrap_or_else(|| OSS_COMPLIANT_CONFIRM.to_string()),
            ),
            description: self.description.clone(),
            release_notes_url: self.release_notes_url.clone(),
            controlled: self.controlled,
            eccn: self.eccn.clone(),
            license_exception: self.license_exception.clone(),
            end_of_support_date: self.end_of_support_date.clone(),
            end_of_guidance_date: self.end_of_guidance_date.clone(),
            end_of_availability_date: self.end_of_availability_date.clone(),
            ..Default::default()
        }
    }
}

/// Today's date in the local timezone, formatted as the API expects
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

pub struct Releases<'a> {
    http: &'a HttpClient,
}

impl<'a> Releases<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, product_slug: &str) -> Result<Vec<Release>, ApiError> {
        let response: ReleasesResponse = self
            .http
            .get(&format!("/products/{}/releases", product_slug), StatusCode::OK)
            .await?;
        Ok(response.releases)
    }

    pub async fn get(&self, product_slug: &str, release_id: u64) -> Result<Release, ApiError> {
        self.http
            .get(
                &format!("/products/{}/releases/{}", product_slug, release_id),
                StatusCode::OK,
            )
            .await
    }

    /// List the product's releases and return the one with exactly this version
    pub async fn find_by_version(
        &self,
        product_slug: &str,
        version: &str,
    ) -> Result<Release, ApiError> {
        let releases = self.list(product_slug).await?;
        find_exact(releases, "release", version, |release| {
            release.version.as_str()
        })
    }

    pub async fn create(&self, config: &CreateReleaseConfig) -> Result<Release, ApiError> {
        let body = ReleaseEnvelope {
            release: config.to_release(&today()),
        };
        debug!(
            "Creating release {} of {}",
            config.product_version, config.product_slug
        );

        let response: ReleaseEnvelope = self
            .http
            .post(
                &format!("/products/{}/releases", config.product_slug),
                StatusCode::CREATED,
                &body,
            )
            .await?;
        Ok(response.release)
    }

    /// Send the full release, keyed by its ID. OSS compliance is always confirmed.
    pub async fn update(&self, product_slug: &str, mut release: Release) -> Result<Release, ApiError> {
        release.oss_compliant = Some(OSS_COMPLIANT_CONFIRM.to_string());
        let path = format!("/products/{}/releases/{}", product_slug, release.id);
        let body = ReleaseEnvelope { release };

        let response: ReleaseEnvelope = self.http.patch(&path, StatusCode::OK, &body).await?;
        Ok(response.release)
    }

    pub async fn delete(&self, release: &Release, product_slug: &str) -> Result<(), ApiError> {
        self.http
            .delete_no_content(
                &format!("/products/{}/releases/{}", product_slug, release.id),
                StatusCode::NO_CONTENT,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_config_gets_defaults() {
        let config = CreateReleaseConfig {
            product_slug: "banana".to_string(),
            product_version: "1.2.3.4".to_string(),
            release_type: "Not a real release".to_string(),
            eula_slug: "some_eula".to_string(),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(config.to_release("2016-01-02")).unwrap(),
            json!({
                "version": "1.2.3.4",
                "release_type": "Not a real release",
                "eula": {"slug": "some_eula"},
                "release_date": "2016-01-02",
                "availability": "Admins Only",
                "oss_compliant": "confirm"
            })
        );
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let config = CreateReleaseConfig {
            release_date: Some("2015-12-24".to_string()),
            availability: Some("All Users".to_string()),
            ..Default::default()
        };
        let release = config.to_release("2016-01-02");
        assert_eq!(release.release_date.as_deref(), Some("2015-12-24"));
        assert_eq!(release.availability.as_deref(), Some("All Users"));
    }

    #[test]
    fn test_today_is_iso_date() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert_eq!(date.as_bytes()[4], b'-');
        assert_eq!(date.as_bytes()[7], b'-');
    }
}
