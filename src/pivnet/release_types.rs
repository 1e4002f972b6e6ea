use crate::http_utils::HttpClient;
use crate::model::ReleaseTypesResponse;
use crate::pivnet::ApiError;
use reqwest::StatusCode;

pub struct ReleaseTypes<'a> {
    http: &'a HttpClient,
}

impl<'a> ReleaseTypes<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// The release type names the server accepts, e.g. "Major Release"
    pub async fn list(&self) -> Result<Vec<String>, ApiError> {
        let response: ReleaseTypesResponse = self
            .http
            .get("/releases/release_types", StatusCode::OK)
            .await?;
        Ok(response.release_types)
    }
}
