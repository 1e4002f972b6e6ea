//! HTTP transport for the Pivnet API.
//!
//! Every resource client goes through [`HttpClient`]: it prefixes the path with
//! the configured host and API version, injects the bearer token and user
//! agent, and checks the response against the status code the caller expects.
//! Nothing is retried.

use crate::pivnet::ApiError;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, trace};
use url::Url;

pub const DEFAULT_HOST: &str = "https://network.pivotal.io";
pub const API_PREFIX: &str = "/api/v2";

/// Name used in status code errors
pub const SERVICE_NAME: &str = "Pivnet";

/// Settings shared by every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and authority of the API server, e.g. `https://network.pivotal.io`
    pub host: String,
    /// Bearer token; requests go out unauthenticated without one
    pub token: Option<String>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            token: None,
            user_agent: default_user_agent(),
        }
    }
}

pub fn default_user_agent() -> String {
    format!("pivnet-cli/{}", crate::VERSION)
}

/// HTTP client wrapper with the common request handling logic
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
    base_url: String,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Url::parse(&config.host)?;

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        let base_url = format!("{}{}", config.host.trim_end_matches('/'), API_PREFIX);

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Get a reference to the HTTP client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for a path below the API prefix
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T>(&self, path: &str, expected: StatusCode) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let text = self
            .execute_request(Method::GET, path, expected, |request| request)
            .await?;
        decode(path, &text)
    }

    pub async fn post<T, B>(&self, path: &str, expected: StatusCode, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let text = self
            .execute_request(Method::POST, path, expected, |request| request.json(body))
            .await?;
        decode(path, &text)
    }

    /// POST without a request body
    pub async fn post_empty<T>(&self, path: &str, expected: StatusCode) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let text = self
            .execute_request(Method::POST, path, expected, |request| request)
            .await?;
        decode(path, &text)
    }

    pub async fn patch<T, B>(&self, path: &str, expected: StatusCode, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let text = self
            .execute_request(Method::PATCH, path, expected, |request| request.json(body))
            .await?;
        decode(path, &text)
    }

    /// PATCH whose response body, if any, is ignored
    pub async fn patch_no_content<B>(
        &self,
        path: &str,
        expected: StatusCode,
        body: &B,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.execute_request(Method::PATCH, path, expected, |request| request.json(body))
            .await?;
        Ok(())
    }

    pub async fn delete<T>(&self, path: &str, expected: StatusCode) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let text = self
            .execute_request(Method::DELETE, path, expected, |request| request)
            .await?;
        decode(path, &text)
    }

    /// DELETE whose response body, if any, is ignored
    pub async fn delete_no_content(&self, path: &str, expected: StatusCode) -> Result<(), ApiError> {
        self.execute_request(Method::DELETE, path, expected, |request| request)
            .await?;
        Ok(())
    }

    /// Send one request and return the raw body if the status matches `expected`
    async fn execute_request<F>(
        &self,
        method: Method,
        path: &str,
        expected: StatusCode,
        with_body: F,
    ) -> Result<String, ApiError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self.client.request(method, &url);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }
        let request = with_body(request);

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        trace!("Response {} from {}: {}", status, url, text);

        if status != expected {
            debug!(
                "Unexpected status {} for {} (expected {}), body: {}",
                status, path, expected, text
            );
            return Err(ApiError::UnexpectedStatus {
                service: SERVICE_NAME,
                actual: status.as_u16(),
                expected: expected.as_u16(),
                path: path.to_string(),
            });
        }

        Ok(text)
    }
}

fn decode<T>(path: &str, text: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(text).map_err(|e| {
        error!(
            "Failed to deserialize response from {}: {}. Raw response: {}",
            path, e, text
        );
        ApiError::JsonError(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.host, "https://network.pivotal.io");
        assert!(config.token.is_none());
        assert!(config.user_agent.starts_with("pivnet-cli/"));
    }

    #[test]
    fn test_url_joins_host_and_prefix() {
        let client = HttpClient::new(ClientConfig {
            host: "http://localhost:8080/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            client.url("/products/banana"),
            "http://localhost:8080/api/v2/products/banana"
        );
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let result = HttpClient::new(ClientConfig {
            host: "not a url".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(ApiError::InvalidHost(_))));
    }

    #[test]
    fn test_status_error_message() {
        let error = ApiError::UnexpectedStatus {
            service: SERVICE_NAME,
            actual: 418,
            expected: 200,
            path: "/products".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Pivnet returned status code: 418 for the request - expected 200"
        );
    }
}
