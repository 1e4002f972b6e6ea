//! Pivnet API client.
//!
//! [`PivnetClient`] owns the transport and hands out one lightweight client
//! per resource kind:
//!
//! ```no_run
//! use pivnet::{ApiError, ClientConfig, PivnetClient};
//!
//! # async fn run() -> Result<(), ApiError> {
//! let client = PivnetClient::new(ClientConfig {
//!     token: Some("my-token".to_string()),
//!     ..Default::default()
//! })?;
//! let releases = client.releases().list("banana").await?;
//! println!("{} releases", releases.len());
//! # Ok(())
//! # }
//! ```

use crate::http_utils::{ClientConfig, HttpClient};

pub mod eulas;
pub mod file_groups;
pub mod product_files;
pub mod products;
pub mod release_types;
pub mod release_upgrade_paths;
pub mod releases;
pub mod user_groups;

pub use eulas::Eulas;
pub use file_groups::FileGroups;
pub use product_files::{CreateProductFileConfig, ProductFiles};
pub use products::Products;
pub use release_types::ReleaseTypes;
pub use release_upgrade_paths::ReleaseUpgradePaths;
pub use releases::{CreateReleaseConfig, Releases};
pub use user_groups::{CreateUserGroupConfig, UserGroups};

/// Error emitted by the Pivnet API client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("invalid host: {0}")]
    InvalidHost(#[from] url::ParseError),
    /// The server answered with a status code other than the one the endpoint documents
    #[error("{service} returned status code: {actual} for the request - expected {expected}")]
    UnexpectedStatus {
        service: &'static str,
        actual: u16,
        expected: u16,
        path: String,
    },
    /// A human identifier matched nothing in the corresponding list
    #[error("{resource} '{identifier}' not found")]
    NotFound {
        resource: &'static str,
        identifier: String,
    },
}

pub struct PivnetClient {
    http: HttpClient,
}

impl PivnetClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    pub fn products(&self) -> Products<'_> {
        Products::new(&self.http)
    }

    pub fn eulas(&self) -> Eulas<'_> {
        Eulas::new(&self.http)
    }

    pub fn release_types(&self) -> ReleaseTypes<'_> {
        ReleaseTypes::new(&self.http)
    }

    pub fn releases(&self) -> Releases<'_> {
        Releases::new(&self.http)
    }

    pub fn product_files(&self) -> ProductFiles<'_> {
        ProductFiles::new(&self.http)
    }

    pub fn file_groups(&self) -> FileGroups<'_> {
        FileGroups::new(&self.http)
    }

    pub fn release_upgrade_paths(&self) -> ReleaseUpgradePaths<'_> {
        ReleaseUpgradePaths::new(&self.http)
    }

    pub fn user_groups(&self) -> UserGroups<'_> {
        UserGroups::new(&self.http)
    }
}
