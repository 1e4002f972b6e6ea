//! Data models for Pivnet entities.
//!
//! The structs mirror the JSON documents exchanged with the API. Identifiers
//! are assigned by the server, so an unset (zero) ID is never sent, and
//! optional strings are left out of request bodies unless they were set,
//! even to the empty string.

use crate::format::RecordProducer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn is_zero(id: &u64) -> bool {
    *id == 0
}

/// A hypermedia link as returned under `_links`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// Named links keyed by relation, e.g. `product_files` or `download`
pub type Links = BTreeMap<String, Link>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub slug: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl RecordProducer for Product {
    fn header() -> Vec<String> {
        vec!["ID".to_string(), "SLUG".to_string(), "NAME".to_string()]
    }

    fn records(&self) -> Vec<Vec<String>> {
        vec![vec![self.id.to_string(), self.slug.clone(), self.name.clone()]]
    }
}

/// End-user license agreement
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Eula {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub slug: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl Eula {
    /// A reference to an EULA by slug, as embedded in a release
    pub fn with_slug(slug: impl Into<String>) -> Eula {
        Eula {
            slug: slug.into(),
            ..Default::default()
        }
    }
}

impl RecordProducer for Eula {
    fn header() -> Vec<String> {
        vec!["ID".to_string(), "SLUG".to_string(), "NAME".to_string()]
    }

    fn records(&self) -> Vec<Vec<String>> {
        vec![vec![self.id.to_string(), self.slug.clone(), self.name.clone()]]
    }
}

/// Result of accepting an EULA for a release
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EulaAcceptance {
    #[serde(default)]
    pub accepted_at: String,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl RecordProducer for EulaAcceptance {
    fn header() -> Vec<String> {
        vec!["ACCEPTED AT".to_string()]
    }

    fn records(&self) -> Vec<Vec<String>> {
        vec![vec![self.accepted_at.clone()]]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Release {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eula: Option<Eula>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oss_compliant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_notes_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controlled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eccn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_exception: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_of_support_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_of_guidance_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_of_availability_date: Option<String>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl RecordProducer for Release {
    fn header() -> Vec<String> {
        vec![
            "ID".to_string(),
            "VERSION".to_string(),
            "RELEASE TYPE".to_string(),
            "RELEASE DATE".to_string(),
            "DESCRIPTION".to_string(),
        ]
    }

    fn records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.id.to_string(),
            self.version.clone(),
            self.release_type.clone().unwrap_or_default(),
            self.release_date.clone().unwrap_or_default(),
            self.description.clone().unwrap_or_default(),
        ]]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductFile {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_object_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released_at: Option<String>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl RecordProducer for ProductFile {
    fn header() -> Vec<String> {
        vec![
            "ID".to_string(),
            "NAME".to_string(),
            "FILE VERSION".to_string(),
            "AWS OBJECT KEY".to_string(),
        ]
    }

    fn records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.id.to_string(),
            self.name.clone(),
            self.file_version.clone().unwrap_or_default(),
            self.aws_object_key.clone().unwrap_or_default(),
        ]]
    }
}

/// The owning product as embedded in a file group
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileGroupProduct {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileGroup {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<FileGroupProduct>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_files: Vec<ProductFile>,
}

impl RecordProducer for FileGroup {
    fn header() -> Vec<String> {
        vec![
            "ID".to_string(),
            "NAME".to_string(),
            "PRODUCT FILES".to_string(),
        ]
    }

    fn records(&self) -> Vec<Vec<String>> {
        let product_files = self
            .product_files
            .iter()
            .map(|product_file| product_file.name.as_str())
            .collect::<Vec<&str>>()
            .join(", ");
        vec![vec![self.id.to_string(), self.name.clone(), product_files]]
    }
}

/// The release an upgrade path points at
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpgradePathRelease {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReleaseUpgradePath {
    pub release: UpgradePathRelease,
}

impl RecordProducer for ReleaseUpgradePath {
    fn header() -> Vec<String> {
        vec!["ID".to_string(), "VERSION".to_string()]
    }

    fn records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.release.id.to_string(),
            self.release.version.clone(),
        ]]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserGroup {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
}

impl RecordProducer for UserGroup {
    fn header() -> Vec<String> {
        vec![
            "ID".to_string(),
            "NAME".to_string(),
            "DESCRIPTION".to_string(),
        ]
    }

    fn records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.id.to_string(),
            self.name.clone(),
            self.description.clone().unwrap_or_default(),
        ]]
    }
}

// Envelopes the API wraps collections and single entities in.

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EulasResponse {
    #[serde(default)]
    pub eulas: Vec<Eula>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReleaseTypesResponse {
    #[serde(default)]
    pub release_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReleasesResponse {
    #[serde(default)]
    pub releases: Vec<Release>,
}

/// `{"release": {...}}`, used for both create/update requests and responses
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReleaseEnvelope {
    pub release: Release,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductFilesResponse {
    #[serde(default)]
    pub product_files: Vec<ProductFile>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductFileEnvelope {
    pub product_file: ProductFile,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FileGroupsResponse {
    #[serde(default)]
    pub file_groups: Vec<FileGroup>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpgradePathsResponse {
    #[serde(default)]
    pub upgrade_paths: Vec<ReleaseUpgradePath>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserGroupsResponse {
    #[serde(default)]
    pub user_groups: Vec<UserGroup>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserGroupEnvelope {
    pub user_group: UserGroup,
}

/// Body referencing an existing entity by ID, e.g. `{"product_file": {"id": 7}}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdReference {
    pub id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradePathReference {
    pub release_id: u64,
}
