//! Resolution of the identifier flags shared by several commands.
//!
//! Releases can be named with `--release-version` or `--release-id`, product
//! files with `--product-file-id` or `--product-file-name` and file groups
//! with `--file-group-id` or `--file-group-name`. Clap guarantees that at
//! most one member of each pair is present.

use crate::{
    commands::params::{
        PARAMETER_FILE_GROUP_ID, PARAMETER_FILE_GROUP_NAME, PARAMETER_PRODUCT_FILE_ID,
        PARAMETER_PRODUCT_FILE_NAME, PARAMETER_RELEASE_ID, PARAMETER_RELEASE_VERSION,
    },
    error::CliError,
    model::Release,
    param_utils::{get_optional_id, get_optional_string},
    pivnet::PivnetClient,
};
use clap::ArgMatches;
use tracing::debug;

/// The release ID given on the command line, if any.
///
/// A version is resolved with a list call; a numeric ID is used as is.
pub async fn resolve_optional_release_id(
    client: &PivnetClient,
    sub_matches: &ArgMatches,
    product_slug: &str,
) -> Result<Option<u64>, CliError> {
    if let Some(release_id) = get_optional_id(sub_matches, PARAMETER_RELEASE_ID) {
        return Ok(Some(release_id));
    }

    match get_optional_string(sub_matches, PARAMETER_RELEASE_VERSION) {
        Some(version) => {
            let release = client
                .releases()
                .find_by_version(product_slug, &version)
                .await?;
            debug!("Release {} of {} has ID {}", version, product_slug, release.id);
            Ok(Some(release.id))
        }
        None => Ok(None),
    }
}

pub async fn resolve_release_id(
    client: &PivnetClient,
    sub_matches: &ArgMatches,
    product_slug: &str,
) -> Result<u64, CliError> {
    resolve_optional_release_id(client, sub_matches, product_slug)
        .await?
        .ok_or_else(|| CliError::MissingRequiredArgument(PARAMETER_RELEASE_VERSION.to_string()))
}

/// The full release named on the command line.
///
/// A version is first resolved to an ID, so both identifiers yield the
/// release as returned by a get call with every field populated.
pub async fn resolve_release(
    client: &PivnetClient,
    sub_matches: &ArgMatches,
    product_slug: &str,
) -> Result<Release, CliError> {
    let release_id = resolve_release_id(client, sub_matches, product_slug).await?;
    Ok(client.releases().get(product_slug, release_id).await?)
}

pub async fn resolve_product_file_id(
    client: &PivnetClient,
    sub_matches: &ArgMatches,
    product_slug: &str,
) -> Result<u64, CliError> {
    if let Some(product_file_id) = get_optional_id(sub_matches, PARAMETER_PRODUCT_FILE_ID) {
        return Ok(product_file_id);
    }

    match get_optional_string(sub_matches, PARAMETER_PRODUCT_FILE_NAME) {
        Some(name) => {
            let product_file = client
                .product_files()
                .find_by_name(product_slug, &name)
                .await?;
            Ok(product_file.id)
        }
        None => Err(CliError::MissingRequiredArgument(
            PARAMETER_PRODUCT_FILE_ID.to_string(),
        )),
    }
}

pub async fn resolve_file_group_id(
    client: &PivnetClient,
    sub_matches: &ArgMatches,
    product_slug: &str,
) -> Result<u64, CliError> {
    if let Some(file_group_id) = get_optional_id(sub_matches, PARAMETER_FILE_GROUP_ID) {
        return Ok(file_group_id);
    }

    match get_optional_string(sub_matches, PARAMETER_FILE_GROUP_NAME) {
        Some(name) => {
            let file_group = client
                .file_groups()
                .find_by_name(product_slug, &name)
                .await?;
            Ok(file_group.id)
        }
        None => Err(CliError::MissingRequiredArgument(
            PARAMETER_FILE_GROUP_ID.to_string(),
        )),
    }
}
