//! Resolution of human identifiers to API entities.
//!
//! The API addresses releases, product files and file groups by numeric ID,
//! while people know them by version or name. Resolution is always the same
//! two steps: list the candidates, then pick the one whose key matches the
//! identifier exactly.

use crate::pivnet::ApiError;
use tracing::{debug, trace};

/// Pick the item whose key equals `identifier`.
///
/// # Arguments
/// * `items` - The candidates returned by a list call
/// * `resource` - Resource kind used in the not-found error, e.g. `"release"`
/// * `identifier` - The version, name or slug supplied by the user
/// * `key` - Extracts the comparable string from an item
///
/// # Returns
/// * `Ok(T)` - The first exact match
/// * `Err(ApiError::NotFound)` - If nothing matches
pub fn find_exact<T, F>(
    items: Vec<T>,
    resource: &'static str,
    identifier: &str,
    key: F,
) -> Result<T, ApiError>
where
    F: Fn(&T) -> &str,
{
    debug!("Resolving {} '{}' among {} candidates", resource, identifier, items.len());

    match items.into_iter().find(|item| key(item) == identifier) {
        Some(item) => {
            trace!("Resolved {} '{}'", resource, identifier);
            Ok(item)
        }
        None => Err(ApiError::NotFound {
            resource,
            identifier: identifier.to_string(),
        }),
    }
}
