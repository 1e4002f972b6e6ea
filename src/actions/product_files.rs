use crate::{
    actions::{
        utils::{resolve_optional_release_id, resolve_product_file_id, resolve_release_id},
        ActionContext,
    },
    error::CliError,
    param_utils::get_product_slug,
};
use clap::ArgMatches;
use tracing::{debug, trace};

pub async fn list_product_files(
    context: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    trace!("Executing 'product-files' command");
    let product_slug = get_product_slug(sub_matches)?;
    let product_files = context.client.product_files();

    let files = match resolve_optional_release_id(&context.client, sub_matches, product_slug).await? {
        Some(release_id) => {
            product_files
                .list_for_release(product_slug, release_id)
                .await?
        }
        None => product_files.list(product_slug).await?,
    };

    context.print(&files)
}

pub async fn print_product_file(
    context: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    trace!("Executing 'product-file' command");
    let product_slug = get_product_slug(sub_matches)?;
    let release_id = resolve_optional_release_id(&context.client, sub_matches, product_slug).await?;
    let product_file_id =
        resolve_product_file_id(&context.client, sub_matches, product_slug).await?;
    let product_files = context.client.product_files();

    let product_file = match release_id {
        Some(release_id) => {
            product_files
                .get_for_release(product_slug, release_id, product_file_id)
                .await?
        }
        None => product_files.get(product_slug, product_file_id).await?,
    };

    context.print(&product_file)
}

pub async fn add_product_file(
    context: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    trace!("Executing 'add-product-file' command");
    let product_slug = get_product_slug(sub_matches)?;
    let release_id = resolve_release_id(&context.client, sub_matches, product_slug).await?;
    let product_file_id =
        resolve_product_file_id(&context.client, sub_matches, product_slug).await?;

    debug!(
        "Adding product file {} to release {} of {}",
        product_file_id, release_id, product_slug
    );
    context
        .client
        .product_files()
        .add_to_release(product_slug, release_id, product_file_id)
        .await?;

    context.confirm(&format!(
        "product file {} added to release {}",
        product_file_id, release_id
    ));
    Ok(())
}

pub async fn remove_product_file(
    context: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    trace!("Executing 'remove-product-file' command");
    let product_slug = get_product_slug(sub_matches)?;
    let release_id = resolve_release_id(&context.client, sub_matches, product_slug).await?;
    let product_file_id =
        resolve_product_file_id(&context.client, sub_matches, product_slug).await?;

    debug!(
        "Removing product file {} from release {} of {}",
        product_file_id, release_id, product_slug
    );
    context
        .client
        .product_files()
        .remove_from_release(product_slug, release_id, product_file_id)
        .await?;

    context.confirm(&format!(
        "product file {} removed from release {}",
        product_file_id, release_id
    ));
    Ok(())
}

pub async fn delete_product_file(
    context: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    trace!("Executing 'delete-product-file' command");
    let product_slug = get_product_slug(sub_matches)?;
    let product_file_id =
        resolve_product_file_id(&context.client, sub_matches, product_slug).await?;

    let deleted = context
        .client
        .product_files()
        .delete(product_slug, product_file_id)
        .await?;
    context.print(&deleted)
}
