use crate::{
    actions::{
        utils::{resolve_file_group_id, resolve_optional_release_id},
        ActionContext,
    },
    error::CliError,
    param_utils::get_product_slug,
};
use clap::ArgMatches;
use tracing::trace;

pub async fn list_file_groups(
    context: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    trace!("Executing 'file-groups' command");
    let product_slug = get_product_slug(sub_matches)?;
    let file_groups = context.client.file_groups();

    let groups = match resolve_optional_release_id(&context.client, sub_matches, product_slug).await? {
        Some(release_id) => file_groups.list_for_release(product_slug, release_id).await?,
        None => file_groups.list(product_slug).await?,
    };

    context.print(&groups)
}

pub async fn print_file_group(
    context: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    trace!("Executing 'file-group' command");
    let product_slug = get_product_slug(sub_matches)?;
    let file_group_id = resolve_file_group_id(&context.client, sub_matches, product_slug).await?;

    let file_group = context
        .client
        .file_groups()
        .get(product_slug, file_group_id)
        .await?;
    context.print(&file_group)
}

pub async fn delete_file_group(
    context: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    trace!("Executing 'delete-file-group' command");
    let product_slug = get_product_slug(sub_matches)?;
    let file_group_id = resolve_file_group_id(&context.client, sub_matches, product_slug).await?;

    let deleted = context
        .client
        .file_groups()
        .delete(product_slug, file_group_id)
        .await?;
    context.print(&deleted)
}
