use crate::{
    actions::{utils::resolve_release_id, ActionContext},
    commands::params::PARAMETER_PRODUCT_SLUG,
    error::CliError,
    param_utils::get_optional_string,
};
use clap::ArgMatches;
use tracing::trace;

/// All user groups, or those of one release when the command is scoped.
///
/// Clap rejects a product slug without a release version and vice versa,
/// so the slug alone decides the scope here.
pub async fn list_user_groups(
    context: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    trace!("Executing 'user-groups' command");

    let user_groups = match get_optional_string(sub_matches, PARAMETER_PRODUCT_SLUG) {
        Some(product_slug) => {
            let release_id =
                resolve_release_id(&context.client, sub_matches, &product_slug).await?;
            context
                .client
                .user_groups()
                .list_for_release(&product_slug, release_id)
                .await?
        }
        None => context.client.user_groups().list().await?,
    };

    context.print(&user_groups)
}
