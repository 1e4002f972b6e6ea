use crate::{
    actions::{utils::resolve_release_id, ActionContext},
    commands::params::PARAMETER_EULA_SLUG,
    error::CliError,
    param_utils::{get_product_slug, get_required_string},
};
use clap::ArgMatches;
use tracing::{debug, trace};

pub async fn list_eulas(context: &ActionContext) -> Result<(), CliError> {
    trace!("Executing 'eulas' command");
    let eulas = context.client.eulas().list().await?;
    context.print(&eulas)
}

pub async fn print_eula(context: &ActionContext, sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing 'eula' command");
    let eula_slug = get_required_string(sub_matches, PARAMETER_EULA_SLUG)?;
    let eula = context.client.eulas().get(eula_slug).await?;
    context.print(&eula)
}

pub async fn accept_eula(context: &ActionContext, sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing 'accept-eula' command");
    let product_slug = get_product_slug(sub_matches)?;
    let release_id = resolve_release_id(&context.client, sub_matches, product_slug).await?;

    debug!("Accepting EULA for release {} of {}", release_id, product_slug);
    let acceptance = context
        .client
        .eulas()
        .accept(product_slug, release_id)
        .await?;
    context.print(&acceptance)
}
