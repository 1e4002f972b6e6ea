use crate::{
    actions::{eulas, file_groups, product_files, products, releases, user_groups, ActionContext},
    commands::{
        COMMAND_ACCEPT_EULA, COMMAND_ADD_PRODUCT_FILE, COMMAND_CREATE_RELEASE,
        COMMAND_DELETE_FILE_GROUP, COMMAND_DELETE_PRODUCT_FILE, COMMAND_DELETE_RELEASE,
        COMMAND_EULA, COMMAND_EULAS, COMMAND_FILE_GROUP, COMMAND_FILE_GROUPS, COMMAND_PRODUCT,
        COMMAND_PRODUCTS, COMMAND_PRODUCT_FILE, COMMAND_PRODUCT_FILES, COMMAND_RELEASE,
        COMMAND_RELEASES, COMMAND_RELEASE_TYPES, COMMAND_RELEASE_UPGRADE_PATHS,
        COMMAND_REMOVE_PRODUCT_FILE, COMMAND_UPDATE_RELEASE, COMMAND_USER_GROUPS,
    },
    configuration::Configuration,
    error::CliError,
    param_utils::{
        get_api_token_parameter_value, get_format_parameter_value, get_host_parameter_value,
    },
    pivnet::PivnetClient,
};
use clap::ArgMatches;
use tracing::debug;

/// Build the client for a subcommand.
///
/// Global arguments are propagated to the subcommand, so host, token and
/// format are all read from its matches.
fn create_action_context(
    sub_matches: &ArgMatches,
    configuration: &Configuration,
) -> Result<ActionContext, CliError> {
    let format = get_format_parameter_value(sub_matches)?;
    let client_config = configuration.client_config(
        get_host_parameter_value(sub_matches),
        get_api_token_parameter_value(sub_matches),
    );
    debug!("Using Pivnet host {}", client_config.host);

    let client = PivnetClient::new(client_config)?;
    Ok(ActionContext::new(client, format))
}

pub async fn execute_command(
    matches: &ArgMatches,
    configuration: &Configuration,
) -> Result<(), CliError> {
    let (command, sub_matches) = match matches.subcommand() {
        Some(subcommand) => subcommand,
        None => return Err(CliError::UnsupportedSubcommand("none".to_string())),
    };
    debug!("Executing '{}' command", command);

    let context = create_action_context(sub_matches, configuration)?;

    match command {
        // Products
        COMMAND_PRODUCTS => products::list_products(&context).await,
        COMMAND_PRODUCT => products::print_product(&context, sub_matches).await,

        // EULAs
        COMMAND_EULAS => eulas::list_eulas(&context).await,
        COMMAND_EULA => eulas::print_eula(&context, sub_matches).await,
        COMMAND_ACCEPT_EULA => eulas::accept_eula(&context, sub_matches).await,

        // Releases
        COMMAND_RELEASE_TYPES => releases::list_release_types(&context).await,
        COMMAND_RELEASES => releases::list_releases(&context, sub_matches).await,
        COMMAND_RELEASE => releases::print_release(&context, sub_matches).await,
        COMMAND_CREATE_RELEASE => releases::create_release(&context, sub_matches).await,
        COMMAND_UPDATE_RELEASE => releases::update_release(&context, sub_matches).await,
        COMMAND_DELETE_RELEASE => releases::delete_release(&context, sub_matches).await,
        COMMAND_RELEASE_UPGRADE_PATHS => {
            releases::list_release_upgrade_paths(&context, sub_matches).await
        }

        // Product files
        COMMAND_PRODUCT_FILES => product_files::list_product_files(&context, sub_matches).await,
        COMMAND_PRODUCT_FILE => product_files::print_product_file(&context, sub_matches).await,
        COMMAND_ADD_PRODUCT_FILE => product_files::add_product_file(&context, sub_matches).await,
        COMMAND_REMOVE_PRODUCT_FILE => {
            product_files::remove_product_file(&context, sub_matches).await
        }
        COMMAND_DELETE_PRODUCT_FILE => {
            product_files::delete_product_file(&context, sub_matches).await
        }

        // File groups
        COMMAND_FILE_GROUPS => file_groups::list_file_groups(&context, sub_matches).await,
        COMMAND_FILE_GROUP => file_groups::print_file_group(&context, sub_matches).await,
        COMMAND_DELETE_FILE_GROUP => file_groups::delete_file_group(&context, sub_matches).await,

        // User groups
        COMMAND_USER_GROUPS => user_groups::list_user_groups(&context, sub_matches).await,

        unknown => Err(CliError::UnsupportedSubcommand(unknown.to_string())),
    }
}
