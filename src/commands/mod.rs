//! CLI command definitions and argument parsing.
//!
//! Every subcommand is a direct child of the root command. Subcommand
//! definitions are grouped by resource kind in the submodules, and argument
//! builders shared between them live in [`params`].

use clap::Command;

pub mod eula;
pub mod file_group;
pub mod params;
pub mod product;
pub mod product_file;
pub mod release;
pub mod user_group;

pub use params::{
    COMMAND_ACCEPT_EULA, COMMAND_ADD_PRODUCT_FILE, COMMAND_CREATE_RELEASE,
    COMMAND_DELETE_FILE_GROUP, COMMAND_DELETE_PRODUCT_FILE, COMMAND_DELETE_RELEASE,
    COMMAND_EULA, COMMAND_EULAS, COMMAND_FILE_GROUP, COMMAND_FILE_GROUPS, COMMAND_PRODUCT,
    COMMAND_PRODUCTS, COMMAND_PRODUCT_FILE, COMMAND_PRODUCT_FILES, COMMAND_RELEASE,
    COMMAND_RELEASES, COMMAND_RELEASE_TYPES, COMMAND_RELEASE_UPGRADE_PATHS,
    COMMAND_REMOVE_PRODUCT_FILE, COMMAND_UPDATE_RELEASE, COMMAND_USER_GROUPS,
};

/// Build the complete command tree.
///
/// Parsing is left to the caller so that clap's help and version
/// early-exits can be routed to the right stream with the right exit code.
pub fn create_cli_command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(crate::VERSION)
        .about("Command-line client for the Pivnet product distribution API")
        .disable_version_flag(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(params::api_token_parameter())
        .arg(params::host_parameter())
        .arg(params::format_parameter())
        .arg(params::verbose_parameter())
        .arg(params::version_parameter())
        .subcommand(product::product_command())
        .subcommand(product::products_command())
        .subcommand(eula::eulas_command())
        .subcommand(eula::eula_command())
        .subcommand(eula::accept_eula_command())
        .subcommand(release::release_types_command())
        .subcommand(release::releases_command())
        .subcommand(release::release_command())
        .subcommand(release::create_release_command())
        .subcommand(release::update_release_command())
        .subcommand(release::delete_release_command())
        .subcommand(release::release_upgrade_paths_command())
        .subcommand(product_file::product_files_command())
        .subcommand(product_file::product_file_command())
        .subcommand(product_file::add_product_file_command())
        .subcommand(product_file::remove_product_file_command())
        .subcommand(product_file::delete_product_file_command())
        .subcommand(file_group::file_groups_command())
        .subcommand(file_group::file_group_command())
        .subcommand(file_group::delete_file_group_command())
        .subcommand(user_group::user_groups_command())
}
