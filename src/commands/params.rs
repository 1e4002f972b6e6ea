//! Shared command parameters for all CLI commands.
//!
//! This module defines the command and parameter names and the argument
//! builders reused across the command modules.

use crate::format::{OutputFormat, TEXT};
use clap::{Arg, ArgAction, ArgGroup};

// Products
pub const COMMAND_PRODUCT: &str = "product";
pub const COMMAND_PRODUCTS: &str = "products";

// EULAs
pub const COMMAND_EULAS: &str = "eulas";
pub const COMMAND_EULA: &str = "eula";
pub const COMMAND_ACCEPT_EULA: &str = "accept-eula";

// Releases
pub const COMMAND_RELEASE_TYPES: &str = "release-types";
pub const COMMAND_RELEASES: &str = "releases";
pub const COMMAND_RELEASE: &str = "release";
pub const COMMAND_CREATE_RELEASE: &str = "create-release";
pub const COMMAND_UPDATE_RELEASE: &str = "update-release";
pub const COMMAND_DELETE_RELEASE: &str = "delete-release";
pub const COMMAND_RELEASE_UPGRADE_PATHS: &str = "release-upgrade-paths";

// Product files
pub const COMMAND_PRODUCT_FILES: &str = "product-files";
pub const COMMAND_PRODUCT_FILE: &str = "product-file";
pub const COMMAND_ADD_PRODUCT_FILE: &str = "add-product-file";
pub const COMMAND_REMOVE_PRODUCT_FILE: &str = "remove-product-file";
pub const COMMAND_DELETE_PRODUCT_FILE: &str = "delete-product-file";

// File groups
pub const COMMAND_FILE_GROUPS: &str = "file-groups";
pub const COMMAND_FILE_GROUP: &str = "file-group";
pub const COMMAND_DELETE_FILE_GROUP: &str = "delete-file-group";

// User groups
pub const COMMAND_USER_GROUPS: &str = "user-groups";

// Global parameter names
pub const PARAMETER_API_TOKEN: &str = "api-token";
pub const PARAMETER_HOST: &str = "host";
pub const PARAMETER_ENDPOINT: &str = "endpoint";
pub const PARAMETER_FORMAT: &str = "format";
pub const PARAMETER_VERBOSE: &str = "verbose";
pub const PARAMETER_VERSION: &str = "version";

// Resource parameter names
pub const PARAMETER_PRODUCT_SLUG: &str = "product-slug";
pub const PARAMETER_RELEASE_VERSION: &str = "release-version";
pub const PARAMETER_RELEASE_ID: &str = "release-id";
pub const PARAMETER_PRODUCT_FILE_ID: &str = "product-file-id";
pub const PARAMETER_PRODUCT_FILE_NAME: &str = "product-file-name";
pub const PARAMETER_FILE_GROUP_ID: &str = "file-group-id";
pub const PARAMETER_FILE_GROUP_NAME: &str = "file-group-name";
pub const PARAMETER_EULA_SLUG: &str = "eula-slug";
pub const PARAMETER_RELEASE_TYPE: &str = "release-type";
pub const PARAMETER_RELEASE_DATE: &str = "release-date";
pub const PARAMETER_DESCRIPTION: &str = "description";
pub const PARAMETER_RELEASE_NOTES_URL: &str = "release-notes-url";
pub const PARAMETER_AVAILABILITY: &str = "availability";

// Environment variables
pub const ENV_API_TOKEN: &str = "PIVNET_API_TOKEN";
pub const ENV_HOST: &str = "PIVNET_HOST";
pub const ENV_FORMAT: &str = "PIVNET_FORMAT";

// Argument group names
pub const GROUP_RELEASE: &str = "release-identifier";
pub const GROUP_PRODUCT_FILE: &str = "product-file-identifier";
pub const GROUP_FILE_GROUP: &str = "file-group-identifier";

/// API token sent as a bearer token with every request.
pub fn api_token_parameter() -> Arg {
    Arg::new(PARAMETER_API_TOKEN)
        .long(PARAMETER_API_TOKEN)
        .num_args(1)
        .required(false)
        .env(ENV_API_TOKEN)
        .hide_env_values(true)
        .global(true)
        .help("Pivnet API token")
}

/// Server to talk to; `--endpoint` is accepted as an alias.
pub fn host_parameter() -> Arg {
    Arg::new(PARAMETER_HOST)
        .long(PARAMETER_HOST)
        .visible_alias(PARAMETER_ENDPOINT)
        .num_args(1)
        .required(false)
        .env(ENV_HOST)
        .global(true)
        .help("Pivnet host, e.g. https://network.pivotal.io")
}

/// Create the global format parameter.
pub fn format_parameter() -> Arg {
    Arg::new(PARAMETER_FORMAT)
        .short('f')
        .long(PARAMETER_FORMAT)
        .num_args(1)
        .required(false)
        .env(ENV_FORMAT)
        .default_value(TEXT)
        .global(true)
        .help("Output data format")
        .value_parser(OutputFormat::names())
}

pub fn verbose_parameter() -> Arg {
    Arg::new(PARAMETER_VERBOSE)
        .long(PARAMETER_VERBOSE)
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Enable verbose output for debugging")
}

/// `-v/--version`; clap's own flag is `-V`.
pub fn version_parameter() -> Arg {
    Arg::new(PARAMETER_VERSION)
        .short('v')
        .long(PARAMETER_VERSION)
        .action(ArgAction::Version)
        .help("Print version")
}

pub fn product_slug_parameter() -> Arg {
    Arg::new(PARAMETER_PRODUCT_SLUG)
        .short('s')
        .long(PARAMETER_PRODUCT_SLUG)
        .num_args(1)
        .required(true)
        .help("Product slug, e.g. pivotal-diego-pcf")
}

pub fn release_version_parameter() -> Arg {
    Arg::new(PARAMETER_RELEASE_VERSION)
        .short('r')
        .long(PARAMETER_RELEASE_VERSION)
        .num_args(1)
        .required(false)
        .help("Release version, e.g. 1.2.3")
}

pub fn release_id_parameter() -> Arg {
    Arg::new(PARAMETER_RELEASE_ID)
        .long(PARAMETER_RELEASE_ID)
        .num_args(1)
        .required(false)
        .value_parser(clap::value_parser!(u64))
        .help("Numeric release ID")
}

/// Either --release-version or --release-id, never both
pub fn release_identifier_group(required: bool) -> ArgGroup {
    ArgGroup::new(GROUP_RELEASE)
        .args([PARAMETER_RELEASE_VERSION, PARAMETER_RELEASE_ID])
        .multiple(false)
        .required(required)
}

pub fn product_file_id_parameter() -> Arg {
    Arg::new(PARAMETER_PRODUCT_FILE_ID)
        .short('i')
        .long(PARAMETER_PRODUCT_FILE_ID)
        .num_args(1)
        .required(false)
        .value_parser(clap::value_parser!(u64))
        .help("Numeric product file ID")
}

pub fn product_file_name_parameter() -> Arg {
    Arg::new(PARAMETER_PRODUCT_FILE_NAME)
        .long(PARAMETER_PRODUCT_FILE_NAME)
        .num_args(1)
        .required(false)
        .help("Product file name")
}

/// Create product file identifier group: it must be either --product-file-id or --product-file-name
pub fn product_file_identifier_group() -> ArgGroup {
    ArgGroup::new(GROUP_PRODUCT_FILE)
        .args([PARAMETER_PRODUCT_FILE_ID, PARAMETER_PRODUCT_FILE_NAME])
        .multiple(false)
        .required(true)
}

pub fn file_group_id_parameter() -> Arg {
    Arg::new(PARAMETER_FILE_GROUP_ID)
        .short('i')
        .long(PARAMETER_FILE_GROUP_ID)
        .num_args(1)
        .required(false)
        .value_parser(clap::value_parser!(u64))
        .help("Numeric file group ID")
}

pub fn file_group_name_parameter() -> Arg {
    Arg::new(PARAMETER_FILE_GROUP_NAME)
        .long(PARAMETER_FILE_GROUP_NAME)
        .num_args(1)
        .required(false)
        .help("File group name")
}

/// Create file group identifier group: it must be either --file-group-id or --file-group-name
pub fn file_group_identifier_group() -> ArgGroup {
    ArgGroup::new(GROUP_FILE_GROUP)
        .args([PARAMETER_FILE_GROUP_ID, PARAMETER_FILE_GROUP_NAME])
        .multiple(false)
        .required(true)
}

pub fn eula_slug_parameter() -> Arg {
    Arg::new(PARAMETER_EULA_SLUG)
        .short('e')
        .long(PARAMETER_EULA_SLUG)
        .num_args(1)
        .required(false)
        .help("EULA slug, e.g. pivotal_software_eula")
}

pub fn release_type_parameter() -> Arg {
    Arg::new(PARAMETER_RELEASE_TYPE)
        .short('t')
        .long(PARAMETER_RELEASE_TYPE)
        .num_args(1)
        .required(false)
        .help("Release type, see the release-types command")
}

pub fn release_date_parameter() -> Arg {
    Arg::new(PARAMETER_RELEASE_DATE)
        .long(PARAMETER_RELEASE_DATE)
        .num_args(1)
        .required(false)
        .help("Release date as YYYY-MM-DD (defaults to today)")
}

pub fn description_parameter() -> Arg {
    Arg::new(PARAMETER_DESCRIPTION)
        .long(PARAMETER_DESCRIPTION)
        .num_args(1)
        .required(false)
        .help("Release description; pass an empty string to clear it")
}

pub fn release_notes_url_parameter() -> Arg {
    Arg::new(PARAMETER_RELEASE_NOTES_URL)
        .long(PARAMETER_RELEASE_NOTES_URL)
        .num_args(1)
        .required(false)
        .help("Release notes URL; pass an empty string to clear it")
}

pub fn availability_parameter() -> Arg {
    Arg::new(PARAMETER_AVAILABILITY)
        .long(PARAMETER_AVAILABILITY)
        .num_args(1)
        .required(false)
        .help("Availability, e.g. \"Admins Only\" or \"All Users\"")
}
