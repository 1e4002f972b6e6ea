//! Product file command definitions.

use crate::commands::params::{
    product_file_id_parameter, product_file_identifier_group, product_file_name_parameter,
    product_slug_parameter, release_id_parameter, release_identifier_group,
    release_version_parameter, COMMAND_ADD_PRODUCT_FILE, COMMAND_DELETE_PRODUCT_FILE,
    COMMAND_PRODUCT_FILE, COMMAND_PRODUCT_FILES, COMMAND_REMOVE_PRODUCT_FILE,
};
use clap::Command;

/// Product-wide, or restricted to one release when a release is given.
pub fn product_files_command() -> Command {
    Command::new(COMMAND_PRODUCT_FILES)
        .about("List product files")
        .arg(product_slug_parameter())
        .arg(release_version_parameter())
        .arg(release_id_parameter())
        .group(release_identifier_group(false))
}

pub fn product_file_command() -> Command {
    Command::new(COMMAND_PRODUCT_FILE)
        .about("Show a product file")
        .arg(product_slug_parameter())
        .arg(release_version_parameter())
        .arg(release_id_parameter())
        .group(release_identifier_group(false))
        .arg(product_file_id_parameter())
        .arg(product_file_name_parameter())
        .group(product_file_identifier_group())
}

pub fn add_product_file_command() -> Command {
    Command::new(COMMAND_ADD_PRODUCT_FILE)
        .about("Attach a product file to a release")
        .arg(product_slug_parameter())
        .arg(release_version_parameter())
        .arg(release_id_parameter())
        .group(release_identifier_group(true))
        .arg(product_file_id_parameter())
        .arg(product_file_name_parameter())
        .group(product_file_identifier_group())
}

pub fn remove_product_file_command() -> Command {
    Command::new(COMMAND_REMOVE_PRODUCT_FILE)
        .about("Detach a product file from a release")
        .arg(product_slug_parameter())
        .arg(release_version_parameter())
        .arg(release_id_parameter())
        .group(release_identifier_group(true))
        .arg(product_file_id_parameter())
        .arg(product_file_name_parameter())
        .group(product_file_identifier_group())
}

pub fn delete_product_file_command() -> Command {
    Command::new(COMMAND_DELETE_PRODUCT_FILE)
        .about("Delete a product file")
        .arg(product_slug_parameter())
        .arg(product_file_id_parameter())
        .arg(product_file_name_parameter())
        .group(product_file_identifier_group())
}
