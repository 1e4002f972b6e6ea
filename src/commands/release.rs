//! Release command definitions.

use crate::commands::params::{
    availability_parameter, description_parameter, eula_slug_parameter, product_slug_parameter,
    release_date_parameter, release_id_parameter, release_identifier_group,
    release_notes_url_parameter, release_type_parameter, release_version_parameter,
    COMMAND_CREATE_RELEASE, COMMAND_DELETE_RELEASE, COMMAND_RELEASE, COMMAND_RELEASES,
    COMMAND_RELEASE_TYPES, COMMAND_RELEASE_UPGRADE_PATHS, COMMAND_UPDATE_RELEASE,
};
use clap::Command;

pub fn release_types_command() -> Command {
    Command::new(COMMAND_RELEASE_TYPES).about("List the valid release types")
}

pub fn releases_command() -> Command {
    Command::new(COMMAND_RELEASES)
        .about("List the releases of a product")
        .arg(product_slug_parameter())
}

pub fn release_command() -> Command {
    Command::new(COMMAND_RELEASE)
        .about("Show a release")
        .arg(product_slug_parameter())
        .arg(release_version_parameter())
        .arg(release_id_parameter())
        .group(release_identifier_group(true))
}

pub fn create_release_command() -> Command {
    Command::new(COMMAND_CREATE_RELEASE)
        .about("Create a release")
        .arg(product_slug_parameter())
        .arg(release_version_parameter().required(true))
        .arg(release_type_parameter().required(true))
        .arg(eula_slug_parameter().required(true))
        .arg(release_date_parameter())
        .arg(description_parameter())
        .arg(release_notes_url_parameter())
        .arg(availability_parameter())
}

/// Only the flags that are given change; everything else is sent back as fetched.
pub fn update_release_command() -> Command {
    Command::new(COMMAND_UPDATE_RELEASE)
        .about("Update a release")
        .arg(product_slug_parameter())
        .arg(release_version_parameter())
        .arg(release_id_parameter())
        .group(release_identifier_group(true))
        .arg(release_type_parameter())
        .arg(eula_slug_parameter())
        .arg(release_date_parameter())
        .arg(description_parameter())
        .arg(release_notes_url_parameter())
        .arg(availability_parameter())
}

pub fn delete_release_command() -> Command {
    Command::new(COMMAND_DELETE_RELEASE)
        .about("Delete a release")
        .arg(product_slug_parameter())
        .arg(release_version_parameter())
        .arg(release_id_parameter())
        .group(release_identifier_group(true))
}

pub fn release_upgrade_paths_command() -> Command {
    Command::new(COMMAND_RELEASE_UPGRADE_PATHS)
        .about("List the releases that can be upgraded to a release")
        .arg(product_slug_parameter())
        .arg(release_version_parameter())
        .arg(release_id_parameter())
        .group(release_identifier_group(true))
}
