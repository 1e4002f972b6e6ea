//! File group command definitions.

use crate::commands::params::{
    file_group_id_parameter, file_group_identifier_group, file_group_name_parameter,
    product_slug_parameter, release_id_parameter, release_identifier_group,
    release_version_parameter, COMMAND_DELETE_FILE_GROUP, COMMAND_FILE_GROUP,
    COMMAND_FILE_GROUPS,
};
use clap::Command;

pub fn file_groups_command() -> Command {
    Command::new(COMMAND_FILE_GROUPS)
        .about("List file groups")
        .arg(product_slug_parameter())
        .arg(release_version_parameter())
        .arg(release_id_parameter())
        .group(release_identifier_group(false))
}

pub fn file_group_command() -> Command {
    Command::new(COMMAND_FILE_GROUP)
        .about("Show a file group")
        .arg(product_slug_parameter())
        .arg(file_group_id_parameter())
        .arg(file_group_name_parameter())
        .group(file_group_identifier_group())
}

pub fn delete_file_group_command() -> Command {
    Command::new(COMMAND_DELETE_FILE_GROUP)
        .about("Delete a file group")
        .arg(product_slug_parameter())
        .arg(file_group_id_parameter())
        .arg(file_group_name_parameter())
        .group(file_group_identifier_group())
}
