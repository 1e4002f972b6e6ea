//! EULA command definitions.

use crate::commands::params::{
    eula_slug_parameter, product_slug_parameter, release_id_parameter,
    release_identifier_group, release_version_parameter, COMMAND_ACCEPT_EULA, COMMAND_EULA,
    COMMAND_EULAS,
};
use clap::Command;

pub fn eulas_command() -> Command {
    Command::new(COMMAND_EULAS).about("List all EULAs")
}

pub fn eula_command() -> Command {
    Command::new(COMMAND_EULA)
        .about("Show an EULA")
        .arg(eula_slug_parameter().required(true))
}

pub fn accept_eula_command() -> Command {
    Command::new(COMMAND_ACCEPT_EULA)
        .about("Accept the EULA of a release")
        .arg(product_slug_parameter())
        .arg(release_version_parameter())
        .arg(release_id_parameter())
        .group(release_identifier_group(true))
}
