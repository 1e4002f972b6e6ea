//! User group command definitions.

use crate::commands::params::{
    product_slug_parameter, release_version_parameter, COMMAND_USER_GROUPS,
    PARAMETER_PRODUCT_SLUG, PARAMETER_RELEASE_VERSION,
};
use clap::Command;

/// All user groups, or those of one release when both a product slug and a
/// release version are given. Supplying only one of the two is a usage error.
pub fn user_groups_command() -> Command {
    Command::new(COMMAND_USER_GROUPS)
        .about("List user groups")
        .arg(
            product_slug_parameter()
                .required(false)
                .requires(PARAMETER_RELEASE_VERSION),
        )
        .arg(release_version_parameter().requires(PARAMETER_PRODUCT_SLUG))
}
