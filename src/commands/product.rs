//! Product command definitions.

use crate::commands::params::{product_slug_parameter, COMMAND_PRODUCT, COMMAND_PRODUCTS};
use clap::Command;

pub fn product_command() -> Command {
    Command::new(COMMAND_PRODUCT)
        .about("Show a product")
        .arg(product_slug_parameter())
}

pub fn products_command() -> Command {
    Command::new(COMMAND_PRODUCTS).about("List all products")
}
