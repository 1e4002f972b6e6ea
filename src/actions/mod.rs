//! Command handlers.
//!
//! Each handler reads its arguments from the subcommand's `ArgMatches`,
//! performs the resolution calls it needs, invokes exactly one mutating or
//! reading operation on the [`PivnetClient`] and prints the result.

use crate::{
    error::CliError,
    format::{Formattable, OutputFormat},
    pivnet::PivnetClient,
};

pub mod eulas;
pub mod file_groups;
pub mod product_files;
pub mod products;
pub mod releases;
pub mod user_groups;
pub mod utils;

/// Everything a handler needs besides its own arguments
pub struct ActionContext {
    pub client: PivnetClient,
    pub format: OutputFormat,
}

impl ActionContext {
    pub fn new(client: PivnetClient, format: OutputFormat) -> Self {
        Self { client, format }
    }

    /// Render a value in the selected format and write it to stdout
    pub fn print<T: Formattable>(&self, value: &T) -> Result<(), CliError> {
        let output = value.format(&self.format)?;
        println!("{}", output.trim_end());
        Ok(())
    }

    /// Confirmation for operations that have nothing to render.
    ///
    /// Only the text format gets a message so that structured output stays
    /// empty and machine-readable.
    pub fn confirm(&self, message: &str) {
        if self.format == OutputFormat::Text {
            println!("{}", message);
        }
    }
}
