use clap::error::ErrorKind;
use pivnet::{
    cli::execute_command, commands::create_cli_command, configuration::Configuration,
    error::CliError, exit_codes::PivnetExitCode, param_utils::is_verbose,
};
use tracing_subscriber::EnvFilter;

/// Main entry point for the program
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let matches = match create_cli_command().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => match e.kind() {
            // Usage goes to stderr so that stdout only ever carries command output
            ErrorKind::DisplayHelp => {
                eprint!("{}", e.render());
                ::std::process::exit(PivnetExitCode::Success.into());
            }
            ErrorKind::DisplayVersion => {
                print!("{}", e.render());
                ::std::process::exit(PivnetExitCode::Success.into());
            }
            _ => {
                eprint!("{}", e.render());
                ::std::process::exit(PivnetExitCode::UsageError.into());
            }
        },
    };

    let verbose = matches
        .subcommand()
        .map(|(_, sub_matches)| is_verbose(sub_matches))
        .unwrap_or_else(|| is_verbose(&matches));

    // Initialize the logging subsystem; RUST_LOG takes precedence over --verbose
    let default_directive = if verbose { "pivnet=debug" } else { "pivnet=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match Configuration::load_default() {
        Ok(configuration) => execute_command(&matches, &configuration).await,
        Err(e) => Err(CliError::from(e)),
    };

    if let Err(e) = result {
        eprintln!("ERROR: {}", e);
        ::std::process::exit(e.exit_code().into());
    }
}
