use crate::{
    commands::params::{
        PARAMETER_API_TOKEN, PARAMETER_FORMAT, PARAMETER_HOST, PARAMETER_PRODUCT_SLUG,
        PARAMETER_VERBOSE,
    },
    error::CliError,
    format::OutputFormat,
};
use clap::ArgMatches;
use std::str::FromStr;
use tracing::trace;

/// Resolve the output format, falling back to text.
///
/// Clap restricts the values and supplies a default, so an unknown format
/// can only reach this point through a programming error.
pub fn get_format_parameter_value(sub_matches: &ArgMatches) -> Result<OutputFormat, CliError> {
    match sub_matches.get_one::<String>(PARAMETER_FORMAT) {
        Some(format) => {
            trace!("Format: {}", format);
            Ok(OutputFormat::from_str(format)?)
        }
        None => Ok(OutputFormat::default()),
    }
}

pub fn get_host_parameter_value(sub_matches: &ArgMatches) -> Option<&str> {
    sub_matches
        .get_one::<String>(PARAMETER_HOST)
        .map(String::as_str)
}

pub fn get_api_token_parameter_value(sub_matches: &ArgMatches) -> Option<&str> {
    sub_matches
        .get_one::<String>(PARAMETER_API_TOKEN)
        .map(String::as_str)
}

pub fn is_verbose(matches: &ArgMatches) -> bool {
    matches
        .try_get_one::<bool>(PARAMETER_VERBOSE)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false)
}

/// Get a string parameter that the command definition marks as required
pub fn get_required_string<'a>(
    sub_matches: &'a ArgMatches,
    name: &str,
) -> Result<&'a str, CliError> {
    sub_matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| CliError::MissingRequiredArgument(name.to_string()))
}

/// `None` when the flag is absent or the subcommand does not define it
pub fn get_optional_string(sub_matches: &ArgMatches, name: &str) -> Option<String> {
    sub_matches
        .try_get_one::<String>(name)
        .ok()
        .flatten()
        .cloned()
}

/// `None` when the flag is absent or the subcommand does not define it
pub fn get_optional_id(sub_matches: &ArgMatches, name: &str) -> Option<u64> {
    sub_matches.try_get_one::<u64>(name).ok().flatten().copied()
}

pub fn get_product_slug(sub_matches: &ArgMatches) -> Result<&str, CliError> {
    get_required_string(sub_matches, PARAMETER_PRODUCT_SLUG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create_cli_command;

    #[test]
    fn test_parameter_values() {
        let matches = create_cli_command()
            .try_get_matches_from([
                "pivnet",
                "--api-token",
                "secret",
                "release",
                "-s",
                "banana",
                "--release-id",
                "42",
                "-f",
                "yaml",
            ])
            .unwrap();
        let (_, sub_matches) = matches.subcommand().unwrap();

        assert_eq!(get_product_slug(sub_matches).unwrap(), "banana");
        assert_eq!(get_optional_id(sub_matches, "release-id"), Some(42));
        assert_eq!(get_optional_string(sub_matches, "release-version"), None);
        assert_eq!(get_api_token_parameter_value(sub_matches), Some("secret"));
        assert_eq!(
            get_format_parameter_value(sub_matches).unwrap(),
            OutputFormat::Yaml
        );
        assert!(!is_verbose(sub_matches));
    }

    #[test]
    fn test_flags_a_subcommand_does_not_define_read_as_absent() {
        let matches = create_cli_command()
            .try_get_matches_from(["pivnet", "user-groups", "-s", "banana", "-r", "1.2.3"])
            .unwrap();
        let (_, sub_matches) = matches.subcommand().unwrap();

        assert_eq!(get_optional_id(sub_matches, "release-id"), None);
        assert_eq!(get_optional_string(sub_matches, "file-group-name"), None);
        assert_eq!(
            get_optional_string(sub_matches, "release-version").as_deref(),
            Some("1.2.3")
        );
    }

    #[test]
    fn test_missing_required_string() {
        let matches = create_cli_command()
            .try_get_matches_from(["pivnet", "user-groups"])
            .unwrap();
        let (_, sub_matches) = matches.subcommand().unwrap();
        assert!(matches!(
            get_product_slug(sub_matches),
            Err(CliError::MissingRequiredArgument(_))
        ));
    }
}
