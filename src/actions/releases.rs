use crate::{
    actions::{
        utils::{resolve_release, resolve_release_id},
        ActionContext,
    },
    commands::params::{
        PARAMETER_AVAILABILITY, PARAMETER_DESCRIPTION, PARAMETER_EULA_SLUG,
        PARAMETER_RELEASE_DATE, PARAMETER_RELEASE_NOTES_URL, PARAMETER_RELEASE_TYPE,
        PARAMETER_RELEASE_VERSION,
    },
    error::CliError,
    model::{Eula, Release},
    param_utils::{get_optional_string, get_product_slug, get_required_string},
    pivnet::CreateReleaseConfig,
};
use clap::ArgMatches;
use tracing::{debug, trace};

pub async fn list_release_types(context: &ActionContext) -> Result<(), CliError> {
    trace!("Executing 'release-types' command");
    let release_types = context.client.release_types().list().await?;
    context.print(&release_types)
}

pub async fn list_releases(context: &ActionContext, sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing 'releases' command");
    let product_slug = get_product_slug(sub_matches)?;
    let releases = context.client.releases().list(product_slug).await?;
    context.print(&releases)
}

pub async fn print_release(context: &ActionContext, sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing 'release' command");
    let product_slug = get_product_slug(sub_matches)?;
    let release = resolve_release(&context.client, sub_matches, product_slug).await?;
    context.print(&release)
}

/// Build the creation request from the command line.
///
/// Flags that are absent stay `None` so that the client applies its defaults
/// or omits the field. An empty string is kept and sent as such.
fn create_release_config(sub_matches: &ArgMatches) -> Result<CreateReleaseConfig, CliError> {
    Ok(CreateReleaseConfig {
        product_slug: get_product_slug(sub_matches)?.to_string(),
        product_version: get_required_string(sub_matches, PARAMETER_RELEASE_VERSION)?.to_string(),
        release_type: get_required_string(sub_matches, PARAMETER_RELEASE_TYPE)?.to_string(),
        eula_slug: get_required_string(sub_matches, PARAMETER_EULA_SLUG)?.to_string(),
        release_date: get_optional_string(sub_matches, PARAMETER_RELEASE_DATE),
        description: get_optional_string(sub_matches, PARAMETER_DESCRIPTION),
        release_notes_url: get_optional_string(sub_matches, PARAMETER_RELEASE_NOTES_URL),
        availability: get_optional_string(sub_matches, PARAMETER_AVAILABILITY),
        ..Default::default()
    })
}

pub async fn create_release(context: &ActionContext, sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing 'create-release' command");
    let config = create_release_config(sub_matches)?;
    let release = context.client.releases().create(&config).await?;
    context.print(&release)
}

/// Overwrite the fields given on the command line
fn apply_release_changes(release: &mut Release, sub_matches: &ArgMatches) {
    if let Some(release_type) = get_optional_string(sub_matches, PARAMETER_RELEASE_TYPE) {
        release.release_type = Some(release_type);
    }
    if let Some(eula_slug) = get_optional_string(sub_matches, PARAMETER_EULA_SLUG) {
        release.eula = Some(Eula::with_slug(eula_slug));
    }
    if let Some(release_date) = get_optional_string(sub_matches, PARAMETER_RELEASE_DATE) {
        release.release_date = Some(release_date);
    }
    if let Some(description) = get_optional_string(sub_matches, PARAMETER_DESCRIPTION) {
        release.description = Some(description);
    }
    if let Some(release_notes_url) = get_optional_string(sub_matches, PARAMETER_RELEASE_NOTES_URL) {
        release.release_notes_url = Some(release_notes_url);
    }
    if let Some(availability) = get_optional_string(sub_matches, PARAMETER_AVAILABILITY) {
        release.availability = Some(availability);
    }
}

pub async fn update_release(context: &ActionContext, sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing 'update-release' command");
    let product_slug = get_product_slug(sub_matches)?;
    let mut release = resolve_release(&context.client, sub_matches, product_slug).await?;

    apply_release_changes(&mut release, sub_matches);
    debug!("Updating release {} of {}", release.id, product_slug);

    let updated = context.client.releases().update(product_slug, release).await?;
    context.print(&updated)
}

pub async fn delete_release(context: &ActionContext, sub_matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing 'delete-release' command");
    let product_slug = get_product_slug(sub_matches)?;
    let release = resolve_release(&context.client, sub_matches, product_slug).await?;

    context.client.releases().delete(&release, product_slug).await?;
    context.confirm(&format!(
        "release {} deleted successfully for {}",
        release.version, product_slug
    ));
    Ok(())
}

pub async fn list_release_upgrade_paths(
    context: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliError> {
    trace!("Executing 'release-upgrade-paths' command");
    let product_slug = get_product_slug(sub_matches)?;
    let release_id = resolve_release_id(&context.client, sub_matches, product_slug).await?;

    let upgrade_paths = context
        .client
        .release_upgrade_paths()
        .get(product_slug, release_id)
        .await?;
    context.print(&upgrade_paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create_cli_command;

    fn sub_matches(args: &[&str]) -> ArgMatches {
        let matches = create_cli_command()
            .try_get_matches_from(args.iter().copied())
            .unwrap();
        matches.subcommand().unwrap().1.clone()
    }

    #[test]
    fn test_create_release_config_keeps_explicit_empty_values() {
        let matches = sub_matches(&[
            "pivnet",
            "create-release",
            "-s",
            "banana",
            "-r",
            "1.2.3",
            "-t",
            "Major Release",
            "-e",
            "some_eula",
            "--description",
            "",
        ]);
        let config = create_release_config(&matches).unwrap();

        assert_eq!(config.product_slug, "banana");
        assert_eq!(config.product_version, "1.2.3");
        assert_eq!(config.release_type, "Major Release");
        assert_eq!(config.eula_slug, "some_eula");
        assert_eq!(config.description.as_deref(), Some(""));
        assert_eq!(config.release_notes_url, None);
        assert_eq!(config.release_date, None);
    }

    #[test]
    fn test_apply_release_changes_only_touches_given_flags() {
        let matches = sub_matches(&[
            "pivnet",
            "update-release",
            "-s",
            "banana",
            "--release-id",
            "7",
            "--availability",
            "All Users",
            "-e",
            "other_eula",
        ]);
        let mut release = Release {
            id: 7,
            version: "1.2.3".to_string(),
            description: Some("keep me".to_string()),
            availability: Some("Admins Only".to_string()),
            ..Default::default()
        };

        apply_release_changes(&mut release, &matches);

        assert_eq!(release.availability.as_deref(), Some("All Users"));
        assert_eq!(release.description.as_deref(), Some("keep me"));
        assert_eq!(
            release.eula.as_ref().map(|eula| eula.slug.as_str()),
            Some("other_eula")
        );
    }
}
