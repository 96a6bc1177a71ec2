//! Check command implementation

use anyhow::{Context, Result};
use aurvt_core::Verdict;
use aurvt_github::{is_archive_source, ArchiveChecker, GitHubClient, RepoSlug, ReqwestTransport};
use aurvt_recipe::ignore::IgnoreList;
use aurvt_recipe::read_pkgbuild;

use crate::config::CheckConfig;
use crate::output::{
    print_archive_check, print_archive_notice, print_ignored, print_latest_unavailable,
    print_not_github, print_recipe, print_verdict,
};

/// Compares a package's PKGBUILD with the latest GitHub release or tag.
///
/// Ignored packages, non-GitHub projects and an empty upstream version are
/// reported and return `Ok`; unreadable recipes and failed lookups are errors.
pub fn cmd_check(config: &CheckConfig) -> Result<()> {
    let package_name = config.package_name();
    let ignore = IgnoreList::load(&config.ignore_file);
    if ignore.contains(&package_name) {
        print_ignored(&package_name, &config.ignore_file);
        return Ok(());
    }

    let recipe = read_pkgbuild(&config.package_dir).context("Failed to parse PKGBUILD")?;
    log::info!("Parsed {}", recipe);
    print_recipe(&recipe);

    if !recipe.is_github() {
        print_not_github();
        return Ok(());
    }

    let slug = RepoSlug::from_url(&recipe.url).context("Failed to fetch latest version")?;
    let transport = ReqwestTransport::new(&config.user_agent)?;
    let client = GitHubClient::new(transport, &config.api_url);

    let latest = client
        .latest_version(&slug)
        .with_context(|| format!("Failed to fetch latest version of {}", slug))?;

    // Archive notices come before the primary verdict
    let checker = ArchiveChecker::new()?;
    let base_url = recipe.url.trim_end_matches('/');
    for source in recipe.sources.iter().filter(|s| is_archive_source(s)) {
        print_archive_notice(source, base_url);
        let outcome = checker.check(&client, &slug, source);
        print_archive_check(&outcome, base_url);
    }

    if latest.is_empty() {
        print_latest_unavailable();
    } else {
        print_verdict(&latest, &Verdict::compare(&recipe.version, &latest));
    }

    Ok(())
}
