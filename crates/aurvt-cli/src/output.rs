//! Console output for the check command

use aurvt_core::{RecipeInfo, Verdict};
use aurvt_github::ArchiveCheck;
use colored::Colorize;
use std::path::Path;

pub fn print_ignored(package: &str, ignore_file: &Path) {
    println!(
        "{} Package '{}' is ignored (found in {})",
        "📋".bright_cyan(),
        package.bold(),
        ignore_file.display()
    );
}

/// Prints the extracted PKGBUILD fields and numbered sources
pub fn print_recipe(recipe: &RecipeInfo) {
    println!("{} {}", "Package:".bright_yellow(), recipe.name.bold());
    println!("{} {}", "Current version:".bright_yellow(), recipe.version);
    println!("{} {}", "Repository URL:".bright_yellow(), recipe.url);

    if !recipe.sources.is_empty() {
        println!("{}", "Source URLs:".bright_yellow());
        for (i, source) in recipe.sources.iter().enumerate() {
            println!("  [{}] {}", i + 1, source);
        }
    }
}

pub fn print_not_github() {
    println!("{} Not a GitHub repository, version checking not supported", "❌".red());
}

pub fn print_latest_unavailable() {
    println!("{} Could not fetch latest version", "❌".red());
}

pub fn print_verdict(latest: &str, verdict: &Verdict) {
    println!("{} {}", "Latest version:".bright_yellow(), latest.bold());
    match verdict {
        Verdict::UpToDate => println!("{} Package is up to date", "✅".green()),
        Verdict::Outdated { current, latest } => println!(
            "{} New version available: {} → {}",
            "🔄".yellow(),
            current,
            latest.green().bold()
        ),
    }
}

/// Suggests the tags page for an archive-by-tag source
pub fn print_archive_notice(source: &str, base_url: &str) {
    println!("{}  Source URL uses archive format: {}", "⚠️".yellow(), source);
    println!("   Consider using tags endpoint: {}/tags", base_url);
    println!("   Example: {}/tags", base_url);
    println!();
}

pub fn print_archive_check(outcome: &ArchiveCheck, base_url: &str) {
    match outcome {
        ArchiveCheck::UpToDate { current } => println!(
            "   {} Current version {} is up to date on tags page",
            "✅".green(),
            current
        ),
        ArchiveCheck::Outdated { current, latest } => {
            println!(
                "   {} New version available on tags page: {} → {}",
                "🔄".yellow(),
                current,
                latest.green().bold()
            );
            println!("   Tags page: {}/tags", base_url);
        }
        ArchiveCheck::NoToken => println!("   Could not extract current version from source URL"),
        ArchiveCheck::Skipped => {}
    }
}
