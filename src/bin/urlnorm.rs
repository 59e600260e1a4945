use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use urlnorm::grouping::PatternGroups;
use urlnorm::{loader, normalize, report};

#[derive(Parser, Debug)]
#[command(
    name = "urlnorm",
    version,
    about = "Normalize and group URLs to reveal the distinct endpoints behind a wordlist (no HTTP requests)"
)]
struct Cli {
    /// Input file with URLs (one per line)
    #[arg(short = 'w', long = "wordlist")]
    wordlist: PathBuf,

    /// Output file for patterns
    #[arg(short = 'o', long = "output", default_value = "normalized_endpoints.txt")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let urls = loader::load_urls(&cli.wordlist)?;
    if urls.is_empty() {
        println!("{}", "No valid URLs found in input file.".red());
        return Ok(());
    }

    println!("{}", format!("Normalizing {} URLs...", urls.len()).blue());

    let mut groups = PatternGroups::new();
    for url in urls {
        // Garbage lines in a bulk wordlist are dropped, not fatal.
        if let Ok(pattern) = normalize::normalize_url(&url) {
            groups.insert(pattern, url);
        }
    }

    if groups.is_empty() {
        println!("{}", "No URLs could be normalized. Check input format.".yellow());
        return Ok(());
    }

    report::print_table(&groups);
    report::print_summary(&groups);
    report::save_results(&groups, &cli.output)?;
    println!(
        "{}",
        format!("Patterns saved to: {}", cli.output.display()).green()
    );

    Ok(())
}
