use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::grouping::PatternGroups;

const PATTERN_HEADER: &str = "Normalized Pattern";
const COUNT_HEADER: &str = "Occurrences";

/// Print one row per group, widest-pattern aligned, ordered by descending
/// count. Styling is informational only.
pub fn print_table(groups: &PatternGroups) {
    let entries = groups.sorted_by_count();
    let width = entries
        .iter()
        .map(|(pattern, _)| pattern.len())
        .max()
        .unwrap_or(0)
        .max(PATTERN_HEADER.len());

    // Pad before colorizing so ANSI escapes don't skew the columns.
    println!(
        "{}  {}",
        format!("{PATTERN_HEADER:<width$}").bold().cyan(),
        COUNT_HEADER.bold().cyan()
    );
    for (pattern, urls) in entries {
        let count = format!("{:>width$}", urls.len(), width = COUNT_HEADER.len());
        println!(
            "{}  {}",
            format!("{pattern:<width$}").magenta(),
            count.green()
        );
    }
}

/// Short summary block: total URLs seen and distinct patterns found.
pub fn print_summary(groups: &PatternGroups) {
    println!();
    println!("{}", "URL Normalizer - Analysis".bold());
    println!("  - Original URLs: {}", groups.total_urls());
    println!("  - Unique patterns: {}", groups.unique_patterns());
}

/// Write `{pattern} (x{count})` lines in descending-count order, truncating
/// any existing file at `path`.
pub fn save_results(groups: &PatternGroups, path: impl AsRef<Path>) -> io::Result<()> {
    let mut f = File::create(path)?;
    for (pattern, urls) in groups.sorted_by_count() {
        writeln!(f, "{} (x{})", pattern, urls.len())?;
    }
    Ok(())
}
