use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read one URL per line from a wordlist file, trimming whitespace and
/// dropping blank lines. Order is preserved; duplicates are kept.
pub fn load_urls(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let f = File::open(path)?;
    let r = BufReader::new(f);
    let mut out = Vec::new();
    for line in r.lines() {
        let l = line?;
        let trimmed = l.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
    }
    Ok(out)
}
