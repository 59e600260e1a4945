use std::fs;
use std::path::PathBuf;

use urlnorm::grouping::PatternGroups;
use urlnorm::{loader, normalize, report};

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("urlnorm_{}_{}", std::process::id(), name))
}

fn group_all(urls: &[&str]) -> PatternGroups {
    let mut groups = PatternGroups::new();
    for url in urls {
        if let Ok(pattern) = normalize::normalize_url(url) {
            groups.insert(pattern, url.to_string());
        }
    }
    groups
}

#[test]
fn loader_trims_and_drops_blank_lines() {
    let path = temp_file("loader.txt");
    fs::write(&path, "  https://a.test/1  \n\n\t\nhttps://a.test/2\n").unwrap();

    let urls = loader::load_urls(&path).unwrap();
    assert_eq!(urls, vec!["https://a.test/1", "https://a.test/2"]);

    fs::remove_file(&path).unwrap();
}

#[test]
fn loader_missing_file_is_fatal() {
    assert!(loader::load_urls(temp_file("does_not_exist.txt")).is_err());
}

#[test]
fn numeric_ids_collapse_into_one_group() {
    let groups = group_all(&[
        "https://api.example.com/users/42",
        "https://api.example.com/users/87",
    ]);

    let sorted = groups.sorted_by_count();
    assert_eq!(sorted.len(), 1);
    assert_eq!(sorted[0].0, "https://api.example.com/users/{id}?");
    assert_eq!(sorted[0].1.len(), 2);
}

#[test]
fn dynamic_tokens_collapse_into_one_group() {
    let groups = group_all(&[
        "http://a.test/x?token=abc123",
        "http://a.test/x?token=zzz",
    ]);

    let sorted = groups.sorted_by_count();
    assert_eq!(sorted.len(), 1);
    assert_eq!(sorted[0].0, "http://a.test/x?token={dynamic}");
    assert_eq!(sorted[0].1.len(), 2);
}

#[test]
fn unparseable_lines_are_silently_excluded() {
    let groups = group_all(&[
        "https://a.test/ok",
        "%%% definitely not a url",
        "no-scheme.example/path",
    ]);

    assert_eq!(groups.total_urls(), 1);
    assert_eq!(groups.unique_patterns(), 1);
}

#[test]
fn saved_report_lists_patterns_by_descending_count() {
    let groups = group_all(&[
        "https://a.test/users/1",
        "https://a.test/users/2",
        "https://a.test/users/3",
        "https://a.test/about",
    ]);

    let path = temp_file("report.txt");
    report::save_results(&groups, &path).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "https://a.test/users/{id}? (x3)\nhttps://a.test/about? (x1)\n"
    );

    fs::remove_file(&path).unwrap();
}

#[test]
fn save_overwrites_previous_report() {
    let path = temp_file("overwrite.txt");
    fs::write(&path, "stale contents\nstale contents\n").unwrap();

    let groups = group_all(&["https://a.test/only"]);
    report::save_results(&groups, &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "https://a.test/only? (x1)\n");

    fs::remove_file(&path).unwrap();
}
