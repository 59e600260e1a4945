use indexmap::IndexMap;

/// Accumulates raw URLs under their normalized pattern. Insertion order is
/// preserved both across patterns and within each group.
#[derive(Debug, Default)]
pub struct PatternGroups {
    groups: IndexMap<String, Vec<String>>,
}

impl PatternGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw URL under its pattern, creating the group if absent.
    pub fn insert(&mut self, pattern: String, raw_url: String) {
        self.groups.entry(pattern).or_default().push(raw_url);
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct patterns.
    pub fn unique_patterns(&self) -> usize {
        self.groups.len()
    }

    /// Total URLs across all groups.
    pub fn total_urls(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Groups ordered by descending member count. The sort is stable, so
    /// equal counts fall back to insertion order.
    pub fn sorted_by_count(&self) -> Vec<(&str, &[String])> {
        let mut entries: Vec<(&str, &[String])> = self
            .groups
            .iter()
            .map(|(pattern, urls)| (pattern.as_str(), urls.as_slice()))
            .collect();
        entries.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        entries
    }
}
