use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Query parameter names whose values are session- or request-scoped and
/// never distinguish one endpoint from another.
pub const DYNAMIC_PARAMS: [&str; 6] = ["token", "auth", "session", "csrf", "key", "signature"];

pub const ID_PLACEHOLDER: &str = "{id}";
pub const UUID_PLACEHOLDER: &str = "{uuid}";
pub const DYNAMIC_PLACEHOLDER: &str = "{dynamic}";

static RE_ID: Lazy<Regex> = Lazy::new(|| {
    // Maximal digit runs with word boundaries on both sides; version-like
    // tokens (v2, items42) keep their digits.
    Regex::new(r"\b\d+\b").unwrap()
});

static RE_UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}").unwrap()
});

/// Decomposing the input as a URL failed; the line carries no usable
/// endpoint structure.
#[derive(Debug, thiserror::Error)]
#[error("unparseable url: {0}")]
pub struct NormalizeError(#[from] url::ParseError);

/// Mask variable path segments: digit runs first, then UUIDs on the
/// already-masked path. Order matters.
pub fn normalize_path(path: &str) -> String {
    let s = RE_ID.replace_all(path, ID_PLACEHOLDER);
    let s = RE_UUID.replace_all(&s, UUID_PLACEHOLDER);
    s.into_owned()
}

/// Mask watch-listed query parameters and re-encode the rest sorted by name.
/// Pairs that decode to an empty value are dropped. Values of unmasked
/// multi-valued parameters keep their first-seen order.
pub fn normalize_query(query: &str) -> String {
    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        params
            .entry(name.into_owned())
            .or_default()
            .push(value.into_owned());
    }

    for name in DYNAMIC_PARAMS {
        if let Some(values) = params.get_mut(name) {
            *values = vec![DYNAMIC_PLACEHOLDER.to_string()];
        }
    }

    let mut pairs: Vec<String> = Vec::new();
    for (name, values) in &params {
        for value in values {
            // Placeholders are emitted literally, never form-encoded.
            if value == DYNAMIC_PLACEHOLDER {
                pairs.push(format!("{}={}", form_encode(name), DYNAMIC_PLACEHOLDER));
            } else {
                pairs.push(format!("{}={}", form_encode(name), form_encode(value)));
            }
        }
    }
    pairs.join("&")
}

fn form_encode(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// Produce the grouping pattern for one raw URL:
/// `{scheme}://{netloc}{masked_path}?{masked_query}`. The trailing `?` is
/// always present, even for an empty query.
pub fn normalize_url(raw: &str) -> Result<String, NormalizeError> {
    let parsed = Url::parse(raw)?;
    let netloc = match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    };
    let path = normalize_path(parsed.path());
    let query = normalize_query(parsed.query().unwrap_or(""));
    Ok(format!("{}://{}{}?{}", parsed.scheme(), netloc, path, query))
}
