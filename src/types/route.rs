//! Route key derivation.
//!
//! A route key identifies a logical page for scroll-position purposes. It must
//! be stable across re-renders of the same page, so query parameters are
//! normalized (sorted) before being joined onto the path.

/// Builds a stable route key from a path and its query parameters.
///
/// The path keeps a single leading `/` and loses any trailing slash (except
/// for the root). Query pairs are sorted by key, then value, so
/// `?b=2&a=1` and `?a=1&b=2` yield the same key. Keys and values are
/// percent-encoded for the separator characters, so a value containing `&`
/// or `=` can never collide with a structurally different query.
pub fn route_key(path: &str, query: &[(&str, &str)]) -> String {
    let trimmed = path.trim_end_matches('/');
    let path = if trimmed.is_empty() { "/" } else { trimmed };

    if query.is_empty() {
        return path.to_string();
    }

    let mut pairs: Vec<(&str, &str)> = query.to_vec();
    pairs.sort_unstable();

    let joined: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", escape_component(k), escape_component(v)))
        .collect();
    format!("{}?{}", path, joined.join("&"))
}

/// Percent-encodes the pair and list separators (and `%` itself, first).
fn escape_component(raw: &str) -> String {
    raw.replace('%', "%25")
        .replace('&', "%26")
        .replace('=', "%3D")
}
