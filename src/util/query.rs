//! Percent-encoding for query strings and form bodies.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Encode `pairs` as `application/x-www-form-urlencoded` text.
pub fn encode_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Append an encoded query to `path`; returns `path` unchanged when `pairs` is empty.
pub fn with_query<'a, I>(path: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let query = encode_pairs(pairs);
    if query.is_empty() {
        return path.to_owned();
    }
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{path}{sep}{query}")
}

/// Strip query string and fragment from a location.
pub fn path_only(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}
