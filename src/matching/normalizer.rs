//! Path normalization under a query policy.
//!
//! # Responsibilities
//! - Reduce a `path?query#fragment` string to the form two links are
//!   compared in
//! - Parse the query leniently: malformed input is just fewer parameters
//!
//! # Design Decisions
//! - Pure function of (path, policy); no allocation beyond the output
//!   string for the `Exact` policy
//! - The path component is never touched
//! - Filtered queries are re-serialized with keys in lexicographic order,
//!   so parameter order never affects equality
//! - Duplicate keys collapse to the last value seen

use std::collections::BTreeMap;
use std::fmt;

use url::form_urlencoded;

use crate::matching::options::ParamPolicy;

/// A path+query string after policy application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath(String);

impl NormalizedPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalize `path` under `policy`.
pub fn normalize(path: &str, policy: &ParamPolicy) -> NormalizedPath {
    let normalized = match policy {
        ParamPolicy::Exact => path.to_string(),
        ParamPolicy::IgnoreAll => match path.find('?') {
            Some(idx) => path[..idx].to_string(),
            None => path.to_string(),
        },
        ParamPolicy::Ignore(keys) => rebuild(path, |key, _| !keys.iter().any(|k| k == key)),
        ParamPolicy::UseKeys(keys) => rebuild(path, |key, _| keys.iter().any(|k| k == key)),
        ParamPolicy::UseValues(expected) => {
            rebuild(path, |key, value| expected.get(key).is_some_and(|e| e == value))
        }
    };
    NormalizedPath(normalized)
}

/// Return only the path component of `path` (no query, no fragment).
pub fn path_component(path: &str) -> &str {
    split(path).path
}

struct Parts<'a> {
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

fn split(raw: &str) -> Parts<'_> {
    let (rest, fragment) = match raw.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (raw, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    Parts { path, query, fragment }
}

fn parse_query(query: Option<&str>) -> BTreeMap<String, String> {
    let Some(query) = query else {
        return BTreeMap::new();
    };
    form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

fn rebuild<F>(raw: &str, keep: F) -> String
where
    F: Fn(&str, &str) -> bool,
{
    let parts = split(raw);
    let params = parse_query(parts.query);

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.extend_pairs(params.iter().filter(|(k, v)| keep(k, v)));
    let query = serializer.finish();

    let mut out = String::with_capacity(raw.len());
    out.push_str(parts.path);
    if !query.is_empty() {
        out.push('?');
        out.push_str(&query);
    }
    if let Some(fragment) = parts.fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}
