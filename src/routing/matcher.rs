//! Path matching for route recognition.
//!
//! # Responsibilities
//! - Match a request path against a configured prefix
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Prefixes match on segment boundaries: `/posts` matches `/posts/5`
//!   but not `/postscript`
//! - Query and fragment never take part in matching
//! - No regex to guarantee O(n) matching

use crate::matching::normalizer::path_component;

/// Trait for matching paths against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches a path prefix on segment boundaries.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher. Trailing slashes are ignored.
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let trimmed = prefix.trim_end_matches('/');
        Self {
            prefix: trimmed.to_string(),
        }
    }

    /// Length of the prefix, used to prefer more specific routes.
    pub fn specificity(&self) -> usize {
        self.prefix.len()
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        let path = path_component(path);
        if self.prefix.is_empty() {
            return true;
        }
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_matcher() {
        let matcher = PathPrefixMatcher::new("/posts");
        assert!(matcher.matches("/posts"));
        assert!(matcher.matches("/posts/5"));
        assert!(matcher.matches("/posts?page=2"));
        assert!(!matcher.matches("/postscript"));
        assert!(!matcher.matches("/Posts"));
        assert!(!matcher.matches("/images"));
    }

    #[test]
    fn test_root_matches_everything() {
        let matcher = PathPrefixMatcher::new("/");
        assert!(matcher.matches("/"));
        assert!(matcher.matches("/anything/at/all"));
        assert_eq!(matcher.specificity(), 0);
    }

    #[test]
    fn test_trailing_slash_ignored() {
        let matcher = PathPrefixMatcher::new("/admin/");
        assert!(matcher.matches("/admin"));
        assert!(matcher.matches("/admin/users"));
    }
}
