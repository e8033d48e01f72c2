//! Endpoint recognition.
//!
//! # Responsibilities
//! - Define the recognizer contract the evaluator depends on
//! - Provide a config-driven route table implementing it
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) path prefix scan (acceptable for typical route counts)
//! - Higher priority first, then longer prefix, then config order
//! - Explicit `None` for unroutable paths rather than an error

use crate::config::schema::RouteConfig;
use crate::routing::matcher::{Matcher, PathPrefixMatcher};

/// Maps a path to the logical endpoint that would handle it.
pub trait EndpointRecognizer {
    /// Returns `None` when the path is not routable.
    fn recognize(&self, path: &str) -> Option<String>;
}

impl<F> EndpointRecognizer for F
where
    F: Fn(&str) -> Option<String>,
{
    fn recognize(&self, path: &str) -> Option<String> {
        self(path)
    }
}

/// A recognizer that knows no routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRoutes;

impl EndpointRecognizer for NoRoutes {
    fn recognize(&self, _path: &str) -> Option<String> {
        None
    }
}

#[derive(Debug)]
struct CompiledRoute {
    name: String,
    endpoint: String,
    priority: u32,
    matcher: PathPrefixMatcher,
}

/// Route table compiled from configuration.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
}

impl RouteTable {
    pub fn new(configs: &[RouteConfig]) -> Self {
        let mut routes: Vec<CompiledRoute> = configs
            .iter()
            .map(|config| CompiledRoute {
                name: config.name.clone(),
                endpoint: config.endpoint.clone(),
                priority: config.priority,
                matcher: PathPrefixMatcher::new(config.path_prefix.as_str()),
            })
            .collect();

        // Stable sort keeps config order for ties.
        routes.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| b.matcher.specificity().cmp(&a.matcher.specificity()))
        });

        tracing::debug!(routes = routes.len(), "Route table compiled");
        Self { routes }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl EndpointRecognizer for RouteTable {
    fn recognize(&self, path: &str) -> Option<String> {
        let route = self.routes.iter().find(|r| r.matcher.matches(path));
        match route {
            Some(route) => {
                tracing::trace!(path = %path, route = %route.name, endpoint = %route.endpoint, "Route matched");
                Some(route.endpoint.clone())
            }
            None => {
                tracing::debug!(path = %path, "No route matched");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(name: &str, prefix: &str, endpoint: &str, priority: u32) -> RouteConfig {
        RouteConfig {
            name: name.into(),
            path_prefix: prefix.into(),
            endpoint: endpoint.into(),
            priority,
        }
    }

    #[test]
    fn test_longest_prefix_wins() {
        let table = RouteTable::new(&[
            route("root", "/", "home", 0),
            route("admin", "/admin", "admin/dashboard", 0),
            route("admin_posts", "/admin/posts", "admin/posts", 0),
        ]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.recognize("/admin/posts/5").as_deref(), Some("admin/posts"));
        assert_eq!(table.recognize("/admin/users").as_deref(), Some("admin/dashboard"));
        assert_eq!(table.recognize("/about").as_deref(), Some("home"));
    }

    #[test]
    fn test_priority_beats_specificity() {
        let table = RouteTable::new(&[
            route("posts", "/posts", "posts", 0),
            route("catch_all", "/", "pages", 10),
        ]);
        assert_eq!(table.recognize("/posts/1").as_deref(), Some("pages"));
    }

    #[test]
    fn test_unroutable_is_none() {
        let table = RouteTable::new(&[route("posts", "/posts", "posts", 0)]);
        assert_eq!(table.recognize("/comments"), None);
        assert_eq!(RouteTable::default().recognize("/posts"), None);
        assert_eq!(NoRoutes.recognize("/posts"), None);
    }

    #[test]
    fn test_closures_are_recognizers() {
        let recognizer = |path: &str| path.starts_with("/x").then(|| "x".to_string());
        assert_eq!(recognizer.recognize("/x/1").as_deref(), Some("x"));
        assert_eq!(recognizer.recognize("/y"), None);
    }
}
