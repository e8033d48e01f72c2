//! Shared fixtures for integration tests.

use std::cell::Cell;
use std::rc::Rc;

use nav_link::config::schema::{DefaultsConfig, RouteConfig};
use nav_link::matching::Condition;
use nav_link::routing::{ConventionalUrlBuilder, RouteTable};
use nav_link::LinkEvaluator;

/// Routes of a small blog with an admin area.
pub fn blog_routes() -> Vec<RouteConfig> {
    [
        ("home", "/", "pages"),
        ("posts", "/posts", "posts"),
        ("comments", "/posts/comments", "comments"),
        ("admin_posts", "/admin/posts", "admin/posts"),
        ("admin_users", "/admin/users", "admin/users"),
    ]
    .into_iter()
    .map(|(name, prefix, endpoint)| RouteConfig {
        name: name.into(),
        path_prefix: prefix.into(),
        endpoint: endpoint.into(),
        priority: 0,
    })
    .collect()
}

pub fn blog_evaluator(defaults: DefaultsConfig) -> LinkEvaluator {
    LinkEvaluator::new(defaults, RouteTable::new(&blog_routes()), ConventionalUrlBuilder)
}

/// Defaults for a Bootstrap-style `<li class="nav-item">` menu.
pub fn bootstrap_defaults() -> DefaultsConfig {
    DefaultsConfig {
        selected_class: "active".into(),
        wrapper: Some("li".into()),
        wrapper_class: Some("nav-item".into()),
    }
}

/// A condition with a fixed answer that counts how often it was asked.
#[allow(dead_code)]
pub fn counting_condition(answer: bool) -> (Condition, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();
    let condition = Condition::new(move || {
        seen.set(seen.get() + 1);
        answer
    });
    (condition, calls)
}
