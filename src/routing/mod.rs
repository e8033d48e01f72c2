//! Routing collaborators.
//!
//! # Data Flow
//! ```text
//! LinkTarget (path or route params)
//!     → target.rs (UrlBuilder: target → path string)
//!
//! Path string
//!     → router.rs (EndpointRecognizer: path → endpoint name)
//!     → matcher.rs (prefix conditions)
//!     → Some(endpoint) or None
//! ```
//!
//! # Design Decisions
//! - The evaluator only sees the two traits; any framework can plug in
//! - Routes compiled at construction, immutable afterwards
//! - Deterministic: same input always recognizes the same endpoint

pub mod matcher;
pub mod router;
pub mod target;

pub use router::{EndpointRecognizer, NoRoutes, RouteTable};
pub use target::{ConventionalUrlBuilder, LinkTarget, RouteParams, UrlBuilder};
