//! Navigation link selection.
//!
//! Decides whether a navigation link points at the current location and
//! describes how to render it: which classes the anchor carries and whether
//! it is wrapped in another element.

pub mod config;
pub mod error;
pub mod link;
pub mod matching;
pub mod observability;
pub mod routing;

pub use config::schema::NavConfig;
pub use error::{Error, Result};
pub use link::{HtmlRenderer, LinkEvaluator, LinkRender, LinkRenderer, MatchResult, RequestContext};
pub use matching::{Condition, MatchOptions};
pub use routing::{EndpointRecognizer, LinkTarget, RouteParams, UrlBuilder};
