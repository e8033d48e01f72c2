//! Link evaluation and rendering.
//!
//! # Data Flow
//! ```text
//! RequestContext + LinkTarget + MatchOptions + html attributes
//!     → evaluator.rs (UrlBuilder, normalize, recognize, resolve)
//!     → LinkRender { selected, href, attributes, wrapper }
//!     → render.rs (LinkRenderer → markup)
//! ```

pub mod evaluator;
pub mod render;

pub use evaluator::{LinkEvaluator, LinkRender, MatchResult, RequestContext};
pub use render::{HtmlRenderer, LinkRenderer};
