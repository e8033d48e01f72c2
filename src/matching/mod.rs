//! Link matching engine.
//!
//! # Data Flow
//! ```text
//! current full path ─┐                       ┌─ current endpoint
//! link path ─────────┤                       ├─ link endpoint
//!                    ▼                       ▼
//!            normalizer.rs            segment.rs
//!         (query policy applied)   (positional segment)
//!                    │                       │
//!                    └──────► resolver.rs ◄──┘
//!                       (paths || segments, overrides)
//!                                 │
//!                                 ▼
//!                       Verdict + Style classes
//! ```
//!
//! # Design Decisions
//! - Every step is a pure function of its inputs
//! - Unparseable input degrades to "no match", never to an error

pub mod normalizer;
pub mod options;
pub mod resolver;
pub mod segment;

pub use normalizer::{normalize, NormalizedPath};
pub use options::{Condition, MatchOptions, ParamPolicy, SegmentPolicy, Setting};
pub use resolver::{is_selected, resolve, Style, Verdict};
pub use segment::segment;
