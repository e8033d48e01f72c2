//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! evaluator / router / config loader
//!     → tracing events (structured fields)
//!     → logging.rs subscriber (stderr, text or JSON)
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; installing a subscriber is the
//!   binary's job
//! - `RUST_LOG` overrides the configured level

pub mod logging;
