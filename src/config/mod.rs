//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! nav.toml
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → NavConfig (validated, immutable)
//!     → handed to LinkEvaluator / RouteTable at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; defaults are never mutated at runtime
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{DefaultsConfig, NavConfig, ObservabilityConfig, RouteConfig};
pub use validation::{validate_config, ValidationError};
