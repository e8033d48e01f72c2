//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct NavConfig {
    /// Process-wide rendering defaults.
    pub defaults: DefaultsConfig,

    /// Route table used for endpoint recognition.
    pub routes: Vec<RouteConfig>,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Defaults applied when a link's options leave a field unset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Class added to a selected link (or its wrapper).
    pub selected_class: String,

    /// Element name wrapping every link, e.g. "li".
    pub wrapper: Option<String>,

    /// Class always carried by the wrapper element.
    pub wrapper_class: Option<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            selected_class: "selected".to_string(),
            wrapper: None,
            wrapper_class: None,
        }
    }
}

/// Maps a path prefix to a logical endpoint name.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier for logging.
    pub name: String,

    /// Path prefix to match, e.g. "/admin/posts".
    pub path_prefix: String,

    /// Endpoint (controller) name, e.g. "admin/posts".
    pub endpoint: String,

    /// Route priority (higher = checked first).
    #[serde(default)]
    pub priority: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub log_level: String,

    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
