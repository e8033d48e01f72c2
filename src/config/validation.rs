//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Class names must be usable as a single HTML class token
//! - Wrapper element names must be plain tag names
//! - Route prefixes must be absolute; route names must be unique
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: NavConfig → Result<(), Vec<ValidationError>>

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::NavConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be a single non-empty class name, got {value:?}")]
    InvalidClassName { field: &'static str, value: String },

    #[error("wrapper must be an element name, got {0:?}")]
    InvalidWrapper(String),

    #[error("route {name:?}: path_prefix must start with '/', got {prefix:?}")]
    RelativePrefix { name: String, prefix: String },

    #[error("route {0:?}: endpoint must not be empty")]
    EmptyEndpoint(String),

    #[error("duplicate route name {0:?}")]
    DuplicateRoute(String),
}

pub fn validate_config(config: &NavConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let defaults = &config.defaults;

    if !is_class_token(&defaults.selected_class) {
        errors.push(ValidationError::InvalidClassName {
            field: "selected_class",
            value: defaults.selected_class.clone(),
        });
    }
    if let Some(class) = &defaults.wrapper_class {
        if !is_class_token(class) {
            errors.push(ValidationError::InvalidClassName {
                field: "wrapper_class",
                value: class.clone(),
            });
        }
    }
    if let Some(wrapper) = &defaults.wrapper {
        if !is_element_name(wrapper) {
            errors.push(ValidationError::InvalidWrapper(wrapper.clone()));
        }
    }

    let mut seen = HashSet::new();
    for route in &config.routes {
        if !route.path_prefix.starts_with('/') {
            errors.push(ValidationError::RelativePrefix {
                name: route.name.clone(),
                prefix: route.path_prefix.clone(),
            });
        }
        if route.endpoint.trim().is_empty() {
            errors.push(ValidationError::EmptyEndpoint(route.name.clone()));
        }
        if !seen.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateRoute(route.name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_class_token(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(|c| c.is_whitespace() || c == '"')
}

pub(crate) fn is_element_name(value: &str) -> bool {
    let mut chars = value.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}
