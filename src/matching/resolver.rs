//! Selection verdict and class derivation.
//!
//! # Responsibilities
//! - Combine exact-path and segment equality into one base predicate
//! - Apply the caller's `and`/`or` override (at most one, `and` wins)
//! - Derive link and wrapper classes from the verdict
//!
//! # Design Decisions
//! - Exact and segment matches stay separate values in [`Verdict`]
//! - The override condition is evaluated exactly once, even when the base
//!   predicate alone would decide the outcome
//! - Condition errors are returned, never swallowed

use crate::config::schema::DefaultsConfig;
use crate::error::Result;
use crate::matching::normalizer::NormalizedPath;
use crate::matching::options::MatchOptions;

/// Outcome of one selection decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Normalized current path equals normalized link path.
    pub paths_match: bool,
    /// The link produced a segment and it equals the current one.
    pub segments_match: bool,
    /// Final answer after overrides.
    pub selected: bool,
}

pub fn resolve(
    current: &NormalizedPath,
    link: &NormalizedPath,
    current_segment: Option<&str>,
    link_segment: Option<&str>,
    options: &MatchOptions,
) -> Result<Verdict> {
    let paths_match = current == link;
    let segments_match = link_segment.is_some() && link_segment == current_segment;
    let base = paths_match || segments_match;

    let selected = if let Some(condition) = &options.and_condition {
        condition.evaluate()? && base
    } else if let Some(condition) = &options.or_condition {
        condition.evaluate()? || base
    } else {
        base
    };

    Ok(Verdict {
        paths_match,
        segments_match,
        selected,
    })
}

pub fn is_selected(
    current: &NormalizedPath,
    link: &NormalizedPath,
    current_segment: Option<&str>,
    link_segment: Option<&str>,
    options: &MatchOptions,
) -> Result<bool> {
    resolve(current, link, current_segment, link_segment, options).map(|v| v.selected)
}

/// Styling knobs after per-link options are laid over the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style<'a> {
    pub selected_class: &'a str,
    pub wrapper: Option<&'a str>,
    pub wrapper_class: Option<&'a str>,
}

impl<'a> Style<'a> {
    pub fn resolve(options: &'a MatchOptions, defaults: &'a DefaultsConfig) -> Self {
        Self {
            selected_class: options
                .selected_class
                .as_deref()
                .unwrap_or(&defaults.selected_class),
            wrapper: options
                .wrapper
                .resolve(defaults.wrapper.as_ref())
                .map(String::as_str),
            wrapper_class: options
                .wrapper_class
                .resolve(defaults.wrapper_class.as_ref())
                .map(String::as_str),
        }
    }

    /// Class attribute for the anchor.
    ///
    /// A caller-supplied class is kept and extended when selected. Without
    /// one, the anchor carries the selected class only when there is no
    /// wrapper to carry it instead.
    pub fn link_classes(&self, selected: bool, explicit: Option<&str>) -> Option<String> {
        match explicit {
            Some(class) if selected => Some(format!("{} {}", class, self.selected_class)),
            Some(class) => Some(class.to_string()),
            None if selected && self.wrapper.is_none() => Some(self.selected_class.to_string()),
            None => None,
        }
    }

    /// Class attribute for the wrapper, if there is a wrapper.
    pub fn wrapper_classes(&self, selected: bool) -> Option<String> {
        self.wrapper?;
        let selected_class = selected.then_some(self.selected_class);
        let classes = [selected_class, self.wrapper_class]
            .into_iter()
            .flatten()
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        (!classes.is_empty()).then_some(classes)
    }
}
