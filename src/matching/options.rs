//! Per-link match options.
//!
//! Options are built once per link and only read afterwards. The mutually
//! exclusive knobs (query policy, segment policy) are enums so that at most
//! one variant can ever be active; the builder methods apply the precedence
//! rules when a caller sets both.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{BoxError, Error, Result};

/// How the query component takes part in path comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParamPolicy {
    /// Compare full path and query verbatim.
    #[default]
    Exact,
    /// Drop the whole query.
    IgnoreAll,
    /// Drop the listed parameters.
    Ignore(Vec<String>),
    /// Keep only the listed parameters.
    UseKeys(Vec<String>),
    /// Keep only parameters whose value equals the expected one.
    UseValues(BTreeMap<String, String>),
}

impl ParamPolicy {
    fn is_use(&self) -> bool {
        matches!(self, ParamPolicy::UseKeys(_) | ParamPolicy::UseValues(_))
    }
}

/// Coarse "same section" matching by position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SegmentPolicy {
    #[default]
    None,
    /// 1-indexed component of the endpoint name.
    Controller(usize),
    /// 0-indexed component of the path.
    Url(usize),
}

/// A per-call value that may fall back to a process default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Setting<T> {
    /// Use the configured default.
    #[default]
    Inherit,
    /// Explicitly turned off, regardless of the default.
    Disabled,
    Set(T),
}

impl<T> Setting<T> {
    /// Resolve against a default.
    pub fn resolve<'a>(&'a self, default: Option<&'a T>) -> Option<&'a T> {
        match self {
            Setting::Inherit => default,
            Setting::Disabled => None,
            Setting::Set(value) => Some(value),
        }
    }
}

/// Caller-supplied override predicate.
///
/// The engine never inspects it; it is called exactly once per evaluation
/// and any error it returns is handed back to the caller as
/// [`Error::Condition`].
#[derive(Clone)]
pub struct Condition(Rc<dyn Fn() -> std::result::Result<bool, BoxError>>);

impl Condition {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Self(Rc::new(move || Ok(f())))
    }

    pub fn fallible<F, E>(f: F) -> Self
    where
        F: Fn() -> std::result::Result<bool, E> + 'static,
        E: Into<BoxError>,
    {
        Self(Rc::new(move || f().map_err(Into::into)))
    }

    pub fn evaluate(&self) -> Result<bool> {
        (self.0)().map_err(Error::Condition)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Condition(..)")
    }
}

/// Everything a caller can say about one link.
#[derive(Debug, Clone, Default)]
pub struct MatchOptions {
    pub params: ParamPolicy,
    pub segment: SegmentPolicy,
    pub and_condition: Option<Condition>,
    pub or_condition: Option<Condition>,
    pub selected_class: Option<String>,
    pub wrapper: Setting<String>,
    pub wrapper_class: Setting<String>,
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_all_params(mut self) -> Self {
        if !self.params.is_use() {
            self.params = ParamPolicy::IgnoreAll;
        }
        self
    }

    /// Ignored when a `use_params*` policy is already set.
    pub fn ignore_params<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !self.params.is_use() {
            self.params = ParamPolicy::Ignore(keys.into_iter().map(Into::into).collect());
        }
        self
    }

    pub fn use_params<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = ParamPolicy::UseKeys(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn use_param_values<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params = ParamPolicy::UseValues(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn controller_segment(mut self, position: usize) -> Self {
        self.segment = SegmentPolicy::Controller(position);
        self
    }

    pub fn url_segment(mut self, position: usize) -> Self {
        self.segment = SegmentPolicy::Url(position);
        self
    }

    pub fn and_condition(mut self, condition: Condition) -> Self {
        self.and_condition = Some(condition);
        self
    }

    pub fn or_condition(mut self, condition: Condition) -> Self {
        self.or_condition = Some(condition);
        self
    }

    pub fn selected_class(mut self, class: impl Into<String>) -> Self {
        self.selected_class = Some(class.into());
        self
    }

    pub fn wrapper(mut self, element: impl Into<String>) -> Self {
        self.wrapper = Setting::Set(element.into());
        self
    }

    pub fn without_wrapper(mut self) -> Self {
        self.wrapper = Setting::Disabled;
        self
    }

    pub fn wrapper_class(mut self, class: impl Into<String>) -> Self {
        self.wrapper_class = Setting::Set(class.into());
        self
    }

    pub fn without_wrapper_class(mut self) -> Self {
        self.wrapper_class = Setting::Disabled;
        self
    }
}
