//! Link evaluation.
//!
//! # Responsibilities
//! - Resolve the link target to a path through the injected [`UrlBuilder`]
//! - Normalize both sides under the link's query policy
//! - Resolve endpoint names through the injected [`EndpointRecognizer`] and
//!   compare segments
//! - Produce the verdict, the merged anchor attributes and the wrapper
//!   description for a renderer
//!
//! # Design Decisions
//! - Defaults are fixed at construction; each call reads only its inputs
//! - Endpoint recognition only runs when a segment policy asks for it
//! - Nothing is cached between calls

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::schema::{DefaultsConfig, NavConfig};
use crate::error::Result;
use crate::link::render::LinkRenderer;
use crate::matching::normalizer::{normalize, path_component};
use crate::matching::options::{MatchOptions, SegmentPolicy};
use crate::matching::resolver::{resolve, Style};
use crate::matching::segment::segment;
use crate::routing::{ConventionalUrlBuilder, EndpointRecognizer, LinkTarget, RouteTable, UrlBuilder};

/// The request being served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Path and query as seen by the server.
    pub full_path: String,
    /// Path only.
    pub path: String,
}

impl RequestContext {
    pub fn new(full_path: impl Into<String>) -> Self {
        let full_path = full_path.into();
        let path = path_component(&full_path).to_string();
        Self { full_path, path }
    }
}

/// Verdict and classes for one link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub selected: bool,
    pub paths_match: bool,
    pub segments_match: bool,
    pub link_classes: Option<String>,
    pub wrapper_classes: Option<String>,
}

/// Everything a renderer needs to emit one link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRender {
    pub selected: bool,
    pub href: String,
    pub html_attributes: BTreeMap<String, String>,
    pub wrapper_element_name: Option<String>,
    pub wrapper_classes: Option<String>,
}

/// Decides whether links point at the current location.
pub struct LinkEvaluator {
    defaults: DefaultsConfig,
    recognizer: Box<dyn EndpointRecognizer + Send + Sync>,
    url_builder: Box<dyn UrlBuilder + Send + Sync>,
}

impl std::fmt::Debug for LinkEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkEvaluator")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl LinkEvaluator {
    pub fn new<R, U>(defaults: DefaultsConfig, recognizer: R, url_builder: U) -> Self
    where
        R: EndpointRecognizer + Send + Sync + 'static,
        U: UrlBuilder + Send + Sync + 'static,
    {
        Self {
            defaults,
            recognizer: Box::new(recognizer),
            url_builder: Box::new(url_builder),
        }
    }

    /// Evaluator backed by the configured route table and conventional URLs.
    pub fn from_config(config: &NavConfig) -> Self {
        Self::new(
            config.defaults.clone(),
            RouteTable::new(&config.routes),
            ConventionalUrlBuilder,
        )
    }

    pub fn defaults(&self) -> &DefaultsConfig {
        &self.defaults
    }

    /// Decide selection for `target` and derive its classes.
    ///
    /// `explicit_class` is the class attribute the caller put on the link.
    pub fn evaluate(
        &self,
        request: &RequestContext,
        target: &LinkTarget,
        options: &MatchOptions,
        explicit_class: Option<&str>,
    ) -> Result<MatchResult> {
        let link_path = self.url_builder.build_path(target);
        self.evaluate_built(request, target, &link_path, options, explicit_class)
    }

    fn evaluate_built(
        &self,
        request: &RequestContext,
        target: &LinkTarget,
        link_path: &str,
        options: &MatchOptions,
        explicit_class: Option<&str>,
    ) -> Result<MatchResult> {
        let current = normalize(&request.full_path, &options.params);
        let link = normalize(link_path, &options.params);

        let (current_segment, link_segment) = match options.segment {
            SegmentPolicy::None => (None, None),
            policy => {
                let link_endpoint = match target.controller() {
                    Some(controller) => Some(controller.to_string()),
                    None => self.recognize(path_component(link_path)),
                };
                let current_endpoint = self.recognize(&request.path);
                (
                    segment(policy, current_endpoint.as_deref(), current.as_str()),
                    segment(policy, link_endpoint.as_deref(), link.as_str()),
                )
            }
        };

        let verdict = resolve(
            &current,
            &link,
            current_segment.as_deref(),
            link_segment.as_deref(),
            options,
        )?;

        tracing::debug!(
            current = %current,
            link = %link,
            current_segment = ?current_segment,
            link_segment = ?link_segment,
            paths_match = verdict.paths_match,
            segments_match = verdict.segments_match,
            selected = verdict.selected,
            "Link evaluated"
        );

        let style = Style::resolve(options, &self.defaults);
        Ok(MatchResult {
            selected: verdict.selected,
            paths_match: verdict.paths_match,
            segments_match: verdict.segments_match,
            link_classes: style.link_classes(verdict.selected, explicit_class),
            wrapper_classes: style.wrapper_classes(verdict.selected),
        })
    }

    /// Evaluate and merge the result into the caller's anchor attributes.
    pub fn link(
        &self,
        request: &RequestContext,
        target: &LinkTarget,
        options: &MatchOptions,
        html_attributes: &BTreeMap<String, String>,
    ) -> Result<LinkRender> {
        let href = self.url_builder.build_path(target);
        let explicit_class = html_attributes.get("class").map(String::as_str);
        let result = self.evaluate_built(request, target, &href, options, explicit_class)?;

        let mut attributes = html_attributes.clone();
        if let Some(classes) = result.link_classes {
            attributes.insert("class".to_string(), classes);
        }

        let wrapper_element_name = Style::resolve(options, &self.defaults)
            .wrapper
            .map(str::to_string);

        Ok(LinkRender {
            selected: result.selected,
            href,
            html_attributes: attributes,
            wrapper_element_name,
            wrapper_classes: result.wrapper_classes,
        })
    }

    /// Evaluate and hand the link to `renderer`.
    pub fn render(
        &self,
        title: &str,
        request: &RequestContext,
        target: &LinkTarget,
        options: &MatchOptions,
        html_attributes: &BTreeMap<String, String>,
        renderer: &dyn LinkRenderer,
    ) -> Result<String> {
        let link = self.link(request, target, options, html_attributes)?;
        Ok(renderer.render(title, &link))
    }

    fn recognize(&self, path: &str) -> Option<String> {
        let endpoint = self.recognizer.recognize(path);
        if endpoint.is_none() {
            tracing::debug!(path = %path, "Path not recognized, segment match disabled");
        }
        endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::render::HtmlRenderer;
    use crate::matching::options::Condition;
    use crate::routing::{NoRoutes, RouteParams};

    fn recognizer(path: &str) -> Option<String> {
        match path.split('/').nth(1) {
            Some("posts") => Some("posts".into()),
            Some("admin") => Some("admin/posts".into()),
            _ => None,
        }
    }

    fn evaluator(defaults: DefaultsConfig) -> LinkEvaluator {
        LinkEvaluator::new(defaults, recognizer, ConventionalUrlBuilder)
    }

    #[test]
    fn test_request_context_splits_path() {
        let request = RequestContext::new("/posts/5?tab=comments");
        assert_eq!(request.path, "/posts/5");
        assert_eq!(request.full_path, "/posts/5?tab=comments");
    }

    #[test]
    fn test_exact_path_selects() {
        let eval = evaluator(DefaultsConfig::default());
        let request = RequestContext::new("/posts");
        let result = eval
            .evaluate(&request, &"/posts".into(), &MatchOptions::new(), None)
            .unwrap();
        assert!(result.selected && result.paths_match);
        assert_eq!(result.link_classes.as_deref(), Some("selected"));
        assert_eq!(result.wrapper_classes, None);
    }

    #[test]
    fn test_query_difference_blocks_exact_match() {
        let eval = evaluator(DefaultsConfig::default());
        let request = RequestContext::new("/posts?page=2");
        let target = LinkTarget::from("/posts");

        let result = eval.evaluate(&request, &target, &MatchOptions::new(), None).unwrap();
        assert!(!result.selected);

        let opts = MatchOptions::new().ignore_params(["page"]);
        let result = eval.evaluate(&request, &target, &opts, None).unwrap();
        assert!(result.selected);
    }

    #[test]
    fn test_controller_segment_from_route_params() {
        let eval = evaluator(DefaultsConfig::default());
        let request = RequestContext::new("/posts/5");
        let target = LinkTarget::from(RouteParams::controller("posts"));
        let opts = MatchOptions::new().controller_segment(1);

        let result = eval.evaluate(&request, &target, &opts, None).unwrap();
        assert!(!result.paths_match);
        assert!(result.segments_match);
        assert!(result.selected);
    }

    #[test]
    fn test_unroutable_link_never_segment_matches() {
        let eval = LinkEvaluator::new(DefaultsConfig::default(), NoRoutes, ConventionalUrlBuilder);
        let request = RequestContext::new("/posts/5");
        let opts = MatchOptions::new().controller_segment(1);
        let result = eval.evaluate(&request, &"/posts".into(), &opts, None).unwrap();
        assert!(!result.selected);
    }

    #[test]
    fn test_link_merges_attributes() {
        let eval = evaluator(DefaultsConfig::default());
        let request = RequestContext::new("/posts");
        let attrs = BTreeMap::from([
            ("class".to_string(), "btn".to_string()),
            ("id".to_string(), "nav-posts".to_string()),
        ]);
        let link = eval
            .link(&request, &"/posts".into(), &MatchOptions::new(), &attrs)
            .unwrap();
        assert_eq!(link.href, "/posts");
        assert_eq!(link.html_attributes["class"], "btn selected");
        assert_eq!(link.html_attributes["id"], "nav-posts");
        assert_eq!(link.wrapper_element_name, None);
    }

    #[test]
    fn test_render_with_default_wrapper() {
        let eval = evaluator(DefaultsConfig {
            selected_class: "active".into(),
            wrapper: Some("li".into()),
            wrapper_class: Some("nav-item".into()),
        });
        let request = RequestContext::new("/posts");
        let html = eval
            .render(
                "Posts",
                &request,
                &"/posts".into(),
                &MatchOptions::new(),
                &BTreeMap::new(),
                &HtmlRenderer,
            )
            .unwrap();
        assert_eq!(html, "<li class=\"active nav-item\"><a href=\"/posts\">Posts</a></li>");
    }

    #[test]
    fn test_condition_error_reaches_caller() {
        let eval = evaluator(DefaultsConfig::default());
        let request = RequestContext::new("/posts");
        let opts = MatchOptions::new().or_condition(Condition::fallible(|| {
            Err::<bool, _>(std::io::Error::other("lookup failed"))
        }));
        let err = eval
            .evaluate(&request, &"/posts".into(), &opts, None)
            .unwrap_err();
        assert!(matches!(err, crate::Error::Condition(_)));
    }
}
