//! Markup emission for evaluated links.
//!
//! # Responsibilities
//! - Emit the anchor element with merged attributes
//! - Wrap it in the configured element, carrying the wrapper classes
//!
//! # Design Decisions
//! - Rendering sits behind [`LinkRenderer`] so a host templating engine can
//!   replace it; the evaluator never builds markup itself
//! - Title text and attribute values are always escaped
//! - Attributes are emitted in key order after `href`, so output is stable

use std::fmt::Write;

use crate::config::validation::is_element_name;
use crate::link::evaluator::LinkRender;

/// Turns an evaluated link into markup.
pub trait LinkRenderer {
    fn render(&self, title: &str, link: &LinkRender) -> String;
}

/// Plain HTML output.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn anchor(&self, title: &str, link: &LinkRender) -> String {
        let mut html = String::new();
        html.push_str("<a href=\"");
        html.push_str(&html_escape::encode_double_quoted_attribute(&link.href));
        html.push('"');
        for (name, value) in &link.html_attributes {
            if name == "href" {
                continue;
            }
            if !is_attribute_name(name) {
                tracing::warn!(attribute = %name, "Skipping invalid attribute name");
                continue;
            }
            let _ = write!(
                html,
                " {}=\"{}\"",
                name,
                html_escape::encode_double_quoted_attribute(value)
            );
        }
        html.push('>');
        html.push_str(&html_escape::encode_text(title));
        html.push_str("</a>");
        html
    }
}

impl LinkRenderer for HtmlRenderer {
    fn render(&self, title: &str, link: &LinkRender) -> String {
        let anchor = self.anchor(title, link);
        let Some(wrapper) = link.wrapper_element_name.as_deref() else {
            return anchor;
        };
        if !is_element_name(wrapper) {
            tracing::warn!(wrapper = %wrapper, "Invalid wrapper element, rendering bare link");
            return anchor;
        }
        match &link.wrapper_classes {
            Some(classes) => format!(
                "<{wrapper} class=\"{}\">{anchor}</{wrapper}>",
                html_escape::encode_double_quoted_attribute(classes)
            ),
            None => format!("<{wrapper}>{anchor}</{wrapper}>"),
        }
    }
}

fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn link(selected: bool) -> LinkRender {
        LinkRender {
            selected,
            href: "/posts?a=1&b=2".into(),
            html_attributes: BTreeMap::from([("class".to_string(), "btn selected".to_string())]),
            wrapper_element_name: None,
            wrapper_classes: None,
        }
    }

    #[test]
    fn test_bare_anchor() {
        let html = HtmlRenderer.render("Posts & More", &link(true));
        assert_eq!(
            html,
            "<a href=\"/posts?a=1&amp;b=2\" class=\"btn selected\">Posts &amp; More</a>"
        );
    }

    #[test]
    fn test_wrapped_anchor() {
        let mut link = link(true);
        link.html_attributes.clear();
        link.wrapper_element_name = Some("li".into());
        link.wrapper_classes = Some("active nav-item".into());
        assert_eq!(
            HtmlRenderer.render("Posts", &link),
            "<li class=\"active nav-item\"><a href=\"/posts?a=1&amp;b=2\">Posts</a></li>"
        );

        link.wrapper_classes = None;
        assert_eq!(
            HtmlRenderer.render("Posts", &link),
            "<li><a href=\"/posts?a=1&amp;b=2\">Posts</a></li>"
        );
    }

    #[test]
    fn test_hostile_input_is_escaped_or_dropped() {
        let mut link = link(false);
        link.html_attributes = BTreeMap::from([
            ("title".to_string(), "\"><script>".to_string()),
            ("onclick=\"x".to_string(), "y".to_string()),
        ]);
        let html = HtmlRenderer.render("<b>", &link);
        assert!(html.contains("title=\"&quot;"));
        assert!(!html.contains("<script"));
        assert!(!html.contains("onclick"));
        assert!(html.ends_with(">&lt;b&gt;</a>"));
    }
}
