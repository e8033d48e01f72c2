//! Link targets and URL construction.

use std::collections::BTreeMap;

use url::form_urlencoded;

/// Structured route parameters, resolved to a path by a [`UrlBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub controller: Option<String>,
    pub action: Option<String>,
    pub id: Option<String>,
    pub query: BTreeMap<String, String>,
}

impl RouteParams {
    pub fn controller(controller: impl Into<String>) -> Self {
        Self {
            controller: Some(controller.into()),
            ..Self::default()
        }
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }
}

/// Where a link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Path(String),
    Route(RouteParams),
}

impl LinkTarget {
    /// Endpoint name carried by the target itself, if any.
    pub fn controller(&self) -> Option<&str> {
        match self {
            LinkTarget::Route(params) => params.controller.as_deref(),
            LinkTarget::Path(_) => None,
        }
    }
}

impl From<&str> for LinkTarget {
    fn from(path: &str) -> Self {
        LinkTarget::Path(path.to_string())
    }
}

impl From<String> for LinkTarget {
    fn from(path: String) -> Self {
        LinkTarget::Path(path)
    }
}

impl From<RouteParams> for LinkTarget {
    fn from(params: RouteParams) -> Self {
        LinkTarget::Route(params)
    }
}

/// Turns a link target into a path string.
pub trait UrlBuilder {
    fn build_path(&self, target: &LinkTarget) -> String;
}

impl<F> UrlBuilder for F
where
    F: Fn(&LinkTarget) -> String,
{
    fn build_path(&self, target: &LinkTarget) -> String {
        self(target)
    }
}

/// Builds `/<controller>[/<action>][/<id>][?query]`.
///
/// Raw paths pass through untouched. The `index` action is implied and
/// left out of the path.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionalUrlBuilder;

impl UrlBuilder for ConventionalUrlBuilder {
    fn build_path(&self, target: &LinkTarget) -> String {
        let params = match target {
            LinkTarget::Path(path) => return path.clone(),
            LinkTarget::Route(params) => params,
        };

        let action = params.action.as_deref().filter(|a| *a != "index");
        let mut path = String::new();
        for part in [params.controller.as_deref(), action, params.id.as_deref()]
            .into_iter()
            .flatten()
            .flat_map(|p| p.split('/'))
            .filter(|p| !p.is_empty())
        {
            path.push('/');
            path.extend(form_urlencoded::byte_serialize(part.as_bytes()));
        }
        if path.is_empty() {
            path.push('/');
        }

        if !params.query.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&params.query)
                .finish();
            path.push('?');
            path.push_str(&query);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_path_passes_through() {
        let target = LinkTarget::from("/posts?page=2");
        assert_eq!(ConventionalUrlBuilder.build_path(&target), "/posts?page=2");
        assert_eq!(target.controller(), None);
    }

    #[test]
    fn test_route_params() {
        let builder = ConventionalUrlBuilder;
        let target = LinkTarget::from(RouteParams::controller("posts"));
        assert_eq!(builder.build_path(&target), "/posts");
        assert_eq!(target.controller(), Some("posts"));

        let target: LinkTarget = RouteParams::controller("admin/posts").action("edit").id("5").into();
        assert_eq!(builder.build_path(&target), "/admin/posts/edit/5");

        let target: LinkTarget = RouteParams::controller("posts").action("index").param("page", "2").into();
        assert_eq!(builder.build_path(&target), "/posts?page=2");

        let target: LinkTarget = RouteParams::default().into();
        assert_eq!(builder.build_path(&target), "/");
    }

    #[test]
    fn test_closures_are_builders() {
        let builder = |_: &LinkTarget| "/fixed".to_string();
        assert_eq!(builder.build_path(&LinkTarget::from("/x")), "/fixed");
    }
}
