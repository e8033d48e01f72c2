//! Positional segment extraction.
//!
//! A segment is one `/`-delimited component of an endpoint name
//! (`admin/posts`) or of a path (`/admin/posts/5`). Comparing a single
//! segment lets a link stay selected anywhere inside its section.

use crate::matching::normalizer::path_component;
use crate::matching::options::SegmentPolicy;

/// Extract the segment selected by `policy`.
///
/// `Controller(n)` counts from 1 over the endpoint name; `Url(n)` counts from
/// 0 over the non-empty components of the path (query and fragment are not
/// part of any segment). Anything out of range is `None`.
pub fn segment(policy: SegmentPolicy, controller: Option<&str>, path: &str) -> Option<String> {
    match policy {
        SegmentPolicy::None => None,
        SegmentPolicy::Controller(position) => {
            let index = position.checked_sub(1)?;
            controller?.split('/').nth(index).map(str::to_string)
        }
        SegmentPolicy::Url(position) => path_component(path)
            .split('/')
            .filter(|part| !part.is_empty())
            .nth(position)
            .map(str::to_string),
    }
}
