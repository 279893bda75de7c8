//! Page navigation - single source of truth for routes and breadcrumbs.
//!
//! The site has exactly two pages. Paths, nav labels and breadcrumb
//! trails are all derived from `Page` so the header, the history
//! integration and the breadcrumb strip can never disagree.

use crate::site::SITE_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Platform landing page (`/`).
    Platform,
    /// Replica language page (`/replica`).
    Language,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Platform, Page::Language];

    pub fn path(self) -> &'static str {
        match self {
            Page::Platform => "/",
            Page::Language => "/replica",
        }
    }

    /// Resolves a location pathname back to a page.
    ///
    /// Trailing slashes are tolerated ("/replica/" opens the language
    /// page). Unknown paths return `None`; the caller decides the
    /// fallback.
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            rest => rest,
        };
        Page::ALL.into_iter().find(|page| page.path() == trimmed)
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Platform => "Home",
            Page::Language => "Replica Lang",
        }
    }
}

/// One entry of the breadcrumb strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub path: String,
    pub is_last: bool,
}

/// Builds the breadcrumb trail for a pathname.
///
/// The site name is always the first crumb and always links home; every
/// path segment after it becomes a capitalized crumb, the final one
/// rendered as plain text.
pub fn breadcrumb_trail(path: &str) -> Vec<Crumb> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut trail = vec![Crumb {
        label: SITE_NAME.to_string(),
        path: "/".to_string(),
        is_last: false,
    }];

    let mut built = String::new();
    for (index, segment) in segments.iter().enumerate() {
        built.push('/');
        built.push_str(segment);
        trail.push(Crumb {
            label: capitalize(segment),
            path: built.clone(),
            is_last: index == segments.len() - 1,
        });
    }

    trail
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Page::from_path("/replica/"), Some(Page::Language));
    }

    #[test]
    fn unknown_path_resolves_to_none() {
        assert_eq!(Page::from_path("/pricing"), None);
        assert_eq!(Page::from_path("replica"), None);
    }

    #[test]
    fn home_trail_is_root_only() {
        let trail = breadcrumb_trail("/");
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].label, SITE_NAME);
        assert_eq!(trail[0].path, "/");
    }

    #[test]
    fn language_trail_capitalizes_terminal_segment() {
        let trail = breadcrumb_trail("/replica");
        assert_eq!(trail.len(), 2);
        assert_eq!(trail[1].label, "Replica");
        assert_eq!(trail[1].path, "/replica");
        assert!(trail[1].is_last);
        assert!(!trail[0].is_last);
    }

    #[test]
    fn nested_trail_links_intermediate_segments() {
        let trail = breadcrumb_trail("/docs/actors");
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[1].label, "Docs");
        assert_eq!(trail[1].path, "/docs");
        assert!(!trail[1].is_last);
        assert_eq!(trail[2].path, "/docs/actors");
        assert!(trail[2].is_last);
    }
}
