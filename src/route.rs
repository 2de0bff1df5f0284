//! Route Parsing
//!
//! Pure functions over the location hash. The hash is a `#`-joined path of
//! segment names, optionally followed by a single `?key=value` query suffix,
//! e.g. `#users#todos?userId=3`. No DOM access happens here so everything is
//! testable off-browser.

/// Route used when the page loads without a hash.
pub const DEFAULT_ROUTE: &str = "#users";

/// Screens reachable through the fixed route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Users,
    Todos,
    Posts,
    Comments,
}

/// Parsed form of the current hash.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Matched screen, `None` for unknown route roots.
    pub screen: Option<Screen>,
    /// Route root with the query suffix stripped, kept for error messages.
    pub root: String,
    pub user_id: Option<i64>,
    pub post_id: Option<i64>,
}

impl Route {
    /// Parse a location hash. An empty hash falls back to [`DEFAULT_ROUTE`].
    pub fn parse(hash: &str) -> Self {
        let hash = if hash.is_empty() { DEFAULT_ROUTE } else { hash };
        let (root, query) = match hash.split_once('?') {
            Some((root, query)) => (root, Some(query)),
            None => (hash, None),
        };

        let screen = match root {
            "#users" => Some(Screen::Users),
            "#users#todos" => Some(Screen::Todos),
            "#users#posts" => Some(Screen::Posts),
            "#users#posts#comments" => Some(Screen::Comments),
            _ => None,
        };

        Self {
            screen,
            root: root.to_string(),
            user_id: query.and_then(|q| query_param(q, "userId")),
            post_id: query.and_then(|q| query_param(q, "postId")),
        }
    }
}

/// Look up a numeric query parameter. Non-numeric values read as absent.
fn query_param(query: &str, key: &str) -> Option<i64> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        if k == key {
            v.parse::<i64>().ok()
        } else {
            None
        }
    })
}

/// One breadcrumb entry; the last entry in a trail carries no href.
#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

/// Display labels for known route segments.
fn segment_label(segment: &str) -> String {
    match segment {
        "users" => "Users".to_string(),
        "todos" => "Todos".to_string(),
        "posts" => "Posts".to_string(),
        "comments" => "Comments".to_string(),
        other => other.to_string(),
    }
}

/// Derive the breadcrumb trail for a hash. Hrefs accumulate the path prefix
/// segment by segment, query suffixes included; labels drop them.
pub fn breadcrumb_trail(hash: &str) -> Vec<Crumb> {
    let segments: Vec<&str> = hash
        .trim_start_matches('#')
        .split('#')
        .filter(|s| !s.is_empty())
        .collect();
    let last = segments.len().saturating_sub(1);

    let mut path = String::new();
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            path.push('#');
            path.push_str(segment);
            let name = segment.split('?').next().unwrap_or(segment);
            Crumb {
                label: segment_label(name),
                href: (index != last).then(|| path.clone()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_roots() {
        assert_eq!(Route::parse("#users").screen, Some(Screen::Users));
        assert_eq!(Route::parse("#users#todos").screen, Some(Screen::Todos));
        assert_eq!(Route::parse("#users#posts").screen, Some(Screen::Posts));
        assert_eq!(
            Route::parse("#users#posts#comments").screen,
            Some(Screen::Comments)
        );
        assert_eq!(Route::parse("#nowhere").screen, None);
    }

    #[test]
    fn test_empty_hash_defaults_to_users() {
        let route = Route::parse("");
        assert_eq!(route.screen, Some(Screen::Users));
        assert_eq!(route.root, "#users");
    }

    #[test]
    fn test_query_suffix_ignored_for_matching() {
        let route = Route::parse("#users#todos?userId=3");
        assert_eq!(route.screen, Some(Screen::Todos));
        assert_eq!(route.root, "#users#todos");
        assert_eq!(route.user_id, Some(3));
        assert_eq!(route.post_id, None);
    }

    #[test]
    fn test_negative_and_invalid_ids() {
        assert_eq!(Route::parse("#users#todos?userId=-17").user_id, Some(-17));
        assert_eq!(Route::parse("#users#todos?userId=abc").user_id, None);
        assert_eq!(Route::parse("#users#todos").user_id, None);
    }

    #[test]
    fn test_post_id_param() {
        let route = Route::parse("#users#posts#comments?postId=12");
        assert_eq!(route.post_id, Some(12));
        assert_eq!(route.user_id, None);
    }

    #[test]
    fn test_breadcrumb_trail_labels_and_hrefs() {
        let trail = breadcrumb_trail("#users#todos?userId=1");

        assert_eq!(trail.len(), 2);
        assert_eq!(trail[0].label, "Users");
        assert_eq!(trail[0].href.as_deref(), Some("#users"));
        assert_eq!(trail[1].label, "Todos");
        assert_eq!(trail[1].href, None);
    }

    #[test]
    fn test_breadcrumb_hrefs_keep_query_suffix() {
        let trail = breadcrumb_trail("#users#posts?userId=2#comments?postId=5");

        assert_eq!(trail.len(), 3);
        assert_eq!(trail[1].label, "Posts");
        assert_eq!(trail[1].href.as_deref(), Some("#users#posts?userId=2"));
        assert_eq!(trail[2].label, "Comments");
        assert_eq!(trail[2].href, None);
    }

    #[test]
    fn test_breadcrumb_unknown_segment_falls_back_to_raw_name() {
        let trail = breadcrumb_trail("#users#albums");
        assert_eq!(trail[1].label, "albums");
    }

    #[test]
    fn test_breadcrumb_single_segment_is_plain_text() {
        let trail = breadcrumb_trail("#users");
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].href, None);
    }
}
