//! CLI output formatting.
//!
//! # Output Format
//!
//! ```text
//! Source: build manifest
//! Total: 4 endpoints
//!
//! API Routes (1)
//!     /api/users
//!
//! Dynamic Routes (1)
//!     /blog/[slug]
//!
//! Catch-All Routes (1)
//!     /docs/[...slug]
//!
//! Static Pages (0)
//!     (none)
//! ```
//!
//! When a page URL is known and `output.links` is on, routes are shown as
//! absolute links on the page origin instead of bare paths.
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure.

use crate::classify::{RouteKind, RouteSet};
use crate::locate::ManifestSource;
use crate::page::PageAddress;
use serde::Serialize;

/// Empty-state message when no manifest was found.
pub const ABSENT_MESSAGE: &str = "No Next.js manifest found";

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a classified route list, grouped by bucket.
///
/// `link_base` turns each route into an absolute link on that page's origin.
pub fn format_route_set(
    routes: &RouteSet,
    source: Option<ManifestSource>,
    link_base: Option<&PageAddress>,
) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(source) = source {
        lines.push(format!("Source: {}", source.label()));
    }
    lines.push(format!("Total: {} endpoints", routes.total));

    for kind in RouteKind::DISPLAY_ORDER {
        let bucket = routes.bucket(kind);
        lines.push(String::new());
        lines.push(format!("{} ({})", kind.heading(), bucket.len()));
        if bucket.is_empty() {
            lines.push(format!("{}(none)", indent(1)));
            continue;
        }
        for route in bucket {
            let shown = match link_base {
                Some(page) => page.link_for(route),
                None => route.clone(),
            };
            lines.push(format!("{}{}", indent(1), shown));
        }
    }

    lines
}

/// Format the empty state shown when no manifest was found.
pub fn format_absent(page: Option<&PageAddress>) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(page) = page {
        lines.push(format!("Page: {}", page));
    }
    lines.push(ABSENT_MESSAGE.to_string());
    lines
}

/// Machine-readable scan result.
#[derive(Debug, Serialize)]
pub struct ScanReport<'a> {
    pub page: Option<&'a str>,
    /// `None` when no manifest was found.
    pub source: Option<ManifestSource>,
    pub routes: &'a RouteSet,
}

/// Pretty JSON for `scan --json`.
pub fn format_json(report: &ScanReport<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Print grouped route output to stdout.
pub fn print_route_set(
    routes: &RouteSet,
    source: Option<ManifestSource>,
    link_base: Option<&PageAddress>,
) {
    for line in format_route_set(routes, source, link_base) {
        println!("{}", line);
    }
}

/// Print the empty state to stdout.
pub fn print_absent(page: Option<&PageAddress>) {
    for line in format_absent(page) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    fn sample() -> RouteSet {
        classify(&["/api/users", "/blog/[slug]", "/docs/[...slug]", "/about"])
    }

    #[test]
    fn groups_routes_under_headings() {
        let lines = format_route_set(&sample(), None, None);
        assert_eq!(lines[0], "Total: 4 endpoints");
        assert!(lines.contains(&"API Routes (1)".to_string()));
        assert!(lines.contains(&"    /api/users".to_string()));
        assert!(lines.contains(&"Catch-All Routes (1)".to_string()));
        assert!(lines.contains(&"    /docs/[...slug]".to_string()));
    }

    #[test]
    fn heading_is_followed_by_its_routes() {
        let lines = format_route_set(&sample(), None, None);
        let idx = lines.iter().position(|l| l == "Dynamic Routes (1)").unwrap();
        assert_eq!(lines[idx + 1], "    /blog/[slug]");
    }

    #[test]
    fn source_line_first_when_known() {
        let lines = format_route_set(&sample(), Some(ManifestSource::StaticProps), None);
        assert_eq!(lines[0], "Source: static props");
        assert_eq!(lines[1], "Total: 4 endpoints");
    }

    #[test]
    fn empty_bucket_marked_none() {
        let lines = format_route_set(&classify(&["/api/a"]), None, None);
        let idx = lines.iter().position(|l| l == "Static Pages (0)").unwrap();
        assert_eq!(lines[idx + 1], "    (none)");
    }

    #[test]
    fn routes_become_links_with_page() {
        let page = PageAddress::parse("https://example.com/some/page").unwrap();
        let lines = format_route_set(&sample(), None, Some(&page));
        assert!(lines.contains(&"    https://example.com/about".to_string()));
    }

    #[test]
    fn absent_shows_page_and_message() {
        let page = PageAddress::parse("https://example.com/").unwrap();
        let lines = format_absent(Some(&page));
        assert_eq!(lines, vec!["Page: https://example.com/", ABSENT_MESSAGE]);
        assert_eq!(format_absent(None), vec![ABSENT_MESSAGE]);
    }

    #[test]
    fn json_report_shape() {
        let routes = sample();
        let report = ScanReport {
            page: Some("https://example.com/"),
            source: Some(ManifestSource::BuildManifest),
            routes: &routes,
        };
        let value: serde_json::Value =
            serde_json::from_str(&format_json(&report).unwrap()).unwrap();
        assert_eq!(value["source"], "build_manifest");
        assert_eq!(value["routes"]["total"], 4);
        assert_eq!(value["routes"]["catch_all"][0], "/docs/[...slug]");
    }

    #[test]
    fn json_report_for_absent_manifest() {
        let routes = RouteSet::default();
        let report = ScanReport {
            page: None,
            source: None,
            routes: &routes,
        };
        let value: serde_json::Value =
            serde_json::from_str(&format_json(&report).unwrap()).unwrap();
        assert!(value["source"].is_null());
        assert_eq!(value["routes"]["total"], 0);
    }
}
