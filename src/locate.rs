//! Manifest location in an untrusted scope snapshot.
//!
//! The scope is whatever the inspected page had on its global object, captured
//! as JSON. Nothing about its shape is guaranteed: the page may run any Next.js
//! version or none at all, and any field may be missing, null, or of the wrong
//! type. Each recognized manifest shape is therefore a serde type that is
//! *decoded* from the scope, and a failed decode simply means "this shape is
//! not here".
//!
//! ## Recognized Shapes
//!
//! ```text
//! Shape A  __BUILD_MANIFEST.sortedPages        → ["/", "/about", "/api/users"]
//! Shape B  __NEXT_DATA__.props.pageProps       → every key starting with "/"
//!          (only when pageProps.__N_SSG is truthy)
//! ```
//!
//! Shape A wins whenever it decodes. Shape B is the fallback for statically
//! generated pages that never ship a build manifest to the client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Global that holds the client build manifest.
pub const BUILD_MANIFEST_GLOBAL: &str = "__BUILD_MANIFEST";
/// Global that holds the serialized page data.
pub const NEXT_DATA_GLOBAL: &str = "__NEXT_DATA__";
/// Marker field set in `pageProps` for statically generated pages.
const STATIC_PROPS_MARKER: &str = "__N_SSG";

/// Which manifest shape a route list was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ManifestSource {
    /// `__BUILD_MANIFEST.sortedPages`
    BuildManifest,
    /// Route-shaped keys of `__NEXT_DATA__.props.pageProps`
    StaticProps,
}

impl ManifestSource {
    /// Short human label used in terminal output.
    pub fn label(self) -> &'static str {
        match self {
            ManifestSource::BuildManifest => "build manifest",
            ManifestSource::StaticProps => "static props",
        }
    }
}

/// Route paths found in a scope, with the shape they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedManifest {
    pub source: ManifestSource,
    pub routes: Vec<String>,
}

#[derive(Deserialize)]
struct BuildManifest {
    #[serde(rename = "sortedPages")]
    sorted_pages: Vec<String>,
}

#[derive(Deserialize)]
struct NextData {
    props: NextProps,
}

#[derive(Deserialize)]
struct NextProps {
    #[serde(rename = "pageProps")]
    page_props: Map<String, Value>,
}

/// Find the route list in a scope snapshot.
///
/// Returns `None` when neither manifest shape is present. Never fails: a
/// malformed manifest is indistinguishable from a missing one.
pub fn locate(scope: &Value) -> Option<Vec<String>> {
    locate_manifest(scope).map(|found| found.routes)
}

/// Like [`locate`], but also reports which shape matched.
pub fn locate_manifest(scope: &Value) -> Option<LocatedManifest> {
    if let Some(routes) = decode_build_manifest(scope) {
        debug!(routes = routes.len(), "found {}.sortedPages", BUILD_MANIFEST_GLOBAL);
        return Some(LocatedManifest {
            source: ManifestSource::BuildManifest,
            routes,
        });
    }
    if let Some(routes) = decode_static_props(scope) {
        debug!(routes = routes.len(), "found static props in {}", NEXT_DATA_GLOBAL);
        return Some(LocatedManifest {
            source: ManifestSource::StaticProps,
            routes,
        });
    }
    debug!("no route manifest in scope");
    None
}

fn decode_build_manifest(scope: &Value) -> Option<Vec<String>> {
    let raw = scope.get(BUILD_MANIFEST_GLOBAL)?;
    BuildManifest::deserialize(raw)
        .ok()
        .map(|manifest| manifest.sorted_pages)
}

fn decode_static_props(scope: &Value) -> Option<Vec<String>> {
    let raw = scope.get(NEXT_DATA_GLOBAL)?;
    let data = NextData::deserialize(raw).ok()?;
    let page_props = data.props.page_props;
    if !page_props.get(STATIC_PROPS_MARKER).is_some_and(is_truthy) {
        return None;
    }
    Some(
        page_props
            .keys()
            .filter(|key| key.starts_with('/'))
            .cloned()
            .collect(),
    )
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
