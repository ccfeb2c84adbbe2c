//! Route classification.
//!
//! Every route path lands in exactly one of four buckets. Rules are applied in
//! strict priority order and the first match wins:
//!
//! | Priority | Kind | Rule |
//! |----------|------|------|
//! | 1 | [`RouteKind::Api`] | starts with `/api` |
//! | 2 | [`RouteKind::CatchAll`] | contains a spread segment `[...` |
//! | 3 | [`RouteKind::Dynamic`] | contains a `[` |
//! | 4 | [`RouteKind::Static`] | anything else |
//!
//! So `/api/[...path]` is an API route, not a catch-all, and
//! `/docs/[...slug]` is a catch-all, not a dynamic route.

use serde::Serialize;

/// Prefix marking a server endpoint.
pub const API_PREFIX: &str = "/api";
/// Opening of a spread segment such as `[...slug]` or `[[...slug]]`.
pub const SPREAD_MARKER: &str = "[...";
const SEGMENT_OPEN: char = '[';

/// The bucket a single route path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Api,
    CatchAll,
    Dynamic,
    Static,
}

impl RouteKind {
    /// Order buckets are presented in.
    pub const DISPLAY_ORDER: [RouteKind; 4] = [
        RouteKind::Api,
        RouteKind::Dynamic,
        RouteKind::CatchAll,
        RouteKind::Static,
    ];

    /// Classify one path.
    pub fn of(path: &str) -> Self {
        if path.starts_with(API_PREFIX) {
            RouteKind::Api
        } else if path.contains(SPREAD_MARKER) {
            RouteKind::CatchAll
        } else if path.contains(SEGMENT_OPEN) {
            RouteKind::Dynamic
        } else {
            RouteKind::Static
        }
    }

    /// Section heading, e.g. `"Catch-All Routes"`.
    pub fn heading(self) -> &'static str {
        match self {
            RouteKind::Api => "API Routes",
            RouteKind::CatchAll => "Catch-All Routes",
            RouteKind::Dynamic => "Dynamic Routes",
            RouteKind::Static => "Static Pages",
        }
    }

    /// Stable identifier for HTML anchors.
    pub fn anchor(self) -> &'static str {
        match self {
            RouteKind::Api => "api",
            RouteKind::CatchAll => "catch-all",
            RouteKind::Dynamic => "dynamic",
            RouteKind::Static => "static",
        }
    }
}

/// A classified route list.
///
/// `all` keeps the input order and any duplicates. Each bucket is the
/// order-preserving subsequence of `all` with that [`RouteKind`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteSet {
    pub all: Vec<String>,
    pub api: Vec<String>,
    pub dynamic: Vec<String>,
    pub catch_all: Vec<String>,
    #[serde(rename = "static")]
    pub static_pages: Vec<String>,
    pub total: usize,
}

/// Aggregate bucket sizes of a [`RouteSet`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RouteCounts {
    pub total: usize,
    pub api: usize,
    pub dynamic: usize,
    pub catch_all: usize,
    #[serde(rename = "static")]
    pub static_pages: usize,
}

/// Partition route paths into the four buckets.
pub fn classify<S: AsRef<str>>(paths: &[S]) -> RouteSet {
    let mut set = RouteSet::default();
    for path in paths {
        let path = path.as_ref();
        set.bucket_mut(RouteKind::of(path)).push(path.to_string());
        set.all.push(path.to_string());
    }
    set.total = set.all.len();
    set
}

/// Classify a possibly-absent route list; absence is an empty set.
pub fn classify_optional<S: AsRef<str>>(paths: Option<&[S]>) -> RouteSet {
    paths.map(classify).unwrap_or_default()
}

impl RouteSet {
    /// Routes in one bucket.
    pub fn bucket(&self, kind: RouteKind) -> &[String] {
        match kind {
            RouteKind::Api => &self.api,
            RouteKind::CatchAll => &self.catch_all,
            RouteKind::Dynamic => &self.dynamic,
            RouteKind::Static => &self.static_pages,
        }
    }

    fn bucket_mut(&mut self, kind: RouteKind) -> &mut Vec<String> {
        match kind {
            RouteKind::Api => &mut self.api,
            RouteKind::CatchAll => &mut self.catch_all,
            RouteKind::Dynamic => &mut self.dynamic,
            RouteKind::Static => &mut self.static_pages,
        }
    }

    pub fn counts(&self) -> RouteCounts {
        RouteCounts {
            total: self.total,
            api: self.api.len(),
            dynamic: self.dynamic.len(),
            catch_all: self.catch_all.len(),
            static_pages: self.static_pages.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Every route, one per line ("copy all").
    pub fn all_text(&self) -> String {
        self.all.join("\n")
    }

    /// API routes only, one per line ("copy api").
    pub fn api_text(&self) -> String {
        self.api.join("\n")
    }
}

impl RouteCounts {
    pub fn get(&self, kind: RouteKind) -> usize {
        match kind {
            RouteKind::Api => self.api,
            RouteKind::CatchAll => self.catch_all,
            RouteKind::Dynamic => self.dynamic,
            RouteKind::Static => self.static_pages,
        }
    }
}
