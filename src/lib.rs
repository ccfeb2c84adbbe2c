//! # next-routes
//!
//! Finds the client-side route manifest a Next.js page ships to the browser
//! and sorts its routes into API routes, dynamic routes, catch-all routes and
//! static pages.
//!
//! # Pipeline
//!
//! ```text
//! 1. Snapshot   page globals   →  serde_json::Value   (scope)
//! 2. Locate     Value          →  Option<Vec<String>> (locate)
//! 3. Classify   Vec<String>    →  RouteSet            (classify)
//! 4. Present    RouteSet       →  text / JSON / HTML / badge
//! ```
//!
//! Steps 2 and 3 are pure functions. The locator never fails: a page with no
//! manifest, or a manifest of an unexpected shape, yields `None`, which every
//! presentation renders as an empty state rather than an error.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scope`] | Reads scope snapshots (JSON of the page's globals) from a file or stdin |
//! | [`locate`] | Decodes `__BUILD_MANIFEST` or `__NEXT_DATA__` static props into a route list |
//! | [`classify`] | Partitions routes into the four [`RouteKind`] buckets |
//! | [`page`] | Page URL parsing, scannability and origin-based route links |
//! | [`badge`] | Per-tab route count indicator, keyed by tab id |
//! | [`export`] | Standalone HTML report rendered with Maud |
//! | [`output`] | Terminal and JSON output |
//! | [`config`] | `next-routes.toml` loading, merging and validation |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Classification Priority
//!
//! A route matching several rules goes to the first one, in this order:
//! `/api` prefix, spread segment `[...`, any `[`, everything else. See
//! [`classify`] for the full table.

pub mod badge;
pub mod classify;
pub mod config;
pub mod export;
pub mod locate;
pub mod logging;
pub mod output;
pub mod page;
pub mod scope;

pub use classify::{RouteCounts, RouteKind, RouteSet, classify};
pub use locate::{LocatedManifest, ManifestSource, locate, locate_manifest};
