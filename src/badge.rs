//! Per-tab route count indicator.
//!
//! Each inspected tab gets a small badge showing how many routes its page
//! exposes. State is an explicit map from [`TabId`] to the last computed
//! [`Badge`]: an entry is created when a page finishes loading and removed
//! when the tab closes. Nothing is shared between tabs.

use crate::classify::{RouteCounts, classify_optional};
use crate::config::BadgeConfig;
use crate::locate::locate;
use crate::page::PageAddress;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

/// Browser tab identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TabId(pub u32);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab {}", self.0)
    }
}

/// What the indicator shows for one tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub counts: RouteCounts,
    /// Route total, or empty when nothing was found.
    pub text: String,
    pub color: String,
}

impl Badge {
    fn new(counts: RouteCounts, color: &str) -> Self {
        let text = if counts.total > 0 {
            counts.total.to_string()
        } else {
            String::new()
        };
        Self {
            counts,
            text,
            color: color.to_string(),
        }
    }
}

/// Last computed badge per tab.
#[derive(Debug, Clone)]
pub struct BadgeRegistry {
    color: String,
    badges: BTreeMap<TabId, Badge>,
}

impl BadgeRegistry {
    pub fn new(config: &BadgeConfig) -> Self {
        Self {
            color: config.color.clone(),
            badges: BTreeMap::new(),
        }
    }

    /// Record the result of inspecting a tab whose page finished loading.
    ///
    /// `scope` is `None` when the page's globals could not be read (the tab
    /// navigated away or the read failed); that counts as no manifest. Pages
    /// that are not `http(s)` get no badge and lose any previous one.
    pub fn inspect(&mut self, tab: TabId, page_url: &str, scope: Option<&Value>) -> Option<&Badge> {
        let scannable = PageAddress::parse(page_url).is_ok_and(|page| page.is_scannable());
        if !scannable {
            warn!(%tab, url = page_url, "skipping page that cannot be scanned");
            self.badges.remove(&tab);
            return None;
        }

        let routes = scope.and_then(locate);
        let counts = classify_optional(routes.as_deref()).counts();
        debug!(%tab, total = counts.total, "badge updated");

        self.badges.insert(tab, Badge::new(counts, &self.color));
        self.badges.get(&tab)
    }

    pub fn get(&self, tab: TabId) -> Option<&Badge> {
        self.badges.get(&tab)
    }

    /// Drop a tab's entry on teardown.
    pub fn remove(&mut self, tab: TabId) -> Option<Badge> {
        self.badges.remove(&tab)
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TabId, &Badge)> {
        self.badges.iter().map(|(tab, badge)| (*tab, badge))
    }
}
