//! The address of the inspected page.
//!
//! Only `http` and `https` pages are inspected. Browser-internal pages
//! (`chrome://`, `about:`, `file://`) never carry a Next.js manifest worth
//! reporting. The page origin is what route links are built from:
//! `https://example.com` + `/blog/[slug]`.

use std::fmt;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("invalid page URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("cannot scan this page: {0}")]
    NotScannable(String),
}

/// A parsed page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAddress {
    url: Url,
}

impl PageAddress {
    pub fn parse(raw: &str) -> Result<Self, PageError> {
        Ok(Self {
            url: Url::parse(raw)?,
        })
    }

    /// Parse and require an inspectable scheme.
    pub fn scannable(raw: &str) -> Result<Self, PageError> {
        let page = Self::parse(raw)?;
        if !page.is_scannable() {
            return Err(PageError::NotScannable(raw.to_string()));
        }
        Ok(page)
    }

    pub fn is_scannable(&self) -> bool {
        matches!(self.url.scheme(), "http" | "https")
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// `scheme://host[:port]`, without a trailing slash.
    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }

    /// Absolute link to a route on this page's origin.
    ///
    /// Bracketed segments are kept verbatim; the link points at the route
    /// pattern, not a concrete page.
    pub fn link_for(&self, route: &str) -> String {
        format!("{}{}", self.origin(), route)
    }
}

impl fmt::Display for PageAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
