//! Standalone HTML export of a classified route list.
//!
//! The export is one self-contained document: inline CSS, the route lists as
//! links on the inspected page's origin, and two copy buttons backed by a
//! small inline script. It can be opened from disk with no server.
//!
//! ## Layout
//!
//! ```text
//! Next.js Routes
//! Target: https://example.com/
//! Total Endpoints: 12
//! [Copy All Routes] [Copy API Routes]
//!
//! API Routes (3)        Dynamic Routes (4)
//! Catch-All Routes (1)  Static Pages (4)
//! ```
//!
//! Uses [maud](https://maud.lambda.xyz/) so every route string (which comes
//! from an untrusted page) is escaped on the way into the markup.

use crate::classify::{RouteKind, RouteSet};
use crate::config::ExportConfig;
use crate::page::PageAddress;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the export document.
pub fn render_export(routes: &RouteSet, page: &PageAddress, config: &ExportConfig) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "Next.js Routes - " (page.as_str()) }
                style { (PreEscaped(export_css(config))) }
            }
            body {
                h1 { "Next.js Routes" }
                p.info { strong { "Target:" } " " (page.as_str()) }
                p.info { strong { "Total Endpoints:" } " " (routes.total) }
                button.btn type="button" onclick="copyAll()" { "Copy All Routes" }
                button.btn.green type="button" onclick="copyApi()" { "Copy API Routes" }
                @for kind in RouteKind::DISPLAY_ORDER {
                    (render_bucket(kind, routes.bucket(kind), page))
                }
                script { (PreEscaped(copy_script(routes))) }
            }
        }
    }
}

/// Render and write the export document to `path`.
pub fn write_export(
    path: &Path,
    routes: &RouteSet,
    page: &PageAddress,
    config: &ExportConfig,
) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_export(routes, page, config).into_string())?;
    info!(path = %path.display(), total = routes.total, "wrote export");
    Ok(())
}

fn render_bucket(kind: RouteKind, routes: &[String], page: &PageAddress) -> Markup {
    html! {
        section.bucket id=(kind.anchor()) {
            h2 { (kind.heading()) " (" (routes.len()) ")" }
            pre {
                @if routes.is_empty() {
                    "None"
                } @else {
                    @for (i, route) in routes.iter().enumerate() {
                        @if i > 0 { br; }
                        a href=(page.link_for(route)) target="_blank" rel="noopener" { (route) }
                    }
                }
            }
        }
    }
}

fn export_css(config: &ExportConfig) -> String {
    format!(
        r#"body {{ font-family: 'Courier New', monospace; background: #fff; padding: 30px; line-height: 1.6; color: #1a1a1a; }}
h1 {{ color: {accent}; border-bottom: 2px solid {accent}; padding-bottom: 10px; font-size: 24px; }}
h2 {{ color: {accent}; margin-top: 30px; font-size: 18px; }}
pre {{ background: #f5f5f5; padding: 16px; border-left: 5px solid {accent}; overflow-x: auto; white-space: pre-wrap; font-size: 13px; margin: 10px 0; line-height: 1.8; }}
a {{ color: {accent}; text-decoration: none; }}
.btn {{ background: {accent}; color: white; border: none; padding: 10px 18px; margin: 6px; cursor: pointer; border-radius: 6px; font-size: 14px; }}
.btn:hover {{ opacity: 0.9; }}
.btn.green {{ background: {copy}; }}
.info {{ font-size: 14px; color: #555; margin: 10px 0; }}"#,
        accent = config.accent,
        copy = config.copy_accent,
    )
}

/// JSON array literal safe to embed inside a `<script>` element.
///
/// Every `<` becomes `\u003c`, so no route can open a comment or close the
/// element, whatever state the HTML tokenizer is in.
fn script_json(routes: &[String]) -> String {
    serde_json::to_string(routes)
        .unwrap_or_else(|_| "[]".to_string())
        .replace('<', "\\u003c")
}

fn copy_script(routes: &RouteSet) -> String {
    format!(
        r#"const allRoutes = {all};
const apiRoutes = {api};

function copyText(text, successMsg) {{
  const fallback = () => {{
    const textarea = document.createElement('textarea');
    textarea.value = text;
    textarea.style.position = 'fixed';
    textarea.style.opacity = '0';
    textarea.style.left = '-9999px';
    document.body.appendChild(textarea);
    textarea.select();
    try {{
      alert(document.execCommand('copy') ? successMsg : 'Copy failed, please select and copy manually');
    }} catch (err) {{
      alert('Copy failed: ' + err.message);
    }}
    document.body.removeChild(textarea);
  }};
  if (navigator.clipboard && navigator.clipboard.writeText) {{
    navigator.clipboard.writeText(text).then(() => alert(successMsg), fallback);
  }} else {{
    fallback();
  }}
}}

function copyAll() {{ copyText(allRoutes.join('\n'), 'Copied all routes!'); }}
function copyApi() {{ copyText(apiRoutes.join('\n'), 'Copied API routes!'); }}"#,
        all = script_json(&routes.all),
        api = script_json(&routes.api),
    )
}
