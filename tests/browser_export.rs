//! Browser tests for the HTML export: the report renders and its copy script
//! carries the route lists.
//!
//! Run with: `cargo test --test browser_export -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn report_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated/routes.html")
}

fn ensure_report_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let bin = env!("CARGO_BIN_EXE_next-routes");
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let status = Command::new(bin)
            .args([
                "export",
                root.join("fixtures/scopes/build_manifest.json")
                    .to_str()
                    .unwrap(),
                "--url",
                "https://example.com/",
                "--output",
                report_path().to_str().unwrap(),
            ])
            .status()
            .expect("failed to run next-routes");
        assert!(status.success(), "report generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load_report() -> Arc<Tab> {
    ensure_report_built();
    let tab = browser().new_tab().unwrap();
    tab.navigate_to(&format!("file://{}", report_path().display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab
}

fn eval(tab: &Tab, js: &str) -> serde_json::Value {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn four_bucket_sections_rendered() {
    let tab = load_report();
    let val = eval(&tab, "document.querySelectorAll('section.bucket h2').length");
    assert_eq!(val.as_u64(), Some(4));
}

#[test]
#[ignore]
fn copy_script_holds_all_routes() {
    let tab = load_report();
    let val = eval(&tab, "allRoutes.length");
    assert_eq!(val.as_u64(), Some(11));
    let val = eval(&tab, "apiRoutes.join(',')");
    assert_eq!(val.as_str(), Some("/api/auth/[...nextauth],/api/users"));
}

#[test]
#[ignore]
fn catch_all_links_point_at_origin() {
    let tab = load_report();
    let val = eval(
        &tab,
        "Array.from(document.querySelectorAll('#catch-all a')).map(a => a.getAttribute('href')).join(' ')",
    );
    assert_eq!(
        val.as_str(),
        Some("https://example.com/docs/[...slug] https://example.com/shop/[[...filters]]")
    );
}

#[test]
#[ignore]
fn copy_functions_defined() {
    let tab = load_report();
    let val = eval(
        &tab,
        "typeof copyAll === 'function' && typeof copyApi === 'function'",
    );
    assert_eq!(val.as_bool(), Some(true));
}
