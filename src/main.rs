use clap::{Parser, Subcommand};
use next_routes::badge::{BadgeRegistry, TabId};
use next_routes::classify::classify_optional;
use next_routes::logging::{self, Verbosity};
use next_routes::page::PageAddress;
use next_routes::{config, export, locate_manifest, output, scope};
use std::path::{Path, PathBuf};
use tracing::info;

/// Snapshot input shared by every inspecting command.
#[derive(clap::Args, Clone)]
struct SnapshotArgs {
    /// JSON snapshot of the page's globals, or `-` for stdin
    snapshot: PathBuf,
}

#[derive(Parser)]
#[command(name = "next-routes")]
#[command(about = "Find and classify the route manifest of a Next.js page")]
#[command(long_about = "\
Find and classify the route manifest of a Next.js page

Reads a JSON snapshot of a page's globals and looks for the route list Next.js
ships to the browser. Take a snapshot from the browser console on the page:

  copy(JSON.stringify({ __BUILD_MANIFEST, __NEXT_DATA__ }))

and save the clipboard to a file.

Manifest sources (first available wins):
  __BUILD_MANIFEST.sortedPages
  __NEXT_DATA__.props.pageProps keys starting with '/' (static pages only)

Route buckets (first matching rule wins):
  API Routes        starts with /api
  Catch-All Routes  contains [...
  Dynamic Routes    contains [
  Static Pages      everything else

Run 'next-routes gen-config' to generate a documented config file.")]
#[command(version)]
struct Cli {
    /// Config file (TOML); stock defaults when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Locate and classify routes, grouped by kind
    Scan {
        #[command(flatten)]
        input: SnapshotArgs,
        /// Page the snapshot was taken from; routes are shown as links
        #[arg(long)]
        url: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print routes one per line, ready to paste
    Copy {
        #[command(flatten)]
        input: SnapshotArgs,
        /// Only API routes
        #[arg(long)]
        api: bool,
    },
    /// Write a standalone HTML report
    Export {
        #[command(flatten)]
        input: SnapshotArgs,
        /// Page the snapshot was taken from
        #[arg(long)]
        url: String,
        /// Output HTML file
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Print the route count indicator text for a page
    Badge {
        #[command(flatten)]
        input: SnapshotArgs,
        /// Page the snapshot was taken from
        #[arg(long)]
        url: String,
    },
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let machine_output = matches!(cli.command, Command::Scan { json: true, .. });
    logging::initialize_logging(Verbosity {
        verbose: cli.verbose,
        quiet: cli.quiet,
        machine_output,
    })?;

    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Scan { input, url, json } => {
            let page = url.as_deref().map(PageAddress::scannable).transpose()?;
            let scope = scope::load_scope(&input.snapshot)?;
            let located = locate_manifest(&scope);
            let source = located.as_ref().map(|found| found.source);
            let routes = classify_optional(located.as_ref().map(|found| found.routes.as_slice()));
            info!(total = routes.total, api = routes.api.len(), "classified routes");

            if json {
                let report = output::ScanReport {
                    page: page.as_ref().map(PageAddress::as_str),
                    source,
                    routes: &routes,
                };
                println!("{}", output::format_json(&report)?);
            } else if located.is_none() {
                output::print_absent(page.as_ref());
            } else {
                let link_base = page.as_ref().filter(|_| config.output.links);
                output::print_route_set(&routes, source, link_base);
            }
        }
        Command::Copy { input, api } => {
            let routes = load_routes(&input.snapshot)?;
            let text = if api {
                routes.api_text()
            } else {
                routes.all_text()
            };
            if !text.is_empty() {
                println!("{}", text);
            }
        }
        Command::Export { input, url, output } => {
            let page = PageAddress::scannable(&url)?;
            let routes = load_routes(&input.snapshot)?;
            export::write_export(&output, &routes, &page, &config.export)?;
            println!("Exported {} routes → {}", routes.total, output.display());
        }
        Command::Badge { input, url } => {
            let scope = scope::load_scope(&input.snapshot)?;
            let mut registry = BadgeRegistry::new(&config.badge);
            let text = registry
                .inspect(TabId(0), &url, Some(&scope))
                .map(|badge| badge.text.clone())
                .unwrap_or_default();
            println!("{}", text);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load a snapshot, locate its manifest and classify it.
fn load_routes(snapshot: &Path) -> Result<next_routes::RouteSet, scope::ScopeError> {
    let scope = scope::load_scope(snapshot)?;
    let routes = next_routes::locate(&scope);
    Ok(classify_optional(routes.as_deref()))
}
