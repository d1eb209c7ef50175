//! sitenav command-line front end.
//!
//! ```text
//!   config.toml ──▶ config::load_config ──▶ Site::new
//!                                            ├── PathRouter  ◀── dispatch / navigate
//!                                            └── MenuBuild   ──▶ menu (json | html)
//! ```

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};

use sitenav::config::{self, SiteConfig};
use sitenav::menu::{
    HtmlMenuRenderer, LinkItem, MenuBuild, MenuRenderer, MenuTreeBuilder,
};
use sitenav::observability::logging;
use sitenav::routing::{Dispatch, HandlerResult};
use sitenav::site::{Site, View, ViewSink};

#[derive(Parser)]
#[command(name = "sitenav")]
#[command(about = "Nested navigation menus and path routing for a small site", long_about = None)]
struct Cli {
    /// Site configuration file (TOML). Built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the navigation menu and print it
    Menu {
        /// JSON array of {"name", "target"} links to use instead of the config
        #[arg(long)]
        links: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = MenuFormat::Json)]
        format: MenuFormat,
    },
    /// Dispatch a path through the configured routes
    Dispatch { path: String },
    /// Move the location to a path, then dispatch it
    Navigate { path: String },
    /// List configured routes
    Routes,
}

#[derive(Clone, Copy, ValueEnum)]
enum MenuFormat {
    Json,
    Html,
}

/// Prints every shown view as one JSON line.
struct StdoutSink;

impl ViewSink for StdoutSink {
    fn show(&self, view: &View<'_>) -> HandlerResult {
        println!("{}", serde_json::to_string(view)?);
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => SiteConfig::default(),
    };

    logging::init(&config.observability)?;

    // The subscriber only exists once the config is loaded.
    tracing::info!(
        path = ?cli.config,
        routes = config.routes.len(),
        links = config.menu.links.len(),
        mode = ?config.router.mode,
        "Configuration loaded"
    );

    let site = Site::new(config, Arc::new(StdoutSink))?;

    match cli.command {
        Commands::Menu { links, format } => {
            let build = match links {
                Some(path) => {
                    let items: Vec<LinkItem> = serde_json::from_str(&fs::read_to_string(path)?)?;
                    MenuTreeBuilder::new().build_report(&items)
                }
                None => site.menu().clone(),
            };
            print_menu(&site, &build, format)?;
        }
        Commands::Dispatch { path } => {
            let outcome = site.router().dispatch(&path);
            report(&path, &outcome);
        }
        Commands::Navigate { path } => {
            let mut location = site.location()?;
            let outcome = site.router().navigate_to(&mut location, &path);
            report(&path, &outcome);
            println!("{}", location.url());
        }
        Commands::Routes => {
            for pattern in site.router().templates() {
                println!("{}\t{}", pattern.template(), pattern.param_names().join(","));
            }
        }
    }

    Ok(())
}

fn print_menu(
    site: &Site,
    build: &MenuBuild,
    format: MenuFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        MenuFormat::Json => println!("{}", serde_json::to_string_pretty(&build.roots)?),
        MenuFormat::Html => {
            let renderer = HtmlMenuRenderer::new(site.config().menu.classes.clone());
            println!("{}", renderer.render(&build.roots));
        }
    }

    for skipped in &build.skipped {
        eprintln!("Skipped: {}", skipped);
    }
    Ok(())
}

fn report(path: &str, outcome: &Dispatch) {
    match outcome {
        Dispatch::Unhandled => println!("404 Not Found: {}", path),
        Dispatch::Failed { template, error } => {
            eprintln!(
                "Error: handler for {} failed: {}",
                template.as_deref().unwrap_or("not-found view"),
                error
            );
        }
        _ => {}
    }
}
