//! Folio CLI
//!
//! Command-line interface for the portfolio content:
//! - List projects
//! - Print a detail page as text
//! - Resolve a hash to the page it selects
//! - Validate content documents
//! - Generate a config file

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;

use folio::config::{generate_default_config, Config};
use folio::registry::Portfolio;
use folio::route::{format_hash, MemoryLocation, Router, ViewState};
use folio::telemetry::init_tracing;
use folio::view::{render_text, DetailView, Screen};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and validate portfolio content")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all projects in card order
    List,

    /// Print a project detail page
    Show {
        /// Project id
        id: String,
    },

    /// Show which page a URL hash selects
    Route {
        /// Hash fragment, with or without the leading '#'
        hash: String,
    },

    /// Validate content documents
    Validate {
        /// Projects document (default: configured or embedded)
        #[arg(long)]
        projects: Option<PathBuf>,
        /// Site document (default: configured or embedded)
        #[arg(long)]
        site: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_tracing(&config.logging, None);

    match cli.command {
        Commands::List => {
            let portfolio = load_portfolio(&config, None, None)?;

            if cli.format == OutputFormat::Json {
                let projects: Vec<_> = portfolio
                    .projects
                    .iter()
                    .map(|p| {
                        json!({
                            "id": p.id,
                            "title": p.title,
                            "date": p.date,
                            "status": p.status,
                            "href": format_hash(&ViewState::project(p.id.as_str())),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&projects)?);
            } else {
                println!("{:<24} {:<8} {:<16} {}", "ID", "Date", "Status", "Title");
                println!("{}", "-".repeat(80));
                for project in &portfolio.projects {
                    println!(
                        "{:<24} {:<8} {:<16} {}",
                        project.id, project.date, project.status, project.title
                    );
                }
            }
        }

        Commands::Show { id } => {
            let portfolio = load_portfolio(&config, None, None)?;
            let view = DetailView::resolve(&id, &portfolio.projects);

            if cli.format == OutputFormat::Json {
                let value = match view.record() {
                    Some(record) => serde_json::to_value(record)?,
                    None => json!({ "id": id, "error": view.title() }),
                };
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print!("{}", render_text(&view, &config.site.asset_base));
            }
        }

        Commands::Route { hash } => {
            let portfolio = load_portfolio(&config, None, None)?;
            let location = Rc::new(MemoryLocation::with_hash(&hash));
            let router = Router::new(location);
            let state = router.current().clone();
            let screen = Screen::for_state(&state, &portfolio);

            let found = match &screen {
                Screen::Home(_) => true,
                Screen::Detail(detail) => detail.is_found(),
            };

            if cli.format == OutputFormat::Json {
                let value = json!({
                    "hash": hash,
                    "state": state,
                    "canonical": format_hash(&state),
                    "title": screen.title(),
                    "found": found,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("State:     {}", state);
                println!("Canonical: {:?}", format_hash(&state));
                println!("Page:      {}", screen.title());
            }
        }

        Commands::Validate { projects, site } => {
            let portfolio = load_portfolio(&config, projects, site)
                .context("Content validation failed")?;

            if cli.format == OutputFormat::Json {
                let value = json!({
                    "valid": true,
                    "projects": portfolio.projects.len(),
                    "learning": portfolio.site.learning.len(),
                    "experience": portfolio.site.experience.len(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!(
                    "OK: {} projects, {} learning entries, {} stations",
                    portfolio.projects.len(),
                    portfolio.site.learning.len(),
                    portfolio.site.experience.len()
                );
            }
        }

        Commands::Config { output } => {
            let template = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &template)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", template);
                }
            }
        }
    }

    Ok(())
}

/// Load content, preferring explicit paths over configured ones
fn load_portfolio(
    config: &Config,
    projects: Option<PathBuf>,
    site: Option<PathBuf>,
) -> anyhow::Result<Portfolio> {
    let projects = projects.or_else(|| config.site.projects_file.clone());
    let site = site.or_else(|| config.site.site_file.clone());

    let portfolio = Portfolio::load(site.as_deref(), projects.as_deref())?;
    Ok(portfolio)
}
