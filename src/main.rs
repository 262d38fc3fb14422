// SPDX-License-Identifier: PMPL-1.0-or-later

//! portfolio: terminal front end for the portfolio catalog
//!
//! Renders the project grid and detail pages in either language, validates
//! catalog files, exports and lists page snapshots, and checks the asset directory.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use portfolio_catalog::catalog::{self, Catalog, CatalogError};
use portfolio_catalog::config::SiteConfig;
use portfolio_catalog::diagnostics;
use portfolio_catalog::export::ExportBundle;
use portfolio_catalog::i18n::{base_subtag, is_valid_iso639_1, native_name};
use portfolio_catalog::render::{self, OutputFormat};
use portfolio_catalog::storage;
use portfolio_catalog::types::CategoryFilter;
use portfolio_catalog::view::{build_detail, build_grid};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version)]
#[command(about = "Bilingual portfolio catalog: grid and detail pages in the terminal")]
#[command(long_about = None)]
struct Cli {
    /// Site configuration file (YAML or JSON)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Catalog file to use instead of the embedded one
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Locale tag (es, en, es-AR, en-US, ...)
    #[arg(long, global = true, value_name = "TAG")]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the project grid, newest first
    Grid {
        /// Category to show (Web, Videojuegos/Games, Multimedia, Todos/All)
        #[arg(short, long, default_value = "Todos")]
        category: String,

        #[arg(short, long, value_enum, default_value = "text")]
        format: FormatArg,
    },

    /// Show one project's detail page
    Show {
        /// Project identifier
        #[arg(value_name = "ID")]
        id: String,

        #[arg(short, long, value_enum, default_value = "text")]
        format: FormatArg,
    },

    /// Check a catalog file and list every problem found
    Validate {
        /// Catalog file (defaults to --catalog, then the embedded catalog)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },

    /// Write a snapshot of every page to disk
    Export {
        /// Output directory
        #[arg(short, long, default_value = storage::DEFAULT_EXPORT_DIR)]
        dir: PathBuf,

        /// Snapshot formats
        #[arg(long, value_enum, value_delimiter = ',', default_values = ["json", "yaml"])]
        formats: Vec<OutputFormat>,
    },

    /// List the newest JSON snapshots, oldest first
    Snapshots {
        /// Export directory
        #[arg(short, long, default_value = storage::DEFAULT_EXPORT_DIR)]
        dir: PathBuf,

        /// How many snapshots to list
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Check configuration, catalog and media files
    Doctor,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Yaml,
}

impl From<FormatArg> for Option<OutputFormat> {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => None,
            FormatArg::Json => Some(OutputFormat::Json),
            FormatArg::Yaml => Some(OutputFormat::Yaml),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_catalog=warn".into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Some(tag) = &cli.lang {
        if !is_valid_iso639_1(&base_subtag(tag)) {
            bail!("invalid language tag: {}", tag);
        }
    }

    let (config, source) =
        SiteConfig::discover(cli.config.as_deref()).context("loading site configuration")?;
    tracing::debug!(?source, "configuration resolved");
    let loc = config.localizer(cli.lang.as_deref());
    tracing::debug!(
        tag = loc.tag(),
        language = native_name(&base_subtag(loc.tag())).unwrap_or("?"),
        chrome = %loc.lang(),
        "locale selected"
    );

    match cli.command {
        Commands::Grid { category, format } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let filter = CategoryFilter::parse(&category);
            let page = build_grid(&catalog, &filter, &config, &loc);
            render::print_grid(&page, format.into())?;
        }

        Commands::Show { id, format } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let view = build_detail(&catalog, &id, &config, &loc);
            render::print_detail(&view, format.into())?;
        }

        Commands::Validate { path } => {
            let path = path.or(cli.catalog);
            let (origin, projects) = match &path {
                Some(path) => (path.display().to_string(), catalog::read_projects(path)?),
                None => ("<builtin>".to_string(), catalog::parse_builtin()?),
            };

            let issues = catalog::validate(&projects);
            if issues.is_empty() {
                println!(
                    "{} {} ({} projects)",
                    "✓".green().bold(),
                    origin,
                    projects.len()
                );
            } else {
                println!("{} {}", "✗".red().bold(), origin);
                for issue in &issues {
                    println!("  - {}", issue);
                }
                bail!("{} validation issue(s) in {}", issues.len(), origin);
            }
        }

        Commands::Export { dir, formats } => {
            if formats.is_empty() {
                bail!("no export formats selected");
            }
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let bundle = ExportBundle::build(&catalog, &config, &loc)?;
            let written = storage::persist_snapshot(&bundle, Some(&dir), &formats)?;
            for path in written {
                println!("Snapshot saved to: {}", path.display());
            }
        }

        Commands::Snapshots { dir, count } => {
            for path in storage::latest_snapshots(&dir, count)? {
                println!("{}", path.display());
            }
        }

        Commands::Doctor => {
            let catalog = load_catalog(cli.catalog.as_deref());
            diagnostics::run_self_diagnostics(&config, &source, catalog.as_ref())?;
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => Catalog::load(path),
        None => Catalog::builtin(),
    }
}
