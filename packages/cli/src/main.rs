#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line access to the Kenya elections dashboard.
//!
//! Renders any view as JSON on stdout, lists the available views, checks
//! that the source documents load and join, or starts the API server.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kenya_elections_analytics::{list_views, render_view};
use kenya_elections_analytics_models::{MapMetric, ViewId, ViewRequest};
use kenya_elections_data::{DataPaths, DocumentStore, validate_counties};

#[derive(Parser)]
#[command(name = "kenya_elections", about = "Kenya presidential elections dashboard")]
struct Cli {
    /// Directory holding the source documents (overrides
    /// `KENYA_ELECTIONS_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve,
    /// List the available views
    Views,
    /// Render one view as JSON
    View {
        /// View identifier, e.g. `turnout-trends`
        view: ViewId,
        /// Election year (historical-results)
        #[arg(long)]
        year: Option<u32>,
        /// Statistical county name (county-analysis)
        #[arg(long)]
        county: Option<String>,
        /// Map metric, e.g. `ruto-2022` (interactive-map)
        #[arg(long)]
        metric: Option<MapMetric>,
        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Load every document and report validation and join problems
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let paths = DataPaths::from_env_with_dir(cli.data_dir.as_deref());

    match cli.command {
        Commands::Serve => {
            actix_rt::System::new().block_on(kenya_elections_server::run_server(paths))?;
        }
        Commands::Views => {
            for info in list_views() {
                let parameter = info
                    .parameter
                    .map_or_else(|| "-".to_string(), |p| p.to_string());
                println!("{:<28}{:<28}{parameter}", info.id.as_ref(), info.label);
            }
        }
        Commands::View {
            view,
            year,
            county,
            metric,
            compact,
        } => {
            let request = ViewRequest {
                view,
                year,
                county,
                metric,
            };
            let store = DocumentStore::new(paths);
            let result = render_view(&store, &request)?;
            let json = if compact {
                serde_json::to_string(&result)?
            } else {
                serde_json::to_string_pretty(&result)?
            };
            println!("{json}");
        }
        Commands::Check => check(&DocumentStore::new(paths))?,
    }

    Ok(())
}

/// Loads every document and prints what was found.
fn check(store: &DocumentStore) -> Result<(), Box<dyn std::error::Error>> {
    let paths = store.paths();

    let history = store.election_history()?;
    println!(
        "Election history: {} elections, years {:?} ({})",
        history.elections.len(),
        history.years(),
        paths.election_history.display()
    );

    let counties = store.county_data()?;
    println!(
        "County data: {} counties, {} regional trends ({})",
        counties.counties.len(),
        counties.regional_trends.len(),
        paths.counties.display()
    );
    let problems = validate_counties(&counties);
    for problem in &problems {
        println!("  warning: {problem}");
    }

    match store.boundaries() {
        Ok(boundaries) => {
            let report = boundaries.join(counties.counties.keys());
            println!(
                "Boundaries: {} features, {} counties matched ({})",
                boundaries.len(),
                report.matched,
                paths.boundaries.display()
            );
            for county in &report.unmatched_counties {
                println!("  no boundary for county: {county}");
            }
            for boundary in &report.unmatched_boundaries {
                println!("  no county for boundary: {boundary}");
            }
        }
        Err(e) => println!("Boundaries: unavailable, interactive map disabled ({e})"),
    }

    if problems.is_empty() {
        log::info!("All documents loaded");
    }
    Ok(())
}
