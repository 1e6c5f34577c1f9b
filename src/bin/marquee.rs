use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info, Level};

use marquee::catalog::loader::CatalogLoader;
use marquee::catalog::store::Catalog;
use marquee::core::config::Config;
use marquee::query::stream::{QueryStream, VERDICT_FOUND, VERDICT_MISSING};
use marquee::search::executor::{QueryEngine, SequentialSearch};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "In-memory show catalog with an instrumented sequential title search", long_about = None)]
struct Cli {
    /// Catalog source file
    #[arg(short, long, global = true)]
    source: Option<PathBuf>,
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read ids from standard input and print the records sorted by title
    Print,
    /// Read ids, then time title queries over the resolved subset
    Bench {
        /// Report destination
        #[arg(short, long)]
        report: Option<PathBuf>,
        /// Label written at the start of the report line
        #[arg(short, long)]
        label: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only record and verdict lines
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut config = Config::default();
    if let Some(source) = cli.source {
        config.source_path = source;
    }

    match cli.command {
        Commands::Print => run_print(&config),
        Commands::Bench { report, label } => {
            if let Some(report) = report {
                config.report_path = report;
            }
            if let Some(label) = label {
                config.report_label = label;
            }
            run_bench(&config);
        }
    }
}

fn load_catalog(config: &Config) -> Catalog {
    let catalog = CatalogLoader::new(config.row_hint).load(&config.source_path);
    info!(rows = catalog.len(), source = %config.source_path.display(), "catalog loaded");
    catalog
}

fn run_print(config: &Config) {
    let catalog = load_catalog(config);
    let stdin = io::stdin();
    let mut stream = QueryStream::new(stdin.lock());

    let ids = stream.id_block();
    let engine = QueryEngine::new(&catalog);
    let mut subset = engine.resolve_ids(&ids);
    QueryEngine::sort_by_title(&mut subset);

    for show in subset {
        println!("{}", show);
    }
}

fn run_bench(config: &Config) {
    let catalog = load_catalog(config);
    let stdin = io::stdin();
    let mut stream = QueryStream::new(stdin.lock());

    let ids = stream.id_block();
    let subset = QueryEngine::new(&catalog).resolve_ids(&ids);
    info!(requested = ids.len(), resolved = subset.len(), "working subset built");

    // The timed window opens here and covers the whole title phase,
    // reading included
    let mut search = SequentialSearch::start(subset);
    while let Some(title) = stream.next_title() {
        let verdict = if search.probe(&title) {
            VERDICT_FOUND
        } else {
            VERDICT_MISSING
        };
        println!("{}", verdict);
    }
    let report = search.finish(&config.report_label);
    info!(
        comparisons = report.comparisons,
        elapsed_secs = report.elapsed_secs,
        "sequential search finished"
    );

    if let Err(err) = report.write_to(&config.report_path) {
        error!(path = %config.report_path.display(), error = %err, "cannot write report");
    }
}
