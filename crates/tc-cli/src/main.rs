//! tc-cli — command-line entry point for the transport catalogue.
//!
//! Two subcommands, each reading a single JSON document from stdin:
//!
//! - `make_base` builds the catalogue and router, then writes a binary
//!   snapshot to the path named in `serialization_settings.file`.
//! - `process_requests` loads that snapshot and answers `stat_requests`,
//!   writing a JSON array of responses to stdout.

use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use tc_catalog::Catalogue;
use tc_io::{answer_stat_request, apply_base_requests, MakeBaseDocument, ProcessRequestsDocument};
use tc_router::JourneyRouter;

#[derive(Parser)]
#[command(name = "tc-cli")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the catalogue and router from stdin JSON, write a snapshot file.
    MakeBase,
    /// Load a snapshot file and answer stat_requests from stdin JSON.
    ProcessRequests,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::MakeBase => make_base(),
        Command::ProcessRequests => process_requests(),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

// ── make_base ───────────────────────────────────────────────────────────────

fn make_base() -> Result<()> {
    let input = read_stdin()?;
    let doc: MakeBaseDocument = serde_json::from_str(&input).context("parsing make_base document")?;

    let mut catalog = Catalogue::new();
    apply_base_requests(&mut catalog, &doc.base_requests).context("applying base_requests")?;

    let router = JourneyRouter::build(&catalog, doc.routing_settings.into());
    let render_settings = doc.render_settings.into();

    tc_snapshot::write_snapshot(&doc.serialization_settings.file, &catalog, &router, &render_settings)
        .context("writing snapshot")?;

    Ok(())
}

// ── process_requests ──────────────────────────────────────────────────────

fn process_requests() -> Result<()> {
    let input = read_stdin()?;
    let doc: ProcessRequestsDocument = serde_json::from_str(&input).context("parsing process_requests document")?;

    let (catalog, router, render_settings) = tc_snapshot::read_snapshot(&doc.serialization_settings.file)
        .context("reading snapshot")?;

    let answers: Vec<serde_json::Value> = doc
        .stat_requests
        .iter()
        .map(|req| answer_stat_request(&catalog, &router, &render_settings, req))
        .collect();

    println!("{}", serde_json::to_string(&answers)?);
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input).context("reading stdin")?;
    Ok(input)
}
