use std::path::Path;

use crate::build::build_model::BuildSubmission;
use crate::ingest;
use crate::registry::file_store::FileStore;
use crate::registry::registry::BuildRegistry;
use crate::report::console::{format_build_list, format_build_report};
use crate::report::html::{generate_build_index, generate_build_report};
use crate::trace::logger::IngestLogger;
use crate::trace::trace::IngestEvent;

const INGEST_LOG_FILENAME: &str = "ingest_log.jsonl";

// ============================================================================
// ingest subcommand
// ============================================================================

/// Ingest one payload file as a new build and print its id.
pub fn cmd_ingest(
    data_dir: &str,
    input: &str,
    submission: BuildSubmission,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read(input)?;

    if verbose > 0 {
        eprintln!(
            "Ingesting {} for {} #{} into {}/ ...",
            input, submission.job_name, submission.build_number, data_dir
        );
    }

    let registry = open_registry(data_dir)?;
    let logger = IngestLogger::new(&Path::new(data_dir).join(INGEST_LOG_FILENAME));

    match ingest(&registry, &raw, submission.clone()) {
        Ok(id) => {
            logger.log(&IngestEvent::accepted(&submission, &id));
            println!("{}", id);
            Ok(())
        }
        Err(e) => {
            logger.log(&IngestEvent::rejected(&submission, &e));
            Err(e.into())
        }
    }
}

// ============================================================================
// list / show subcommands
// ============================================================================

pub fn cmd_list(data_dir: &str, format: &str, verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let registry = open_registry(data_dir)?;
    if verbose > 0 {
        eprintln!("Loaded {} builds from {}/", registry.len(), data_dir);
    }

    let summaries = registry.list();
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&summaries)?),
        _ => print!("{}", format_build_list(&summaries)),
    }
    Ok(())
}

pub fn cmd_show(
    data_dir: &str,
    id: &str,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = open_registry(data_dir)?;
    let record = registry
        .get(id)
        .ok_or_else(|| format!("no build with id '{}'", id))?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&record)?),
        _ => print!("{}", format_build_report(&record)),
    }
    Ok(())
}

// ============================================================================
// report subcommands
// ============================================================================

/// Render one build's report and write it to a file or stdout.
pub fn cmd_report(
    data_dir: &str,
    id: &str,
    format: &str,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = open_registry(data_dir)?;
    let record = registry
        .get(id)
        .ok_or_else(|| format!("no build with id '{}'", id))?;

    let content = match format {
        "html" => generate_build_report(&record),
        "json" => serde_json::to_string_pretty(&record)?,
        _ => format_build_report(&record),
    };

    write_or_print(output, &content)
}

/// Render the HTML index page over every ingested build.
pub fn cmd_report_index(
    data_dir: &str,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = open_registry(data_dir)?;
    let content = generate_build_index(&registry.list());
    write_or_print(output, &content)
}

// ============================================================================
// Helpers
// ============================================================================

fn open_registry(data_dir: &str) -> Result<BuildRegistry, Box<dyn std::error::Error>> {
    Ok(BuildRegistry::open(Box::new(FileStore::new(data_dir)))?)
}

fn write_or_print(output: Option<&str>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => std::fs::write(path, content)?,
        None => print!("{}", content),
    }
    Ok(())
}
