//! # chatwrapped CLI
//!
//! Command-line interface for the chatwrapped library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatwrapped::archive::{ArchiveWalker, DirectorySource, DocumentSource};
use chatwrapped::cli::Args;
use chatwrapped::core::{Report, write_report_json};
use chatwrapped::format::write_to_format;
use chatwrapped::{Result, WrappedError};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(&args);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(args: &Args) -> Result<()> {
    let start = Instant::now();
    let export_format = args.export_format()?;

    let walker_config = args.walker_config();
    let source = DirectorySource::with_config(&args.in_dir, walker_config.clone());
    let count = source.document_count()?;
    if count == 0 {
        return Err(WrappedError::invalid_archive(format!(
            "no .{} documents in {}",
            walker_config.file_extension,
            args.in_dir.display()
        )));
    }
    tracing::info!(dir = %args.in_dir.display(), documents = count, year = args.year, "reading archive");

    let walker = ArchiveWalker::new(args.year)?.with_config(walker_config);
    let (messages, summary) = walker.walk_with_summary(&source, Vec::new())?;
    tracing::info!(
        records = summary.records,
        documents = summary.documents_visited,
        elapsed = ?start.elapsed(),
        "collected messages"
    );

    let report = Report::build(&messages, args.year, &args.report_config());
    print!("{}", report.render());

    if let (Some(path), Some(format)) = (&args.export, export_format) {
        write_to_format(&messages, path, format)?;
        println!("\nExported {} messages ({format}) to {}", messages.len(), path.display());
    }

    if let Some(path) = &args.report {
        write_report_json(&report, path)?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}
