// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Confirm the input files exist (missing path = exit code 1)
// 3. Load the checks and the document (from a file or a fetched URL)
// 4. Evaluate every check against the document and print the report
// 5. Exit with proper code (0 = report printed, 1 = missing input, 2 = error)
//
// The existence checks live here, not in the audit module: by the time the
// core runs, its inputs are known to be readable. Output is all-or-nothing -
// if anything fails, no report is printed at all.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod audit; // src/audit/ - the checking core
mod cli; // src/cli.rs - command-line parsing
mod fetch; // src/fetch/ - HTTP retrieval

use std::fs;
use std::path::Path;

use clap::Parser; // Parser trait enables the parse() method

// anyhow::Result lets us return any error type with the ? operator
use anyhow::Result;

use audit::Document;
use cli::Cli;

// The #[tokio::main] attribute creates a tokio runtime and runs our async
// code inside it. The runtime only matters for the --url path; everything
// else is synchronous.
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Unexpected/fatal error: print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// The main application logic
// Returns:
//   Ok(0) = report printed
//   Ok(1) = a required input path does not exist
//   Err = fatal error (malformed checks, bad selector, fetch exhausted...)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // The checks file is required in both modes
    if !input_exists(&cli.checks) {
        return Ok(1);
    }
    println!("  - checks {}", cli.checks.display());

    let checks_text = fs::read_to_string(&cli.checks)?;
    let checks = audit::load_checks(&checks_text)?;

    // Exactly one document source: the URL when given, the file otherwise
    // (the CLI already rejects an explicit --file combined with --url)
    let document = if let Some(url) = &cli.url {
        println!("  - url {}", url);
        let body = fetch::fetch_page(url).await?;
        Document::parse(&body)
    } else {
        if !input_exists(&cli.file) {
            return Ok(1);
        }
        println!("  - file {}", cli.file.display());
        let bytes = fs::read(&cli.file)?;
        Document::from_bytes(&bytes)
    };

    let report = audit::evaluate(&document, &checks)?;
    println!("{}", audit::render(&report)?);

    Ok(0)
}

// Confirms an input path exists before the core pipeline runs
//
// On a missing path, prints a diagnostic to stderr and returns false; the
// caller then exits with code 1 without producing a report.
fn input_exists(path: &Path) -> bool {
    if path.exists() {
        return true;
    }

    eprintln!("{} does not exist. Exiting.", path.display());
    false
}
