// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// There are no subcommands here - the tool does one thing, so the options
// live directly on the top-level struct:
//
//   tag-guardian --checks checks.json --file index.html
//   tag-guardian --checks checks.json --url https://example.com
//
// --file and --url are mutually exclusive: a document has exactly one
// source. clap enforces that with `conflicts_with`, and because defaults
// don't count as user input, running with just --url still works even
// though --file has a default value.
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "tag-guardian",
    version = "0.1.0",
    about = "A CLI tool to check HTML files and web pages for expected elements",
    long_about = "tag-guardian loads a list of CSS selectors from a checks file and reports, \
                  per selector, whether the given HTML document contains a matching element. \
                  It's perfect for CI/CD pipelines to ensure generated pages keep their \
                  required structure."
)]
pub struct Cli {
    /// Path to the checks file (a JSON array of CSS selectors)
    #[arg(short, long, default_value = "checks.json")]
    pub checks: PathBuf,

    /// Path to the HTML file to check
    #[arg(short, long, default_value = "index.html", conflicts_with = "url")]
    pub file: PathBuf,

    /// URL to fetch and check instead of a local file
    #[arg(short, long)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tag-guardian"]).unwrap();
        assert_eq!(cli.checks, PathBuf::from("checks.json"));
        assert_eq!(cli.file, PathBuf::from("index.html"));
        assert!(cli.url.is_none());
    }

    #[test]
    fn test_url_alone_is_accepted() {
        // --file keeps its default but doesn't conflict, since defaults
        // aren't user input
        let cli = Cli::try_parse_from(["tag-guardian", "--url", "https://example.com"]).unwrap();
        assert_eq!(cli.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_explicit_file_and_url_conflict() {
        let result = Cli::try_parse_from([
            "tag-guardian",
            "--file",
            "page.html",
            "--url",
            "https://example.com",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["tag-guardian", "-c", "my.json", "-f", "page.html"]).unwrap();
        assert_eq!(cli.checks, PathBuf::from("my.json"));
        assert_eq!(cli.file, PathBuf::from("page.html"));
    }
}
