// src/audit/document.rs
// =============================================================================
// This module loads HTML into a queryable document.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// html5ever recovers from malformed input the same way a browser does, so
// loading never fails: unclosed tags, missing doctypes and stray bytes all
// produce a (possibly odd-shaped) document rather than an error.
//
// The selector engine stays behind this type. The rest of the application
// only sees "parse" and "is there at least one match", so swapping scraper
// for another engine would touch this file alone.
// =============================================================================

use anyhow::{anyhow, Result};
use scraper::{Html, Selector};

// A parsed HTML document, read-only after creation
//
// Wraps scraper's DOM so callers never handle selector-engine types directly.
pub struct Document {
    dom: Html,
}

impl Document {
    // Parses HTML text into a Document
    //
    // This never fails: the parser recovers leniently from any input,
    // matching how browsers treat broken markup.
    //
    // Example:
    //   let doc = Document::parse("<p>hello");  // unclosed tag is fine
    pub fn parse(html: &str) -> Self {
        Document {
            dom: Html::parse_document(html),
        }
    }

    // Parses raw bytes (e.g. a file read or an HTTP body) into a Document
    //
    // Invalid UTF-8 sequences are replaced with U+FFFD instead of failing,
    // so any byte stream yields a document.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Document::parse(&String::from_utf8_lossy(bytes))
    }

    // Reports whether at least one element matches the given CSS selector
    //
    // Parameters:
    //   selector: CSS selector syntax (tag, #id, .class, [attr], combinators)
    //
    // Returns:
    //   Ok(true)  = the document contains a matching element
    //   Ok(false) = no element matches (a normal result, not an error)
    //   Err(...)  = the selector itself is not valid CSS selector syntax
    pub fn has_match(&self, selector: &str) -> Result<bool> {
        // scraper's parse error borrows the input string, so we format it
        // into an owned message before returning it
        let parsed = Selector::parse(selector)
            .map_err(|e| anyhow!("Invalid selector '{}': {}", selector, e))?;

        // We only care about presence, so stop at the first match instead
        // of collecting them all
        Ok(self.dom.select(&parsed).next().is_some())
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why a wrapper struct instead of using scraper::Html directly?
//    - The checking core only needs "query -> was anything found"
//    - Keeping Html and Selector private to this file means the selector
//      engine is swappable without touching the evaluator
//
// 2. Why from_utf8_lossy?
//    - Real-world HTML files are not always valid UTF-8
//    - A single bad byte should not abort the whole check run
//    - Lossy decoding matches the parser's own permissive attitude
// -----------------------------------------------------------------------------
