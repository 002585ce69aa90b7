// src/audit/evaluate.rs
// =============================================================================
// This module is the core algorithm: run every check against the document
// and record, per selector, whether anything matched.
//
// The output is a CheckReport - a selector -> bool mapping with keys in
// lexicographic order. A BTreeMap backs it, so the sorted-key invariant is
// structural rather than something callers must remember, and a selector
// appearing twice in the check list collapses to a single key (evaluation
// is pure, so the second insert writes the identical value).
//
// Evaluation never mutates the document and has no side effects: the same
// document and checks always produce the same report.
// =============================================================================

use std::collections::BTreeMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::document::Document;

// The result of evaluating a check list against a document
//
// Maps each selector string to "at least one matching element exists".
// Keys are unique and iterate in lexicographic order.
//
// #[serde(transparent)] makes it (de)serialize as the plain JSON object
// {"selector": bool, ...} rather than a wrapper struct.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckReport(BTreeMap<String, bool>);

impl CheckReport {
    /// Number of distinct selectors in the report
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no checks were evaluated
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up the outcome for a single selector
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.0.get(selector).copied()
    }

    /// The selectors in report order (lexicographic)
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

// Evaluates every check against the document
//
// Parameters:
//   document: the loaded HTML document (never mutated)
//   checks: selector strings, normally pre-sorted by the check loader
//
// Returns: a CheckReport with one entry per distinct selector, where the
// value records whether the document contains at least one match.
//
// A selector that matches nothing yields `false` - that is a normal
// (negative) result. A selector that is not valid CSS syntax is a fatal
// error: the check list is configuration, and a broken entry means the
// whole run is meaningless, so no partial report is produced.
pub fn evaluate(document: &Document, checks: &[String]) -> Result<CheckReport> {
    let mut found = BTreeMap::new();

    for check in checks {
        // The key is the exact selector string as configured
        found.insert(check.clone(), document.has_match(check)?);
    }

    Ok(CheckReport(found))
}
