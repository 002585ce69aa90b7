// src/audit/checks.rs
// =============================================================================
// This module loads the check list: the CSS selectors to test for.
//
// File format (checks.json):
//   ["h1", "div#main", "a[href]"]
//
// A flat JSON array of selector strings - no nesting, no metadata. The
// strings are opaque selector syntax; they are validated later by the
// selector engine, not here.
//
// Loading also normalizes: the list is sorted lexicographically before it is
// handed to the evaluator. That sort decides the key order of the final
// report, so it lives here as part of the loader's contract where it can be
// tested on its own.
// =============================================================================

use anyhow::{anyhow, Result};

// Loads and normalizes a check list from configuration text
//
// Parameters:
//   text: contents of the checks file (a JSON array of strings)
//
// Returns: the selectors sorted lexicographically, or an error if the text
// is not a JSON array of strings. Malformed configuration is fatal - there
// is no partial recovery.
//
// Example:
//   load_checks(r#"["title", "h1"]"#) -> Ok(vec!["h1", "title"])
pub fn load_checks(text: &str) -> Result<Vec<String>> {
    let mut checks: Vec<String> = serde_json::from_str(text).map_err(|e| {
        anyhow!(
            "Invalid checks file (expected a JSON array of selector strings): {}",
            e
        )
    })?;

    // Canonical order for the report keys
    checks.sort();

    Ok(checks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_sorts_lexicographically() {
        let checks = load_checks(r#"["title", "h1", "div#main"]"#).unwrap();
        assert_eq!(checks, vec!["div#main", "h1", "title"]);
    }

    #[test]
    fn test_selector_strings_are_kept_verbatim() {
        // No trimming or canonicalization beyond the sort
        let checks = load_checks(r##"["a[href=\"#\"]", ".hero-unit"]"##).unwrap();
        assert_eq!(checks, vec![".hero-unit".to_string(), r##"a[href="#"]"##.to_string()]);
    }

    #[test]
    fn test_empty_list_is_valid() {
        let checks = load_checks("[]").unwrap();
        assert!(checks.is_empty());
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        assert!(load_checks(r#"["h1","#).is_err());
    }

    #[test]
    fn test_non_array_shape_is_fatal() {
        assert!(load_checks(r#"{"selector": "h1"}"#).is_err());
    }

    #[test]
    fn test_non_string_entry_is_fatal() {
        assert!(load_checks(r#"["h1", 42]"#).is_err());
    }
}
