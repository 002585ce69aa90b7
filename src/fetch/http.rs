// src/fetch/http.rs
// =============================================================================
// This module fetches the HTML page to check from a URL.
//
// Strategy:
// - Validate the URL up front so typos fail fast, before any request
// - GET the page with a request timeout
// - On failure (send error or non-2xx status), wait a fixed 5 seconds and
//   try again, up to 3 attempts total
// - Hand back the full body on the first success, or the last error once
//   the attempts run out
//
// The retry is deliberately bounded: transient network hiccups get a second
// chance, but a dead host cannot keep the tool spinning forever.
// =============================================================================

use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::Client;
use url::Url;

// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Fixed delay between attempts
const RETRY_DELAY: Duration = Duration::from_secs(5);

// Total attempts, including the first one
const MAX_ATTEMPTS: u32 = 3;

// Fetches a page and returns its HTML body
//
// Parameters:
//   url: the URL to fetch (validated before any request is made)
//
// Returns: the response body on success, or the last error after all
// attempts are exhausted. Retry warnings go to stderr so they never mix
// into the report on stdout.
pub async fn fetch_page(url: &str) -> Result<String> {
    // Fail fast on malformed URLs - no point retrying those
    let url = Url::parse(url).map_err(|e| anyhow!("Invalid URL '{}': {}", url, e))?;

    // One client for all attempts (connection pooling)
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

    let mut last_err = None;

    for attempt in 1..=MAX_ATTEMPTS {
        match fetch_once(&client, url.clone()).await {
            Ok(body) => return Ok(body),
            Err(e) => {
                eprintln!(
                    "Warning: fetch failed (attempt {}/{}): {}",
                    attempt, MAX_ATTEMPTS, e
                );
                last_err = Some(e);

                // No sleep after the final attempt
                if attempt < MAX_ATTEMPTS {
                    tokio::time::sleep(RETRY_DELAY).await;
                }
            }
        }
    }

    Err(last_err.unwrap_or_else(|| anyhow!("All fetch attempts failed for {}", url)))
}

// Performs a single GET and returns the body
//
// A non-2xx status counts as a failure: the caller wants the page content,
// and an error page is not it.
async fn fetch_once(client: &Client, url: Url) -> Result<String> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow!("HTTP {}", response.status()));
    }

    let body = response.text().await?;
    Ok(body)
}
