// Random quote fetch over HTTP

use eyre::{Context, Result};
use rand::Rng;
use serde::Deserialize;
use tracing::debug;

/// One quote from the remote endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl Quote {
    pub fn attribution(&self) -> &str {
        self.author.as_deref().unwrap_or("Unknown")
    }
}

/// Fetch the quote list and pick one at random.
///
/// Returns None when the endpoint answers with an empty list. Network and
/// parse failures are errors for the caller to report; they must not abort the
/// process.
pub fn fetch_random_quote(url: &str) -> Result<Option<Quote>> {
    let quotes: Vec<Quote> = ureq::get(url)
        .call()
        .with_context(|| format!("Quote request to {} failed", url))?
        .into_json()
        .context("Quote response was not a JSON quote list")?;

    debug!(count = quotes.len(), "Fetched quote list");
    Ok(pick(quotes))
}

fn pick(mut quotes: Vec<Quote>) -> Option<Quote> {
    if quotes.is_empty() {
        return None;
    }
    let index = rand::thread_rng().gen_range(0..quotes.len());
    Some(quotes.swap_remove(index))
}
