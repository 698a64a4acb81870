//! Compare command: fetch with both mechanisms and diff the normalized pages.

use anyhow::{Context, Result};
use httpget_core::compare;
use httpget_core::config::HttpGetConfig;

/// Exit code 0 when equivalent, 2 when the pages differ.
pub fn run_compare(cfg: &HttpGetConfig, url: &str) -> Result<i32> {
    let cmp = compare(url, &cfg.request_options()).with_context(|| format!("compare {}", url))?;
    match cmp.first_difference() {
        None => {
            println!("equivalent");
            Ok(0)
        }
        Some(diff) => {
            println!("differ at line {}", diff.line);
            println!("  curl:    {}", diff.curl.as_deref().unwrap_or("<end of text>"));
            println!("  reqwest: {}", diff.reqwest.as_deref().unwrap_or("<end of text>"));
            Ok(2)
        }
    }
}
