//! Get command: fetch one URL with one mechanism.

use anyhow::{Context, Result};
use httpget_core::config::HttpGetConfig;
use httpget_core::{fetcher_for, normalize, Mechanism};

pub fn run_get(
    cfg: &HttpGetConfig,
    url: &str,
    mechanism: Option<Mechanism>,
    normalized: bool,
) -> Result<i32> {
    let mechanism = mechanism.unwrap_or(cfg.mechanism);
    let fetcher = fetcher_for(mechanism, &cfg.request_options());
    let body = fetcher
        .fetch(url)
        .with_context(|| format!("GET {} via {}", url, mechanism))?;
    if normalized {
        print!("{}", normalize(&body));
    } else {
        print!("{}", body);
    }
    Ok(0)
}
