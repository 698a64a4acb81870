//! Normalize command: normalize a saved echo page.

use anyhow::{Context, Result};
use httpget_core::normalize;
use std::fs;
use std::path::Path;

pub fn run_normalize(path: &Path) -> Result<i32> {
    let html = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    print!("{}", normalize(&html));
    Ok(0)
}
