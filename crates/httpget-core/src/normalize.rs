//! Normalization of echo-server pages.
//!
//! An echo endpoint reflects the request back as HTML: a `Remote: <ip> <port>`
//! heading, one table row per request header, then a raw dump of the request.
//! [`normalize`] strips the parts that vary per request or per mechanism so two
//! pages for the same logical request compare equal.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Headers pulled to the top of the table, in their final order.
const ORDERED_HEADERS: [&str; 4] = ["User-Agent", "Host", "Accept", "Connection"];

/// Rows that only one mechanism produces.
const NOISE_ROWS: [&str; 2] = [
    "<tr><td valign=top><b>Content-Length:</b></td><td> 0</td></tr>\n",
    "<tr><td valign=top><b>Connection:</b></td><td> keep-alive</td></tr>\n",
];

static REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(<h2>Remote: \d+\.\d+\.\d+\.\d+ )(\d+)(</h2>)").expect("valid remote regex")
});

static RAW_REQUEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<h2>Raw request</h2><pre>.*").expect("valid raw regex"));

/// One regex per ordered header, in the order they are applied (reverse priority).
static HEADER_ROWS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ORDERED_HEADERS
        .iter()
        .rev()
        .map(|name| {
            let pattern = format!(
                r"(?s)(<table[^>]*>\n)(.*?)(<tr><td valign=top><b>{}:</b></td><td>[^\n]*</td></tr>\n)",
                regex::escape(name)
            );
            Regex::new(&pattern).expect("valid header row regex")
        })
        .collect()
});

/// Mask the port/timestamp token after the remote IP with `0`.
fn mask_remote(s: &str) -> String {
    REMOTE.replacen(s, 1, "${1}0${3}").into_owned()
}

fn drop_noise_rows(s: &str) -> String {
    NOISE_ROWS
        .iter()
        .fold(s.to_string(), |acc, row| acc.replace(row, ""))
}

/// Move each known header row to directly after the opening `<table ...>` tag.
fn reorder_headers(s: &str) -> String {
    HEADER_ROWS.iter().fold(s.to_string(), |acc, re| {
        re.replacen(&acc, 1, |caps: &Captures| {
            format!("{}{}{}", &caps[1], &caps[3], &caps[2])
        })
        .into_owned()
    })
}

fn truncate_raw_request(s: &str) -> String {
    RAW_REQUEST.replacen(s, 1, "").into_owned()
}

/// Rewrite an echo page so that responses to the same request from different
/// mechanisms become textually identical. Idempotent.
pub fn normalize(html: &str) -> String {
    let s = mask_remote(html);
    let s = drop_noise_rows(&s);
    let s = reorder_headers(&s);
    truncate_raw_request(&s)
}

/// True when both pages normalize to the same text.
pub fn equivalent(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
