//! Cross-mechanism comparison of the same URL.

use crate::fetch::{fetcher_for, FetchError, Mechanism, RequestOptions};
use crate::normalize::normalize;

/// Bodies of one URL fetched through both mechanisms.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub url: String,
    pub curl: String,
    pub reqwest: String,
    pub curl_normalized: String,
    pub reqwest_normalized: String,
}

/// First differing line between two normalized bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDifference {
    /// 1-based line number.
    pub line: usize,
    pub curl: Option<String>,
    pub reqwest: Option<String>,
}

impl Comparison {
    pub fn from_bodies(url: &str, curl: String, reqwest: String) -> Self {
        let curl_normalized = normalize(&curl);
        let reqwest_normalized = normalize(&reqwest);
        Self {
            url: url.to_string(),
            curl,
            reqwest,
            curl_normalized,
            reqwest_normalized,
        }
    }

    pub fn equivalent(&self) -> bool {
        self.curl_normalized == self.reqwest_normalized
    }

    /// None when the normalized bodies are equal.
    pub fn first_difference(&self) -> Option<LineDifference> {
        if self.equivalent() {
            return None;
        }
        let mut a = self.curl_normalized.split('\n');
        let mut b = self.reqwest_normalized.split('\n');
        let mut line = 1;
        loop {
            let (x, y) = (a.next(), b.next());
            if x != y {
                return Some(LineDifference {
                    line,
                    curl: x.map(str::to_string),
                    reqwest: y.map(str::to_string),
                });
            }
            line += 1;
        }
    }
}

/// Fetch `url` with curl, then with reqwest, and normalize both bodies.
/// Fails on the first fetch error.
pub fn compare(url: &str, options: &RequestOptions) -> Result<Comparison, FetchError> {
    let curl = fetcher_for(Mechanism::Curl, options).fetch(url)?;
    let reqwest = fetcher_for(Mechanism::Reqwest, options).fetch(url)?;
    let cmp = Comparison::from_bodies(url, curl, reqwest);
    tracing::debug!(url = %url, equivalent = cmp.equivalent(), "compared mechanisms");
    Ok(cmp)
}
