//! HTTP GET returning the response body as text.
//!
//! Two mechanisms sit behind the [`Fetcher`] trait: libcurl's Easy handle and
//! reqwest's blocking client. They send the same User-Agent and Accept headers
//! and map error statuses the same way, but keep their own redirect policies.

mod blocking;
mod easy;
mod error;
mod options;
mod status;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use blocking::BlockingFetcher;
pub use easy::EasyFetcher;
pub use error::FetchError;
pub use options::{RequestOptions, DEFAULT_ACCEPT, DEFAULT_MAX_REDIRECTIONS, USER_AGENT};
pub use status::check_status;

/// Capability shared by both mechanisms: GET a URL and return its body.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;

    /// Which mechanism backs this fetcher.
    fn mechanism(&self) -> Mechanism;
}

/// Underlying request mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mechanism {
    /// libcurl Easy handle; follows same-scheme redirects only.
    Curl,
    /// reqwest blocking client; follows any redirect up to the cap.
    #[default]
    Reqwest,
}

impl Mechanism {
    pub const ALL: [Mechanism; 2] = [Mechanism::Curl, Mechanism::Reqwest];

    pub fn as_str(self) -> &'static str {
        match self {
            Mechanism::Curl => "curl",
            Mechanism::Reqwest => "reqwest",
        }
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mechanism {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "curl" => Ok(Mechanism::Curl),
            "reqwest" => Ok(Mechanism::Reqwest),
            other => Err(format!(
                "unknown mechanism '{}' (expected 'curl' or 'reqwest')",
                other
            )),
        }
    }
}

/// Build a fetcher for the given mechanism.
pub fn fetcher_for(mechanism: Mechanism, options: &RequestOptions) -> Box<dyn Fetcher> {
    match mechanism {
        Mechanism::Curl => Box::new(EasyFetcher::new(options.clone())),
        Mechanism::Reqwest => Box::new(BlockingFetcher::new(options.clone())),
    }
}

/// GET `url` with the default mechanism and default request options.
pub fn fetch(url: &str) -> Result<String, FetchError> {
    fetcher_for(Mechanism::default(), &RequestOptions::default()).fetch(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mechanism_parse_is_case_insensitive() {
        assert_eq!("curl".parse::<Mechanism>().unwrap(), Mechanism::Curl);
        assert_eq!(" Reqwest ".parse::<Mechanism>().unwrap(), Mechanism::Reqwest);
        assert!("urlconnection".parse::<Mechanism>().is_err());
    }

    #[test]
    fn mechanism_display_roundtrips_through_from_str() {
        for m in Mechanism::ALL {
            assert_eq!(m.to_string().parse::<Mechanism>().unwrap(), m);
        }
    }

    #[test]
    fn fetcher_for_reports_its_mechanism() {
        let opts = RequestOptions::default();
        for m in Mechanism::ALL {
            assert_eq!(fetcher_for(m, &opts).mechanism(), m);
        }
    }
}
