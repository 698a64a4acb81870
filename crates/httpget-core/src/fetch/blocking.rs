//! reqwest mechanism (`reqwest::blocking::Client`).
//!
//! Follows every redirect, scheme changes included, up to the configured cap.
//! Only a final 200 yields the body; other statuses below 400 are rejected.

use super::error::chain_is_interrupted;
use super::{check_status, FetchError, Fetcher, Mechanism, RequestOptions};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::redirect::Policy;
use reqwest::StatusCode;

#[derive(Debug, Clone)]
pub struct BlockingFetcher {
    options: RequestOptions,
}

impl BlockingFetcher {
    pub fn new(options: RequestOptions) -> Self {
        Self { options }
    }

    fn build_client(&self) -> reqwest::Result<Client> {
        Client::builder()
            .redirect(Policy::limited(self.options.max_redirections as usize))
            // Header names go out as `User-Agent`, not `user-agent`, so echo
            // pages match the curl mechanism's.
            .http1_title_case_headers()
            .build()
    }

    fn map_reqwest_error(url: &str, e: reqwest::Error) -> FetchError {
        if chain_is_interrupted(&e) {
            FetchError::Interrupted {
                url: url.to_string(),
            }
        } else {
            FetchError::transport(url, e)
        }
    }
}

impl Fetcher for BlockingFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let err = |e: reqwest::Error| Self::map_reqwest_error(url, e);
        let client = self.build_client().map_err(err)?;

        tracing::debug!(url = %url, mechanism = "reqwest", "GET");
        let mut request = client.get(url).header(USER_AGENT, &self.options.user_agent);
        if let Some(accept) = &self.options.accept {
            request = request.header(ACCEPT, accept);
        }
        let response = request.send().map_err(err)?;

        let status = response.status();
        if response.url().as_str() != url {
            tracing::debug!(from = %url, to = %response.url(), "redirected");
        }
        check_status(status.as_u16(), url)?;
        if status != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().map_err(err)
    }

    fn mechanism(&self) -> Mechanism {
        Mechanism::Reqwest
    }
}
