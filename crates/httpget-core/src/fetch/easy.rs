//! libcurl mechanism (curl crate `Easy` handle).
//!
//! Redirects are followed by hand so the policy can be restricted to hops that
//! keep the URL scheme. A redirect that changes scheme (http -> https or back)
//! is not followed and the redirect response's own body is returned, the way
//! classic URL-connection clients behave. Any final status below 400 yields
//! the body.

use super::{check_status, FetchError, Fetcher, Mechanism, RequestOptions};
use curl::easy::{Easy, List};
use url::Url;

/// One request/response exchange without redirect following.
#[derive(Debug)]
struct Hop {
    status: u16,
    location: Option<String>,
    body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct EasyFetcher {
    options: RequestOptions,
}

impl EasyFetcher {
    pub fn new(options: RequestOptions) -> Self {
        Self { options }
    }

    fn map_curl_error(url: &str, e: curl::Error) -> FetchError {
        if e.is_aborted_by_callback() {
            FetchError::Interrupted {
                url: url.to_string(),
            }
        } else {
            FetchError::transport(url, e)
        }
    }

    fn get_once(&self, url: &str) -> Result<Hop, FetchError> {
        let err = |e: curl::Error| Self::map_curl_error(url, e);
        let mut body = Vec::new();

        let mut easy = Easy::new();
        easy.url(url).map_err(err)?;
        easy.get(true).map_err(err)?;
        easy.follow_location(false).map_err(err)?;

        let mut list = List::new();
        for line in self.options.header_lines() {
            list.append(&line).map_err(err)?;
        }
        easy.http_headers(list).map_err(err)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(err)?;
            transfer.perform().map_err(err)?;
        }

        let code = easy.response_code().map_err(err)?;
        let status = u16::try_from(code)
            .map_err(|_| FetchError::transport(url, format!("invalid HTTP status {}", code)))?;
        let location = easy.redirect_url().map_err(err)?.map(str::to_string);

        Ok(Hop {
            status,
            location,
            body,
        })
    }
}

/// True when both URLs parse and share a scheme.
fn same_scheme(from: &str, to: &str) -> bool {
    match (Url::parse(from), Url::parse(to)) {
        (Ok(a), Ok(b)) => a.scheme() == b.scheme(),
        _ => false,
    }
}

impl Fetcher for EasyFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let mut current = url.to_string();
        let mut redirects = 0u32;

        loop {
            tracing::debug!(url = %current, mechanism = "curl", "GET");
            let hop = self.get_once(&current)?;

            if (300..400).contains(&hop.status) {
                if let Some(next) = hop.location.as_deref() {
                    if same_scheme(&current, next) {
                        if redirects >= self.options.max_redirections {
                            return Err(FetchError::transport(
                                url,
                                format!("too many redirects ({})", redirects),
                            ));
                        }
                        tracing::debug!(from = %current, to = %next, status = hop.status, "following redirect");
                        redirects += 1;
                        current = next.to_string();
                        continue;
                    }
                    tracing::debug!(
                        from = %current,
                        to = %next,
                        "not following scheme-changing redirect"
                    );
                }
            }

            check_status(hop.status, url)?;
            return Ok(String::from_utf8_lossy(&hop.body).into_owned());
        }
    }

    fn mechanism(&self) -> Mechanism {
        Mechanism::Curl
    }
}
