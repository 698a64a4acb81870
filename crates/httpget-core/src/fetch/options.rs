//! Request headers and redirect cap shared by both mechanisms.

/// Desktop browser User-Agent sent on every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/135.0.0.0 Safari/537.36";

/// Accept header matching what classic URL-connection style clients send.
pub const DEFAULT_ACCEPT: &str = "text/html, image/gif, image/jpeg, */*; q=0.2";

pub const DEFAULT_MAX_REDIRECTIONS: u32 = 10;

/// Per-request settings. No connection reuse or retries are configured here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub user_agent: String,
    /// Sent as `Accept` when present.
    pub accept: Option<String>,
    /// Maximum number of redirect hops followed before giving up.
    pub max_redirections: u32,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            accept: Some(DEFAULT_ACCEPT.to_string()),
            max_redirections: DEFAULT_MAX_REDIRECTIONS,
        }
    }
}

impl RequestOptions {
    /// Header lines in `Name: value` form, in the order they are sent.
    pub fn header_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("User-Agent: {}", self.user_agent)];
        if let Some(accept) = &self.accept {
            lines.push(format!("Accept: {}", accept));
        }
        lines
    }
}
