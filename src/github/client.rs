//! Sync HTTP client
//!
//! A small trait seam over "GET this URL, give me the body" so the API
//! layer can be tested with canned payloads. The real implementation uses
//! ureq; no tokio needed for four sequential requests.

use anyhow::Result;

/// Fetch raw text for a URL.
pub trait HttpFetch {
    fn get(&self, url: &str) -> Result<String>;
}

/// ureq-backed client used by the binary.
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    pub fn new() -> Self {
        // Non-2xx responses are handled as payload-shape failures downstream,
        // the same way an error body from the API is.
        let agent = ureq::config::Config::builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetch for UreqClient {
    fn get(&self, url: &str) -> Result<String> {
        let response = self
            .agent
            .get(url)
            .header("User-Agent", concat!("gitscope/", env!("CARGO_PKG_VERSION")))
            .call()?;
        Ok(response.into_body().read_to_string()?)
    }
}
