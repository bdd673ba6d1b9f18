//! HTTP metadata fetching for a single URL.
//!
//! The resolver only depends on the [`Fetcher`] trait. [`CurlFetcher`] is the
//! libcurl-backed implementation: it issues a HEAD request, does not follow
//! redirects, and reports the status plus the headers the outcome record
//! cares about.

mod classify;
mod parse;

pub use classify::classify_curl_error;
pub use parse::{decode_header_line, parse_headers};

use std::time::Duration;

use crate::config::ResolverConfig;

/// Metadata of one HTTP response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedResponse {
    /// HTTP status code.
    pub status: u32,
    /// `Content-Type` value if present.
    pub content_type: Option<String>,
    /// `Content-Length` value if present and numeric.
    pub content_length: Option<u64>,
    /// Raw `Location` value if present (may be relative).
    pub location: Option<String>,
}

/// Why a fetch produced no response.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FetchError {
    /// No header or body was obtained (timeout, refused, reset, DNS, ...).
    #[error("connection failed: {0}")]
    Connection(String),
    /// Anything else; retrying will not help.
    #[error("fatal: {0}")]
    Fatal(String),
}

impl FetchError {
    pub fn message(&self) -> &str {
        match self {
            FetchError::Connection(m) | FetchError::Fatal(m) => m,
        }
    }
}

/// Source of response metadata for a URL.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<FetchedResponse, FetchError>;
}

/// HEAD probe over libcurl. Runs in the current thread.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: Option<String>,
}

impl CurlFetcher {
    pub fn new(cfg: &ResolverConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }

    fn perform(&self, url: &str, headers: &mut Vec<String>) -> Result<u32, curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.nobody(true)?; // HEAD request
        easy.follow_location(false)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                headers.push(decode_header_line(data));
                true
            })?;
            transfer.perform()?;
        }

        easy.response_code()
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new(&ResolverConfig::default())
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedResponse, FetchError> {
        let mut headers: Vec<String> = Vec::new();
        let status = self
            .perform(url, &mut headers)
            .map_err(|e| classify_curl_error(&e))?;
        if status == 0 {
            return Err(FetchError::Connection(format!(
                "HEAD {} returned no status line",
                url
            )));
        }

        tracing::debug!(url, status, header_lines = headers.len(), "HEAD response");
        Ok(parse_headers(status, &headers))
    }
}
