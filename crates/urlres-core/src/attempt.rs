//! One resolution attempt: fetch a single URL and record what came back.
//!
//! Deciding whether to follow the redirect target, retrying after a
//! connection failure, and inspecting HTML for `og:url` / `rel=canonical`
//! all stay with the caller; this step only fills the record.

use thiserror::Error;
use url::Url;

use crate::fetch::{FetchError, Fetcher};
use crate::result::ResolutionResult;

/// Fetches `url` and returns its outcome record.
///
/// `starting_url` is the URL the caller originally asked to resolve; the
/// record is marked as the starting point when the two are equal.
pub fn record_attempt<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    starting_url: &str,
) -> ResolutionResult {
    let mut result = ResolutionResult::new(url);
    result.set_starting_point(url == starting_url);

    let base = match parse_http_url(url) {
        Ok(base) => base,
        Err(e) => {
            result.set_fatal_error(true, Some(e.to_string().as_str()));
            tracing::debug!(%result, "rejected input");
            return result;
        }
    };

    match fetcher.fetch(url) {
        Ok(resp) => {
            result.set_status(Some(resp.status));
            result.set_content_type(resp.content_type);
            result.set_content_length(resp.content_length);
            if result.has_redirect_status() {
                match resp.location.as_deref().map(|loc| base.join(loc)) {
                    Some(Ok(target)) => result.set_redirect_target(Some(target.into())),
                    Some(Err(e)) => {
                        tracing::warn!(url, error = %e, "unusable Location header");
                    }
                    None => tracing::warn!(url, "redirect without Location header"),
                }
            }
        }
        Err(FetchError::Connection(msg)) => {
            result.set_connection_failed(true, Some(msg.as_str()));
        }
        Err(FetchError::Fatal(msg)) => result.set_fatal_error(true, Some(msg.as_str())),
    }

    tracing::debug!(%result, redirect = ?result.redirect_target(), "attempt finished");
    result
}

/// Why a URL was rejected before any request was made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("empty URL")]
    Empty,
    #[error("invalid URL {url:?}: {source}")]
    Invalid {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported scheme {scheme:?} in {url}")]
    UnsupportedScheme { scheme: String, url: String },
}

/// Accepts only absolute `http`/`https` URLs.
pub fn parse_http_url(url: &str) -> Result<Url, InputError> {
    if url.trim().is_empty() {
        return Err(InputError::Empty);
    }
    let parsed = Url::parse(url).map_err(|source| InputError::Invalid {
        url: url.to_string(),
        source,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(InputError::UnsupportedScheme {
            scheme: other.to_string(),
            url: url.to_string(),
        }),
    }
}
