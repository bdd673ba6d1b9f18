//! Outcome record of a single URL resolution attempt.
//!
//! A [`ResolutionResult`] is created by the resolver for one URL, filled in as
//! the response arrives (status, content metadata, redirect target, markers
//! from HTML inspection) and then handed to the caller as a read-only report.
//! The record stores errors instead of raising them: callers check
//! [`ResolutionResult::did_error_occur`] before trusting `status` or the
//! content fields.

mod debug;
mod outcome;
mod report;

pub use outcome::Outcome;

/// HTTP status treated as success.
const HTTP_OK: u32 = 200;

/// HTTP statuses treated as redirects (Moved Permanently, Found).
const HTTP_REDIRECTS: [u32; 2] = [301, 302];

/// Returns true if `content_type` contains `html`, ignoring ASCII case.
///
/// Matches `text/html`, `text/HTML; charset=utf-8`, `application/xhtml+xml`, ...
pub fn is_html_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("html")
}

/// Result of resolving one URL.
///
/// Flag setters are idempotent and default to `false`. No coherence between
/// fields is enforced: a redirect target may be stored without a redirect
/// status, and `status` may be absent without an error flag. Keeping those
/// combinations sensible is the resolver's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    url: String,
    status: Option<u32>,
    content_type: Option<String>,
    content_length: Option<u64>,

    is_starting_point: bool,
    is_open_graph: bool,
    is_canonical: bool,

    redirect: Option<String>,
    redirect_is_open_graph: bool,
    redirect_is_canonical: bool,

    connection_failed: bool,
    fatal_error: bool,
    error_message: Option<String>,
}

impl ResolutionResult {
    /// Creates an empty record for `url`. All other fields start unset.
    ///
    /// The URL is stored as given. Keeping it non-empty is the resolver's
    /// job; [`record_attempt`](crate::record_attempt) only builds a record
    /// for an empty input to report it as a fatal error.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status: None,
            content_type: None,
            content_length: None,
            is_starting_point: false,
            is_open_graph: false,
            is_canonical: false,
            redirect: None,
            redirect_is_open_graph: false,
            redirect_is_canonical: false,
            connection_failed: false,
            fatal_error: false,
            error_message: None,
        }
    }

    /// Best resolved URL obtained for this attempt.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// HTTP status code of the response for [`url`](Self::url).
    ///
    /// Guaranteed to be present when [`did_error_occur`](Self::did_error_occur)
    /// returns false, provided the resolver honored its contract.
    pub fn status(&self) -> Option<u32> {
        self.status
    }

    pub fn set_status(&mut self, status: Option<u32>) {
        self.status = status;
    }

    /// True iff the status is 200.
    pub fn has_success_status(&self) -> bool {
        self.status == Some(HTTP_OK)
    }

    /// True iff the status is 301 or 302.
    pub fn has_redirect_status(&self) -> bool {
        self.status.is_some_and(|s| HTTP_REDIRECTS.contains(&s))
    }

    /// Value of the `Content-Type` header, if the response carried one.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn set_content_type(&mut self, content_type: Option<String>) {
        self.content_type = content_type;
    }

    /// Tests `content_type` for HTML, or the stored content type when `None`.
    ///
    /// An absent type is never HTML.
    pub fn has_html_content_type(&self, content_type: Option<&str>) -> bool {
        content_type
            .or(self.content_type.as_deref())
            .is_some_and(is_html_content_type)
    }

    /// Size in bytes taken from the `Content-Length` header only.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    pub fn set_content_length(&mut self, content_length: Option<u64>) {
        self.content_length = content_length;
    }

    /// True if the URL is the one originally passed to the resolver.
    pub fn is_starting_point(&self) -> bool {
        self.is_starting_point
    }

    pub fn set_starting_point(&mut self, value: bool) {
        self.is_starting_point = value;
    }

    /// True if the URL was declared via `og:url`.
    pub fn is_open_graph(&self) -> bool {
        self.is_open_graph
    }

    pub fn set_open_graph(&mut self, value: bool) {
        self.is_open_graph = value;
    }

    /// True if the URL was declared via `rel=canonical`.
    pub fn is_canonical(&self) -> bool {
        self.is_canonical
    }

    pub fn set_canonical(&mut self, value: bool) {
        self.is_canonical = value;
    }

    /// URL the response redirected to. Not validated.
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    pub fn set_redirect_target(&mut self, target: Option<String>) {
        self.redirect = target;
    }

    /// Only meaningful when a redirect target is present.
    pub fn redirect_is_open_graph(&self) -> bool {
        self.redirect_is_open_graph
    }

    pub fn set_redirect_is_open_graph(&mut self, value: bool) {
        self.redirect_is_open_graph = value;
    }

    /// Only meaningful when a redirect target is present.
    pub fn redirect_is_canonical(&self) -> bool {
        self.redirect_is_canonical
    }

    pub fn set_redirect_is_canonical(&mut self, value: bool) {
        self.redirect_is_canonical = value;
    }

    /// True if no header or body was obtained. Worth retrying at least once.
    pub fn connection_failed(&self) -> bool {
        self.connection_failed
    }

    /// Records a connection failure.
    ///
    /// The stored message is always replaced by `message`, even when `value`
    /// is false; passing `None` clears it.
    pub fn set_connection_failed(&mut self, value: bool, message: Option<&str>) {
        self.connection_failed = value;
        self.error_message = message.map(str::to_owned);
    }

    /// True if a non-retryable error occurred.
    pub fn fatal_error(&self) -> bool {
        self.fatal_error
    }

    /// Records a fatal error. Same message semantics as
    /// [`set_connection_failed`](Self::set_connection_failed).
    pub fn set_fatal_error(&mut self, value: bool, message: Option<&str>) {
        self.fatal_error = value;
        self.error_message = message.map(str::to_owned);
    }

    /// True if either failure flag is set.
    pub fn did_error_occur(&self) -> bool {
        self.connection_failed || self.fatal_error
    }

    /// Explanation of the failure, or `""` when no failure flag is set.
    pub fn error_message(&self) -> &str {
        if self.did_error_occur() {
            self.error_message.as_deref().unwrap_or("")
        } else {
            ""
        }
    }
}
