//! Coarse classification of a finished record.

use super::ResolutionResult;

/// What a [`ResolutionResult`] says happened, derived from its fields.
///
/// Connection failure is checked before fatal error, so a record with both
/// flags reports `ConnectionFailed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No header or body obtained; a retry may help.
    ConnectionFailed,
    /// Unrecoverable error.
    Fatal,
    /// 301 or 302.
    Redirect,
    /// 200.
    Success,
    /// Any other status (4xx, 5xx, 204, ...) or no status at all.
    Other,
}

impl ResolutionResult {
    pub fn outcome(&self) -> Outcome {
        if self.connection_failed {
            Outcome::ConnectionFailed
        } else if self.fatal_error {
            Outcome::Fatal
        } else if self.has_redirect_status() {
            Outcome::Redirect
        } else if self.has_success_status() {
            Outcome::Success
        } else {
            Outcome::Other
        }
    }
}
