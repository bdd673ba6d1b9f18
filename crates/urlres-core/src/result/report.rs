//! JSON-friendly view of a record.

use serde::{Serialize, Serializer};

use super::ResolutionResult;

#[derive(Serialize)]
struct Report<'a> {
    url: &'a str,
    status: Option<u32>,
    content_type: Option<&'a str>,
    content_length: Option<u64>,
    is_starting_point: bool,
    is_open_graph: bool,
    is_canonical: bool,
    redirect: Option<&'a str>,
    redirect_is_open_graph: bool,
    redirect_is_canonical: bool,
    connection_failed: bool,
    fatal_error: bool,
    error_message: &'a str,
    debug_status: String,
}

/// Serializes through the public accessors, so a stale message left behind
/// after the failure flags were cleared is never emitted.
impl Serialize for ResolutionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Report {
            url: self.url(),
            status: self.status(),
            content_type: self.content_type(),
            content_length: self.content_length(),
            is_starting_point: self.is_starting_point(),
            is_open_graph: self.is_open_graph(),
            is_canonical: self.is_canonical(),
            redirect: self.redirect_target(),
            redirect_is_open_graph: self.redirect_is_open_graph(),
            redirect_is_canonical: self.redirect_is_canonical(),
            connection_failed: self.connection_failed(),
            fatal_error: self.fatal_error(),
            error_message: self.error_message(),
            debug_status: self.debug_status(),
        }
        .serialize(serializer)
    }
}
