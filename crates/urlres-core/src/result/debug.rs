//! Short diagnostic tag for logs and tests, e.g. `(301; ERROR, og:url)`.

use std::fmt;

use super::ResolutionResult;

impl ResolutionResult {
    /// Status code followed by the applicable markers, in fixed order:
    /// `ERROR` (either failure flag), `og:url`, `rel=canonical`.
    ///
    /// An absent status renders as empty text: `(; ERROR)`.
    pub fn debug_status(&self) -> String {
        let mut attrs: Vec<&str> = Vec::new();
        if self.did_error_occur() {
            attrs.push("ERROR");
        }
        if self.is_open_graph {
            attrs.push("og:url");
        }
        if self.is_canonical {
            attrs.push("rel=canonical");
        }

        let mut out = String::from("(");
        if let Some(status) = self.status {
            out.push_str(&status.to_string());
        }
        if !attrs.is_empty() {
            out.push_str("; ");
            out.push_str(&attrs.join(", "));
        }
        out.push(')');
        out
    }
}

impl fmt::Display for ResolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.url, self.debug_status())
    }
}
