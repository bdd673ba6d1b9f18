//! Parse HTTP response header lines into FetchedResponse.

use super::FetchedResponse;

/// Decodes one raw header line, trimming the trailing CRLF.
///
/// Bytes that are not UTF-8 (Latin-1 `Location` values, for one) are
/// replaced with U+FFFD instead of losing the whole line.
pub fn decode_header_line(data: &[u8]) -> String {
    let line = String::from_utf8_lossy(data);
    if let std::borrow::Cow::Owned(_) = &line {
        tracing::debug!(bytes = data.len(), "header line is not valid UTF-8");
    }
    line.trim_end().to_string()
}

/// Parse collected header lines into a [`FetchedResponse`] for `status`.
///
/// Header names are matched case-insensitively. A status line (`HTTP/...`)
/// starts a new block, so only the last response's headers are kept
/// (e.g. after `100 Continue`).
pub fn parse_headers(status: u32, lines: &[String]) -> FetchedResponse {
    let mut out = FetchedResponse {
        status,
        ..FetchedResponse::default()
    };

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            out = FetchedResponse {
                status,
                ..FetchedResponse::default()
            };
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-type") {
                out.content_type = Some(value.to_string());
            }
            if name.eq_ignore_ascii_case("content-length") {
                out.content_length = value.parse::<u64>().ok();
            }
            if name.eq_ignore_ascii_case("location") && !value.is_empty() {
                out.location = Some(value.to_string());
            }
        }
    }

    out
}
