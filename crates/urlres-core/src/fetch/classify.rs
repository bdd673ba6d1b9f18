//! Classify curl errors into connection failures and fatal errors.

use super::FetchError;

/// Maps a curl error onto the two failure kinds of the outcome record.
///
/// Timeouts and network-level failures where nothing usable came back are
/// connection failures; everything else (bad URL, unsupported protocol,
/// TLS setup, ...) is fatal.
pub fn classify_curl_error(e: &curl::Error) -> FetchError {
    let message = e.to_string();
    if e.is_operation_timedout()
        || e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
        || e.is_partial_file()
    {
        return FetchError::Connection(message);
    }
    FetchError::Fatal(message)
}
