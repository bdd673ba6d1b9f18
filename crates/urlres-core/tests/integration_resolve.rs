//! Integration test: single resolution attempts against a local HTTP server.

mod common;

use common::http_server;
use urlres_core::fetch::CurlFetcher;
use urlres_core::{record_attempt, Outcome};

#[test]
fn html_page_is_recorded_as_success() {
    let base = http_server::start();
    let url = format!("{}/page", base);
    let r = record_attempt(&CurlFetcher::default(), &url, &url);

    assert!(!r.did_error_occur(), "error: {}", r.error_message());
    assert!(r.is_starting_point());
    assert_eq!(r.status(), Some(200));
    assert!(r.has_html_content_type(None));
    assert_eq!(r.content_length(), Some(42));
    assert!(r.redirect_target().is_none());
    assert_eq!(r.outcome(), Outcome::Success);
}

#[test]
fn relative_redirect_is_not_followed() {
    let base = http_server::start();
    let start = format!("{}/moved", base);
    let r = record_attempt(&CurlFetcher::default(), &start, &start);

    assert_eq!(r.status(), Some(301));
    assert_eq!(r.outcome(), Outcome::Redirect);
    assert_eq!(r.redirect_target(), Some(format!("{}/page", base).as_str()));
    assert_eq!(r.url(), start);
}

#[test]
fn following_redirect_by_hand() {
    let base = http_server::start();
    let start = format!("{}/found", base);
    let fetcher = CurlFetcher::default();

    let first = record_attempt(&fetcher, &start, &start);
    assert!(first.has_redirect_status());
    let next = first.redirect_target().expect("redirect target").to_string();

    let second = record_attempt(&fetcher, &next, &start);
    assert!(!second.is_starting_point());
    assert!(second.has_success_status());
    assert_eq!(second.debug_status(), "(200)");
}

#[test]
fn missing_content_length_stays_absent() {
    let base = http_server::start();
    let url = format!("{}/blob", base);
    let r = record_attempt(&CurlFetcher::default(), &url, &url);

    assert_eq!(r.status(), Some(200));
    assert!(r.content_length().is_none());
    assert!(!r.has_html_content_type(None));
}

#[test]
fn not_found_is_not_an_error() {
    let base = http_server::start();
    let url = format!("{}/nope", base);
    let r = record_attempt(&CurlFetcher::default(), &url, &url);

    assert!(!r.did_error_occur());
    assert_eq!(r.debug_status(), "(404)");
    assert_eq!(r.outcome(), Outcome::Other);
}

#[test]
fn refused_connection_is_connection_failure() {
    let url = http_server::closed_port_url();
    let r = record_attempt(&CurlFetcher::default(), &url, &url);

    assert!(r.connection_failed());
    assert!(!r.fatal_error());
    assert!(r.status().is_none());
    assert!(!r.error_message().is_empty());
    assert_eq!(r.outcome(), Outcome::ConnectionFailed);
}
