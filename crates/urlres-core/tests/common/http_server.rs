//! Minimal HTTP/1.1 server with fixed routes for integration tests.
//!
//! Answers HEAD (and GET) by path:
//! - `/page`    → 200, `text/html; charset=utf-8`, Content-Length 42
//! - `/moved`   → 301, `Location: /page`
//! - `/found`   → 302, absolute `Location` to `/page`
//! - `/blob`    → 200, `application/octet-stream`, no Content-Length
//! - otherwise  → 404

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

/// Starts the server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Runs until the process exits.
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let base = format!("http://127.0.0.1:{}", port);
    let base_for_thread = base.clone();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let base = base_for_thread.clone();
            thread::spawn(move || handle(stream, &base));
        }
    });
    base
}

/// A URL on localhost where nothing is listening.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, base: &str) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/");

    let response = match path {
        "/page" => "HTTP/1.1 200 OK\r\n\
            Content-Type: text/html; charset=utf-8\r\n\
            Content-Length: 42\r\n\r\n"
            .to_string(),
        "/moved" => "HTTP/1.1 301 Moved Permanently\r\n\
            Location: /page\r\n\
            Content-Length: 0\r\n\r\n"
            .to_string(),
        "/found" => format!(
            "HTTP/1.1 302 Found\r\nLocation: {}/page\r\nContent-Length: 0\r\n\r\n",
            base
        ),
        "/blob" => "HTTP/1.1 200 OK\r\n\
            Content-Type: application/octet-stream\r\n\
            Connection: close\r\n\r\n"
            .to_string(),
        _ => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n".to_string(),
    };
    let _ = stream.write_all(response.as_bytes());
}
