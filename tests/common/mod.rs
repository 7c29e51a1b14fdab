//! Common test utilities for integration tests

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Minimal HTTP/1.1 server answering every request with one canned response.
pub struct ListingServer {
    /// Base URL, e.g. "http://127.0.0.1:12345/"
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl ListingServer {
    /// Starts a server in a background thread that serves `body` with 200 OK.
    pub fn start(body: &str) -> Self {
        Self::start_with_status(200, "OK", body)
    }

    /// Like `start` but with a custom status line.
    pub fn start_with_status(code: u16, reason: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let response = Arc::new(format!(
            "HTTP/1.1 {code} {reason}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ));
        let hits = Arc::new(AtomicUsize::new(0));
        let server_hits = Arc::clone(&hits);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                server_hits.fetch_add(1, Ordering::SeqCst);
                let response = Arc::clone(&response);
                thread::spawn(move || handle(stream, &response));
            }
        });
        Self {
            url: format!("http://127.0.0.1:{port}/"),
            hits,
        }
    }

    /// Number of connections accepted so far.
    ///
    /// Counts TCP connections, not HTTP requests. Every response carries
    /// `Connection: close`, so each request needs a connection of its own.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

fn handle(mut stream: TcpStream, response: &str) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    if let Ok(0) | Err(_) = stream.read(&mut buf) {
        return;
    }
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// Renders an Apache-style directory index listing the given filenames.
#[allow(dead_code)]
pub fn index_page(files: &[&str]) -> String {
    let mut page = String::from("<html><head><title>Index of /itv-api-ng/7/x86_64</title></head><body>\n<pre>\n");
    page.push_str("<a href=\"../\">../</a>\n");
    for file in files {
        page.push_str(&format!(
            "<a href=\"{file}\">{file}</a>                 14-Feb-2024 09:12            21488512\n"
        ));
    }
    page.push_str("</pre>\n</body></html>\n");
    page
}
