//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed map of path → body with 200; unknown paths get 404. Bodies
//! can be swapped while the server runs to simulate upstream changes.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Clone, Default)]
pub struct Routes(Arc<Mutex<HashMap<String, String>>>);

impl Routes {
    pub fn set(&self, path: &str, body: impl Into<String>) {
        self.0.lock().unwrap().insert(path.to_string(), body.into());
    }

    fn get(&self, path: &str) -> Option<String> {
        self.0.lock().unwrap().get(path).cloned()
    }
}

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345") and the route table.
pub fn start() -> (String, Routes) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Routes::default();
    let served = routes.clone();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = served.clone();
            thread::spawn(move || handle(stream, &routes));
        }
    });
    (format!("http://127.0.0.1:{}", port), routes)
}

fn handle(mut stream: std::net::TcpStream, routes: &Routes) {
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
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    let (status, body) = match routes.get(path) {
        Some(body) => ("200 OK", body),
        None => ("404 Not Found", "not found".to_string()),
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: application/json\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}
