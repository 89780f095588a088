//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed path → (status, body) map; unknown paths get 404. Counts
//! requests per path so tests can assert which candidates were tried.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Clone)]
pub struct CdnServer {
    /// Base URL, e.g. "http://127.0.0.1:12345/".
    pub base: String,
    hits: Arc<Mutex<HashMap<String, usize>>>,
}

impl CdnServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    /// Number of requests received for `path` (leading '/' optional).
    pub fn hits(&self, path: &str) -> usize {
        let key = format!("/{}", path.trim_start_matches('/'));
        self.hits.lock().unwrap().get(&key).copied().unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.hits.lock().unwrap().values().sum()
    }
}

/// What a route answers with.
struct Route {
    status: u16,
    body: Vec<u8>,
    /// Content-Length to advertise; larger than `body` simulates a dropped connection.
    declared_len: usize,
}

/// Starts a server in a background thread. Routes map a path ("/a/index.bin")
/// to the status code and body to send. Runs until the process exits.
pub fn start(routes: Vec<(&str, u16, Vec<u8>)>) -> CdnServer {
    serve(
        routes
            .into_iter()
            .map(|(p, status, body)| {
                let declared_len = body.len();
                (
                    p.to_string(),
                    Route {
                        status,
                        body,
                        declared_len,
                    },
                )
            })
            .collect(),
    )
}

/// Serves `path` with status 200, advertising `declared_len` bytes but sending
/// only `body` before closing the connection.
pub fn start_truncated(path: &str, declared_len: usize, body: Vec<u8>) -> CdnServer {
    let mut routes = HashMap::new();
    routes.insert(
        path.to_string(),
        Route {
            status: 200,
            body,
            declared_len,
        },
    );
    serve(routes)
}

/// Accepts connections and never answers. Returns the base URL.
pub fn start_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming().flatten() {
            held.push(stream);
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn serve(routes: HashMap<String, Route>) -> CdnServer {
    let routes = Arc::new(routes);
    let hits = Arc::new(Mutex::new(HashMap::new()));
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let hits = Arc::clone(&hits_srv);
            thread::spawn(move || handle(stream, &routes, &hits));
        }
    });
    CdnServer {
        base: format!("http://127.0.0.1:{}/", port),
        hits,
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        403 => "Forbidden",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    hits: &Mutex<HashMap<String, usize>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    *hits.lock().unwrap().entry(path.clone()).or_insert(0) += 1;

    let (status, body, declared_len) = match routes.get(&path) {
        Some(r) => (r.status, r.body.as_slice(), r.declared_len),
        None => (404, &b"not found"[..], 9),
    };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason(status),
        declared_len
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}
