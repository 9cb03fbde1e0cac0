//! Shared test fixtures for the crypto-insights integration tests.
//!
//! Provides `serve()` which starts a local HTTP server answering a fixed
//! list of canned responses, one per connection, and records the request
//! line of every call so tests can assert on paths and query parameters.

#![allow(dead_code)]

use crypto_insights::InsightsClient;
use reqwest::Url;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// A running canned-response server. The serving thread exits after the
/// last response has been written.
pub struct MockServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// Request lines received so far, e.g. `GET /coins/markets?... HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Path of the `n`th request.
    pub fn path(&self, n: usize) -> String {
        request_url(&self.requests()[n]).path().to_string()
    }

    /// Query parameters of the `n`th request.
    pub fn query(&self, n: usize) -> HashMap<String, String> {
        request_url(&self.requests()[n])
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

/// Start a server that answers each incoming connection with the next
/// `(status, body)` pair.
pub fn serve(responses: Vec<(u16, String)>) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();

    thread::spawn(move || {
        for (status, body) in responses {
            let Ok((stream, _)) = listener.accept() else {
                return;
            };
            answer(stream, status, &body, &seen);
        }
    });

    MockServer { url, requests }
}

/// Single-response shorthand for [`serve`].
pub fn serve_one(status: u16, body: impl Into<String>) -> MockServer {
    serve(vec![(status, body.into())])
}

/// Client pointed at `server` with a short timeout.
pub fn client(server: &MockServer) -> InsightsClient {
    InsightsClient::builder()
        .base_url(&server.url)
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

/// Base URL on which nothing listens.
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn answer(mut stream: TcpStream, status: u16, body: &str, seen: &Mutex<Vec<String>>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let head = String::from_utf8_lossy(&buf);
    if let Some(line) = head.lines().next() {
        seen.lock().unwrap().push(line.to_string());
    }

    let reason = if (200..300).contains(&status) { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn request_url(line: &str) -> Url {
    let target = line.split_whitespace().nth(1).unwrap_or("/");
    Url::parse(&format!("http://mock{}", target)).unwrap()
}

// ---------------------------------------------------------------------------
// Sample payloads
// ---------------------------------------------------------------------------

/// One market-listing entry as the API returns it, with extra fields the
/// SDK ignores.
pub fn coin_json(id: &str, change: Option<f64>) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "symbol": id.chars().take(3).collect::<String>(),
        "name": id.to_uppercase(),
        "image": format!("https://assets.example.com/{}.png", id),
        "current_price": 42.5,
        "market_cap": 1_000_000.0,
        "market_cap_rank": 1,
        "total_volume": 50_000.0,
        "price_change_24h": 0.5,
        "price_change_percentage_24h": change,
        "last_updated": "2024-01-01T00:00:00.000Z"
    })
}

/// Market-listing body for `(id, change)` pairs.
pub fn markets_body(coins: &[(&str, Option<f64>)]) -> String {
    let rows: Vec<serde_json::Value> = coins.iter().map(|(id, c)| coin_json(id, *c)).collect();
    serde_json::Value::Array(rows).to_string()
}

/// Deterministic pseudo-random 24h changes in roughly -20..20, with
/// repeats, for property-style checks.
pub fn changes(n: usize, seed: u64) -> Vec<f64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % 81) as f64 / 2.0 - 20.0
        })
        .collect()
}
