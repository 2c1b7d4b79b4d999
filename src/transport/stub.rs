//! Canned HTTP stub server for tests.
//!
//! Serves one canned envelope body per connection, in order, and records
//! each incoming request (method, path, headers, body) for assertions.
//! Replies close the connection so every round trip hits a fresh accept.

// ============================================================================
// Imports
// ============================================================================

use std::net::SocketAddr;

use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

// ============================================================================
// RecordedRequest
// ============================================================================

/// One request as seen on the wire.
pub(crate) struct RecordedRequest {
    /// Request method, e.g. `POST`.
    pub method: String,

    /// Request path including any query.
    pub path: String,

    /// Header name/value pairs in arrival order.
    pub headers: Vec<(String, String)>,

    /// Raw request body.
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Returns a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    }

    /// Parses the body as JSON.
    pub fn body_json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

// ============================================================================
// StubServer
// ============================================================================

/// Minimal HTTP/1.1 server serving canned bodies.
pub(crate) struct StubServer {
    addr: SocketAddr,
    requests: mpsc::UnboundedReceiver<RecordedRequest>,
}

impl StubServer {
    /// Binds to an ephemeral localhost port and serves `replies` in order,
    /// one per connection.
    pub async fn start(replies: Vec<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");
        let (tx, requests) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            for reply in replies {
                let Ok((stream, _)) = listener.accept().await else {
                    return;
                };
                if serve_one(stream, &tx, &reply).await.is_err() {
                    return;
                }
            }
        });

        Self { addr, requests }
    }

    /// Returns the base URL clients should connect to.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Receives the next recorded request.
    pub async fn request(&mut self) -> RecordedRequest {
        self.requests.recv().await.expect("request recorded")
    }
}

// ============================================================================
// Connection Handling
// ============================================================================

/// Reads one request off the stream, records it, writes the canned reply.
async fn serve_one(
    mut stream: TcpStream,
    tx: &mpsc::UnboundedSender<RecordedRequest>,
    reply: &str,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let header_end = loop {
        let mut chunk = [0u8; 1024];
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..read]);
        if let Some(pos) = find_blank_line(&buf) {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");

    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split(' ');
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    let mut content_length = 0usize;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim().to_string();
            let value = value.trim().to_string();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            }
            headers.push((name, value));
        }
    }

    let body_start = header_end + 4;
    while buf.len() < body_start + content_length {
        let mut chunk = [0u8; 1024];
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..read]);
    }
    let body_end = (body_start + content_length).min(buf.len());
    let body = buf[body_start..body_end].to_vec();

    let _ = tx.send(RecordedRequest {
        method,
        path,
        headers,
        body,
    });

    let response = format!(
        "HTTP/1.1 200 OK\r\n\
         Content-Type: application/json; charset=utf-8\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n\
         {}",
        reply.len(),
        reply
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}

/// Finds the header/body separator.
fn find_blank_line(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|window| window == b"\r\n\r\n")
}
