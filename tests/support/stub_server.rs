use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{Receiver, RecvTimeoutError, channel};
use std::thread;
use std::time::Duration;

/// Minimal HTTP server that answers exactly one request with a canned
/// response and captures the request body it received.
pub struct StubServer {
    pub url: String,
    requests: Receiver<String>,
}

impl StubServer {
    /// Serve `body` under the given status line (e.g. `"200 OK"`) once.
    pub fn one_shot(status_line: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("stub server addr");
        let (tx, requests) = channel();
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let request_body = read_request_body(&mut stream);
                let _ = tx.send(request_body);
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });
        Self {
            url: format!("http://{addr}"),
            requests,
        }
    }

    /// Body of the captured request, waiting up to five seconds.
    pub fn received_body(&self) -> String {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("stub server saw a request")
    }

    /// True when no request arrived within the given window.
    pub fn saw_no_request_within(&self, window: Duration) -> bool {
        matches!(
            self.requests.recv_timeout(window),
            Err(RecvTimeoutError::Timeout)
        )
    }
}

fn read_request_body(stream: &mut TcpStream) -> String {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stub stream"));
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let lowered = line.to_ascii_lowercase();
        if let Some(value) = lowered.strip_prefix("content-length:") {
            content_length = value.trim().parse().unwrap_or(0);
        }
        if line == "\r\n" {
            break;
        }
    }
    let mut body = vec![0u8; content_length];
    if reader.read_exact(&mut body).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&body).to_string()
}
