#![allow(dead_code)]

// Shared test helpers: fixture CSV files and a single-request HTTP capture
// server standing in for the pharmacy-pos API.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

pub struct TestServer {
    pub url: String,
    handle: JoinHandle<String>,
}

impl TestServer {
    /// Bind an ephemeral port and serve exactly one request with the given
    /// status line and JSON body, capturing the raw request text.
    pub fn serve(status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let url = format!("http://{}", listener.local_addr().expect("listener addr"));
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept upload connection");
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).expect("write response");
            request
        });
        TestServer { url, handle }
    }

    /// Wait for the request to arrive and return its raw text.
    pub fn request(self) -> String {
        self.handle.join().expect("server thread")
    }
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 8192];
    loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if request_complete(&buf) {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

// The upload is sent with a Content-Length header (every part is sized), so
// the request is complete once that many body bytes follow the headers.
fn request_complete(buf: &[u8]) -> bool {
    let header_end = match buf.windows(4).position(|w| w == b"\r\n\r\n") {
        Some(pos) => pos,
        None => return false,
    };
    let headers = String::from_utf8_lossy(&buf[..header_end]);
    let length = headers
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    buf.len() >= header_end + 4 + length
}

pub fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture csv");
    path
}
