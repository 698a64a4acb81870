//! Minimal HTTP/1.1 echo server for integration tests.
//!
//! `GET /` (and any unrouted path) answers 200 with an HTML page reflecting the
//! request: request line, `Remote: <ip> <port>`, one table row per header in
//! arrival order, and a raw request dump. Fixed routes exercise status mapping
//! and redirect policy.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

const STYLE: &str =
    "<style>body {color: black; background-color: white;} tr:hover { background: yellow }</style>";
const TABLE: &str =
    "<table mini:hint=\"folded;Headers\" border=\"0\" cellpadding=\"3\" cellspacing=\"0\">\n";

pub const MOVED_BODY: &str = "<p>moved permanently</p>";

/// Starts a server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/"). The server runs until the process exits.
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream, port));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

/// A base URL nothing listens on.
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn read_head(stream: &mut TcpStream) -> Option<String> {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    while !data.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 || data.len() > 64 * 1024 {
            return None;
        }
        data.extend_from_slice(&buf[..n]);
    }
    String::from_utf8(data).ok()
}

fn respond(stream: &mut TcpStream, status: &str, extra_headers: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n{}\r\n{}",
        status,
        body.len(),
        extra_headers,
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn handle(mut stream: TcpStream, port: u16) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let peer = match stream.peer_addr() {
        Ok(p) => p,
        Err(_) => return,
    };
    // TLS handshakes and other garbage end up here and are dropped.
    let Some(head) = read_head(&mut stream) else {
        return;
    };
    let request_line = head.lines().next().unwrap_or("").to_string();
    let path = request_line.split_whitespace().nth(1).unwrap_or("/");

    match path {
        "/404" => respond(&mut stream, "404 Not Found", "", "<h1>404</h1>"),
        "/410" => respond(&mut stream, "410 Gone", "", "<h1>410</h1>"),
        "/500" => respond(&mut stream, "500 Internal Server Error", "", "<h1>500</h1>"),
        "/204" => respond(&mut stream, "204 No Content", "", ""),
        "/301" => respond(
            &mut stream,
            "301 Moved Permanently",
            &format!("Location: http://127.0.0.1:{}/\r\n", port),
            MOVED_BODY,
        ),
        "/cross" => respond(
            &mut stream,
            "301 Moved Permanently",
            &format!("Location: https://127.0.0.1:{}/\r\n", port),
            MOVED_BODY,
        ),
        "/loop" => respond(
            &mut stream,
            "302 Found",
            &format!("Location: http://127.0.0.1:{}/loop\r\n", port),
            MOVED_BODY,
        ),
        _ => {
            let page = echo_page(&request_line, peer, &head);
            respond(&mut stream, "200 OK", "", &page);
        }
    }
}

fn echo_page(request_line: &str, peer: SocketAddr, head: &str) -> String {
    let mut page = format!(
        "{}<h2>{}</h2><h2>Remote: {} {}</h2>{}",
        STYLE,
        request_line,
        peer.ip(),
        peer.port(),
        TABLE
    );
    for line in head.split("\r\n").skip(1) {
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            page.push_str(&format!(
                "<tr><td valign=top><b>{}:</b></td><td>{}</td></tr>\n",
                name, value
            ));
        }
    }
    page.push_str("</table><h2>Raw request</h2><pre>");
    page.push_str(head);
    page.push_str("</pre>");
    page
}
