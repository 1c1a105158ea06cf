use std::fs::{self, File};
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use tiny_http::{Header, Method, Request, Response};

use super::mime::MimeTable;
use crate::debug_println;

/// Default index artifacts looked up when a directory is requested
const INDEX_CANDIDATES: &[&str] = &["index.html", "index.htm"];

/// Handles requests against an immutable document root. Shared read-only
/// across worker threads; no per-request state outlives the response.
pub struct RequestHandler {
    root: PathBuf,
    mime: MimeTable,
}

impl RequestHandler {
    pub fn new(root: PathBuf, mime: MimeTable) -> Self {
        Self { root, mime }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Handle an incoming HTTP request
    pub fn handle(&self, request: Request) {
        let url = request.url().to_string();
        debug_println!("Received request: {} {}", request.method(), url);

        if !matches!(*request.method(), Method::Get | Method::Head) {
            respond(request, text_response(405, "405 Method Not Allowed"));
            return;
        }

        let request_path = url.split(['?', '#']).next().unwrap_or("/");

        let Some(resolved) = self.resolve(request_path) else {
            debug_println!("Rejected traversal attempt: {}", request_path);
            respond(request, text_response(403, "403 Forbidden"));
            return;
        };

        if resolved.is_dir() {
            // Relative links in indexes and listings only work with a
            // trailing slash, so redirect the bare form first.
            if !request_path.ends_with('/') {
                respond(request, redirect_response(&format!("{request_path}/")));
                return;
            }

            for index in INDEX_CANDIDATES {
                let candidate = resolved.join(index);
                if candidate.is_file() {
                    self.serve_file(request, &candidate);
                    return;
                }
            }

            self.serve_listing(request, request_path, &resolved);
            return;
        }

        self.serve_file(request, &resolved);
    }

    /// Resolve a request path against the document root.
    ///
    /// Returns `None` for any path containing a parent-directory segment,
    /// literal or percent-encoded; nothing outside the root is ever served.
    fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let decoded = percent_decode(request_path);
        let mut resolved = self.root.clone();

        for segment in decoded.split('/') {
            match segment {
                "" | "." => continue,
                ".." => return None,
                _ => resolved.push(segment),
            }
        }

        Some(resolved)
    }

    /// Stream a file back to the client
    fn serve_file(&self, request: Request, path: &Path) {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
                ) =>
            {
                respond(request, text_response(404, "404 Not Found"));
                return;
            }
            Err(e) => {
                eprintln!("❗ Error reading file {}: {e}", path.display());
                respond(request, text_response(500, &format!("Error: {e}")));
                return;
            }
        };

        let content_type = self.mime.content_type(path);
        debug_println!("Serving file: {} ({content_type})", path.display());

        respond(
            request,
            Response::from_file(file).with_header(content_type_header(content_type)),
        );
    }

    /// Serve a minimal HTML listing for a directory with no index artifact
    fn serve_listing(&self, request: Request, request_path: &str, dir: &Path) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("❗ Error listing directory {}: {e}", dir.display());
                respond(request, text_response(500, &format!("Error: {e}")));
                return;
            }
        };

        let mut names: Vec<String> = entries
            .flatten()
            .map(|entry| {
                let mut name = entry.file_name().to_string_lossy().into_owned();
                if entry.path().is_dir() {
                    name.push('/');
                }
                name
            })
            .collect();
        names.sort();

        let title = format!("Directory listing for {}", html_escape(request_path));
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str(&format!("<title>{title}</title>\n"));
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!("<h1>{title}</h1>\n<hr>\n<ul>\n"));
        for name in &names {
            let escaped = html_escape(name);
            html.push_str(&format!("<li><a href=\"{escaped}\">{escaped}</a></li>\n"));
        }
        html.push_str("</ul>\n<hr>\n</body>\n</html>\n");

        respond(
            request,
            Response::from_string(html)
                .with_header(content_type_header("text/html; charset=utf-8")),
        );
    }
}

/// Finalize and send a response.
///
/// Every response the handler produces leaves through here, so the two
/// isolation headers are present on success, redirect, and error responses
/// alike, each exactly once.
fn respond<R: Read>(request: Request, response: Response<R>) {
    let response = response
        .with_header(header("Cross-Origin-Opener-Policy", "same-origin"))
        .with_header(header("Cross-Origin-Embedder-Policy", "require-corp"));

    if let Err(e) = request.respond(response) {
        eprintln!("❗ Error sending response: {e}");
    }
}

fn header(field: &str, value: &str) -> Header {
    Header::from_bytes(field.as_bytes(), value.as_bytes()).unwrap()
}

/// Generate a Content-Type header
fn content_type_header(value: &str) -> Header {
    header("Content-Type", value)
}

fn text_response(status: u16, body: &str) -> Response<Cursor<Vec<u8>>> {
    Response::from_string(body)
        .with_status_code(status)
        .with_header(content_type_header("text/plain"))
}

fn redirect_response(location: &str) -> Response<Cursor<Vec<u8>>> {
    Response::from_string("")
        .with_status_code(301)
        .with_header(header("Location", location))
}

/// Decode `%XX` escapes; malformed escapes are passed through untouched
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
        {
            out.push(hex_value(bytes[i + 1]) << 4 | hex_value(bytes[i + 2]));
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit.to_ascii_lowercase() - b'a' + 10,
    }
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
