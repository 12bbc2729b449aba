//! Test support utilities for asset behaviour tests.
//!
//! Provides a sample workshop repository on disk, tree comparison helpers and
//! a one-shot loopback HTTP server standing in for the release host.

#![allow(dead_code, reason = "each behaviour test binary uses a subset")]

use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;
use tempfile::TempDir;

/// Files written into every sample repository, relative to its root.
pub const SAMPLE_FILES: [(&str, &[u8]); 5] = [
    ("data/content/raw/cbssports-articles-2025-07-25.json", b"[{\"id\":1}]"),
    ("data/content/normalized/cbssports-articles-2025-07-25.json", b"[{\"id\":1,\"n\":true}]"),
    ("data/embeddings/cbssports-articles-2025-07-25.parquet", b"PAR1\x00\x01PAR1"),
    ("data/wasm/turbopuffer_index_articles.wasm", b"\0asm\x01\0\0\0"),
    ("data/wasm/turbopuffer_recommend_articles.wasm", b"\0asm\x01\0\0\0\x02"),
];

/// Noise files that must never reach an archive.
pub const NOISE_FILES: [&str; 4] = [
    "data/wasm/.gitkeep",
    "data/content/raw/.DS_Store",
    "data/content/normalized/._cbssports-articles-2025-07-25.json",
    "data/embeddings/__pycache__/helpers.cpython-312.pyc",
];

/// Return `dir` as a UTF-8 path.
pub fn utf8(dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp path")
}

/// Create a git checkout holding every asset directory, sample files and
/// noise files.
pub fn sample_repository() -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::create_dir(dir.path().join(".git")).expect("mkdir .git");
    for (relative, contents) in SAMPLE_FILES {
        write_file(dir.path(), relative, contents);
    }
    for relative in NOISE_FILES {
        write_file(dir.path(), relative, b"noise");
    }
    dir
}

fn write_file(root: &std::path::Path, relative: &str, contents: &[u8]) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    std::fs::write(path, contents).expect("write");
}

/// Read every regular file under `root` keyed by its relative path.
pub fn read_tree(root: &Utf8Path) -> BTreeMap<String, Vec<u8>> {
    walkdir::WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .map(|e| e.expect("walk"))
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let relative = e
                .path()
                .strip_prefix(root)
                .expect("under root")
                .to_string_lossy()
                .into_owned();
            (relative, std::fs::read(e.path()).expect("read"))
        })
        .collect()
}

/// A loopback HTTP server that answers exactly one request.
pub struct OneShotServer {
    /// Base URL of the server, e.g. `http://127.0.0.1:40000`.
    pub base_url: String,
    handle: Option<JoinHandle<String>>,
}

impl OneShotServer {
    /// Serve `body` with `status` to the first request received.
    pub fn start(status: u16, body: Vec<u8>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut request_line = String::new();
            reader.read_line(&mut request_line).expect("read request line");
            loop {
                let mut header = String::new();
                let read = reader.read_line(&mut header).expect("read header");
                if read == 0 || header == "\r\n" {
                    break;
                }
            }
            // Clients may hang up early on error statuses.
            let mut stream = stream;
            let head = format!(
                "HTTP/1.1 {status} {}\r\nContent-Type: application/gzip\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                reason(status),
                body.len()
            );
            let _ = respond(&mut stream, head.as_bytes(), &body);
            request_line
        });
        Self {
            base_url,
            handle: Some(handle),
        }
    }

    /// Wait for the request and return its request line.
    pub fn request_line(mut self) -> String {
        self.handle
            .take()
            .expect("server handle")
            .join()
            .expect("server thread")
    }
}

fn respond(stream: &mut impl Write, head: &[u8], body: &[u8]) -> std::io::Result<()> {
    stream.write_all(head)?;
    stream.write_all(body)?;
    stream.flush()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}
