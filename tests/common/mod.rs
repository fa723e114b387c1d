//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use ai_toolkit::api::InferenceClient;
use ai_toolkit::clipboard::encode_png;
use ai_toolkit::config::ServiceConfig;
use ai_toolkit::intake::SelectedFile;
use std::path::PathBuf;
use tempfile::TempDir;

pub use mock_backend::{CapturedRequest, MockBackend, MockResponse};

/// A valid 2x2 PNG.
pub fn png_bytes() -> Vec<u8> {
    encode_png(2, 2, vec![200; 16]).expect("encode png")
}

pub fn client_for(base_url: &str) -> InferenceClient {
    InferenceClient::new(&ServiceConfig {
        base_url: base_url.to_string(),
        timeout_seconds: Some(5),
    })
    .expect("client")
}

pub fn photo() -> SelectedFile {
    SelectedFile::new("photo.png", "image/png", png_bytes())
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    temp_file("config.toml", content.as_bytes())
}

/// An address nothing listens on.
pub fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
