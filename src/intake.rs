//! File intake for the caption page.
//!
//! A file reaches the page from one of three sources: a path typed into
//! the browse prompt, a path pasted by the terminal when a file is dragged
//! onto it, or an image on the system clipboard. Whatever the source, the
//! file is accepted only if its declared media type is `image/*`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use reqwest::Url;

use crate::error::ValidationError;

/// Media type used when nothing better can be determined.
const OCTET_STREAM: &str = "application/octet-stream";

/// A user-provided file with its declared media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    media_type: String,
    content: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        content: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            content: content.into(),
        }
    }

    /// Read a file from disk and declare its media type from its content.
    pub fn from_path(path: &Path) -> Result<Self, ValidationError> {
        let name = display_name(path);
        let bytes = fs::read(path).map_err(|err| {
            tracing::warn!(path = %path.display(), "Failed to read selected file: {err}");
            ValidationError::Unreadable { name: name.clone() }
        })?;
        let media_type = detect_media_type(&bytes, path);
        Ok(Self::new(name, media_type, bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Shared handle to the raw bytes.
    pub fn content(&self) -> Arc<[u8]> {
        Arc::clone(&self.content)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.content
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    /// Size in megabytes with one decimal, as shown on the preview overlay.
    pub fn size_label(&self) -> String {
        format!("{:.1} MB", self.size() as f64 / 1024.0 / 1024.0)
    }
}

/// Outcome of intake validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intake {
    Accepted(SelectedFile),
    Rejected(ValidationError),
}

/// Accept a file iff its declared media type starts with `image/`.
///
/// Size is not checked.
pub fn validate(file: SelectedFile) -> Intake {
    if file.media_type.starts_with("image/") {
        Intake::Accepted(file)
    } else {
        tracing::debug!(
            name = file.name(),
            media_type = file.media_type(),
            "Rejected non-image file"
        );
        Intake::Rejected(ValidationError::NotAnImage)
    }
}

/// Determine the media type of `bytes`.
///
/// Magic bytes win; the extension is only consulted when the content is
/// not recognised.
pub fn detect_media_type(bytes: &[u8], path: &Path) -> String {
    if let Some(kind) = infer::get(bytes) {
        return kind.mime_type().to_string();
    }
    media_type_from_extension(path)
        .unwrap_or(OCTET_STREAM)
        .to_string()
}

fn media_type_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let media_type = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "txt" | "md" => "text/plain",
        "pdf" => "application/pdf",
        "json" => "application/json",
        _ => return None,
    };
    Some(media_type)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Turn text pasted by the terminal (a dragged file, a typed path) into
/// a path.
///
/// Handles surrounding quotes, `file://` URIs with percent escapes and
/// backslash-escaped spaces. Only the first non-empty line is used, so
/// dropping several files selects the first one.
pub fn normalize_dropped_path(text: &str) -> Option<PathBuf> {
    let line = text.lines().map(str::trim).find(|line| !line.is_empty())?;

    let unquoted = strip_quotes(line);
    if unquoted.starts_with("file://") {
        return Url::parse(unquoted).ok()?.to_file_path().ok();
    }

    let path = unquoted.replace("\\ ", " ");
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

fn strip_quotes(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0];

    #[test]
    fn accepts_image_media_types() {
        let file = SelectedFile::new("photo.png", "image/png", PNG_MAGIC.to_vec());
        assert!(matches!(validate(file), Intake::Accepted(f) if f.name() == "photo.png"));
    }

    #[test]
    fn rejects_non_image_media_types() {
        for media_type in ["application/pdf", "text/plain", "", "video/mp4", "imagex/png"] {
            let file = SelectedFile::new("notes.pdf", media_type, vec![1, 2, 3]);
            assert_eq!(
                validate(file),
                Intake::Rejected(ValidationError::NotAnImage),
                "{media_type} should be rejected"
            );
        }
    }

    #[test]
    fn magic_bytes_override_extension() {
        assert_eq!(detect_media_type(PNG_MAGIC, Path::new("renamed.txt")), "image/png");
    }

    #[test]
    fn extension_used_when_content_unknown() {
        assert_eq!(detect_media_type(b"plain words", Path::new("notes.txt")), "text/plain");
        assert_eq!(detect_media_type(b"<svg/>", Path::new("logo.SVG")), "image/svg+xml");
        assert_eq!(
            detect_media_type(b"???", Path::new("mystery")),
            "application/octet-stream"
        );
    }

    #[test]
    fn from_path_reads_file() {
        let mut tmp = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        tmp.write_all(PNG_MAGIC).unwrap();
        let file = SelectedFile::from_path(tmp.path()).unwrap();
        assert_eq!(file.media_type(), "image/png");
        assert_eq!(file.size(), PNG_MAGIC.len() as u64);
    }

    #[test]
    fn from_path_missing_file_is_unreadable() {
        let err = SelectedFile::from_path(Path::new("/definitely/not/here.png")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Unreadable {
                name: "here.png".to_string()
            }
        );
    }

    #[test]
    fn size_label_has_one_decimal() {
        let file = SelectedFile::new("big.png", "image/png", vec![0u8; 1024 * 1024 * 3 / 2]);
        assert_eq!(file.size_label(), "1.5 MB");
        let empty = SelectedFile::new("empty.png", "image/png", Vec::new());
        assert_eq!(empty.size_label(), "0.0 MB");
    }

    #[test]
    fn normalize_plain_and_quoted_paths() {
        assert_eq!(
            normalize_dropped_path("/tmp/photo.png\n"),
            Some(PathBuf::from("/tmp/photo.png"))
        );
        assert_eq!(
            normalize_dropped_path("'/tmp/my photo.png'"),
            Some(PathBuf::from("/tmp/my photo.png"))
        );
        assert_eq!(
            normalize_dropped_path("\"/tmp/a.png\""),
            Some(PathBuf::from("/tmp/a.png"))
        );
    }

    #[test]
    fn normalize_escaped_spaces_and_uris() {
        assert_eq!(
            normalize_dropped_path("/tmp/my\\ photo.png"),
            Some(PathBuf::from("/tmp/my photo.png"))
        );
        assert_eq!(
            normalize_dropped_path("file:///tmp/my%20photo.png"),
            Some(PathBuf::from("/tmp/my photo.png"))
        );
        assert_eq!(
            normalize_dropped_path("file://localhost/tmp/a.png"),
            Some(PathBuf::from("/tmp/a.png"))
        );
    }

    #[test]
    fn normalize_decodes_utf8_escapes_and_rejects_remote_hosts() {
        assert_eq!(
            normalize_dropped_path("'file:///tmp/caf%C3%A9.png'"),
            Some(PathBuf::from("/tmp/café.png"))
        );
        assert_eq!(normalize_dropped_path("file://fileserver/share/a.png"), None);
    }

    #[test]
    fn normalize_takes_first_path_only() {
        assert_eq!(
            normalize_dropped_path("\n/tmp/first.png\n/tmp/second.png"),
            Some(PathBuf::from("/tmp/first.png"))
        );
        assert_eq!(normalize_dropped_path("   \n  "), None);
    }
}
