use std::sync::Arc;

use reqwest::multipart::{Form, Part};

use crate::api::error::ClientError;
use crate::intake::SelectedFile;

/// Multipart field name both endpoints read the upload from.
pub const FILE_FIELD: &str = "file";

/// File name given to summarize uploads.
pub const TEXT_FILE_NAME: &str = "input.txt";

/// The single file-shaped part sent with every request.
///
/// Text is uploaded as a plain-text file too, so both endpoints share
/// one upload convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPart {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Arc<[u8]>,
}

impl UploadPart {
    /// Upload the selected file as-is, keeping its original name.
    pub fn from_file(file: &SelectedFile) -> Self {
        Self {
            file_name: file.name().to_string(),
            media_type: file.media_type().to_string(),
            bytes: file.content(),
        }
    }

    /// Re-encode text as a `text/plain` blob named `input.txt`.
    pub fn from_text(text: &str) -> Self {
        Self {
            file_name: TEXT_FILE_NAME.to_string(),
            media_type: "text/plain".to_string(),
            bytes: Arc::from(text.as_bytes()),
        }
    }

    /// Build the one-part multipart form.
    pub(crate) fn into_form(self) -> Result<Form, ClientError> {
        let part = Part::bytes(self.bytes.to_vec())
            .file_name(self.file_name)
            .mime_str(&self.media_type)
            .map_err(ClientError::InvalidUpload)?;
        Ok(Form::new().part(FILE_FIELD, part))
    }
}
