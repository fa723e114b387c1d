//! System clipboard access: pasted text and pasted images.

use std::io::Cursor;

use arboard::Clipboard;
use image::{ImageFormat, RgbaImage};

use crate::error::ValidationError;
use crate::intake::SelectedFile;

/// Name given to an image taken from the clipboard.
pub const CLIPBOARD_IMAGE_NAME: &str = "clipboard.png";

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Create a new clipboard handler.
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    pub fn get_text(&mut self) -> Option<String> {
        match self.clipboard.get_text() {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::debug!("No clipboard text: {err}");
                None
            }
        }
    }

    /// Read an image from the clipboard as a PNG file.
    pub fn get_image(&mut self) -> Result<SelectedFile, ValidationError> {
        let image = self.clipboard.get_image().map_err(|err| {
            tracing::debug!("No clipboard image: {err}");
            ValidationError::NoClipboardImage
        })?;
        let png = encode_png(image.width as u32, image.height as u32, image.bytes.into_owned())
            .ok_or(ValidationError::NoClipboardImage)?;
        Ok(SelectedFile::new(CLIPBOARD_IMAGE_NAME, "image/png", png))
    }
}

/// Encode raw RGBA pixels as PNG. `None` if the buffer does not match
/// the dimensions or encoding fails.
pub fn encode_png(width: u32, height: u32, rgba: Vec<u8>) -> Option<Vec<u8>> {
    let image = RgbaImage::from_raw(width, height, rgba)?;
    let mut out = Cursor::new(Vec::new());
    match image.write_to(&mut out, ImageFormat::Png) {
        Ok(()) => Some(out.into_inner()),
        Err(err) => {
            tracing::warn!("Failed to encode clipboard image: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_valid_rgba_as_png() {
        let png = encode_png(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (2, 1));
    }

    #[test]
    fn mismatched_buffer_is_rejected() {
        assert!(encode_png(4, 4, vec![0; 3]).is_none());
    }
}
