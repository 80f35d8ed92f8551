use image::ImageFormat;

use crate::error::{Error, Result};

/// One uploaded file, exactly as received: the raw bytes plus the filename
/// the browser declared. Owned by the session for a single wizard pass.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> UploadedImage {
        UploadedImage {
            filename: filename.into(),
            bytes,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Size string shown in the preview bar: 50 000 bytes → "48.83 KB".
    pub fn size_kb_display(&self) -> String {
        format!("{:.2} KB", self.bytes.len() as f64 / 1024.0)
    }
}

/// A fully validated RGB raster.
///
/// Only `decode_upload` constructs one, so holding a `DecodedImage` implies
/// the originating upload passed validation.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    rgb: image::RgbImage,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.rgb.width()
    }

    pub fn height(&self) -> u32 {
        self.rgb.height()
    }

    pub(crate) fn raster(&self) -> &image::RgbImage {
        &self.rgb
    }
}

/// Validates an upload and decodes it into an RGB raster.
///
/// The format is sniffed from the buffer's magic bytes (the filename
/// extension is never trusted) and the whole buffer is decoded so that
/// truncated or corrupt files are rejected up front. On failure nothing is
/// retained; the caller stays in the Upload state.
pub fn decode_upload(upload: &UploadedImage) -> Result<DecodedImage> {
    let format = image::guess_format(&upload.bytes)
        .map_err(|_| Error::InvalidImage("unrecognized file format, use JPG or PNG".to_owned()))?;
    if format != ImageFormat::Png && format != ImageFormat::Jpeg {
        return Err(Error::InvalidImage(format!(
            "{:?} is not an accepted format, use JPG or PNG",
            format
        )));
    }
    let decoded = image::load_from_memory_with_format(&upload.bytes, format)
        .map_err(|e| Error::InvalidImage(e.to_string()))?;
    Ok(DecodedImage {
        rgb: decoded.to_rgb8(),
    })
}

/// Content-Type for serving validated upload bytes back to the browser.
pub fn content_type_of(upload: &UploadedImage) -> &'static str {
    match image::guess_format(&upload.bytes) {
        Ok(ImageFormat::Png) => "image/png",
        _ => "image/jpeg",
    }
}
