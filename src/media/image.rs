// SPDX-License-Identifier: MPL-2.0
//! Image decoding from raster formats (PNG, JPEG, GIF, etc.) and SVG.

use crate::error::{DecodeError, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs;
use std::path::Path;
use tiny_skia;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Wraps raw RGBA pixels in a display handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes encoded image bytes into displayable pixel data.
///
/// The `extension` selects the decode path: `svg` goes through resvg
/// rasterization, everything else through the `image` crate's format
/// sniffing.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the bytes cannot be parsed, the format is
/// unsupported, or (for SVG) the document has empty dimensions.
pub fn decode_bytes(bytes: &[u8], extension: &str) -> std::result::Result<ImageData, DecodeError> {
    if extension.eq_ignore_ascii_case("svg") {
        decode_svg_bytes(bytes)
    } else {
        let img =
            image_rs::load_from_memory(bytes).map_err(|e| DecodeError::from_image_error(&e))?;
        let (width, height) = img.dimensions();
        let pixels = img.to_rgba8().into_vec();
        Ok(ImageData::from_rgba(width, height, pixels))
    }
}

/// Rasterizes an SVG document into pixel data at its intrinsic size.
pub fn decode_svg_bytes(bytes: &[u8]) -> std::result::Result<ImageData, DecodeError> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| DecodeError::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(DecodeError::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| DecodeError::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(ImageData::from_rgba(width, height, pixmap.data().to_vec()))
}

/// Reads and decodes an image file from disk.
///
/// # Errors
///
/// Returns [`DecodeError::Io`] if the file cannot be read, or the decode
/// errors from [`decode_bytes`] otherwise.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    let bytes = fs::read(path).map_err(|e| DecodeError::Io(e.to_string()))?;
    Ok(decode_bytes(&bytes, extension)?)
}
