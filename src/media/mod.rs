// SPDX-License-Identifier: MPL-2.0
//! Media sources for the candidate page slots.
//!
//! A slot displays either its built-in default artwork or an operator-chosen
//! upload. Uploads carry both the decoded pixels (for display) and a data URI
//! of the original file bytes, which is the value the committed page submits.

pub mod image;

use crate::error::{DecodeError, Error, Result};
use base64::Engine;
use std::fs;
use std::path::Path;

pub use image::{decode_bytes, decode_svg_bytes, load_image, ImageData};

static DEFAULT_PROFILE_SVG: &[u8] = include_bytes!("../../assets/images/default-profile.svg");
static DEFAULT_POSTER_SVG: &[u8] = include_bytes!("../../assets/images/default-poster.svg");

/// Identifies one of the two independently managed picture slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    Profile,
    Poster,
}

impl SlotId {
    /// Both slots, in page order.
    pub const ALL: [SlotId; 2] = [SlotId::Profile, SlotId::Poster];

    /// i18n key for the slot's card label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SlotId::Profile => "slot-profile-label",
            SlotId::Poster => "slot-poster-label",
        }
    }

    /// i18n key for the slot's preview popup title.
    #[must_use]
    pub fn popup_title_key(self) -> &'static str {
        match self {
            SlotId::Profile => "slot-profile-popup-title",
            SlotId::Poster => "slot-poster-popup-title",
        }
    }
}

/// An operator-chosen image, decoded for display.
///
/// `data_uri` holds the original file bytes as `data:<mime>;base64,...`,
/// which is what a page submit would carry; `image` is the decoded preview.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub data_uri: String,
    pub image: ImageData,
}

impl PartialEq for UploadedImage {
    fn eq(&self, other: &Self) -> bool {
        // Decoded pixels are derived from the encoded bytes, so the URI
        // identifies the upload.
        self.data_uri == other.data_uri
    }
}

/// What a slot can display: its default artwork or an upload.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaSource {
    Default,
    Upload(UploadedImage),
}

impl MediaSource {
    #[must_use]
    pub fn is_default(&self) -> bool {
        matches!(self, MediaSource::Default)
    }

    /// Returns the upload's data URI, or `None` for the default artwork.
    #[must_use]
    pub fn data_uri(&self) -> Option<&str> {
        match self {
            MediaSource::Default => None,
            MediaSource::Upload(upload) => Some(&upload.data_uri),
        }
    }
}

/// Supported image extensions, used as the file dialog filter.
pub mod extensions {
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
    ];
}

/// Maps a file extension to the MIME type embedded in data URIs.
///
/// Unknown extensions fall back to `application/octet-stream`; the browser
/// equivalent would report whatever the OS claims, and nothing downstream
/// dispatches on the MIME value.
#[must_use]
pub fn mime_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tiff" | "tif" => "image/tiff",
        "ico" => "image/x-icon",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Encodes raw file bytes as a `data:` URI.
#[must_use]
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Reads and decodes an operator-chosen file into an [`UploadedImage`].
///
/// # Errors
///
/// Returns [`DecodeError::Io`] if the file cannot be read, or the decode
/// errors from [`decode_bytes`] if the contents are not a displayable image.
pub fn load_upload<P: AsRef<Path>>(path: P) -> std::result::Result<UploadedImage, DecodeError> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    let bytes = fs::read(path).map_err(|e| DecodeError::Io(e.to_string()))?;
    upload_from_bytes(&bytes, extension)
}

/// Builds an [`UploadedImage`] from in-memory file bytes.
pub fn upload_from_bytes(
    bytes: &[u8],
    extension: &str,
) -> std::result::Result<UploadedImage, DecodeError> {
    let image = decode_bytes(bytes, extension)?;
    let data_uri = encode_data_uri(mime_for_extension(extension), bytes);
    Ok(UploadedImage { data_uri, image })
}

/// Decoded default artwork for both slots, rasterized once at startup.
#[derive(Debug, Clone)]
pub struct DefaultAssets {
    pub profile: ImageData,
    pub poster: ImageData,
}

impl DefaultAssets {
    /// Decodes the embedded default artwork.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Asset`] if an embedded SVG fails to rasterize. This
    /// aborts startup: a slot without a default has nothing to display.
    pub fn load() -> Result<Self> {
        let profile = decode_svg_bytes(DEFAULT_PROFILE_SVG)
            .map_err(|e| Error::Asset(format!("default-profile.svg: {}", e)))?;
        let poster = decode_svg_bytes(DEFAULT_POSTER_SVG)
            .map_err(|e| Error::Asset(format!("default-poster.svg: {}", e)))?;
        Ok(Self { profile, poster })
    }

    /// Returns the default artwork for a slot.
    #[must_use]
    pub fn for_slot(&self, slot: SlotId) -> &ImageData {
        match slot {
            SlotId::Profile => &self.profile,
            SlotId::Poster => &self.poster,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn mime_for_common_extensions() {
        assert_eq!(mime_for_extension("jpg"), "image/jpeg");
        assert_eq!(mime_for_extension("JPEG"), "image/jpeg");
        assert_eq!(mime_for_extension("png"), "image/png");
        assert_eq!(mime_for_extension("svg"), "image/svg+xml");
        assert_eq!(mime_for_extension("xyz"), "application/octet-stream");
    }

    #[test]
    fn data_uri_has_expected_prefix_and_payload() {
        let uri = encode_data_uri("image/png", b"abc");
        assert!(uri.starts_with("data:image/png;base64,"));
        // "abc" encodes to "YWJj"
        assert!(uri.ends_with("YWJj"));
    }

    #[test]
    fn upload_from_bytes_decodes_and_encodes() {
        let bytes = png_bytes(3, 2);
        let upload = upload_from_bytes(&bytes, "png").expect("png should decode");

        assert_eq!(upload.image.width, 3);
        assert_eq!(upload.image.height, 2);
        assert_eq!(
            upload.data_uri,
            encode_data_uri("image/png", &bytes),
            "data URI must encode the original file bytes"
        );
    }

    #[test]
    fn upload_from_invalid_bytes_errors() {
        assert!(upload_from_bytes(b"garbage", "png").is_err());
    }

    #[test]
    fn load_upload_from_disk() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        let path = temp_dir.path().join("photo.png");
        std::fs::write(&path, png_bytes(4, 4)).expect("write png");

        let upload = load_upload(&path).expect("file should load");
        assert_eq!(upload.image.width, 4);
        assert!(upload.data_uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn load_upload_missing_file_is_io_error() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        let missing = temp_dir.path().join("nope.png");
        assert!(matches!(load_upload(&missing), Err(DecodeError::Io(_))));
    }

    #[test]
    fn media_source_equality_is_by_data_uri() {
        let bytes = png_bytes(2, 2);
        let a = MediaSource::Upload(upload_from_bytes(&bytes, "png").unwrap());
        let b = MediaSource::Upload(upload_from_bytes(&bytes, "png").unwrap());
        let other = MediaSource::Upload(upload_from_bytes(&png_bytes(5, 5), "png").unwrap());

        assert_eq!(a, b);
        assert_ne!(a, other);
        assert_eq!(MediaSource::Default, MediaSource::Default);
        assert_ne!(a, MediaSource::Default);
    }

    #[test]
    fn default_assets_decode_successfully() {
        let assets = DefaultAssets::load().expect("embedded defaults must decode");
        assert!(assets.profile.width > 0);
        assert!(assets.profile.height > 0);
        assert!(assets.poster.width > 0);
        assert!(assets.poster.height > 0);
    }

    #[test]
    fn default_assets_are_addressable_by_slot() {
        let assets = DefaultAssets::load().expect("embedded defaults must decode");
        assert_eq!(
            assets.for_slot(SlotId::Profile).width,
            assets.profile.width
        );
        assert_eq!(assets.for_slot(SlotId::Poster).width, assets.poster.width);
    }

    #[test]
    fn slot_ids_have_distinct_label_keys() {
        assert_ne!(
            SlotId::Profile.label_key(),
            SlotId::Poster.label_key()
        );
        assert_ne!(
            SlotId::Profile.popup_title_key(),
            SlotId::Poster.popup_title_key()
        );
    }
}
