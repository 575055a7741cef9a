// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// An embedded default asset is missing or unusable. Fatal at startup.
    Asset(String),
    Decode(DecodeError),
    /// The GUI event loop failed to start or crashed.
    Runtime(String),
}

/// Specific error types for image decode failures.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum DecodeError {
    /// File format is not supported (unknown or disabled codec)
    UnsupportedFormat,

    /// File exists but its pixel data cannot be decoded
    CorruptedImage(String),

    /// SVG parsing or rasterization failed
    Svg(String),

    /// I/O error while reading the file (not found, permission denied, etc.)
    Io(String),
}

impl DecodeError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DecodeError::UnsupportedFormat => "notification-decode-unsupported-format",
            DecodeError::CorruptedImage(_) => "notification-decode-corrupted",
            DecodeError::Svg(_) => "notification-decode-svg",
            DecodeError::Io(_) => "notification-decode-io",
        }
    }

    /// Categorizes a raster decode failure reported by the `image` crate.
    pub fn from_image_error(err: &image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::Unsupported(_) => DecodeError::UnsupportedFormat,
            image_rs::ImageError::IoError(e) => DecodeError::Io(e.to_string()),
            other => DecodeError::CorruptedImage(other.to_string()),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnsupportedFormat => write!(f, "Unsupported image format"),
            DecodeError::CorruptedImage(msg) => write!(f, "Image data is corrupted: {}", msg),
            DecodeError::Svg(msg) => write!(f, "SVG error: {}", msg),
            DecodeError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Asset(e) => write!(f, "Asset Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Runtime(e) => write!(f, "Runtime Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(DecodeError::from_image_error(&err))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<ciborium::ser::Error<std::io::Error>> for Error {
    fn from(err: ciborium::ser::Error<std::io::Error>) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Runtime(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
