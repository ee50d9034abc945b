// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the darkroom

use thiserror::Error;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Filter processing errors
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),
    /// Loading or saving photos
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

/// Errors raised while developing a photo
#[derive(Debug, Error)]
pub enum FilterError {
    /// A bundled overlay image is not part of the build
    #[error("bundled asset `{0}` is missing")]
    MissingAsset(String),
    /// A bundled overlay image could not be decoded
    #[error("failed to decode bundled asset `{name}`: {source}")]
    AssetDecode {
        name: String,
        #[source]
        source: image::ImageError,
    },
    /// The input photo has no pixels
    #[error("photo is empty ({width}x{height})")]
    EmptyPhoto { width: u32, height: u32 },
}

/// Errors raised while reading or writing photo files
#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("image codec failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("no pictures directory available")]
    NoPicturesDirectory,
}

/// Errors decoding persisted configuration values
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Persisted appearance value outside 0..=2
    #[error("appearance value {0} is out of range")]
    InvalidTheme(u8),
}

/// A filter identifier that is not part of the catalog
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown filter `{0}`")]
pub struct UnknownFilter(pub String);

/// An effect identifier that is not part of the effect list
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown effect `{0}`")]
pub struct UnknownEffect(pub String);
