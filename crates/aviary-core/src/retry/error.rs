//! Acquisition error type for retry classification.

use thiserror::Error;

/// Error from a single acquisition stage (fetch, decode, or store).
/// Variants are kept distinct so the retry layer can classify and decide
/// before the caller converts to anyhow.
#[derive(Debug, Error)]
pub enum AcquireError {
    /// URL is empty or does not begin with the recognized scheme prefix.
    #[error("invalid URL: {0:?}")]
    InvalidUrl(String),
    /// HTTP response had a non-200 status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Curl reported an error (timeout, connection, etc.).
    #[error("network: {0}")]
    Network(#[from] curl::Error),
    /// Response body is not a decodable raster image.
    #[error("decode: {0}")]
    Decode(#[from] image::ImageError),
    /// Filesystem failure while writing the normalized image.
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
}
