//! URL validation and escaping.
//!
//! Candidate URLs come from scraped tabular data and may be blank, carry a
//! non-http scheme, or contain spaces and unicode. They are validated before
//! any network attempt and percent-escaped without double-escaping
//! components that are already encoded.

mod escape;

pub use escape::escape_url;

use crate::retry::AcquireError;

/// Checks that `url` is non-empty and begins with the recognized scheme
/// prefix. Touches no network; a failure here is fatal for the record.
pub fn validate(url: &str) -> Result<(), AcquireError> {
    if url.is_empty() || !url.starts_with("http") {
        return Err(AcquireError::InvalidUrl(url.to_string()));
    }
    Ok(())
}

/// Validates then escapes, the order every fetch goes through.
pub fn validate_and_escape(url: &str) -> Result<String, AcquireError> {
    validate(url)?;
    Ok(escape_url(url))
}
