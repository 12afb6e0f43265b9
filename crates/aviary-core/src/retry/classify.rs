//! Classify acquisition errors into retry policy error kinds.

use super::error::AcquireError;
use super::policy::ErrorKind;

/// Classify a curl error for retry decisions.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        ErrorKind::Timeout
    } else {
        ErrorKind::Connection
    }
}

/// Classify an acquisition error into an `ErrorKind`.
pub fn classify(e: &AcquireError) -> ErrorKind {
    match e {
        AcquireError::InvalidUrl(_) => ErrorKind::InvalidUrl,
        AcquireError::Http(code) => ErrorKind::HttpStatus(*code as u16),
        AcquireError::Network(ce) => classify_curl_error(ce),
        AcquireError::Decode(_) => ErrorKind::Decode,
        AcquireError::Storage(_) => ErrorKind::Storage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_is_fatal_kind() {
        let e = AcquireError::InvalidUrl("ftp://x".to_string());
        assert_eq!(classify(&e), ErrorKind::InvalidUrl);
    }

    #[test]
    fn http_status_carries_code() {
        assert_eq!(
            classify(&AcquireError::Http(503)),
            ErrorKind::HttpStatus(503)
        );
        assert_eq!(
            classify(&AcquireError::Http(404)),
            ErrorKind::HttpStatus(404)
        );
    }

    #[test]
    fn decode_failure_classified() {
        let e = image::load_from_memory(b"not an image").unwrap_err();
        assert_eq!(classify(&AcquireError::Decode(e)), ErrorKind::Decode);
    }

    #[test]
    fn storage_failure_classified() {
        let e = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(classify(&AcquireError::Storage(e)), ErrorKind::Storage);
    }
}
