use std::time::Duration;

/// High-level classification of an error for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// URL never passed validation; retrying cannot help.
    InvalidUrl,
    /// Operation timed out (connect/read).
    Timeout,
    /// Network-level failure (connection reset, DNS, etc.).
    Connection,
    /// Non-200 HTTP status.
    HttpStatus(u16),
    /// Response body was not a decodable image.
    Decode,
    /// Filesystem write failed.
    Storage,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Fixed-backoff retry policy: every retryable failure waits the same delay.
///
/// One attempt budget is shared across network, HTTP, decode, and write
/// failures; `InvalidUrl` is the only kind that is never retried.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Sleep between attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Compute the decision for a given attempt and error kind.
    ///
    /// `attempt` is 1-based (1 = first attempt). Returns
    /// `RetryDecision::NoRetry` when we should stop retrying.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if kind == ErrorKind::InvalidUrl || attempt >= self.max_attempts {
            return RetryDecision::NoRetry;
        }
        RetryDecision::RetryAfter(self.backoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_never_retried() {
        let p = RetryPolicy::default();
        assert_eq!(p.decide(1, ErrorKind::InvalidUrl), RetryDecision::NoRetry);
    }

    #[test]
    fn backoff_is_fixed_across_attempts() {
        let p = RetryPolicy::default();
        let d1 = p.decide(1, ErrorKind::Connection);
        let d2 = p.decide(2, ErrorKind::HttpStatus(500));
        assert_eq!(d1, RetryDecision::RetryAfter(p.backoff));
        assert_eq!(d2, RetryDecision::RetryAfter(p.backoff));
    }

    #[test]
    fn respects_max_attempts() {
        let p = RetryPolicy {
            max_attempts: 3,
            backoff: Duration::from_millis(10),
        };
        assert!(matches!(
            p.decide(2, ErrorKind::Decode),
            RetryDecision::RetryAfter(_)
        ));
        assert_eq!(p.decide(3, ErrorKind::Decode), RetryDecision::NoRetry);
    }

    #[test]
    fn client_errors_are_retryable_too() {
        // The whole non-200 range shares the budget, 404 included.
        let p = RetryPolicy::default();
        assert!(matches!(
            p.decide(1, ErrorKind::HttpStatus(404)),
            RetryDecision::RetryAfter(_)
        ));
    }
}
