//! Retry loop: run a closure until success or policy says stop.

use super::classify;
use super::error::AcquireError;
use super::policy::{RetryDecision, RetryPolicy};

/// Runs a closure until it succeeds or the retry policy says to stop.
/// On retryable failure, sleeps for the backoff duration then tries again.
/// Returns the last error once the attempt budget is exhausted.
pub fn run_with_retry<T, F>(policy: &RetryPolicy, mut f: F) -> Result<T, AcquireError>
where
    F: FnMut() -> Result<T, AcquireError>,
{
    let mut attempt = 1u32;
    loop {
        match f() {
            Ok(v) => return Ok(v),
            Err(e) => {
                let kind = classify::classify(&e);
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => return Err(e),
                    RetryDecision::RetryAfter(d) => {
                        tracing::debug!(attempt, error = %e, "attempt failed, backing off");
                        std::thread::sleep(d);
                        attempt += 1;
                    }
                }
            }
        }
    }
}
