//! Per-entity acquisition: fetch, normalize, store under one retry budget.
//!
//! Fetch and normalize/write run inside the same retry loop: a decode or
//! write failure on attempt N consumes a retry just like a network failure.

use crate::config::AviaryConfig;
use crate::fetcher::{self, Fetcher};
use crate::layout;
use crate::normalize::Normalizer;
use crate::retry::{run_with_retry, AcquireError, RetryPolicy};
use crate::storage;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// One unit of work: fetch `source_url` and store it for `entity_name`.
/// Constructed per input record, consumed once.
#[derive(Debug, Clone)]
pub struct AcquisitionRequest {
    /// Non-empty name of the entity; determines the output path.
    pub entity_name: String,
    /// Candidate image URL from the record source.
    pub source_url: String,
    /// Output resolution, width x height. Both dimensions positive.
    pub target_size: (u32, u32),
    /// Attempt budget shared across fetch, decode, and write failures.
    pub max_retries: u32,
}

impl AcquisitionRequest {
    /// Builds a request with the configured target size and retry budget.
    pub fn from_config(
        entity_name: impl Into<String>,
        source_url: impl Into<String>,
        cfg: &AviaryConfig,
    ) -> Self {
        Self {
            entity_name: entity_name.into(),
            source_url: source_url.into(),
            target_size: cfg.target_size(),
            max_retries: cfg.retry_policy().max_attempts,
        }
    }
}

/// Composes the fetcher and normalizer for a configured output tree.
pub struct Acquirer {
    fetcher: Fetcher,
    base_dir: PathBuf,
    jpeg_quality: u8,
    backoff: Duration,
}

impl Acquirer {
    pub fn new(cfg: &AviaryConfig) -> Self {
        Self {
            fetcher: Fetcher::new(fetcher::default_headers(), cfg.timeout()),
            base_dir: cfg.output_dir.clone(),
            jpeg_quality: cfg.jpeg_quality,
            backoff: cfg.retry_policy().backoff,
        }
    }

    /// Acquires one entity and returns the stored path.
    ///
    /// The entity's subdirectory is created up front, before URL validation
    /// and before any network attempt, so a failed record still leaves its
    /// folder in place for inspection. Fetch, decode/resize/encode, and
    /// write then run inside a single retry loop until success or the
    /// budget is exhausted.
    pub fn acquire(&self, req: &AcquisitionRequest) -> Result<PathBuf, AcquireError> {
        let dir = layout::entity_dir(&self.base_dir, &req.entity_name);
        fs::create_dir_all(&dir)?;

        let dest = layout::output_path(&self.base_dir, &req.entity_name);
        let normalizer = Normalizer::new(req.target_size, self.jpeg_quality);
        let policy = RetryPolicy {
            max_attempts: req.max_retries,
            backoff: self.backoff,
        };

        run_with_retry(&policy, || {
            let raw = self.fetcher.fetch(&req.source_url)?;
            let jpeg = normalizer.normalize(&raw)?;
            storage::write_atomic(&dest, &jpeg)
        })?;

        tracing::debug!(entity = %req.entity_name, path = %dest.display(), "stored");
        Ok(dest)
    }
}
