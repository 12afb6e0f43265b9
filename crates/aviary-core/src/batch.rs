//! Sequential batch driver and failure ledger.
//!
//! Records are processed strictly in input order on the calling thread. One
//! entity's failure never aborts the run, and a fixed pacing delay follows
//! every record, success or failure, to throttle the aggregate request
//! rate.

use crate::acquire::{Acquirer, AcquisitionRequest};
use crate::config::AviaryConfig;
use crate::source::SpeciesRecord;

/// One failed acquisition: the entity and the URL that was tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    pub entity_name: String,
    pub source_url: String,
}

/// Append-only list of entities that exhausted their retries.
#[derive(Debug, Default)]
pub struct Ledger {
    failures: Vec<FailureRecord>,
}

impl Ledger {
    pub fn record(&mut self, entity_name: &str, source_url: &str) {
        self.failures.push(FailureRecord {
            entity_name: entity_name.to_string(),
            source_url: source_url.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn failures(&self) -> &[FailureRecord] {
        &self.failures
    }
}

/// Runs the whole batch and returns the ledger of failed entities.
pub fn run_batch(acquirer: &Acquirer, records: &[SpeciesRecord], cfg: &AviaryConfig) -> Ledger {
    let pace = cfg.pace();
    let mut ledger = Ledger::default();

    for record in records {
        let req = AcquisitionRequest::from_config(
            record.scientific_name.as_str(),
            record.image_url.as_str(),
            cfg,
        );
        match acquirer.acquire(&req) {
            Ok(path) => {
                tracing::info!(entity = %req.entity_name, path = %path.display(), "acquired");
            }
            Err(e) => {
                tracing::warn!(entity = %req.entity_name, error = %e, "acquisition failed");
                ledger.record(&req.entity_name, &req.source_url);
            }
        }
        std::thread::sleep(pace);
    }

    ledger
}
