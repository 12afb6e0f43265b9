//! `aviary run <input.csv>` – fetch and normalize a whole batch.

use anyhow::Result;
use aviary_core::acquire::Acquirer;
use aviary_core::batch;
use aviary_core::config::AviaryConfig;
use aviary_core::source;
use std::path::Path;

pub fn run_batch(input: &Path, cfg: &AviaryConfig) -> Result<()> {
    let records = source::read_records(input)?;
    if records.is_empty() {
        println!("No records in {}.", input.display());
        return Ok(());
    }

    let acquirer = Acquirer::new(cfg);
    let ledger = batch::run_batch(&acquirer, &records, cfg);

    println!(
        "{} of {} records stored under {}.",
        records.len() - ledger.len(),
        records.len(),
        cfg.output_dir.display()
    );
    if !ledger.is_empty() {
        println!("{:<32} URL", "FAILED");
        for f in ledger.failures() {
            println!("{:<32} {}", f.entity_name, f.source_url);
        }
    }
    Ok(())
}
