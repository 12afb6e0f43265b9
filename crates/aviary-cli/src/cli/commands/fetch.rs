//! `aviary fetch <name> <url>` – acquire a single entity.

use anyhow::Result;
use aviary_core::acquire::{Acquirer, AcquisitionRequest};
use aviary_core::config::AviaryConfig;

pub fn run_fetch(name: &str, url: &str, cfg: &AviaryConfig) -> Result<()> {
    let acquirer = Acquirer::new(cfg);
    let req = AcquisitionRequest::from_config(name, url, cfg);
    match acquirer.acquire(&req) {
        Ok(path) => println!("Stored {}", path.display()),
        Err(e) => anyhow::bail!("acquisition failed for {name}: {e}"),
    }
    Ok(())
}
