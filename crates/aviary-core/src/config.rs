use crate::retry::RetryPolicy;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Retry budget parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per record (including the first).
    pub max_attempts: u32,
    /// Fixed sleep between attempts, in seconds.
    pub backoff_secs: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_secs: 1.0,
        }
    }
}

/// Pipeline configuration loaded from `~/.config/aviary/config.toml`.
///
/// The defaults are the pipeline's fixed constants; the batch is meant to
/// run configuration-free. The structure exists so tests and one-off runs
/// can inject shorter timeouts and backoffs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AviaryConfig {
    /// Base directory for normalized images.
    pub output_dir: PathBuf,
    /// Output width in pixels. Positive.
    pub target_width: u32,
    /// Output height in pixels. Positive.
    pub target_height: u32,
    /// JPEG quality, 1-100.
    pub jpeg_quality: u8,
    /// Per-attempt HTTP timeout in seconds.
    pub timeout_secs: u64,
    /// Delay after every record (success or failure), in seconds.
    pub pace_secs: f64,
    /// Optional retry budget; built-in defaults are used when missing.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for AviaryConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("Images"),
            target_width: 256,
            target_height: 256,
            jpeg_quality: 90,
            timeout_secs: 15,
            pace_secs: 0.3,
            retry: None,
        }
    }
}

impl AviaryConfig {
    /// Output resolution as (width, height).
    pub fn target_size(&self) -> (u32, u32) {
        (self.target_width, self.target_height)
    }

    /// Per-attempt HTTP timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Inter-record pacing delay.
    pub fn pace(&self) -> Duration {
        Duration::from_secs_f64(self.pace_secs)
    }

    /// Effective retry policy: the `[retry]` section when present, built-in
    /// defaults otherwise.
    pub fn retry_policy(&self) -> RetryPolicy {
        let retry = self.retry.clone().unwrap_or_default();
        RetryPolicy {
            max_attempts: retry.max_attempts,
            backoff: Duration::from_secs_f64(retry.backoff_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("aviary")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AviaryConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AviaryConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: AviaryConfig = toml::from_str(&data)?;
    Ok(cfg)
}
