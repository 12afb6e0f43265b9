//! Blocking HTTP GET for candidate image URLs.
//!
//! Uses the curl crate (libcurl) with a fixed browser-impersonating header
//! set; the content servers behind the source data are known to refuse
//! default-agent clients.

use crate::retry::AcquireError;
use crate::url_model;
use std::collections::HashMap;
use std::time::Duration;

/// Fixed request headers sent with every GET.
pub fn default_headers() -> HashMap<String, String> {
    HashMap::from([
        (
            "User-Agent".to_string(),
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
             AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/118.0 Safari/537.36"
                .to_string(),
        ),
        (
            "Accept".to_string(),
            "image/avif,image/webp,image/apng,image/*,*/*;q=0.8".to_string(),
        ),
        (
            "Referer".to_string(),
            "https://en.wikipedia.org/".to_string(),
        ),
    ])
}

/// Performs validated, escaped GETs and buffers the body in memory.
#[derive(Debug, Clone)]
pub struct Fetcher {
    headers: HashMap<String, String>,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(headers: HashMap<String, String>, timeout: Duration) -> Self {
        Self { headers, timeout }
    }

    /// Fetches `url` and returns the raw response body.
    ///
    /// Empty or non-http URLs fail with `InvalidUrl` before any network
    /// attempt. A non-200 status discards whatever body arrived and fails
    /// the attempt with `Http(code)`.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>, AcquireError> {
        let safe_url = url_model::validate_and_escape(url)?;
        let host = url::Url::parse(&safe_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default();
        tracing::debug!(%host, url = %safe_url, "GET");

        let mut easy = curl::easy::Easy::new();
        easy.url(&safe_url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.timeout(self.timeout)?;

        let mut list = curl::easy::List::new();
        for (k, v) in &self.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        if !self.headers.is_empty() {
            easy.http_headers(list)?;
        }

        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if code != 200 {
            return Err(AcquireError::Http(code));
        }
        Ok(body)
    }
}
