use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

const MAX_RETRIES: u32 = 3;
const BASE_BACKOFF_MS: u64 = 2000;

/// Fetch the raw report document over HTTP.
///
/// 429 and 5xx responses are retried with doubling backoff; any other
/// non-success status fails immediately. The parser never sees this layer —
/// it only receives the final string.
pub async fn fetch_document(url: &str) -> Result<String> {
    let client = reqwest::Client::new();

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Fetching {}", url));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = fetch_with_retry(&client, url).await;
    pb.finish_and_clear();

    let text = result?;
    info!("Fetched {} bytes from {}", text.len(), url);
    Ok(text)
}

async fn fetch_with_retry(client: &reqwest::Client, url: &str) -> Result<String> {
    let mut attempt = 0;
    loop {
        let response = client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch report document from {}", url))?;

        let status = response.status();
        if status.is_success() {
            return response
                .text()
                .await
                .context("Failed to read report document body");
        }

        let retryable = status.as_u16() == 429 || status.is_server_error();
        if !retryable || attempt == MAX_RETRIES {
            bail!("Report document fetch failed with HTTP {}", status);
        }

        let backoff = Duration::from_millis(BASE_BACKOFF_MS * 2u64.pow(attempt));
        warn!(
            "HTTP {} from {} (attempt {}/{}), backing off {:.1}s",
            status,
            url,
            attempt + 1,
            MAX_RETRIES,
            backoff.as_secs_f64()
        );
        tokio::time::sleep(backoff).await;
        attempt += 1;
    }
}

/// Read the report document from a local file.
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read report document {}", path.display()))
}
