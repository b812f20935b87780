use super::types::{FetchOutcome, FetchReport};
use crate::error::StormPrepError;
use crate::manifest::Manifest;
use std::path::Path;
use tracing::{error, info};

/// Fetches every manifest entry in order, one at a time.
///
/// The output directory is created first; failure to create it is fatal.
/// Everything after that is per-entry: an entry whose target file already
/// exists is skipped without issuing a request, and a failed request or write
/// is logged and does not stop the loop.
pub async fn fetch_all(
    manifest: &Manifest,
    base_url: &str,
    output_dir: &Path,
) -> Result<FetchReport, StormPrepError> {
    std::fs::create_dir_all(output_dir).map_err(|e| {
        StormPrepError::OutputDirectoryCreation {
            path: output_dir.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    let client = reqwest::Client::new();
    let mut report = FetchReport {
        manifest_len: manifest.len(),
        ..FetchReport::default()
    };

    for filename in manifest.entries() {
        info!("Downloading file: {}", filename);
        let outcome = fetch_one(&client, base_url, filename, output_dir).await;
        if let FetchOutcome::Failed { url, reason } = &outcome {
            error!("Failed to download {}: {}", url, reason);
        }
        report.record(&outcome);
    }

    Ok(report)
}

async fn fetch_one(
    client: &reqwest::Client,
    base_url: &str,
    filename: &str,
    output_dir: &Path,
) -> FetchOutcome {
    let output_path = output_dir.join(filename);
    if output_path.is_file() {
        info!("File {} already exists!", output_path.display());
        return FetchOutcome::AlreadyPresent;
    }

    // Plain concatenation: an empty filename resolves to the bare base URL.
    let url = format!("{base_url}{filename}");

    let body = match fetch_bytes(client, &url).await {
        Ok(body) => body,
        Err(e) => {
            return FetchOutcome::Failed {
                url,
                reason: e.to_string(),
            };
        }
    };

    match tokio::fs::write(&output_path, &body).await {
        Ok(()) => FetchOutcome::Downloaded,
        Err(e) => FetchOutcome::Failed {
            url,
            reason: format!("failed to write {}: {}", output_path.display(), e),
        },
    }
}

async fn fetch_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, StormPrepError> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}
