use std::path::PathBuf;

use log::{info, warn};
use reqwest::StatusCode;

use crate::{error::ScrapeError, requests::RequestClient};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    /// Nothing written. `status` is `None` when the request never got a reply.
    Failed { status: Option<StatusCode> },
}

/// Saves documents into one flat directory, overwriting same-named files.
pub struct Downloader {
    request_client: RequestClient,
    download_dir: PathBuf,
}

impl Downloader {
    /// Creates `download_dir` (and parents) if it doesn't exist yet.
    pub fn new(
        request_client: RequestClient,
        download_dir: impl Into<PathBuf>,
    ) -> Result<Self, ScrapeError> {
        let download_dir = download_dir.into();
        std::fs::create_dir_all(&download_dir).map_err(|source| ScrapeError::Io {
            path: download_dir.clone(),
            source,
        })?;
        Ok(Self {
            request_client,
            download_dir,
        })
    }

    /// Fetches `url` into `{download_dir}/{file_name}`.
    ///
    /// Anything other than a 200 is logged and skipped. Only a failure to
    /// write the file is returned as an error.
    pub async fn download(
        &self,
        url: &str,
        file_name: &str,
    ) -> Result<DownloadOutcome, ScrapeError> {
        let response = match self.request_client.fetch_url_response(url).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to download {file_name}: {e}");
                return Ok(DownloadOutcome::Failed { status: None });
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Failed to download {file_name}: HTTP {status} from {url}");
            return Ok(DownloadOutcome::Failed {
                status: Some(status),
            });
        }

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to download {file_name}: {e}");
                return Ok(DownloadOutcome::Failed {
                    status: Some(status),
                });
            }
        };

        let path = self.download_dir.join(file_name);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|source| ScrapeError::Io {
                path: path.clone(),
                source,
            })?;
        info!("Downloaded: {file_name}");
        Ok(DownloadOutcome::Saved(path))
    }
}
