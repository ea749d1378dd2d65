use reqwest::{Client, ClientBuilder, Response};

use crate::error::ScrapeError;

/// Thin wrapper over one shared HTTP client. Callers await each request
/// before issuing the next, so at most one is in flight.
#[derive(Debug, Clone)]
pub struct RequestClient {
    client: Client,
}

impl RequestClient {
    pub fn new(accept_invalid_certs: bool) -> anyhow::Result<Self> {
        let client = ClientBuilder::new()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;
        Ok(Self { client })
    }

    /// Sends a GET and hands back the response whatever its status.
    pub async fn fetch_url_response(&self, url: &str) -> Result<Response, ScrapeError> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|source| ScrapeError::Transport {
                url: url.to_string(),
                source,
            })
    }

    /// Fetches a listing page as text. Any non-2xx status is an error.
    pub async fn fetch_url_body(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.fetch_url_response(url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }
        response.text().await.map_err(|source| ScrapeError::Transport {
            url: url.to_string(),
            source,
        })
    }
}
