use log::{debug, info, warn};
use url::Url;

use crate::{
    config::ScrapingConfig,
    downloader::Downloader,
    error::ScrapeError,
    file_naming::derive_file_name,
    listing_scraper::Listing,
    record::{DocumentRole, Record},
    requests::RequestClient,
};

/// What one listing page produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page parsed but held no result rows.
    Empty,
    Scraped,
}

/// Walks every page of one search query and mirrors the linked documents.
pub struct ExamArchiveScraper {
    config: ScrapingConfig,
    request_client: RequestClient,
    downloader: Downloader,
}

impl ExamArchiveScraper {
    pub fn new(config: ScrapingConfig) -> anyhow::Result<Self> {
        let request_client = RequestClient::new(config.accept_invalid_certs)?;
        let downloader = Downloader::new(request_client.clone(), config.download_dir.clone())?;
        Ok(Self {
            config,
            request_client,
            downloader,
        })
    }

    /// Reads the page count off page 1, then scrapes pages 1 through that
    /// count in order. Page 1 is not fetched twice.
    ///
    /// A listing page that can't be fetched ends the run.
    pub async fn run(&self) -> Result<(), ScrapeError> {
        let first_url = self.config.search_url.url_for_page(1);
        info!("Scraping page 1: {first_url}");
        let first_body = self.request_client.fetch_url_body(&first_url).await?;
        let total_pages = Listing::parse(&first_body).total_pages();
        info!("Total pages: {total_pages}");

        self.scrape_listing(1, &first_body).await?;
        for page in 2..=total_pages {
            self.scrape_page(page).await?;
        }
        Ok(())
    }

    /// Fetches and scrapes a single listing page.
    pub async fn scrape_page(&self, page: u32) -> Result<PageOutcome, ScrapeError> {
        let url = self.config.search_url.url_for_page(page);
        info!("Scraping page {page}: {url}");
        let body = self.request_client.fetch_url_body(&url).await?;
        self.scrape_listing(page, &body).await
    }

    async fn scrape_listing(
        &self,
        page: u32,
        body: &str,
    ) -> Result<PageOutcome, ScrapeError> {
        // Collected up front so the parsed document isn't held across awaits.
        let records: Vec<Record> = Listing::parse(body).records().collect();
        if records.is_empty() {
            warn!("Page {page} has no results");
            return Ok(PageOutcome::Empty);
        }

        for record in &records {
            for role in DocumentRole::ALL {
                let Some(url) = record
                    .link(role)
                    .and_then(|href| resolve_document_url(&self.config.base_url, href))
                else {
                    continue;
                };
                let file_name = derive_file_name(record, role, &url);
                self.downloader.download(url.as_str(), &file_name).await?;
            }
        }
        Ok(PageOutcome::Scraped)
    }
}

/// Absolute URL for a document link, or `None` if the link isn't something
/// that can be downloaded (empty, `mailto:`, or not http(s)).
pub fn resolve_document_url(base_url: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    if href
        .get(..7)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("mailto:"))
    {
        debug!("Skipping mail link {href}");
        return None;
    }
    match base_url.join(href) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
        Ok(url) => {
            debug!("Skipping non-http link {url}");
            None
        }
        Err(e) => {
            debug!("Skipping unresolvable link {href:?}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://exam.naer.edu.tw/").unwrap()
    }

    #[test]
    fn relative_links_resolve_against_base() {
        let url = resolve_document_url(&base(), "/upload/113/exam.pdf").unwrap();
        assert_eq!(url.as_str(), "https://exam.naer.edu.tw/upload/113/exam.pdf");

        let url = resolve_document_url(&base(), "upload/answer.doc").unwrap();
        assert_eq!(url.as_str(), "https://exam.naer.edu.tw/upload/answer.doc");
    }

    #[test]
    fn absolute_links_are_kept() {
        let url = resolve_document_url(&base(), "http://files.example.org/a.pdf").unwrap();
        assert_eq!(url.as_str(), "http://files.example.org/a.pdf");
    }

    #[test]
    fn mail_links_are_skipped() {
        assert_eq!(resolve_document_url(&base(), "mailto:x@y.com"), None);
        assert_eq!(resolve_document_url(&base(), "MAILTO:x@y.com"), None);
    }

    #[test]
    fn other_schemes_and_empty_links_are_skipped() {
        assert_eq!(resolve_document_url(&base(), "javascript:void(0)"), None);
        assert_eq!(resolve_document_url(&base(), "ftp://example.org/a.pdf"), None);
        assert_eq!(resolve_document_url(&base(), "   "), None);
    }
}
