mod config;
mod downloader;
mod error;
mod exam_scraper;
mod file_naming;
mod listing_scraper;
mod record;
mod requests;
mod search_url;

mod text_manipulators;

pub use config::{ScrapingConfig, DEFAULT_BASE_URL, DEFAULT_DOWNLOAD_DIR, DEFAULT_SEARCH_URL};
pub use downloader::{DownloadOutcome, Downloader};
pub use error::ScrapeError;
pub use exam_scraper::{resolve_document_url, ExamArchiveScraper, PageOutcome};
pub use file_naming::{derive_file_name, source_extension};
pub use listing_scraper::{Listing, Records, MIN_CELLS};
pub use record::{DocumentRole, Record};
pub use requests::RequestClient;
pub use search_url::{SearchUrlTemplate, PAGE_PLACEHOLDER};
