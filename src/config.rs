use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};
use url::Url;

use crate::{error::ScrapeError, search_url::SearchUrlTemplate};

pub const DEFAULT_BASE_URL: &str = "https://exam.naer.edu.tw/";

// New Taipei City / elementary / grade 1.
pub const DEFAULT_SEARCH_URL: &str = "https://exam.naer.edu.tw/searchResult.php?page=1&orderBy=lastest&keyword=&selCountry=01&selCategory=41&selTech=0&chkClass%5B%5D=9&selYear=&selTerm=&selType=&selPublisher=";

pub const DEFAULT_DOWNLOAD_DIR: &str = "ExamPaper";

const ENV_PREFIX: &str = "NAER_";

/// The env vars needed for scraping, all prefixed with `NAER_`.
#[derive(Debug, Deserialize)]
pub struct ScrapingEnv {
    #[serde(default = "default_search_url")]
    search_url: String,
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_download_dir")]
    download_dir: PathBuf,
    #[serde(default)]
    accept_invalid_certs: bool,
}

fn default_search_url() -> String {
    DEFAULT_SEARCH_URL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_download_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DOWNLOAD_DIR)
}

#[derive(Debug, Clone)]
pub struct ScrapingConfig {
    pub base_url: Url,
    pub search_url: SearchUrlTemplate,
    pub download_dir: PathBuf,
    pub accept_invalid_certs: bool,
}

impl ScrapingConfig {
    pub fn new() -> anyhow::Result<Self> {
        let env = ScrapingEnv::load_from_env()?;
        let config = Self::from_parts(&env.base_url, &env.search_url, env.download_dir)?;
        Ok(Self {
            accept_invalid_certs: env.accept_invalid_certs,
            ..config
        })
    }

    pub fn from_parts(
        base_url: &str,
        search_url: &str,
        download_dir: impl Into<PathBuf>,
    ) -> Result<Self, ScrapeError> {
        let base_url = Url::parse(base_url).map_err(|source| ScrapeError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        let search_url = SearchUrlTemplate::new(search_url)?;
        Ok(Self {
            base_url,
            search_url,
            download_dir: download_dir.into(),
            accept_invalid_certs: false,
        })
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config = envy::prefixed(ENV_PREFIX)
            .from_env::<Self>()
            .context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}
