use naer_exam_scraper::{ExamArchiveScraper, ScrapingConfig};

extern crate env_logger;
extern crate log;

use log::{info, LevelFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    // Also pulls in .env if present.
    let config = ScrapingConfig::new()?;
    info!(
        "Mirroring {} into {}",
        config.search_url,
        config.download_dir.display()
    );

    let scraper = ExamArchiveScraper::new(config)?;
    scraper.run().await?;
    Ok(())
}
