use clap::Parser;
use page_capture::{ScrapeService, server};
use std::sync::Arc;

mod args;
use args::{Args, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let config = args.load_config()?;
    ::log::debug!("Effective configuration: {:?}", config);

    let service = ScrapeService::from_config(&config)?;

    match args.command {
        Command::Scrape { url } => {
            let outcome = service.scrape_and_save(&url).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Command::Files => {
            let files = service.scraped_files().await;
            ::log::info!(
                "Found {} scraped files in {}",
                files.len(),
                service.store().dir().display()
            );
            for file in files {
                println!("{}", file);
            }
        }
        Command::Show { name } => {
            let record = service.load_record(&name).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Serve { .. } => {
            server::serve(Arc::new(service), &config.listen_addr).await?;
        }
    }

    Ok(())
}
