use clap::{Parser, Subcommand};
use page_capture::ScraperConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-capture")]
#[command(about = "Scrapes a single web page into a timestamped JSON record")]
#[command(version)]
pub struct Args {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory records are written to and listed from
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(short, long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch a page, extract it and save the record
    Scrape {
        /// Page to scrape
        url: String,
    },

    /// List saved records
    Files,

    /// Print a saved record
    Show {
        /// Record file name, as printed by `files`
        name: String,
    },

    /// Run the HTTP service
    Serve {
        /// Address to listen on
        #[arg(short, long)]
        listen: Option<String>,
    },
}

impl Args {
    /// Resolve the effective configuration: file, then environment, then flags
    pub fn load_config(&self) -> Result<ScraperConfig, page_capture::ScrapeError> {
        let config = match &self.config {
            Some(path) => ScraperConfig::from_file(path)?,
            None => ScraperConfig::default(),
        };
        let mut config = config.with_env_overrides();

        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Command::Serve {
            listen: Some(listen),
        } = &self.command
        {
            config.listen_addr = listen.clone();
        }

        Ok(config)
    }
}
