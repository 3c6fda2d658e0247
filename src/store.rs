use crate::document::ScrapedDocument;
use crate::error::ScrapeError;
use chrono::Utc;
use regex::Regex;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Suffixed names tried when a record for the same millisecond already exists
const MAX_NAME_ATTEMPTS: u32 = 100;

/// Flat-file storage of scraped documents, one pretty-printed JSON file each
#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
    prefix: String,
    record_name: Regex,
}

impl RecordStore {
    pub fn new(dir: impl Into<PathBuf>, prefix: &str) -> Result<Self, ScrapeError> {
        let record_name = Regex::new(&format!(r"^{}.*\.json$", regex::escape(prefix)))?;
        Ok(Self {
            dir: dir.into(),
            prefix: prefix.to_string(),
            record_name,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether `name` looks like a record written by this store
    pub fn is_record_name(&self, name: &str) -> bool {
        self.record_name.is_match(name)
    }

    /// Writes `document` as `<prefix><epoch millis>.json` and returns the path
    ///
    /// Never replaces an existing record: a name already taken in the same
    /// millisecond gets a `-<n>` suffix instead.
    pub async fn save(&self, document: &ScrapedDocument) -> Result<PathBuf, ScrapeError> {
        self.save_with_stamp(document, Utc::now().timestamp_millis()).await
    }

    async fn save_with_stamp(
        &self,
        document: &ScrapedDocument,
        millis: i64,
    ) -> Result<PathBuf, ScrapeError> {
        let json = serde_json::to_string_pretty(document)?;

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let file_name = if attempt == 0 {
                format!("{}{}.json", self.prefix, millis)
            } else {
                format!("{}{}-{}.json", self.prefix, millis, attempt)
            };
            let path = self.dir.join(file_name);

            let mut file = match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    ::log::trace!("Record {} already exists", path.display());
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            file.write_all(json.as_bytes()).await?;
            file.flush().await?;

            ::log::debug!("Wrote record {}", path.display());
            return Ok(path);
        }

        Err(ScrapeError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!(
                "no free record name for {}{} after {} attempts",
                self.prefix, millis, MAX_NAME_ATTEMPTS
            ),
        )))
    }

    /// Names of all records in the directory, sorted
    ///
    /// A directory that cannot be read is logged and reported as empty.
    pub async fn list(&self) -> Vec<String> {
        match self.read_record_names().await {
            Ok(names) => names,
            Err(e) => {
                ::log::error!("Error reading scraped files: {}", e);
                Vec::new()
            }
        }
    }

    async fn read_record_names(&self) -> Result<Vec<String>, std::io::Error> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            if let Some(name) = entry.file_name().to_str() {
                if self.is_record_name(name) {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    /// Reads a record back by file name
    pub async fn load(&self, name: &str) -> Result<ScrapedDocument, ScrapeError> {
        if !self.is_record_name(name) || name.contains(['/', '\\']) {
            return Err(ScrapeError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a record name", name),
            )));
        }

        let contents = tokio::fs::read_to_string(self.dir.join(name)).await?;
        Ok(serde_json::from_str(&contents)?)
    }
}
