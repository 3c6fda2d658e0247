use serde::{Deserialize, Serialize};

/// Fallback strings substituted when a page lacks the corresponding element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholders {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub author: &'static str,
    pub image_alt: &'static str,
}

/// The single table of placeholder values used by the extractor
pub const PLACEHOLDERS: Placeholders = Placeholders {
    title: "No title found",
    description: "No description found",
    keywords: "No keywords found",
    author: "No author found",
    image_alt: "No alt text",
};

/// Structured snapshot of a single page
///
/// Serialized field names match the records written by earlier versions of
/// the service, so `source_url` and `captured_at` appear as `url` and
/// `timestamp` on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedDocument {
    /// URL the page was requested from, as given
    #[serde(rename = "url")]
    pub source_url: String,

    /// ISO-8601 time the extraction ran
    #[serde(rename = "timestamp")]
    pub captured_at: String,

    pub title: String,

    pub headings: Headings,

    pub paragraphs: Vec<String>,

    pub links: Vec<Link>,

    pub images: Vec<Image>,

    pub meta: Meta,
}

/// Heading texts grouped by level, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headings {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
}

impl Headings {
    /// Total number of headings across all levels
    pub fn len(&self) -> usize {
        self.h1.len() + self.h2.len() + self.h3.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An anchor with a resolved target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub text: String,
}

/// An image with a resolved source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

/// Values of the description, keywords and author meta tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub description: String,
    pub keywords: String,
    pub author: String,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            description: PLACEHOLDERS.description.to_string(),
            keywords: PLACEHOLDERS.keywords.to_string(),
            author: PLACEHOLDERS.author.to_string(),
        }
    }
}
