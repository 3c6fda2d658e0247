pub mod dom;
pub mod resolve;

#[cfg(test)]
mod tests;

use crate::document::{Headings, Image, Link, Meta, PLACEHOLDERS, ScrapedDocument};
use chrono::{DateTime, SecondsFormat, Utc};
use dom::{Document, Element, ElementQuery};
use resolve::Resolver;

/// Positional caps and length threshold applied during extraction
///
/// Caps count scanned elements, not survivors of the content filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractLimits {
    /// Number of `<p>` elements scanned
    pub max_paragraphs: usize,
    /// A paragraph is kept only if its trimmed length is strictly greater
    pub min_paragraph_chars: usize,
    /// Number of `a[href]` elements scanned
    pub max_links: usize,
    /// Number of `img[src]` elements scanned
    pub max_images: usize,
}

pub const LIMITS: ExtractLimits = ExtractLimits {
    max_paragraphs: 10,
    min_paragraph_chars: 20,
    max_links: 20,
    max_images: 10,
};

const TITLE: ElementQuery = ElementQuery::tag("title");
const PARAGRAPH: ElementQuery = ElementQuery::tag("p");
const ANCHOR: ElementQuery = ElementQuery::with_attr("a", "href");
const IMAGE: ElementQuery = ElementQuery::with_attr("img", "src");
const HEADING_TAGS: [&str; 3] = ["h1", "h2", "h3"];

/// Extracts a document, stamped with the current time
pub fn extract<D: Document>(document: &D, source_url: &str) -> ScrapedDocument {
    extract_at(document, source_url, Utc::now())
}

/// Extracts a document with an explicit capture time
pub fn extract_at<D: Document>(
    document: &D,
    source_url: &str,
    captured_at: DateTime<Utc>,
) -> ScrapedDocument {
    let resolver = Resolver::new(source_url);

    let title = extract_title(document);
    let headings = extract_headings(document);
    let paragraphs = extract_paragraphs(document, &LIMITS);
    let links = extract_links(document, &resolver, &LIMITS);
    let images = extract_images(document, &resolver, &LIMITS);
    let meta = extract_meta(document);

    ::log::debug!(
        "Extracted {} headings, {} paragraphs, {} links, {} images from {}",
        headings.len(),
        paragraphs.len(),
        links.len(),
        images.len(),
        source_url
    );

    ScrapedDocument {
        source_url: source_url.to_string(),
        captured_at: captured_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        title,
        headings,
        paragraphs,
        links,
        images,
        meta,
    }
}

fn extract_title<D: Document>(document: &D) -> String {
    document
        .select_first(TITLE)
        .map(|el| el.trimmed_text())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| PLACEHOLDERS.title.to_string())
}

fn extract_headings<D: Document>(document: &D) -> Headings {
    let [h1, h2, h3] = HEADING_TAGS.map(|tag| {
        document
            .select_all(ElementQuery::tag(tag))
            .map(|el| el.trimmed_text())
            .filter(|text| !text.is_empty())
            .collect::<Vec<String>>()
    });

    Headings { h1, h2, h3 }
}

fn extract_paragraphs<D: Document>(document: &D, limits: &ExtractLimits) -> Vec<String> {
    document
        .select_all(PARAGRAPH)
        .take(limits.max_paragraphs)
        .map(|el| el.trimmed_text())
        .filter(|text| text.chars().count() > limits.min_paragraph_chars)
        .collect()
}

fn extract_links<D: Document>(
    document: &D,
    resolver: &Resolver,
    limits: &ExtractLimits,
) -> Vec<Link> {
    document
        .select_all(ANCHOR)
        .take(limits.max_links)
        .filter_map(|el| {
            let href = el.attr("href").filter(|href| !href.is_empty())?;
            let text = el.trimmed_text();
            if text.is_empty() {
                return None;
            }
            Some(Link {
                url: resolver.resolve(href).into_string(),
                text,
            })
        })
        .collect()
}

fn extract_images<D: Document>(
    document: &D,
    resolver: &Resolver,
    limits: &ExtractLimits,
) -> Vec<Image> {
    document
        .select_all(IMAGE)
        .take(limits.max_images)
        .filter_map(|el| {
            let src = el.attr("src").filter(|src| !src.is_empty())?;
            let alt = el
                .attr("alt")
                .filter(|alt| !alt.is_empty())
                .unwrap_or(PLACEHOLDERS.image_alt);
            Some(Image {
                src: resolver.resolve(src).into_string(),
                alt: alt.to_string(),
            })
        })
        .collect()
}

fn extract_meta<D: Document>(document: &D) -> Meta {
    let content = |name: &'static str, placeholder: &str| {
        document
            .select_first(ElementQuery::with_attr_value("meta", "name", name))
            .and_then(|el| el.attr("content").map(str::to_string))
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| placeholder.to_string())
    };

    Meta {
        description: content("description", PLACEHOLDERS.description),
        keywords: content("keywords", PLACEHOLDERS.keywords),
        author: content("author", PLACEHOLDERS.author),
    }
}
