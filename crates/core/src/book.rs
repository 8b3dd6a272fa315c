//! Book records as served by the catalog API, and the card view model the
//! presentation pipeline renders from them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Content-type key used to look up a book's cover image in `formats`
pub const IMAGE_FORMAT_KEY: &str = "image/jpeg";

/// Shown when a book has no authors
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Shown when a book has no subjects
pub const UNKNOWN_GENRE: &str = "Unknown Genre";

/// Error type for catalog body parsing
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Malformed catalog response: {0}")]
    Malformed(String),
}

/// Author record from API
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_year: Option<i32>,
}

/// Book record from API
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Book {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub formats: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bookshelves: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_count: Option<u64>,
}

impl Book {
    /// Name of the first listed author, if any
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(|a| a.name.as_str())
    }

    /// First subject tag, used as the book's genre
    pub fn genre(&self) -> Option<&str> {
        self.subjects.first().map(String::as_str)
    }

    pub fn image_url(&self) -> Option<&str> {
        self.formats.get(IMAGE_FORMAT_KEY).map(String::as_str)
    }
}

/// Response envelope of the catalog endpoint
///
/// Only `results` is required. `count` and `next` describe the remote
/// pagination, which is never followed.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CatalogResponse {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<Book>,
}

/// Parse a catalog response body
pub fn parse_catalog(body: &str) -> Result<CatalogResponse, CatalogError> {
    serde_json::from_str(body).map_err(|e| CatalogError::Malformed(e.to_string()))
}

/// One rendered book entry
///
/// `toggle_label` is `None` for wishlist entries, which carry no toggle control.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct BookCard {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle_label: Option<&'static str>,
}

impl BookCard {
    pub fn from_book(book: &Book, toggle_label: Option<&'static str>) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.first_author().unwrap_or(UNKNOWN_AUTHOR).to_string(),
            genre: book.genre().unwrap_or(UNKNOWN_GENRE).to_string(),
            image_url: book.image_url().map(str::to_string),
            toggle_label,
        }
    }
}
