//! Search and genre filters over the catalog

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::book::Book;

/// How the search and genre filters combine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterPolicy {
    /// Each filter runs against the full catalog; the most recently changed one
    /// decides the visible list.
    #[default]
    LastWins,
    /// Both filters apply together, each matching everything when empty.
    Combined,
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid filter policy: {0}. Valid policies: last-wins, combined")]
pub struct ParseFilterPolicyError(String);

impl FromStr for FilterPolicy {
    type Err = ParseFilterPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-wins" => Ok(FilterPolicy::LastWins),
            "combined" => Ok(FilterPolicy::Combined),
            other => Err(ParseFilterPolicyError(other.to_string())),
        }
    }
}

impl fmt::Display for FilterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterPolicy::LastWins => write!(f, "last-wins"),
            FilterPolicy::Combined => write!(f, "combined"),
        }
    }
}

/// Which filter controller changed most recently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Search,
    Genre,
}

/// Current input of both filter controllers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filters {
    pub search: String,
    pub genre: String,
    pub last_changed: Option<FilterKind>,
}

impl Filters {
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
        self.last_changed = Some(FilterKind::Search);
    }

    pub fn set_genre(&mut self, genre: &str) {
        self.genre = genre.to_string();
        self.last_changed = Some(FilterKind::Genre);
    }

    /// Books of `catalog` that the active filters keep, in catalog order
    pub fn apply<'a>(&self, catalog: &'a [Book], policy: FilterPolicy) -> Vec<&'a Book> {
        catalog
            .iter()
            .filter(|book| match policy {
                FilterPolicy::LastWins => match self.last_changed {
                    None => true,
                    Some(FilterKind::Search) => matches_search(book, &self.search),
                    Some(FilterKind::Genre) => matches_genre(book, &self.genre),
                },
                FilterPolicy::Combined => {
                    matches_search(book, &self.search) && matches_genre(book, &self.genre)
                }
            })
            .collect()
    }
}

/// Case-insensitive substring match against the title or the first author
///
/// An empty term matches every book.
pub fn matches_search(book: &Book, term: &str) -> bool {
    let term = term.to_lowercase();
    let title_match = book.title.to_lowercase().contains(&term);
    let author_match = book
        .first_author()
        .is_some_and(|name| name.to_lowercase().contains(&term));
    title_match || author_match
}

/// Exact match against any of the book's subjects; an empty genre matches all
pub fn matches_genre(book: &Book, genre: &str) -> bool {
    genre.is_empty() || book.subjects.iter().any(|subject| subject == genre)
}

/// Distinct first-subject tags in order of first appearance
pub fn genre_options(catalog: &[Book]) -> Vec<String> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter_map(Book::genre)
        .filter(|genre| seen.insert(*genre))
        .map(str::to_string)
        .collect()
}
