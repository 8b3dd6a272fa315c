//! Core library for bookshelf
//!
//! This crate implements the **Functional Core** of the bookshelf application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`bookshelf_core`** (this crate): the book model, pagination, filters,
//!   wishlist and the application state that reacts to user events. No network
//!   or filesystem access.
//! - **`bookshelf`**: catalog download, persisted search term, configuration
//!   and the terminal front end (the Imperative Shell).
//!
//! The core talks to the outside world through two traits:
//!
//! - [`surface::Surface`]: named page regions the browser shows, hides and
//!   fills with elements
//! - [`store::KeyValueStore`]: string storage for the last search term
//!
//! Both come with in-memory implementations, so every behaviour of the
//! browser can be exercised with fixture data and no mocking.
//!
//! # Module Organization
//!
//! - [`book`]: API records, response parsing and rendered book cards
//! - [`pagination`]: fixed-size page partitioning
//! - [`filter`]: search and genre predicates, genre options, filter policy
//! - [`wishlist`]: the session wishlist
//! - [`view`]: catalog/wishlist view selection
//! - [`loading`]: loading and error indicators around the catalog fetch
//! - [`browser`]: application state and event dispatch
//!
//! # Example Usage
//!
//! ```rust
//! use bookshelf_core::browser::{Browser, BrowserOptions, Event};
//! use bookshelf_core::store::MemoryStore;
//! use bookshelf_core::surface::{MemorySurface, Region};
//!
//! let body = r#"{"results": [{"id": 1, "title": "Dune", "authors": [{"name": "Frank Herbert"}]}]}"#;
//! let catalog = bookshelf_core::book::parse_catalog(body).unwrap().results;
//!
//! let mut surface = MemorySurface::new();
//! let mut browser = Browser::new(catalog, MemoryStore::new(), BrowserOptions::default());
//! browser.start(&mut surface);
//!
//! browser.handle(Event::SearchInput("DUNE".into()), &mut surface).unwrap();
//! assert_eq!(surface.cards(Region::BookList).len(), 1);
//! ```

pub mod book;
pub mod browser;
pub mod filter;
pub mod loading;
pub mod pagination;
pub mod store;
pub mod surface;
pub mod view;
pub mod wishlist;
