//! Application state and event dispatch
//!
//! [`Browser`] owns everything that changes during a session: the catalog, the
//! current page, both filter inputs, the wishlist and the active view. All
//! interaction goes through [`Browser::handle`], which applies one [`Event`]
//! and re-renders the affected regions. The list a page button paginates is
//! re-derived from the filter state on every render, never captured.

use serde::Serialize;

use crate::book::{Book, BookCard};
use crate::filter::{genre_options, FilterPolicy, Filters};
use crate::pagination::{page_items, page_numbers, total_pages, BOOKS_PER_PAGE};
use crate::store::{KeyValueStore, StoreError, SEARCH_TERM_KEY};
use crate::surface::{Element, Region, Surface};
use crate::view::View;
use crate::wishlist::{Wishlist, WishlistChange};

/// Label of the genre option that clears the genre filter
pub const ALL_GENRES_LABEL: &str = "All Genres";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserOptions {
    pub filter_policy: FilterPolicy,
    /// Go back to page 1 whenever the search or genre filter changes
    pub reset_page_on_filter: bool,
}

/// User interaction, delivered to [`Browser::handle`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SearchInput(String),
    GenreChange(String),
    PageSelected(usize),
    WishlistToggle(u64),
    Navigate(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("Book {0} is not in the catalog")]
    UnknownBook(u64),

    #[error("Failed to persist search term: {0}")]
    Store(#[from] StoreError),
}

/// The current page of the active list
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub entries: Vec<BookCard>,
    pub pages: Vec<usize>,
}

pub struct Browser<S> {
    catalog: Vec<Book>,
    current_page: usize,
    filters: Filters,
    wishlist: Wishlist,
    view: View,
    options: BrowserOptions,
    store: S,
}

impl<S: KeyValueStore> Browser<S> {
    pub fn new(catalog: Vec<Book>, store: S, options: BrowserOptions) -> Self {
        Self {
            catalog,
            current_page: 1,
            filters: Filters::default(),
            wishlist: Wishlist::new(),
            view: View::Catalog,
            options,
            store,
        }
    }

    /// First render after a successful load
    ///
    /// Renders the full catalog, fills the genre options, then restores the
    /// persisted search term and renders the list it selects.
    pub fn start(&mut self, surface: &mut dyn Surface) {
        if !surface.is_attached() {
            return;
        }

        self.current_page = 1;
        self.render(surface);
        self.render_genre_options(surface);

        let term = self.store.get(SEARCH_TERM_KEY).unwrap_or_default();
        surface.set_value(Region::SearchInput, &term);
        self.filters.set_search(&term);
        self.render(surface);

        self.render_wishlist(surface);
        self.apply_view(surface);
    }

    pub fn handle(&mut self, event: Event, surface: &mut dyn Surface) -> Result<(), BrowserError> {
        match event {
            Event::SearchInput(term) => self.search(&term, surface),
            Event::GenreChange(genre) => {
                self.select_genre(&genre, surface);
                Ok(())
            }
            Event::PageSelected(page) => {
                self.select_page(page, surface);
                Ok(())
            }
            Event::WishlistToggle(id) => self.toggle_wishlist(id, surface).map(|_| ()),
            Event::Navigate(href) => {
                self.navigate(&href, surface);
                Ok(())
            }
        }
    }

    /// Persist the raw term, then filter by it
    ///
    /// The list is rendered even if persisting fails; the store error is
    /// returned afterwards.
    pub fn search(&mut self, term: &str, surface: &mut dyn Surface) -> Result<(), BrowserError> {
        let stored = self.store.set(SEARCH_TERM_KEY, term);

        surface.set_value(Region::SearchInput, term);
        self.filters.set_search(term);
        self.after_filter_change(surface);

        stored.map_err(BrowserError::from)
    }

    pub fn select_genre(&mut self, genre: &str, surface: &mut dyn Surface) {
        surface.set_value(Region::GenreSelect, genre);
        self.filters.set_genre(genre);
        self.after_filter_change(surface);
    }

    pub fn select_page(&mut self, page: usize, surface: &mut dyn Surface) {
        self.current_page = page;
        self.render(surface);
    }

    pub fn toggle_wishlist(
        &mut self,
        id: u64,
        surface: &mut dyn Surface,
    ) -> Result<WishlistChange, BrowserError> {
        let book = self
            .catalog
            .iter()
            .find(|book| book.id == id)
            .ok_or(BrowserError::UnknownBook(id))?;

        let change = self.wishlist.toggle(book);
        surface.set_toggle_label(id, change.label());
        self.render_wishlist(surface);

        Ok(change)
    }

    /// Switch views for a recognised link; returns whether anything changed
    pub fn navigate(&mut self, href: &str, surface: &mut dyn Surface) -> bool {
        match View::from_href(href) {
            Some(view) => {
                self.view = view;
                self.apply_view(surface);
                true
            }
            None => false,
        }
    }

    /// Books the current filters keep, in catalog order
    pub fn active_books(&self) -> Vec<&Book> {
        self.filters.apply(&self.catalog, self.options.filter_policy)
    }

    pub fn page_view(&self) -> PageView {
        let books = self.active_books();
        let total = total_pages(books.len(), BOOKS_PER_PAGE);

        let entries = page_items(&books, self.current_page, BOOKS_PER_PAGE)
            .iter()
            .map(|book| BookCard::from_book(book, Some(self.wishlist.label_for(book.id))))
            .collect();

        PageView {
            current_page: self.current_page,
            total_pages: total,
            total_items: books.len(),
            entries,
            pages: page_numbers(total),
        }
    }

    /// Render the current page of the active list and its page buttons
    pub fn render(&self, surface: &mut dyn Surface) {
        let view = self.page_view();

        surface.replace_children(
            Region::BookList,
            view.entries.into_iter().map(Element::Book).collect(),
        );
        surface.replace_children(
            Region::Pagination,
            view.pages
                .into_iter()
                .map(|page| Element::PageButton { page })
                .collect(),
        );
        surface.set_visible(
            Region::Pagination,
            view.total_pages > 0 && self.view == View::Catalog,
        );
    }

    pub fn render_wishlist(&self, surface: &mut dyn Surface) {
        surface.replace_children(
            Region::Wishlist,
            self.wishlist.cards().into_iter().map(Element::Book).collect(),
        );
    }

    pub fn genre_options(&self) -> Vec<String> {
        genre_options(&self.catalog)
    }

    pub fn catalog(&self) -> &[Book] {
        &self.catalog
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn after_filter_change(&mut self, surface: &mut dyn Surface) {
        if self.options.reset_page_on_filter {
            self.current_page = 1;
        }
        self.render(surface);
    }

    fn render_genre_options(&self, surface: &mut dyn Surface) {
        let mut options = vec![Element::GenreOption {
            value: String::new(),
            label: ALL_GENRES_LABEL.to_string(),
        }];
        options.extend(self.genre_options().into_iter().map(|genre| Element::GenreOption {
            value: genre.clone(),
            label: genre,
        }));
        surface.replace_children(Region::GenreSelect, options);
    }

    fn apply_view(&self, surface: &mut dyn Surface) {
        let catalog = self.view == View::Catalog;
        let has_pages = total_pages(self.active_books().len(), BOOKS_PER_PAGE) > 0;

        surface.set_visible(Region::BookList, catalog);
        surface.set_visible(Region::Pagination, catalog && has_pages);
        surface.set_visible(Region::Wishlist, !catalog);
    }
}
