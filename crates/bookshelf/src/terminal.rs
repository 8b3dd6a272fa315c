use crate::prelude::*;
use bookshelf_core::book::BookCard;
use bookshelf_core::surface::{Element, MemorySurface, Region, Surface};
use colored::Colorize;
use prettytable::row;

const LOADING_TEXT: &str = "Loading books...";

/// Surface that renders its visible regions as coloured terminal text
///
/// Region state is recorded as it changes; [`TerminalSurface::render`] turns
/// the current state into a frame the caller prints.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    state: MemorySurface,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MemorySurface {
        &self.state
    }

    /// Text of the visible regions; `current_page` highlights its page button
    pub fn render(&self, current_page: usize) -> String {
        let mut result = String::new();

        if self.state.is_visible(Region::Loading) {
            result.push_str(&format!("{}\n", LOADING_TEXT.bright_black()));
        }

        if self.state.is_visible(Region::Error) {
            result.push_str(&format!("{}\n", self.state.text(Region::Error).red().bold()));
        }

        if self.state.is_visible(Region::BookList) {
            result.push_str(&self.render_filters());
            result.push_str(&format_book_list(&self.state.cards(Region::BookList)));
        }

        if self.state.is_visible(Region::Pagination) {
            result.push_str(&format_pagination(
                self.state.children(Region::Pagination),
                current_page,
            ));
        }

        if self.state.is_visible(Region::Wishlist) {
            result.push_str(&format_wishlist(&self.state.cards(Region::Wishlist)));
        }

        result
    }

    fn render_filters(&self) -> String {
        let search = self.state.value(Region::SearchInput);
        let genre = self.state.value(Region::GenreSelect);

        format!(
            "\n{}: {} | {}: {}\n",
            "Search".green(),
            if search.is_empty() {
                "(none)".bright_black()
            } else {
                search.bright_white()
            },
            "Genre".green(),
            if genre.is_empty() {
                "All Genres".bright_black()
            } else {
                genre.bright_white()
            },
        )
    }
}

impl Surface for TerminalSurface {
    fn set_visible(&mut self, region: Region, visible: bool) {
        self.state.set_visible(region, visible);
    }

    fn set_text(&mut self, region: Region, text: &str) {
        self.state.set_text(region, text);
    }

    fn set_value(&mut self, region: Region, value: &str) {
        self.state.set_value(region, value);
    }

    fn replace_children(&mut self, region: Region, children: Vec<Element>) {
        self.state.replace_children(region, children);
    }

    fn set_toggle_label(&mut self, book_id: u64, label: &'static str) {
        self.state.set_toggle_label(book_id, label);
    }
}

/// Genre option values, skipping the "All Genres" entry
pub fn genre_values(surface: &MemorySurface) -> Vec<&str> {
    surface
        .children(Region::GenreSelect)
        .iter()
        .filter_map(|element| match element {
            Element::GenreOption { value, .. } if !value.is_empty() => Some(value.as_str()),
            _ => None,
        })
        .collect()
}

fn format_book_list(cards: &[&BookCard]) -> String {
    let mut result = String::new();

    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!("{}\n", "BOOKS".bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if cards.is_empty() {
        result.push_str(&format!("\n{}\n", "No books on this page.".yellow()));
        return result;
    }

    for card in cards {
        result.push_str(&format!(
            "\n{} {}\n",
            format!("[{}]", card.id).yellow().bold(),
            card.title.white().bold()
        ));
        result.push_str(&format!(
            "    {}: {} | {}: {}\n",
            "Author".green(),
            card.author.bright_white(),
            "Genre".green(),
            card.genre.bright_magenta()
        ));
        if let Some(url) = &card.image_url {
            result.push_str(&format!("    {}: {}\n", "Cover".green(), url.cyan().underline()));
        }
        if let Some(label) = card.toggle_label {
            result.push_str(&format!(
                "    {} {}\n",
                format!("[{label}]").bright_yellow(),
                format!("toggle {}", card.id).bright_black()
            ));
        }
    }

    result
}

fn format_pagination(buttons: &[Element], current_page: usize) -> String {
    let labels: Vec<String> = buttons
        .iter()
        .filter_map(|element| match element {
            Element::PageButton { page } if *page == current_page => {
                Some(format!("[{page}]").bright_cyan().bold().to_string())
            }
            Element::PageButton { page } => Some(page.to_string()),
            _ => None,
        })
        .collect();

    format!("\n{}: {}\n", "Pages".green(), labels.join(" "))
}

fn format_wishlist(cards: &[&BookCard]) -> String {
    let mut result = String::new();

    result.push_str(&format!("{}\n", "=".repeat(80).bright_magenta()));
    result.push_str(&format!(
        "{}\n",
        format!("WISHLIST ({})", cards.len()).bright_magenta().bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_magenta()));

    if cards.is_empty() {
        result.push_str(&format!("\n{}\n", "Your wishlist is empty.".yellow()));
        return result;
    }

    let mut table = new_table();
    table.add_row(row![b->"ID", b->"Title", b->"Author", b->"Genre"]);
    for card in cards {
        table.add_row(row![card.id, card.title, card.author, card.genre]);
    }

    result.push('\n');
    result.push_str(&table.to_string());
    result
}
