use crate::prelude::{print, println, *};
use bookshelf_core::browser::{Browser, Event, PageView};
use bookshelf_core::filter::Filters;
use bookshelf_core::store::MemoryStore;
use colored::Colorize;
use prettytable::row;
use serde::Serialize;

use crate::catalog::require_catalog;
use crate::config::Config;
use crate::terminal::TerminalSurface;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Keep books whose title or first author contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Keep books with this exact subject
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct GenresOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of `bookshelf list`
#[derive(Debug, Serialize)]
pub struct ListOutput {
    pub filters: Filters,
    #[serde(flatten)]
    pub page: PageView,
}

/// Events that reproduce the requested filters and page
///
/// Search is applied before genre, so under the last-wins policy a genre
/// given together with a search term decides the list.
pub fn list_events(options: &ListOptions) -> Vec<Event> {
    let mut events = Vec::new();
    if let Some(term) = &options.search {
        events.push(Event::SearchInput(term.clone()));
    }
    if let Some(genre) = &options.genre {
        events.push(Event::GenreChange(genre.clone()));
    }
    events.push(Event::PageSelected(options.page));
    events
}

/// Render one page of the catalog and exit
///
/// The persisted search term is neither read nor written.
pub async fn run(options: ListOptions, config: Config) -> Result<()> {
    let mut surface = TerminalSurface::new();
    let catalog = require_catalog(&config, &mut surface).await?;

    let mut browser = Browser::new(catalog, MemoryStore::new(), config.browser_options());
    browser.start(&mut surface);
    for event in list_events(&options) {
        browser.handle(event, &mut surface)?;
    }

    if options.json {
        let output = ListOutput {
            filters: browser.filters().clone(),
            page: browser.page_view(),
        };
        println!("{}", format_json(&output)?);
    } else {
        print!("{}", surface.render(browser.current_page()));
        println!("{}", format_summary(&browser.page_view()));
    }

    Ok(())
}

/// Print the genre options of the catalog
pub async fn run_genres(options: GenresOptions, config: Config) -> Result<()> {
    let mut surface = TerminalSurface::new();
    let catalog = require_catalog(&config, &mut surface).await?;
    let browser = Browser::new(catalog, MemoryStore::new(), config.browser_options());
    let genres = browser.genre_options();

    if options.json {
        println!("{}", format_json(&genres)?);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(row![b->"#", b->"Genre", b->"Books"]);
    for (idx, genre) in genres.iter().enumerate() {
        let count = browser
            .catalog()
            .iter()
            .filter(|book| book.subjects.iter().any(|s| s == genre))
            .count();
        table.add_row(row![idx + 1, genre, count]);
    }
    table.printstd();

    Ok(())
}

fn format_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn format_summary(view: &PageView) -> String {
    format!(
        "\n{} {} {} {} ({} {})",
        "Showing page".bright_white(),
        view.current_page.to_string().bright_cyan().bold(),
        "of".bright_white(),
        view.total_pages.to_string().bright_cyan().bold(),
        view.total_items.to_string().bright_cyan().bold(),
        "matching books".bright_white()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::book::parse_catalog;

    fn options(search: Option<&str>, genre: Option<&str>, page: usize) -> ListOptions {
        ListOptions {
            search: search.map(str::to_string),
            genre: genre.map(str::to_string),
            page,
            json: false,
        }
    }

    fn browser() -> (Browser<MemoryStore>, TerminalSurface) {
        let body = r#"{"results": [
            {"id": 1, "title": "Alpha", "authors": [{"name": "A1"}], "subjects": ["Fiction"]},
            {"id": 2, "title": "Beta", "subjects": ["Poetry"]},
            {"id": 3, "title": "Gamma", "subjects": ["Fiction"]},
            {"id": 4, "title": "Delta", "subjects": ["Fiction"]},
            {"id": 5, "title": "Epsilon", "subjects": ["Fiction"]}
        ]}"#;
        let mut surface = TerminalSurface::new();
        let mut browser = Browser::new(
            parse_catalog(body).unwrap().results,
            MemoryStore::new(),
            Default::default(),
        );
        browser.start(&mut surface);
        (browser, surface)
    }

    #[test]
    fn test_list_events_order() {
        let events = list_events(&options(Some("al"), Some("Fiction"), 2));

        assert_eq!(
            events,
            vec![
                Event::SearchInput("al".to_string()),
                Event::GenreChange("Fiction".to_string()),
                Event::PageSelected(2),
            ]
        );
    }

    #[test]
    fn test_list_events_page_only() {
        assert_eq!(
            list_events(&options(None, None, 1)),
            vec![Event::PageSelected(1)]
        );
    }

    #[test]
    fn test_list_second_page() {
        let (mut browser, mut surface) = browser();
        for event in list_events(&options(None, None, 2)) {
            browser.handle(event, &mut surface).unwrap();
        }

        let view = browser.page_view();
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0].id, 5);
    }

    #[test]
    fn test_list_json_output() {
        let (mut browser, mut surface) = browser();
        for event in list_events(&options(None, Some("Poetry"), 1)) {
            browser.handle(event, &mut surface).unwrap();
        }

        let output = ListOutput {
            filters: browser.filters().clone(),
            page: browser.page_view(),
        };
        let json = format_json(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["filters"]["genre"], "Poetry");
        assert_eq!(parsed["filters"]["last_changed"], "genre");
        assert_eq!(parsed["total_items"], 1);
        assert_eq!(parsed["entries"][0]["id"], 2);
        assert_eq!(parsed["entries"][0]["author"], "Unknown Author");
        assert_eq!(parsed["entries"][0]["toggle_label"], "Add to Wishlist");
        assert_eq!(parsed["pages"], serde_json::json!([1]));
    }

    #[test]
    fn test_format_summary() {
        let (browser, _) = browser();

        let summary = format_summary(&browser.page_view());

        assert!(summary.contains("Showing page"));
        assert!(summary.contains("matching books"));
        assert!(summary.contains('5'));
    }
}
