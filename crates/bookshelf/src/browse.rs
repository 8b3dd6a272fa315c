use crate::prelude::{eprintln, print, println, *};
use bookshelf_core::browser::{Browser, BrowserError, Event};
use bookshelf_core::store::KeyValueStore;
use bookshelf_core::view::View;
use colored::Colorize;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::catalog::require_catalog;
use crate::config::Config;
use crate::store::FileStore;
use crate::terminal::{genre_values, TerminalSurface};

const HELP: &str = "\
Commands:
  search <text>   filter by title or first author (empty text clears)
  genre [value]   filter by genre (no value shows all genres)
  genres          list available genres
  page <n>        go to page n
  toggle <id>     add or remove a book from the wishlist
  catalog         show the book list
  wishlist        show the wishlist
  nav <href>      follow a navigation link (#book-list, #wishlist)
  help            show this help
  quit            leave the session";

/// One line of input in an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    Genres,
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name {
        "" => Command::Show,
        "search" => Command::Event(Event::SearchInput(rest.to_string())),
        "genre" => Command::Event(Event::GenreChange(rest.to_string())),
        "genres" => Command::Genres,
        "page" => {
            let page = rest
                .parse::<usize>()
                .map_err(|_| eyre!("Invalid page number: {:?}", rest))?;
            Command::Event(Event::PageSelected(page))
        }
        "toggle" => {
            let id = rest
                .parse::<u64>()
                .map_err(|_| eyre!("Invalid book id: {:?}", rest))?;
            Command::Event(Event::WishlistToggle(id))
        }
        "nav" => Command::Event(Event::Navigate(rest.to_string())),
        "catalog" => Command::Event(Event::Navigate(View::Catalog.href().to_string())),
        "wishlist" => Command::Event(Event::Navigate(View::Wishlist.href().to_string())),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(eyre!("Unknown command: {other}. Type 'help' for a list.")),
    };

    Ok(command)
}

/// Apply one command; returns false when the session should end
fn execute<S: KeyValueStore>(
    command: Command,
    browser: &mut Browser<S>,
    surface: &mut TerminalSurface,
) -> bool {
    match command {
        Command::Quit => return false,
        Command::Help => println!("{HELP}"),
        Command::Genres => {
            for genre in genre_values(surface.state()) {
                println!("  {genre}");
            }
        }
        Command::Show => print!("{}", surface.render(browser.current_page())),
        Command::Event(event) => {
            debug!("Handling {event:?}");
            match browser.handle(event, surface) {
                Ok(()) => print!("{}", surface.render(browser.current_page())),
                Err(BrowserError::Store(e)) => {
                    warn!("Search term not saved: {e}");
                    print!("{}", surface.render(browser.current_page()));
                }
                Err(e) => eprintln!("{}", e.to_string().red()),
            }
        }
    }
    true
}

/// Interactive session against the live catalog
pub async fn run(config: Config) -> Result<()> {
    let store = FileStore::new(config.data_dir()?);
    debug!("Persisting search term under {}", store.dir().display());

    let mut surface = TerminalSurface::new();
    let catalog = require_catalog(&config, &mut surface).await?;

    let mut browser = Browser::new(catalog, store, config.browser_options());
    browser.start(&mut surface);
    print!("{}", surface.render(browser.current_page()));
    println!("\n{}", "Type 'help' for commands.".bright_black());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", ">".bright_cyan());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Ok(command) => {
                if !execute(command, &mut browser, &mut surface) {
                    break;
                }
            }
            Err(e) => eprintln!("{}", e.to_string().red()),
        }
    }

    Ok(())
}
