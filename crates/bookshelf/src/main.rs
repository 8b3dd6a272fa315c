use crate::prelude::*;
use bookshelf_core::filter::FilterPolicy;
use clap::Parser;
use std::path::PathBuf;

mod browse;
mod catalog;
mod config;
mod error;
mod list;
mod prelude;
mod store;
mod terminal;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse, search and wishlist books from the Gutendex catalog"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Catalog endpoint
    #[clap(long, env = "BOOKSHELF_API_URL", global = true)]
    api_url: Option<String>,

    /// Configuration file (defaults to <config dir>/bookshelf/config.toml)
    #[clap(long, env = "BOOKSHELF_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Directory for the persisted search term
    #[clap(long, env = "BOOKSHELF_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// How search and genre filters combine: last-wins or combined
    #[clap(long, env = "BOOKSHELF_FILTER_POLICY", global = true)]
    filter_policy: Option<FilterPolicy>,

    /// Go back to page 1 whenever a filter changes
    #[clap(long, global = true)]
    reset_page_on_filter: bool,

    /// Whether to display additional information.
    #[clap(long, env = "BOOKSHELF_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Interactive session: search, filter, paginate and keep a wishlist
    Browse,

    /// Print one page of the catalog
    List(crate::list::ListOptions),

    /// List the genres available for filtering
    Genres(crate::list::GenresOptions),
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    init_logger(app.global.verbose);

    let global = app.global;
    let config = config::Config::load(global.config.as_deref())?.with_overrides(
        global.api_url,
        global.data_dir,
        global.filter_policy,
        global.reset_page_on_filter,
    );
    debug!("Using configuration {config:?}");

    match app.command {
        SubCommands::Browse => crate::browse::run(config).await,
        SubCommands::List(options) => crate::list::run(options, config).await,
        SubCommands::Genres(options) => crate::list::run_genres(options, config).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
