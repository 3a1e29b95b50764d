use super::logging::init_logging;
use super::menu::Menu;
use super::setup::Cli;
use bookshelf::api::LibraryApi;
use bookshelf::config::LibraryConfig;
use bookshelf::error::Result;
use bookshelf::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::debug;

const HOME_ENV: &str = "BOOKSHELF_HOME";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut api = init_api(&cli)?;

    let stdout = io::stdout();
    let color = !cli.no_color && stdout.is_terminal();
    let mut menu = Menu::new(io::stdin().lock(), stdout.lock(), color);
    menu.run(&mut api)
}

fn init_api(cli: &Cli) -> Result<LibraryApi<FileStore>> {
    let config = match config_dir() {
        Some(dir) => LibraryConfig::load(&dir)?,
        None => LibraryConfig::default(),
    }
    .with_overrides(cli.file.clone(), cli.strict);

    debug!(
        path = %config.storage_path.display(),
        strict = config.strict_load,
        "opening library"
    );

    let store = FileStore::new(&config.storage_path);
    LibraryApi::new(store, config.load_policy())
}

/// `$BOOKSHELF_HOME` if set, otherwise the platform config directory.
fn config_dir() -> Option<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        return Some(PathBuf::from(home));
    }
    ProjectDirs::from("com", "bookshelf", "bookshelf").map(|dirs| dirs.config_dir().to_path_buf())
}
