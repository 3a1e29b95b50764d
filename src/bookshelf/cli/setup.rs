use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including the git hash for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "bookshelf", bin_name = "bookshelf", version = get_version())]
#[command(about = "Interactive catalogue for a personal book collection", long_about = None)]
pub struct Cli {
    /// Catalogue file (defaults to the configured path, then library.json)
    #[arg(short, long, env = "BOOKSHELF_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Treat an unreadable catalogue file as an error instead of starting empty
    #[arg(long)]
    pub strict: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
