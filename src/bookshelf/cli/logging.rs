use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_ENV: &str = "BOOKSHELF_LOG";
const DEFAULT_LOG_FILTER: &str = "bookshelf=warn";
const VERBOSE_LOG_FILTER: &str = "bookshelf=debug";

/// Installs a stderr tracing subscriber. stdout is reserved for the menu.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    // A subscriber may already be set (tests); keep the first one.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init();
}
