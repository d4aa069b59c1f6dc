//! Thin host shim: load a log file, apply the configured filter, print
//! the rendered view. Real hosts drive the library directly.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use viewer::config::ViewerConfig;
use viewer::filter::{FilterMode, LineFilter};
use viewer::session::ViewCache;

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "viewer=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: viewer <logfile> (filters via LOGVIEW_INCLUDE / LOGVIEW_EXCLUDE)")?;

    let config = ViewerConfig::load()?;
    config.validate()?;

    let include = std::env::var("LOGVIEW_INCLUDE").unwrap_or_default();
    let exclude = std::env::var("LOGVIEW_EXCLUDE").unwrap_or_default();
    let filter = match config.filter_mode {
        FilterMode::Word => LineFilter::words(&include, &exclude),
        FilterMode::Pattern => LineFilter::pattern(
            (!include.is_empty()).then_some(include.as_str()),
            (!exclude.is_empty()).then_some(exclude.as_str()),
        )?,
    };

    let content = std::fs::read_to_string(&path)?;
    let cache = ViewCache::new();
    cache.load(&path, &content);
    cache.set_filter(&path, filter);

    let visible = cache.visible(&path).unwrap_or_default();
    info!(shown = visible.len(), "rendering view");
    for line in &visible {
        println!("{}", line.text);
    }

    Ok(())
}
