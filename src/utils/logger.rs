use once_cell::sync::OnceCell;
use std::env;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: OnceCell<()> = OnceCell::new();

/// Installs a global `tracing` subscriber, once per process
///
/// The level comes from the `LOGLEVEL` environment variable
/// (`TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`) and defaults to `INFO`.
/// Later calls, or a subscriber installed elsewhere, leave things untouched.
pub fn setup_logger() {
    INIT.get_or_init(|| {
        let level = env::var("LOGLEVEL")
            .ok()
            .and_then(|value| value.parse::<Level>().ok())
            .unwrap_or(Level::INFO);

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
