use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global `tracing` subscriber
///
/// The level is read from `LOGLEVEL` (`TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`),
/// defaulting to `INFO`. Calling this more than once is harmless.
pub fn setup_logger() {
    INIT.call_once(|| {
        let log_level = env::var("LOGLEVEL")
            .unwrap_or_else(|_| "INFO".to_string())
            .to_uppercase();

        let level = match log_level.as_str() {
            "TRACE" => Level::TRACE,
            "DEBUG" => Level::DEBUG,
            "WARN" => Level::WARN,
            "ERROR" => Level::ERROR,
            _ => Level::INFO,
        };

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            // another subscriber was installed by the host application
            return;
        }
        tracing::debug!("Log level set to: {}", level);
    });
}
