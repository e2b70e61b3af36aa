//! Logging configuration and setup
//!
//! This module provides logging initialization for host applications that
//! want the library's resolution diagnostics (missing keys, fallback hits)
//! on stdout.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the given filter directive (e.g. `"debug"` or
/// `"mini_i18n=debug"`).
///
/// Safe to call more than once; subsequent calls keep the first subscriber.
pub fn init_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .try_init();

    info!("Logging initialized with level: {}", level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging("info");
        init_logging("debug");
    }
}
