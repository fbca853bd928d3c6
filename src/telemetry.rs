//! Logging setup for the binaries
//!
//! `RUST_LOG` wins when set. Otherwise the filter is built from the caller's
//! default directives with the configured level applied to this crate.
//! Logs go to stderr so command output on stdout stays clean.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global subscriber
///
/// `extra_directives` is appended to the crate directive, e.g.
/// `"tower_http=debug"` for the preview server.
pub fn init_tracing(logging: &LoggingConfig, extra_directives: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let mut directives = format!("folio={}", logging.level);
        if let Some(extra) = extra_directives {
            directives.push(',');
            directives.push_str(extra);
        }
        EnvFilter::new(directives)
    });

    let registry = tracing_subscriber::registry().with(filter);

    // A subscriber may already be installed (tests, embedding); keep it
    let result = if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if result.is_ok() {
        tracing::debug!(format = %logging.format, "Tracing initialized");
    }
}
