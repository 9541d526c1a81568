//! Diagnostic tracing for the signup form.
//!
//! Reads `RUST_LOG`; falls back to `warn`, or `signup=debug` when verbose.
//! Output goes to stderr so CLI results on stdout stay clean.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init(verbose: bool) {
    let default = if verbose { "signup=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
