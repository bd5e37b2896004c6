//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once, from `main`
//! - Keep stdout free for rendered output (logs go to stderr)
//! - Let `RUST_LOG` override the built-in filter
//! - Colour only when stderr is a terminal
//!
//! # Design Decisions
//! - Quiet by default: only warnings and the fatal error are shown
//! - `-v` raises the crate to debug without touching `RUST_LOG`

use std::io::{self, IsTerminal};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "fngenerate=debug"
    } else {
        "fngenerate=warn"
    }
}

/// Install the global subscriber, writing to stderr.
pub fn init_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose).into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}
