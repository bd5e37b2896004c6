//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! manifest / routing / render
//!     → tracing events (debug per file and route, info summary)
//!     → logging.rs subscriber
//!     → stderr
//! ```

pub mod logging;

pub use logging::init_logging;
