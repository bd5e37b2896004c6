//! Run configuration subsystem.
//!
//! # Data Flow
//! ```text
//! command-line flags
//!     → RawOptions (as parsed, all optional)
//!     → validation.rs (flag combination checks)
//!     → GenerateOptions (validated, immutable)
//!     → handed to the pipeline in lib.rs
//! ```
//!
//! # Design Decisions
//! - Options are immutable once validated
//! - The manifest format follows from the flag used, never from file contents

pub mod schema;
pub mod validation;

pub use schema::{GenerateOptions, ManifestFormat, ManifestSource};
pub use validation::RawOptions;
