//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Vec<RawEntry> (from manifest adapters)
//!     → table.rs (trigger check, required fields)
//!     → route.rs (path normalization)
//!     → RouteTable (ordered, immutable)
//! ```
//!
//! # Design Decisions
//! - Routes are described, never served
//! - Every path starts with `/` once it is in a table
//! - Deterministic: same manifest always yields the same table

pub mod route;
pub mod table;

pub use route::{normalize_path, Route};
pub use table::{validate_entries, RouteTable};
