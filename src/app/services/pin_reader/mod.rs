//! PIN file reader for Percolator-format scored records
//!
//! This module parses tab-delimited PIN files into [`crate::app::models::Record`]s.
//!
//! ## Architecture
//!
//! - [`schema`] - Header synonym resolution into a canonical column-role mapping
//! - [`reader`] - File access (gzip-aware) and record iteration
//!
//! The column-role mapping is resolved once and shared by the detection pass
//! and the output pass, so both agree on which header fields are features.

pub mod reader;
pub mod schema;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use reader::{PinReader, RecordIter};
pub use schema::ColumnRoles;
