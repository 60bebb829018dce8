//! Output pass: re-emit the PIN file with imputed values substituted
//!
//! The writer makes a second, independent pass over the original file so
//! every string field that is not a tracked missing cell round-trips exactly.
//!
//! ## Architecture
//!
//! - [`writer`] - Format-preserving emission with optional gzip compression
//! - [`diagnostics`] - Optional imputed/observed population collection

pub mod diagnostics;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use diagnostics::ImputationDiagnostics;
pub use writer::ResultWriter;
