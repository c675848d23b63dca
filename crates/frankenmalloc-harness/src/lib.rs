//! Inspection harness for frankenmalloc size classes.
//!
//! This crate provides:
//! - Table reports: per-class span geometry, tail waste and a table fingerprint
//! - Classification: where a `(size, align)` request lands
//! - Validation: accept/reject candidate size-class specifications
//! - Invariant sweeps: exhaustive lookup checks with JSONL structured logs

#![forbid(unsafe_code)]

pub mod error;
pub mod invariants;
pub mod structured_log;
pub mod table_report;

pub use error::HarnessError;
pub use invariants::{InvariantCheck, InvariantReport, check_invariants};
pub use table_report::{ClassifyReport, TableReport, ValidateReport};
