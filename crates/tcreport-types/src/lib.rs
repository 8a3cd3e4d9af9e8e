//! Stable DTOs and traits used across the tcreport workspace.
//!
//! This crate is intentionally boring:
//! - data types for analysis findings (diagnostics, locations, severities)
//! - canonical fingerprints for duplicate suppression
//! - path normalization for the reported `file` attribute
//! - the reporting contract and the catalog-description traits

#![forbid(unsafe_code)]

pub mod describe;
pub mod diagnostic;
pub mod path;
pub mod report;
pub mod severity;

pub use describe::{DescriptionSink, DiagnosticDescription, DiagnosticSource};
pub use diagnostic::{Diagnostic, FileLocation};
pub use report::Reporter;
pub use severity::{Severity, UnknownSeverity};
