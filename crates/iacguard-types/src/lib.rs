//! Stable DTOs and IDs used across the iacguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted violation report
//! - stable rule IDs, control IDs, and resource kinds
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    EnforcementLevel, IacguardData, IacguardReport, ReportEnvelope, RunMeta, SCHEMA_REPORT_V1,
    ToolMeta, Verdict, VerdictCounts, VerdictStatus, Violation,
};
