//! Use case orchestration for iacguard.
//!
//! This crate provides the application layer: use cases that coordinate the snapshot, settings,
//! domain and render layers. It is intentionally thin and delegates heavy lifting to the
//! appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod render;
mod report;
mod rules;
mod schema;

pub use check::{CheckInput, CheckOutput, exit_code, resolve_settings, run_check};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_annotations, render_markdown, render_text};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
pub use rules::format_rules;
pub use schema::{SchemaKind, schema_json};
