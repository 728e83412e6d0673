//! Snapshot adapters: discover snapshot files and parse them into resources.
//!
//! This crate is allowed to do filesystem IO. Evaluation happens elsewhere; everything here
//! ends at a `Vec<Resource>`.

#![forbid(unsafe_code)]

mod discover;
mod parse;

use anyhow::Context;
use camino::Utf8Path;
use iacguard_domain::Resource;

pub use discover::discover_snapshots;
pub use parse::parse_snapshot;

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
pub mod fuzz {
    /// Parse arbitrary text as a snapshot. **Never panics** on any input.
    pub fn parse_snapshot(text: &str) -> anyhow::Result<usize> {
        Ok(super::parse::parse_snapshot("fuzz.json", text)?.len())
    }
}

/// Load every resource declared by the snapshot at `path`.
///
/// `path` is either a single JSON file or a directory; for a directory the `*.json` files below
/// it are loaded in path order and their resources concatenated.
pub fn load_snapshot(path: &Utf8Path) -> anyhow::Result<Vec<Resource>> {
    let files = discover::discover_snapshots(path);
    if files.is_empty() {
        tracing::warn!(%path, "no snapshot files found");
    }

    let mut resources = Vec::new();
    for file in files {
        let text = std::fs::read_to_string(&file).with_context(|| format!("read {file}"))?;
        let parsed = parse::parse_snapshot(file.as_str(), &text)?;
        tracing::debug!(path = %file, resources = parsed.len(), "loaded snapshot");
        resources.extend(parsed);
    }
    Ok(resources)
}
