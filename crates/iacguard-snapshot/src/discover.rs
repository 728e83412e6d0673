use camino::{Utf8Path, Utf8PathBuf};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Discover snapshot files below `root`.
///
/// A file path is returned as-is. For a directory, every `*.json` file below it is returned,
/// sorted by path so concatenation order is stable across platforms.
pub fn discover_snapshots(root: &Utf8Path) -> Vec<Utf8PathBuf> {
    if !root.is_dir() {
        return vec![root.to_path_buf()];
    }

    let mut out: Vec<Utf8PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| pathbuf_to_utf8(e.path().to_path_buf()))
        .filter(|p| p.extension() == Some("json"))
        .collect();

    // Stable order.
    out.sort();
    out
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
