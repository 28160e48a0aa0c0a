//! Manifest discovery over repository trees
//!
//! Walks a directory and groups every matching file path under its
//! canonical manifest filename. Traversal is read-only and best-effort:
//! entries that cannot be read are skipped, and a root that does not exist
//! simply yields an empty index.

pub mod patterns;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Index of discovered manifest files, keyed by canonical filename.
///
/// Paths are relative to the scanned root, in traversal order. Keys with no
/// matches are absent rather than mapped to empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundFiles {
    files: BTreeMap<String, Vec<PathBuf>>,
}

impl FoundFiles {
    /// Paths grouped under a canonical filename
    pub fn get(&self, canonical: &str) -> Option<&[PathBuf]> {
        self.files.get(canonical).map(Vec::as_slice)
    }

    pub fn contains_key(&self, canonical: &str) -> bool {
        self.files.contains_key(canonical)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.files
            .iter()
            .map(|(key, paths)| (key.as_str(), paths.as_slice()))
    }

    /// Number of canonical keys with at least one match
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total number of discovered paths across all keys
    pub fn total_paths(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    fn insert(&mut self, canonical: &str, path: PathBuf) {
        self.files.entry(canonical.to_string()).or_default().push(path);
    }
}

/// Finds target manifest files under `root` and its subdirectories.
///
/// Every file whose basename equals one of `targets` is grouped under that
/// name; files in the `requirements` prefix family are grouped under
/// `requirements.txt` regardless of their own name. Entries are walked
/// sorted by file name so downstream order-sensitive reductions are
/// deterministic.
pub fn find_files(root: &Path, targets: &[&str]) -> FoundFiles {
    let start = std::time::Instant::now();
    let mut found = FoundFiles::default();
    let mut files_seen = 0usize;

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        files_seen += 1;

        if let Some(filename) = entry.file_name().to_str() {
            if let Some(canonical) = patterns::canonical_key(filename, targets) {
                let rel_path = entry
                    .path()
                    .strip_prefix(root)
                    .unwrap_or(entry.path())
                    .to_path_buf();

                debug!(
                    path = %rel_path.display(),
                    canonical,
                    "discovered manifest file"
                );
                found.insert(canonical, rel_path);
            }
        }
    }

    info!(
        root = %root.display(),
        manifests_found = found.total_paths(),
        files_seen,
        elapsed_ms = start.elapsed().as_millis(),
        "manifest scan completed"
    );
    found
}
