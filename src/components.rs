//! Component directory inventory.
//!
//! The showcase sizes each SDK component by counting the regular files under
//! its top-level directory. The component set is fixed: an ordered list of
//! `(directory, description)` pairs, so the output order is deterministic
//! and matches the order the web page presents them in.
//!
//! Counting uses a full recursive walk. Symlinks are not followed and are
//! not counted as files (walkdir defaults); directories and other non-file
//! entries are excluded. A component directory that does not exist reports
//! zero files rather than an error — several components are optional in
//! source-only checkouts.

use serde::Serialize;
use std::path::Path;
use walkdir::WalkDir;

use crate::builder::BuildError;

/// SDK components surfaced on the showcase page, in display order.
pub const COMPONENT_DIRS: &[(&str, &str)] = &[
    ("cuPHY", "GPU-accelerated 5G PHY"),
    ("cuMAC", "GPU-accelerated MAC scheduler"),
    ("pyaerial", "Python APIs for research and integration"),
    ("testBenches", "Validation and performance tooling"),
    ("testVectors", "Reference vectors"),
    ("5GModel", "Waveform generation models"),
];

/// Per-component size metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentStat {
    pub name: String,
    pub description: String,
    pub file_count: u64,
}

/// Count files under each configured component directory.
///
/// Produces one [`ComponentStat`] per [`COMPONENT_DIRS`] entry, preserving
/// list order. Traversal errors (unreadable directories) abort the build.
pub fn scan_components(root: &Path) -> Result<Vec<ComponentStat>, BuildError> {
    COMPONENT_DIRS
        .iter()
        .map(|&(name, description)| {
            let dir = root.join(name);
            let file_count = if dir.is_dir() {
                count_files(&dir)?
            } else {
                0
            };
            Ok(ComponentStat {
                name: name.to_string(),
                description: description.to_string(),
                file_count,
            })
        })
        .collect()
}

/// Recursively count regular files under `dir`.
fn count_files(dir: &Path) -> Result<u64, BuildError> {
    let mut count = 0;
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|source| BuildError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() {
            count += 1;
        }
    }
    Ok(count)
}
