//! Demo-data assembly and serialization.
//!
//! Ties the three extraction steps together into the single JSON document
//! the showcase front end fetches:
//!
//! ```text
//! {
//!   "repo": "NVIDIA Aerial CUDA-Accelerated RAN",
//!   "overview": [...],        ← README feature bullets
//!   "components": [...],      ← per-directory file counts
//!   "perf_profiles": [...]    ← perf manifest summaries
//! }
//! ```
//!
//! [`build`] reads the filesystem and produces the in-memory document;
//! [`write_output`] serializes it in one shot. Keeping the two separate
//! means a failing extraction can never leave a truncated output file —
//! nothing is written until the whole document exists.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::components::{self, ComponentStat};
use crate::overview;
use crate::perf::{self, PerfProfile};

/// Display name of the repository the data describes.
pub const REPO_NAME: &str = "NVIDIA Aerial CUDA-Accelerated RAN";

/// README file read for overview bullets, relative to the root.
pub const README_FILE: &str = "README.md";

/// Perf manifest directory, relative to the root.
pub const PERF_DIR: &str = "testBenches/perf";

/// Default output location, relative to the root.
pub const DEFAULT_OUTPUT: &str = "web_demo/data/demo-data.json";

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to traverse {path}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to serialize demo data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Root record serialized to the demo-data file.
///
/// Field order is the serialization order — the front end relies on it
/// only for readable diffs, not semantics.
#[derive(Debug, Serialize)]
pub struct DemoData {
    pub repo: &'static str,
    pub overview: Vec<String>,
    pub components: Vec<ComponentStat>,
    pub perf_profiles: Vec<PerfProfile>,
}

/// Build the full demo-data document from a repository checkout.
///
/// Reads `README.md`, walks the component directories, and summarizes the
/// perf manifests. Read-only; the output file is not touched.
pub fn build(root: &Path) -> Result<DemoData, BuildError> {
    let readme = fs::read_to_string(root.join(README_FILE))?;

    Ok(DemoData {
        repo: REPO_NAME,
        overview: overview::extract_overview(&readme),
        components: components::scan_components(root)?,
        perf_profiles: perf::load_perf_profiles(&root.join(PERF_DIR))?,
    })
}

/// Serialize `data` as pretty-printed JSON and write it to `output_path`.
///
/// The document is rendered to a string first and written with a single
/// call. The output directory must already exist; a missing directory is
/// an error, matching the rest of the fatal taxonomy.
pub fn write_output(data: &DemoData, output_path: &Path) -> Result<(), BuildError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(output_path, json)?;
    Ok(())
}
