//! Performance manifest summaries.
//!
//! The perf tooling under `testBenches/perf/` ships JSON manifests named
//! `testcases_*.json`, each a mapping of group name → mapping of scenario id
//! → test-case payload:
//!
//! ```json
//! {
//!   "pusch": { "TC2001": {...}, "TC2002": {...} },
//!   "pdsch": { "TC1001": {...} }
//! }
//! ```
//!
//! The showcase only needs coarse shape: how many groups, how many test
//! cases, and a handful of scenario ids to display. Payload contents are
//! never inspected. A manifest whose top level is not an object (a list, a
//! scalar) summarizes to zeros — some historical manifests were flat lists
//! and the page just shows them as empty.
//!
//! Profiles are ordered by filename so repeated builds emit identical JSON
//! regardless of directory listing order.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::builder::BuildError;

/// Manifests summarize to at most this many scenario ids.
const MAX_SAMPLE_SCENARIOS: usize = 4;

/// Summary of one perf-test manifest file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerfProfile {
    /// Manifest file stem, e.g. `testcases_cuphy`
    pub name: String,
    pub groups: u64,
    pub num_testcases: u64,
    /// Up to four scenario ids, deduplicated across groups, sorted ascending
    pub sample_scenarios: Vec<String>,
}

/// Summarize every `testcases_*.json` manifest under `perf_dir`.
///
/// Files are processed in filename order. A non-existent directory yields
/// an empty vec; a manifest that fails to parse aborts the build.
pub fn load_perf_profiles(perf_dir: &Path) -> Result<Vec<PerfProfile>, BuildError> {
    if !perf_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut manifests: Vec<PathBuf> = fs::read_dir(perf_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_manifest_name(p))
        .collect();
    manifests.sort();

    manifests.iter().map(|path| summarize(path)).collect()
}

/// Whether a path's filename matches the `testcases_*.json` pattern.
fn is_manifest_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with("testcases_") && n.ends_with(".json"))
        .unwrap_or(false)
}

fn summarize(path: &Path) -> Result<PerfProfile, BuildError> {
    let text = fs::read_to_string(path)?;
    let payload: serde_json::Value =
        serde_json::from_str(&text).map_err(|source| BuildError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let Some(groups) = payload.as_object() else {
        // Non-object top level: nothing to count
        return Ok(PerfProfile {
            name,
            groups: 0,
            num_testcases: 0,
            sample_scenarios: Vec::new(),
        });
    };

    let mut num_testcases = 0u64;
    let mut scenario_ids = BTreeSet::new();
    for group in groups.values() {
        if let Some(cases) = group.as_object() {
            num_testcases += cases.len() as u64;
            scenario_ids.extend(cases.keys().cloned());
        }
    }

    Ok(PerfProfile {
        name,
        groups: groups.len() as u64,
        num_testcases,
        sample_scenarios: scenario_ids
            .into_iter()
            .take(MAX_SAMPLE_SCENARIOS)
            .collect(),
    })
}
