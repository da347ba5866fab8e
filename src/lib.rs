//! # Aerial Showcase
//!
//! Builds the aggregated `demo-data.json` consumed by the static web
//! showcase for the NVIDIA Aerial CUDA-Accelerated RAN SDK. The repository
//! checkout is the data source: feature bullets come from the README,
//! component sizes come from directory file counts, and perf summaries
//! come from the JSON manifests under `testBenches/perf/`.
//!
//! # Architecture: One Batch Transform
//!
//! A single synchronous pass composes three independent extractions and
//! serializes the result:
//!
//! ```text
//! README.md          →  overview bullets   ┐
//! <component dirs>   →  file counts        ├→  demo-data.json
//! testBenches/perf/  →  perf profiles      ┘
//! ```
//!
//! The extractions share no state and have no ordering constraints; the
//! whole document is built in memory before anything is written, so a
//! failed build never leaves a truncated output file. Re-running against
//! unchanged inputs produces byte-identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`overview`] | Extracts `- **Term**: desc` bullets from the README feature section |
//! | [`components`] | Counts regular files under the fixed set of component directories |
//! | [`perf`] | Discovers and summarizes `testcases_*.json` perf manifests |
//! | [`builder`] | Composes the three extractions into [`builder::DemoData`] and writes the JSON |
//! | [`output`] | CLI summary formatting — pure `format_*` functions plus print wrappers |
//!
//! # Design Decisions
//!
//! ## Explicit Pair List, Not a Map
//!
//! The component configuration is an ordered slice of `(name, description)`
//! pairs rather than a map type. Output order is part of the contract — the
//! web page renders components in this order and builds must be
//! deterministic — so the configuration carries its order explicitly.
//!
//! ## Fatal Means Fatal
//!
//! Missing inputs that are legitimately optional (no marker section in the
//! README, absent component directory, absent perf directory) degrade to
//! empty or zero values. Everything else — unreadable directories, malformed
//! manifest JSON, a write failure — aborts the run via [`builder::BuildError`].
//! There is no partial-output mode and no retry.
//!
//! ## Symlinks Are Not Followed
//!
//! File counting uses walkdir with default settings: a symlink is neither
//! traversed nor counted as a regular file. The counts are a coarse size
//! metric for a demo page, so the simpler policy wins.

pub mod builder;
pub mod components;
pub mod output;
pub mod overview;
pub mod perf;
