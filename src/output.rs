//! CLI output formatting.
//!
//! Output is information-centric: each section leads with the semantic
//! identity of what was found (bullet text, component name, profile name)
//! with counts as secondary detail. The `format_*` function returns
//! `Vec<String>` and is pure — no I/O — so tests can assert on exact lines;
//! the `print_*` wrapper writes to stdout.
//!
//! ```text
//! Overview (2 bullets)
//!     001 cuPHY: Ultra-fast GPU PHY layer
//!     002 cuMAC: GPU scheduler acceleration
//!
//! Components
//!     cuPHY (312 files)
//!         GPU-accelerated 5G PHY
//!     cuMAC (0 files)
//!         GPU-accelerated MAC scheduler
//!
//! Perf profiles
//!     testcases_cuphy (12 groups, 48 testcases)
//!         Scenarios: TC2001, TC2002, TC2003, TC2004
//! ```

use crate::builder::DemoData;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the build summary as display lines.
pub fn format_build_output(data: &DemoData) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Overview ({} bullets)", data.overview.len()));
    for (i, bullet) in data.overview.iter().enumerate() {
        lines.push(format!("    {} {}", format_index(i + 1), bullet));
    }

    lines.push(String::new());
    lines.push("Components".to_string());
    for stat in &data.components {
        lines.push(format!("    {} ({} files)", stat.name, stat.file_count));
        lines.push(format!("        {}", stat.description));
    }

    if !data.perf_profiles.is_empty() {
        lines.push(String::new());
        lines.push("Perf profiles".to_string());
        for profile in &data.perf_profiles {
            lines.push(format!(
                "    {} ({} groups, {} testcases)",
                profile.name, profile.groups, profile.num_testcases
            ));
            if !profile.sample_scenarios.is_empty() {
                lines.push(format!(
                    "        Scenarios: {}",
                    profile.sample_scenarios.join(", ")
                ));
            }
        }
    }

    lines
}

/// Print the build summary to stdout.
pub fn print_build_output(data: &DemoData) {
    for line in format_build_output(data) {
        println!("{}", line);
    }
}
