//! README overview extraction.
//!
//! The showcase landing page leads with the feature bullets from the SDK
//! README. This module pulls them out of the raw markdown: it finds the
//! section that opens with the fixed marker line, then captures every
//! `- **Term**: description` bullet until the next `### ` heading.
//!
//! ```text
//! The **Aerial CUDA-Accelerated RAN** SDK includes:   ← marker
//!
//! - **cuPHY**: Ultra-fast GPU PHY layer               ← captured
//! - **cuMAC**: GPU scheduler acceleration             ← captured
//!
//! ### Getting Started                                 ← stops capture
//! ```
//!
//! Bullets are rewritten from markdown bold markup to plain `Term: rest`
//! form for display. A README without the marker yields no bullets — the
//! page simply renders an empty overview section.

/// Section heading that opens the feature list in the SDK README.
pub const OVERVIEW_MARKER: &str = "The **Aerial CUDA-Accelerated RAN** SDK includes:";

/// Extract overview bullets from README text, in document order.
///
/// Capture starts after the line whose trimmed content equals
/// [`OVERVIEW_MARKER`] and stops at the first `### ` heading. Only lines
/// starting with `- **` are captured; each is rewritten by
/// [`rewrite_bullet`]. Returns an empty vec when the marker is absent.
pub fn extract_overview(readme: &str) -> Vec<String> {
    let mut bullets = Vec::new();
    let mut in_section = false;

    for line in readme.lines() {
        if line.trim() == OVERVIEW_MARKER {
            in_section = true;
            continue;
        }
        if in_section && line.starts_with("### ") {
            break;
        }
        if in_section && line.starts_with("- **") {
            bullets.push(rewrite_bullet(line));
        }
    }

    bullets
}

/// Rewrite `- **Term**: rest` as `Term: rest`, trimming the result.
///
/// One optional space after the colon is consumed so `**X**: y` and
/// `**X**:y` both produce `X: y`. A bullet without the closing `**:`
/// (or with an empty term) is returned trimmed but otherwise unchanged.
fn rewrite_bullet(line: &str) -> String {
    if let Some(rest) = line.strip_prefix("- **")
        && let Some(close) = rest.find("**:")
        && close > 0
    {
        let term = &rest[..close];
        let tail = &rest[close + 3..];
        let tail = tail.strip_prefix(' ').unwrap_or(tail);
        return format!("{term}: {tail}").trim().to_string();
    }
    line.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readme_with(body: &str) -> String {
        format!(
            "# Aerial SDK\n\nIntro paragraph.\n\n{}\n\n{}\n",
            OVERVIEW_MARKER, body
        )
    }

    #[test]
    fn captures_bullets_after_marker() {
        let readme = readme_with(
            "- **cuPHY**: Ultra-fast GPU PHY layer\n\
             - **cuMAC**: GPU scheduler acceleration",
        );
        let bullets = extract_overview(&readme);
        assert_eq!(
            bullets,
            vec![
                "cuPHY: Ultra-fast GPU PHY layer",
                "cuMAC: GPU scheduler acceleration",
            ]
        );
    }

    #[test]
    fn document_order_preserved() {
        let readme = readme_with(
            "- **Zeta**: last alphabetically, first in doc\n\
             - **Alpha**: first alphabetically, second in doc",
        );
        let bullets = extract_overview(&readme);
        assert!(bullets[0].starts_with("Zeta:"));
        assert!(bullets[1].starts_with("Alpha:"));
    }

    #[test]
    fn level_three_heading_stops_capture() {
        let readme = readme_with(
            "- **cuPHY**: PHY layer\n\
             \n\
             ### Getting Started\n\
             \n\
             - **Stray**: after the heading, not captured",
        );
        let bullets = extract_overview(&readme);
        assert_eq!(bullets, vec!["cuPHY: PHY layer"]);
    }

    #[test]
    fn missing_marker_yields_empty() {
        let readme = "# Some README\n\n- **cuPHY**: never captured\n";
        assert!(extract_overview(readme).is_empty());
    }

    #[test]
    fn non_bullet_lines_skipped() {
        let readme = readme_with(
            "Some prose between marker and bullets.\n\
             - **cuPHY**: PHY layer\n\
             - plain bullet without bold markup\n\
             - **cuMAC**: scheduler",
        );
        let bullets = extract_overview(&readme);
        assert_eq!(bullets, vec!["cuPHY: PHY layer", "cuMAC: scheduler"]);
    }

    #[test]
    fn marker_line_matched_with_surrounding_whitespace() {
        let readme = format!("  {}  \n- **X**: y\n", OVERVIEW_MARKER);
        assert_eq!(extract_overview(&readme), vec!["X: y"]);
    }

    #[test]
    fn rewrite_strips_bold_markup() {
        assert_eq!(rewrite_bullet("- **cuPHY**: GPU PHY"), "cuPHY: GPU PHY");
    }

    #[test]
    fn rewrite_handles_missing_space_after_colon() {
        assert_eq!(rewrite_bullet("- **X**:y"), "X: y");
    }

    #[test]
    fn rewrite_trims_trailing_whitespace() {
        assert_eq!(rewrite_bullet("- **X**: y  "), "X: y");
    }

    #[test]
    fn rewrite_leaves_malformed_bullet_unchanged() {
        // No closing `**:` — substitution is a no-op apart from trimming
        assert_eq!(rewrite_bullet("- **cuPHY** GPU PHY "), "- **cuPHY** GPU PHY");
    }

    #[test]
    fn rewrite_keeps_inner_bold_in_rest() {
        assert_eq!(
            rewrite_bullet("- **cuPHY**: uses **CUDA** kernels"),
            "cuPHY: uses **CUDA** kernels"
        );
    }
}
