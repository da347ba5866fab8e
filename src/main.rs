use aerial_showcase::{builder, output};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "aerial-showcase")]
#[command(about = "Build the demo-data JSON for the Aerial SDK web showcase")]
#[command(long_about = "\
Build the demo-data JSON for the Aerial SDK web showcase

Your repository checkout is the data source. The builder extracts three
independent sections and aggregates them into a single JSON document:

  README.md          feature bullets from the SDK overview section
  component dirs     recursive file counts for cuPHY, cuMAC, pyaerial,
                     testBenches, testVectors and 5GModel
  testBenches/perf/  group/testcase summaries of testcases_*.json manifests

Missing optional inputs degrade gracefully (empty overview, zero counts,
no profiles); unreadable directories and malformed manifest JSON abort the
build with no output written.")]
#[command(version = version_string())]
struct Cli {
    /// Repository root to scan
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Output file, resolved relative to --root unless absolute
    #[arg(long, default_value = builder::DEFAULT_OUTPUT, global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build demo data and write the output JSON
    Build,
    /// Build demo data and print the summary without writing
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let output_path = if cli.output.is_absolute() {
        cli.output.clone()
    } else {
        cli.root.join(&cli.output)
    };

    match cli.command {
        Command::Build => {
            let data = builder::build(&cli.root)?;
            output::print_build_output(&data);
            builder::write_output(&data, &output_path)?;
            println!("Wrote {}", display_path(&output_path, &cli.root));
        }
        Command::Check => {
            let data = builder::build(&cli.root)?;
            output::print_build_output(&data);
        }
    }

    Ok(())
}

/// Show the output path relative to the root where possible.
fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
