//! cqcfg — generate the host's app.json descriptor from a plugin manifest
//!
//! Reads `cqplug.yaml` from the plugin directory and writes the `app.json`
//! the host expects next to the plugin library. With `-c`, the git commit
//! count of the plugin repository is added to the sequence version.

use std::path::{Path, PathBuf};
use std::process::Command;

use clap::Parser;

use cqplug::appinfo::Manifest;
use cqplug::errors::ManifestError;

#[derive(Parser)]
#[command(name = "cqcfg")]
#[command(about = "Generate app.json from a cqplug.yaml manifest", long_about = None)]
struct Cli {
    /// Plugin directory containing cqplug.yaml
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Add the git commit count to the sequence version
    #[arg(short = 'c', long)]
    count_commits: bool,

    /// Output file
    #[arg(short, long, default_value = "app.json")]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ManifestError> {
    let manifest = Manifest::from_file(cli.dir.join("cqplug.yaml"))?;

    let extra_seq = if cli.count_commits {
        commit_count(&cli.dir).unwrap_or_else(|err| {
            tracing::warn!("could not count git commits: {}", err);
            0
        })
    } else {
        0
    };

    let app = manifest.to_app_json(extra_seq)?;
    let json = serde_json::to_string_pretty(&app)?;
    std::fs::write(&cli.output, json)?;

    tracing::info!(
        "wrote {} for {} v{}:{}",
        cli.output.display(),
        manifest.app_id,
        app.version,
        app.version_id
    );
    Ok(())
}

/// Commit count of the repository at `dir`.
fn commit_count(dir: &Path) -> Result<i32, std::io::Error> {
    let out = Command::new("git")
        .args(["rev-list", "--all", "--count"])
        .current_dir(dir)
        .output()?;
    if !out.status.success() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "git rev-list failed",
        ));
    }
    String::from_utf8_lossy(&out.stdout)
        .trim()
        .parse::<i32>()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
}
