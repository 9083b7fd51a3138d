//! keymap-expand: A ZMK keymap layer widener.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use keymap_expand::config::Config;
use keymap_expand::error::ExpandError;
use keymap_expand::transform::Transform;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "keymap-expand", version)]
#[command(about = "Insert filler bindings into the first rows of every keymap layer", long_about = None)]
struct Args {
    /// Keymap file to rewrite in place
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Load settings from this TOML file instead of keymap-expand.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of rows that receive fillers
    #[arg(long, value_name = "N")]
    rows: Option<usize>,

    /// Count rows per value-list rather than once for the whole section
    #[arg(long)]
    per_list: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version come through here on stdout and are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(ExpandError::FileNotFound { path }) => {
            eprintln!("❌ File not found: {}", path.display());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("❌ Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), ExpandError> {
    let mut cfg = Config::load(args.config.as_deref())?;

    // Override config with command line args
    if let Some(rows) = args.rows {
        cfg.row_limit = rows;
    }
    if args.per_list {
        cfg.reset_rows_per_list = true;
    }

    let path = args
        .path
        .unwrap_or_else(|| PathBuf::from(&cfg.default_path));
    let transform = Transform::from_config(&cfg)?;
    let report = transform.run(&path)?;

    let fillers = cfg.insert_tokens.join(" ");
    println!(
        "✓ Normalized {} to &{} ({} replaced)",
        cfg.layout_attribute, cfg.layout_to, report.references
    );
    println!(
        "✓ Added {fillers} to {} of {} rows across {} `{}` lists in: {}",
        report.rows_inserted,
        report.rows_inserted + report.rows_already_present,
        report.lists,
        cfg.list_label,
        path.display()
    );
    Ok(())
}
