//! casecheck command line entry point.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use casecheck_linter::{RunError, Runner};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod discovery;
mod report;

use cli::{Cli, Command};

/// A name does not follow the convention.
const EXIT_VIOLATION: u8 = 1;
/// A file could not be read or parsed, or the tree could not be walked.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command.unwrap_or_default() {
        Command::Check { root } => check(root),
        Command::Declarations { file } => declarations(&file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report::print_failure(&err);
            let style_violation = err
                .downcast_ref::<RunError>()
                .is_some_and(RunError::is_style_violation);
            ExitCode::from(if style_violation {
                EXIT_VIOLATION
            } else {
                EXIT_ERROR
            })
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn check(root: Option<PathBuf>) -> anyhow::Result<()> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir().context("cannot determine the current directory")?,
    };
    let root = std::path::absolute(&root)
        .with_context(|| format!("cannot resolve {}", root.display()))?;

    let files = discovery::java_files(&root)
        .with_context(|| format!("failed to list Java files under {}", root.display()))?;
    debug!(root = %root.display(), files = files.len(), "discovered Java sources");

    let summary = Runner::new().run(&files)?;
    debug!(files = summary.files_checked, "check passed");
    Ok(())
}

fn declarations(file: &Path) -> anyhow::Result<()> {
    let unit = Runner::new().extract_file(file)?;
    report::print_declarations(&unit);
    Ok(())
}
