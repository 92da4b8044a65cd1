//! Console output.

use casecheck_linter::{ExtractedUnit, ParseFailure, RunError, expected_style};
use colored::Colorize;

/// Print a run-ending error to stderr.
pub(crate) fn print_failure(err: &anyhow::Error) {
    let Some(run_error) = err.downcast_ref::<RunError>() else {
        eprintln!("{}: {err:#}", "error".red().bold());
        return;
    };

    eprintln!("{}: {run_error}", "error".red().bold());
    let location = match run_error {
        RunError::Style { location, .. }
        | RunError::Parse {
            cause: ParseFailure::Syntax { location },
            ..
        } => Some(location),
        RunError::Parse { .. } => None,
    };
    if let Some(location) = location {
        let path = run_error.path().display();
        eprintln!("  {} {path}:{location}", "-->".blue().bold());
    }
    if let RunError::Parse { cause, .. } = run_error {
        eprintln!("  {} {cause}", "=".blue().bold());
    }
}

/// Print every declaration of `unit` with its expected style and verdict.
pub(crate) fn print_declarations(unit: &ExtractedUnit) {
    let declarations = unit.declarations();
    let primary = declarations.primary_type_name();

    println!("{}", unit.path().display().to_string().bold());
    if primary.is_empty() {
        println!("primary type: {}", "(none)".dimmed());
    } else {
        println!("primary type: {primary}");
    }

    for decl in declarations.in_source_order() {
        let style = expected_style(decl.kind);
        let verdict = if style.matches(&decl.name) {
            "ok".green()
        } else {
            "violation".red().bold()
        };
        let location = unit.location(decl.range.start());
        println!(
            "  {:<8} {:<10} {:<32} {:<11} {verdict}",
            location.to_string(),
            decl.kind.label(),
            decl.name,
            style.label(),
        );
    }

    if declarations.is_empty() {
        println!("  {}", "no declarations".dimmed());
    }
}
