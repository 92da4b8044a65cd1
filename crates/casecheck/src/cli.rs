use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "casecheck",
    version,
    about = "Check that Java names follow the project case conventions",
    long_about = "Check that Java names follow the project case conventions.\n\n\
        Classes and interfaces use PascalCase, methods use snake_case, and \
        variables and parameters use camelCase. Checking stops at the first \
        violation."
)]
pub(crate) struct Cli {
    /// Log each file as it is checked
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Check every .java file under ROOT (the default command)
    Check {
        /// Directory to search; defaults to the current directory
        root: Option<PathBuf>,
    },
    /// Print the declarations found in one file and whether each conforms
    Declarations {
        file: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Check { root: None }
    }
}
