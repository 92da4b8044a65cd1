//! Naming convention checks for Java sources.
//!
//! The pipeline for one file is: parse, extract declarations
//! ([`extract_declarations`]), check them against the fixed policy
//! ([`check_declarations`]). [`Runner`] applies it to a sequence of files and
//! stops at the first failure.

pub mod case_style;
pub mod declarations;
pub mod policy;
pub mod runner;

pub use case_style::{CaseStyle, is_camel_case, is_pascal_case, is_snake_case};
pub use declarations::{Declaration, DeclarationKind, Declarations, extract_declarations};
pub use policy::{CHECK_ORDER, StyleViolation, check_declarations, expected_style};
pub use runner::{ExtractedUnit, ParseFailure, RunError, RunSummary, Runner};

/// Source text shared by the checks of one file.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    source: &'a str,
}

impl<'a> CheckContext<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }
}
