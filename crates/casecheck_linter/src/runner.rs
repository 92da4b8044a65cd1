//! Fail-fast checking of a sequence of Java files.

use std::io;
use std::path::{Path, PathBuf};

use casecheck_java_cst::CstNode;
use casecheck_java_parser::JavaParser;
use casecheck_source_file::{LineIndex, SourceCode, SourceLocation};
use casecheck_text_size::TextSize;
use thiserror::Error;
use tracing::{debug, trace};

use crate::CheckContext;
use crate::declarations::{Declarations, extract_declarations};
use crate::policy::{StyleViolation, check_declarations};

/// Why a file could not be turned into a syntax tree.
#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error("could not read file: {0}")]
    Read(#[from] io::Error),
    #[error("syntax error at {location}")]
    Syntax { location: SourceLocation },
    #[error("parser produced no syntax tree")]
    NoTree,
}

/// The error that ends a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to parse Java file: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        cause: ParseFailure,
    },
    #[error("{violation}")]
    Style {
        path: PathBuf,
        violation: StyleViolation,
        location: SourceLocation,
    },
}

impl RunError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Parse { path, .. } | Self::Style { path, .. } => path,
        }
    }

    pub fn is_style_violation(&self) -> bool {
        matches!(self, Self::Style { .. })
    }
}

/// Outcome of a run in which every file conformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_checked: usize,
}

/// Declarations extracted from one parsed file.
///
/// The syntax tree itself is dropped once extraction finishes.
#[derive(Debug)]
pub struct ExtractedUnit {
    path: PathBuf,
    source: String,
    line_index: LineIndex,
    declarations: Declarations,
}

impl ExtractedUnit {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    pub fn location(&self, offset: TextSize) -> SourceLocation {
        SourceCode::new(&self.source, &self.line_index).line_column(offset)
    }

    /// Apply the naming policy to this unit.
    pub fn check(&self) -> Result<(), RunError> {
        check_declarations(&self.declarations).map_err(|violation| {
            debug!(
                path = %self.path.display(),
                kind = %violation.kind,
                name = %violation.name,
                "naming violation"
            );
            RunError::Style {
                path: self.path.clone(),
                location: self.location(violation.range.start()),
                violation,
            }
        })
    }
}

/// Drives parsing, extraction and checking file by file.
///
/// Files are processed strictly in the order given; the first parse failure
/// or violation ends the run and later files are never read.
pub struct Runner {
    parser: JavaParser,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner {
    pub fn new() -> Self {
        Self {
            parser: JavaParser::new(),
        }
    }

    pub fn run<I, P>(&mut self, paths: I) -> Result<RunSummary, RunError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut summary = RunSummary::default();
        for path in paths {
            self.check_file(path.as_ref())?;
            summary.files_checked += 1;
        }
        debug!(files = summary.files_checked, "all files conform");
        Ok(summary)
    }

    pub fn check_file(&mut self, path: &Path) -> Result<(), RunError> {
        self.extract_file(path)?.check()
    }

    /// Read and parse `path` and collect its declarations.
    pub fn extract_file(&mut self, path: &Path) -> Result<ExtractedUnit, RunError> {
        debug!(path = %path.display(), "checking file");
        let source = std::fs::read_to_string(path).map_err(|err| RunError::Parse {
            path: path.to_path_buf(),
            cause: ParseFailure::Read(err),
        })?;
        self.extract_source(path, source)
    }

    /// Parse `source` as the contents of `path` and collect its declarations.
    pub fn extract_source(
        &mut self,
        path: &Path,
        source: String,
    ) -> Result<ExtractedUnit, RunError> {
        let parse_error = |cause| RunError::Parse {
            path: path.to_path_buf(),
            cause,
        };

        let Some(result) = self.parser.parse(&source) else {
            return Err(parse_error(ParseFailure::NoTree));
        };
        let line_index = LineIndex::from_source_text(&source);

        if let Some(error) = result.first_error() {
            let offset = TextSize::try_from(error.start_byte()).unwrap_or_default();
            let location = SourceCode::new(&source, &line_index).line_column(offset);
            return Err(parse_error(ParseFailure::Syntax { location }));
        }

        let declarations = {
            let ctx = CheckContext::new(&source);
            let root = CstNode::new(result.tree.root_node(), &source);
            extract_declarations(&ctx, &root)
        };
        trace!(
            path = %path.display(),
            types = declarations.types.len(),
            methods = declarations.methods.len(),
            variables = declarations.variables.len(),
            parameters = declarations.parameters.len(),
            primary_type = declarations.primary_type_name(),
            "extracted declarations"
        );

        Ok(ExtractedUnit {
            path: path.to_path_buf(),
            source,
            line_index,
            declarations,
        })
    }
}
