//! The naming policy and the first-violation checker.

use std::fmt;

use casecheck_text_size::TextRange;

use crate::case_style::CaseStyle;
use crate::declarations::{Declaration, DeclarationKind, Declarations};

/// Order in which the categories of a unit are checked.
pub const CHECK_ORDER: [DeclarationKind; 4] = [
    DeclarationKind::Method,
    DeclarationKind::Variable,
    DeclarationKind::Parameter,
    DeclarationKind::Type,
];

/// The style every declaration of `kind` must use.
pub const fn expected_style(kind: DeclarationKind) -> CaseStyle {
    match kind {
        DeclarationKind::Type => CaseStyle::PascalCase,
        DeclarationKind::Method => CaseStyle::SnakeCase,
        DeclarationKind::Variable | DeclarationKind::Parameter => CaseStyle::CamelCase,
    }
}

/// A single name that does not follow the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleViolation {
    pub kind: DeclarationKind,
    pub name: String,
    /// The unit's primary type name, see [`Declarations::primary_type_name`].
    pub enclosing_type_name: String,
    /// Range of the offending identifier. Empty at offset 0 when a unit
    /// without any type fails the class name check.
    pub range: TextRange,
}

impl StyleViolation {
    fn new(declaration: &Declaration, enclosing_type_name: &str) -> Self {
        Self {
            kind: declaration.kind,
            name: declaration.name.clone(),
            enclosing_type_name: enclosing_type_name.to_string(),
            range: declaration.range,
        }
    }

    pub fn message(&self) -> String {
        let class_name = &self.enclosing_type_name;
        match self.kind {
            DeclarationKind::Method => format!(
                "Code style violated in method '{}' of class '{class_name}'. Method names should only use snake_case.",
                self.name
            ),
            DeclarationKind::Variable => format!(
                "Code style violated in variable '{}' of class '{class_name}'. Variable names should only use camelCase.",
                self.name
            ),
            DeclarationKind::Parameter => format!(
                "Code style violated in parameter '{}' of class '{class_name}'. Parameter names should only use camelCase.",
                self.name
            ),
            DeclarationKind::Type => format!(
                "Code style violated in class '{class_name}'. Class names should only use PascalCase."
            ),
        }
    }
}

impl fmt::Display for StyleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for StyleViolation {}

/// Check a unit's declarations, stopping at the first violation.
pub fn check_declarations(declarations: &Declarations) -> Result<(), StyleViolation> {
    for kind in CHECK_ORDER {
        check_category(declarations, kind)?;
    }
    Ok(())
}

fn check_category(declarations: &Declarations, kind: DeclarationKind) -> Result<(), StyleViolation> {
    let enclosing = declarations.primary_type_name();
    let style = expected_style(kind);

    if kind == DeclarationKind::Type {
        // Only the primary type is held to the class naming rule.
        if style.matches(enclosing) {
            return Ok(());
        }
        return Err(match declarations.primary_type() {
            Some(primary) => StyleViolation::new(primary, enclosing),
            None => StyleViolation {
                kind,
                name: String::new(),
                enclosing_type_name: String::new(),
                range: TextRange::default(),
            },
        });
    }

    match declarations
        .of_kind(kind)
        .iter()
        .find(|decl| !style.matches(&decl.name))
    {
        Some(decl) => Err(StyleViolation::new(decl, enclosing)),
        None => Ok(()),
    }
}
