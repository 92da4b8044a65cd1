//! Declaration extraction.
//!
//! Walks a parsed compilation unit in pre-order and collects every site that
//! introduces a type, method, variable or parameter name, grouped by kind.

use std::fmt;

use casecheck_java_cst::{CstNode, TreeWalker};
use casecheck_text_size::TextRange;

use crate::CheckContext;

/// The kind of entity a declaration introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// A class or interface.
    Type,
    Method,
    /// A field, local, resource or loop variable.
    Variable,
    /// A method, constructor, lambda or catch parameter.
    Parameter,
}

impl DeclarationKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Type => "class",
            Self::Method => "method",
            Self::Variable => "variable",
            Self::Parameter => "parameter",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named declaration site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub name: String,
    /// Range of the name identifier.
    pub range: TextRange,
}

/// All declarations of one compilation unit, each list in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    pub types: Vec<Declaration>,
    pub methods: Vec<Declaration>,
    pub variables: Vec<Declaration>,
    pub parameters: Vec<Declaration>,
}

impl Declarations {
    pub fn of_kind(&self, kind: DeclarationKind) -> &[Declaration] {
        match kind {
            DeclarationKind::Type => &self.types,
            DeclarationKind::Method => &self.methods,
            DeclarationKind::Variable => &self.variables,
            DeclarationKind::Parameter => &self.parameters,
        }
    }

    /// The first type declared in the unit, if any.
    pub fn primary_type(&self) -> Option<&Declaration> {
        self.types.first()
    }

    /// Name of the first type declared in the unit, or `""` when there is none.
    ///
    /// Every member of the unit is attributed to this name, including members
    /// of nested or sibling types.
    pub fn primary_type_name(&self) -> &str {
        self.primary_type().map_or("", |decl| decl.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.types.len() + self.methods.len() + self.variables.len() + self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every declaration, in source order across kinds.
    pub fn in_source_order(&self) -> Vec<&Declaration> {
        let mut all: Vec<&Declaration> = self
            .types
            .iter()
            .chain(&self.methods)
            .chain(&self.variables)
            .chain(&self.parameters)
            .collect();
        all.sort_by_key(|decl| decl.range.start());
        all
    }

    fn push(&mut self, declaration: Declaration) {
        match declaration.kind {
            DeclarationKind::Type => self.types.push(declaration),
            DeclarationKind::Method => self.methods.push(declaration),
            DeclarationKind::Variable => self.variables.push(declaration),
            DeclarationKind::Parameter => self.parameters.push(declaration),
        }
    }
}

/// Collect the declarations under `root`.
pub fn extract_declarations(ctx: &CheckContext, root: &CstNode) -> Declarations {
    let mut collector = DeclarationCollector::new(ctx);
    for node in TreeWalker::new(root.inner(), ctx.source()) {
        collector.visit(&node);
    }
    collector.declarations
}

struct DeclarationCollector<'a> {
    ctx: &'a CheckContext<'a>,
    declarations: Declarations,
}

impl<'a> DeclarationCollector<'a> {
    fn new(ctx: &'a CheckContext<'a>) -> Self {
        Self {
            ctx,
            declarations: Declarations::default(),
        }
    }

    fn visit(&mut self, node: &CstNode) {
        match node.kind() {
            "class_declaration" | "interface_declaration" => {
                self.record_name_field(DeclarationKind::Type, node);
            }
            "method_declaration" => {
                self.record_name_field(DeclarationKind::Method, node);
            }
            "variable_declarator" => {
                // The declarator of a varargs parameter is recorded by its parent.
                let in_spread = node
                    .parent()
                    .is_some_and(|parent| parent.kind() == "spread_parameter");
                if !in_spread {
                    self.record_name_field(DeclarationKind::Variable, node);
                }
            }
            // try-with-resources declarations and `for (T x : xs)` loop variables
            "resource" | "enhanced_for_statement" => {
                self.record_name_field(DeclarationKind::Variable, node);
            }
            "formal_parameter" | "catch_formal_parameter" => {
                self.record_name_field(DeclarationKind::Parameter, node);
            }
            "spread_parameter" => self.record_spread_parameter(node),
            "lambda_expression" => self.record_lambda_parameters(node),
            _ => {}
        }
    }

    fn record_name_field(&mut self, kind: DeclarationKind, node: &CstNode) {
        if let Some(name) = node.child_by_field_name("name") {
            self.record(kind, &name);
        }
    }

    fn record_spread_parameter(&mut self, node: &CstNode) {
        if let Some(name) = node.child_by_field_name("name") {
            self.record(DeclarationKind::Parameter, &name);
            return;
        }
        if let Some(declarator) = node
            .children()
            .find(|child| child.kind() == "variable_declarator")
        {
            self.record_name_field(DeclarationKind::Parameter, &declarator);
        }
    }

    /// Records `x -> ...` and `(x, y) -> ...`; typed lambda parameters are
    /// `formal_parameter` nodes and are visited on their own.
    fn record_lambda_parameters(&mut self, node: &CstNode) {
        let Some(params) = node.child_by_field_name("parameters") else {
            return;
        };
        match params.kind() {
            "identifier" => self.record(DeclarationKind::Parameter, &params),
            "inferred_parameters" => {
                for param in params.named_children() {
                    self.record(DeclarationKind::Parameter, &param);
                }
            }
            _ => {}
        }
    }

    fn record(&mut self, kind: DeclarationKind, name: &CstNode) {
        let range = name.range();
        self.declarations.push(Declaration {
            kind,
            name: self.ctx.source()[range].to_string(),
            range,
        });
    }
}
