//! Java parsing on top of tree-sitter-java.

use tree_sitter::{Node, Parser, Tree};

/// A reusable Java parser.
pub struct JavaParser {
    parser: Parser,
}

/// The syntax tree produced for one source file.
pub struct ParseResult {
    pub tree: Tree,
}

impl ParseResult {
    /// The first `ERROR` or `MISSING` node in source order, if any.
    pub fn first_error(&self) -> Option<Node<'_>> {
        first_error_node(self.tree.root_node())
    }
}

/// Pre-order search that only descends into subtrees flagged `has_error`.
fn first_error_node(root: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

impl Default for JavaParser {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaParser {
    pub fn new() -> Self {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .expect("tree-sitter-java grammar is ABI compatible with tree-sitter");
        Self { parser }
    }

    /// Parses `source`. Returns `None` only if tree-sitter gives up entirely;
    /// malformed input still yields a tree, see [`ParseResult::first_error`].
    pub fn parse(&mut self, source: &str) -> Option<ParseResult> {
        self.parser
            .parse(source, None)
            .map(|tree| ParseResult { tree })
    }
}
