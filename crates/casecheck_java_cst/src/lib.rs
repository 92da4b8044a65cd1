//! Concrete syntax tree helpers over tree-sitter nodes.
//!
//! [`CstNode`] pairs a tree-sitter node with the source it was parsed from so
//! navigation keeps the two together, and [`TreeWalker`] visits a subtree in
//! pre-order (source order).

use casecheck_text_size::{TextRange, TextSize};
use tree_sitter::{Node, TreeCursor};

/// A syntax node together with its source text.
#[derive(Debug, Clone, Copy)]
pub struct CstNode<'a> {
    node: Node<'a>,
    source: &'a str,
}

impl<'a> CstNode<'a> {
    pub fn new(node: Node<'a>, source: &'a str) -> Self {
        Self { node, source }
    }

    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    pub fn inner(&self) -> Node<'a> {
        self.node
    }

    /// Byte range of this node in the source.
    #[allow(clippy::cast_possible_truncation)]
    pub fn range(&self) -> TextRange {
        TextRange::new(
            TextSize::from(self.node.start_byte() as u32),
            TextSize::from(self.node.end_byte() as u32),
        )
    }

    pub fn parent(&self) -> Option<CstNode<'a>> {
        self.node.parent().map(|node| Self::new(node, self.source))
    }

    pub fn child_by_field_name(&self, field: &str) -> Option<CstNode<'a>> {
        self.node
            .child_by_field_name(field)
            .map(|node| Self::new(node, self.source))
    }

    /// All direct children, including anonymous tokens.
    pub fn children(&self) -> std::vec::IntoIter<CstNode<'a>> {
        let mut cursor = self.node.walk();
        self.node
            .children(&mut cursor)
            .map(|node| Self::new(node, self.source))
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// Direct named children only.
    pub fn named_children(&self) -> std::vec::IntoIter<CstNode<'a>> {
        let mut cursor = self.node.walk();
        self.node
            .named_children(&mut cursor)
            .map(|node| Self::new(node, self.source))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

/// Pre-order iterator over a subtree, starting with the root itself.
pub struct TreeWalker<'a> {
    cursor: TreeCursor<'a>,
    source: &'a str,
    done: bool,
}

impl<'a> TreeWalker<'a> {
    pub fn new(root: Node<'a>, source: &'a str) -> Self {
        Self {
            cursor: root.walk(),
            source,
            done: false,
        }
    }
}

impl<'a> Iterator for TreeWalker<'a> {
    type Item = CstNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let node = CstNode::new(self.cursor.node(), self.source);

        if self.cursor.goto_first_child() {
            return Some(node);
        }
        loop {
            if self.cursor.goto_next_sibling() {
                return Some(node);
            }
            // The cursor cannot leave the node it was created from.
            if !self.cursor.goto_parent() {
                self.done = true;
                return Some(node);
            }
        }
    }
}
