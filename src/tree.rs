/*
 * ==========================================================================
 * SCL Parser
 * ==========================================================================
 *
 * File:      tree.rs
 * Purpose:   The labeled parse tree produced by the SCL parser.
 *
 * License:
 * This file is part of the SCL parser project.
 *
 * The SCL parser is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::fmt;

/// A single node of an SCL parse tree.
///
/// Internal nodes carry a semantic tag (`"Program"`, `"DefineStatement"`,
/// ...). Leaves carry the literal value of a consumed token, or a fixed
/// placeholder such as `"Not implemented yet"`.
///
/// Children are **moved** into their parent and never shared, so the whole
/// tree is owned by whoever holds the root.
///
/// # Example
/// ```text
/// Program
///     DefineStatement
///         define
///         x
///         of
///         type
///         integer
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTreeNode {
    label: String,
    children: Vec<ParseTreeNode>,
}

impl ParseTreeNode {
    /// Creates a node with no children.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Creates a node whose children are all leaves, one per value, in
    /// the given order.
    pub fn with_leaves<I, S>(label: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut node = Self::new(label);
        for value in values {
            node.add_child(Self::new(value));
        }
        node
    }

    /// Appends `child` after any existing children.
    pub fn add_child(&mut self, child: ParseTreeNode) {
        self.children.push(child);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[ParseTreeNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Labels of the leaves under this node, left to right.
    ///
    /// For a statement node this reconstructs the consumed token values.
    pub fn leaf_labels(&self) -> Vec<&str> {
        self.nodes()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.label.as_str())
            .collect()
    }

    /// Walks the tree depth-first, pre-order, yielding `(depth, label)`.
    ///
    /// The root has depth `0`. The walk is lazy and borrows the tree, so a
    /// fresh one can be started any number of times.
    pub fn visit(&self) -> Visit<'_> {
        Visit { nodes: self.nodes() }
    }

    fn nodes(&self) -> Nodes<'_> {
        Nodes { stack: vec![(0, self)] }
    }
}

/// Pre-order walk over the nodes themselves.
struct Nodes<'a> {
    stack: Vec<(usize, &'a ParseTreeNode)>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = (usize, &'a ParseTreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Reversed so the leftmost child is popped first.
        for child in node.children.iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}

/// Lazy pre-order traversal returned by [`ParseTreeNode::visit`].
pub struct Visit<'a> {
    nodes: Nodes<'a>,
}

impl<'a> Iterator for Visit<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.nodes.next()?;
        Some((depth, node.label.as_str()))
    }
}

impl fmt::Display for ParseTreeNode {
    /// Renders one label per line, indented four spaces per level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, label) in self.visit() {
            writeln!(f, "{:indent$}{}", "", label, indent = depth * 4)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParseTreeNode {
        let mut root = ParseTreeNode::new("Program");
        root.add_child(ParseTreeNode::with_leaves(
            "SetStatement",
            ["set", "x", "=", "5"],
        ));
        root.add_child(ParseTreeNode::with_leaves("ExitStatement", ["exit"]));
        root
    }

    #[test]
    fn new_node_is_leaf() {
        let node = ParseTreeNode::new("x");
        assert!(node.is_leaf());
        assert_eq!(node.label(), "x");
    }

    #[test]
    fn visit_is_preorder_with_depth() {
        let tree = sample();
        let visited: Vec<_> = tree.visit().collect();
        assert_eq!(
            visited,
            vec![
                (0, "Program"),
                (1, "SetStatement"),
                (2, "set"),
                (2, "x"),
                (2, "="),
                (2, "5"),
                (1, "ExitStatement"),
                (2, "exit"),
            ]
        );
    }

    #[test]
    fn visit_can_restart() {
        let tree = sample();
        let first: Vec<_> = tree.visit().collect();
        let second: Vec<_> = tree.visit().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn leaf_labels_follow_child_order() {
        assert_eq!(sample().leaf_labels(), vec!["set", "x", "=", "5", "exit"]);
    }

    #[test]
    fn display_indents_by_depth() {
        let rendered = sample().to_string();
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("Program"));
        assert_eq!(lines.next(), Some("    SetStatement"));
        assert_eq!(lines.next(), Some("        set"));
    }
}
