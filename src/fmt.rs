//! Indented rendering of derivation trees.
//!
//! Consumes nothing but the "label + ordered children" surface of
//! [`Node`], so it stays independent of how the parser built the tree.

use std::fmt::{self, Display};

use crate::tree::Node;

const INDENT: &str = "  ";

struct Formatter {
    buffer: String,
    indent_level: usize,
}

impl Formatter {
    fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
        }
    }

    fn write_line(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn finish(self) -> String {
        self.buffer
    }
}

/// Render a tree as one label per line, children indented below their
/// parent. Placeholder nodes from error recovery are marked.
pub fn render(node: &Node) -> String {
    let mut formatter = Formatter::new();
    render_node(node, &mut formatter);
    formatter.finish()
}

fn render_node(node: &Node, fmt: &mut Formatter) {
    if node.is_error() {
        fmt.write_line(&format!("<missing {}>", node.label));
    } else {
        fmt.write_line(&node.label);
    }
    fmt.indent_level += 1;
    for child in &node.children {
        render_node(child, fmt);
    }
    fmt.indent_level -= 1;
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
