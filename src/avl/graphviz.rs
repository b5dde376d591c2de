//! Graphviz export for inspecting tree shape.
//!
//! Every node is declared with its key as label. Left edges are blue, right
//! edges are red, and a missing child is drawn as an invisible placeholder so
//! that a lone child still renders on the correct side.

extern crate alloc;
use alloc::string::String;

use core::fmt::{self, Display, Write};

use allocator_api2::alloc::Allocator;

use super::node::Node;
use super::AvlTree;

impl<T: Display, A: Allocator + Clone> AvlTree<T, A> {
    /// Render the tree as a Graphviz `digraph`.
    ///
    /// Nodes are numbered in pre-order from 0, placeholders included. An
    /// empty tree renders as the empty string.
    ///
    /// # Errors
    ///
    /// Returns an error if formatting a key fails.
    pub fn to_graphviz(&self) -> Result<String, fmt::Error> {
        let Some(root) = self.root() else {
            return Ok(String::new());
        };

        let mut nodes = String::new();
        let mut edges = String::from("\t\"Root\" -> 0;\n");
        let mut next_id = 0;
        describe(root, &mut nodes, &mut edges, &mut next_id)?;

        let mut dot = String::from("digraph {\n");
        dot.push_str(&nodes);
        dot.push_str(&edges);
        dot.push('}');
        Ok(dot)
    }

    /// Write the Graphviz rendering of the tree to `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error if formatting a key or writing to `sink` fails.
    #[cfg(feature = "std")]
    pub fn write_graphviz<W: std::io::Write>(&self, sink: &mut W) -> std::io::Result<()> {
        let dot = self.to_graphviz().map_err(std::io::Error::other)?;
        sink.write_all(dot.as_bytes())
    }
}

fn describe<T: Display, A: Allocator>(
    node: &Node<T, A>,
    nodes: &mut String,
    edges: &mut String,
    next_id: &mut usize,
) -> fmt::Result {
    let id = *next_id;
    writeln!(nodes, "\t{id} [label=\"{}\"];", node.key())?;

    for (child, colour) in [(node.left(), "blue"), (node.right(), "red")] {
        *next_id += 1;
        let child_id = *next_id;
        match child {
            Some(child) => {
                writeln!(edges, "\t{id} -> {child_id} [color={colour}];")?;
                describe(child, nodes, edges, next_id)?;
            }
            None => {
                writeln!(nodes, "\t{child_id} [label=nill, style = invis];")?;
                writeln!(edges, "\t{id} -> {child_id} [ style = invis];")?;
            }
        }
    }

    Ok(())
}
