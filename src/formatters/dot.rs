use anyhow::Result;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core::ClassGraph;

/// Renders a class graph as Graphviz DOT, one node per declared type labeled
/// with its classified kind.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_to_file(&self, graph: &ClassGraph, output_path: &Path) -> Result<()> {
        let dot_content = self.format_graph(graph);
        fs::write(output_path, dot_content)?;
        Ok(())
    }

    pub fn format_graph(&self, graph: &ClassGraph) -> String {
        let mut out = String::new();
        out.push_str("digraph classes {\n");
        out.push_str("    node [shape=box];\n");

        for node in graph.node_weights() {
            let _ = writeln!(
                out,
                "    \"{}\" [label=\"{}\\n({})\"];",
                escape(&node.name),
                escape(&node.name),
                node.kind.as_str()
            );
        }

        for edge in graph.edge_references() {
            let weight = edge.weight();
            let _ = writeln!(
                out,
                "    \"{}\" -> \"{}\";",
                escape(&weight.from),
                escape(&weight.to)
            );
        }

        out.push_str("}\n");
        out
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}
