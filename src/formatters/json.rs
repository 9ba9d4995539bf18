use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::core::{ClassEdge, ClassGraph, ClassNode};

/// Wire shape of the serialized graph: `{"nodes": [...], "edges": [...]}`.
#[derive(Serialize)]
struct GraphPayload<'a> {
    nodes: Vec<&'a ClassNode>,
    edges: Vec<&'a ClassEdge>,
}

/// Serializes a class graph to the `{nodes, edges}` JSON payload.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn format_to_file(&self, graph: &ClassGraph, output_path: &Path) -> Result<()> {
        let json_content = self.format_graph(graph)?;
        fs::write(output_path, json_content)?;
        Ok(())
    }

    pub fn format_graph(&self, graph: &ClassGraph) -> Result<String> {
        let payload = GraphPayload {
            nodes: graph.node_weights().collect(),
            edges: graph.edge_references().map(|e| e.weight()).collect(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&payload)?
        } else {
            serde_json::to_string(&payload)?
        };
        Ok(json)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
