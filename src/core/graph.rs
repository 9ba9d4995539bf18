use petgraph::{graph::NodeIndex, Directed, Graph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{DependencyMap, NodeKind};

/// A declared type in the analyzed project.
///
/// `id` is opaque and unique within one run; it carries no meaning across
/// runs and is regenerated on every assembly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
}

/// A directed dependency between two declared types, by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ClassEdge {
    pub from: String,
    pub to: String,
}

pub type ClassGraph = Graph<ClassNode, ClassEdge, Directed>;

/// Turns a [`DependencyMap`] into a class graph.
///
/// Closed-world rule: an edge is emitted only when the dependency target is
/// itself a key of the map. Dependencies on JDK types, third-party types, and
/// primitives are silently dropped. Self-loops are kept.
pub struct GraphAssembler;

impl GraphAssembler {
    /// Pure assembly step; cannot fail. Map keys are visited in sorted order
    /// so node and edge ordering is reproducible for identical input.
    pub fn assemble(deps: &DependencyMap) -> ClassGraph {
        let mut graph = Graph::with_capacity(deps.len(), deps.len());
        let mut node_map: HashMap<&str, NodeIndex> = HashMap::with_capacity(deps.len());

        let names = deps.sorted_names();

        for (seq, &name) in names.iter().enumerate() {
            let node = ClassNode {
                id: format!("n{seq}"),
                name: name.to_string(),
                kind: NodeKind::classify(name),
            };
            let index = graph.add_node(node);
            node_map.insert(name, index);
        }

        for &name in &names {
            let Some(targets) = deps.get(name) else {
                continue;
            };
            for target in targets {
                if let Some(&to_idx) = node_map.get(target.as_str()) {
                    let from_idx = node_map[name];
                    let edge = ClassEdge {
                        from: name.to_string(),
                        to: target.clone(),
                    };
                    graph.add_edge(from_idx, to_idx, edge);
                }
            }
        }

        graph
    }
}
