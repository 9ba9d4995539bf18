use jdepgraph::core::{DependencyMap, GraphAssembler};
use jdepgraph::formatters::JsonFormatter;
use serde_json::Value;
use std::collections::BTreeSet;

fn sample_graph() -> jdepgraph::core::ClassGraph {
    let mut map = DependencyMap::new();
    map.insert(
        "UserController".to_string(),
        BTreeSet::from(["UserService".to_string()]),
    );
    map.insert(
        "UserService".to_string(),
        BTreeSet::from(["String".to_string()]),
    );
    GraphAssembler::assemble(&map)
}

#[test]
fn json_payload_has_nodes_and_edges() {
    let graph = sample_graph();
    let json = JsonFormatter::new().format_graph(&graph).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    let nodes = value["nodes"].as_array().unwrap();
    let edges = value["edges"].as_array().unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(edges.len(), 1);

    for node in nodes {
        assert!(node["id"].is_string());
        assert!(node["name"].is_string());
        assert!(node["kind"].is_string());
    }

    assert_eq!(edges[0]["from"], "UserController");
    assert_eq!(edges[0]["to"], "UserService");
}

#[test]
fn kinds_serialize_in_screaming_case() {
    let graph = sample_graph();
    let json = JsonFormatter::new().format_graph(&graph).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    let kinds: Vec<&str> = value["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["kind"].as_str().unwrap())
        .collect();
    assert!(kinds.contains(&"CONTROLLER"));
    assert!(kinds.contains(&"SERVICE"));
}

#[test]
fn pretty_output_parses_to_same_value() {
    let graph = sample_graph();
    let compact = JsonFormatter::new().format_graph(&graph).unwrap();
    let pretty = JsonFormatter::new()
        .with_pretty(true)
        .format_graph(&graph)
        .unwrap();

    let a: Value = serde_json::from_str(&compact).unwrap();
    let b: Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(a, b);
}

#[test]
fn format_to_file_writes_output() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("graph.json");

    let graph = sample_graph();
    JsonFormatter::new().format_to_file(&graph, &out).unwrap();

    let value: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert!(value["nodes"].is_array());
}
