//! # jdepgraph
//!
//! Class-level dependency graph extraction for Java source trees.
//!
//! jdepgraph parses every Java file under a root directory, records which
//! types each primary class or interface structurally depends on (field types
//! and method-parameter types), and assembles a directed graph whose nodes are
//! the project's own type declarations and whose edges are the dependencies
//! that resolve to another type inside the same project.
//!
//! ## Pipeline
//!
//! - **SourceAnalyzer**: directory walk + per-file parse into a
//!   `DependencyMap` (primary type name → referenced type names)
//! - **GraphAssembler**: closed-world node/edge assembly with architectural
//!   role classification by naming convention
//!
//! ## Output Formats
//!
//! - **JSON**: `{nodes, edges}` payload for programmatic consumption
//! - **DOT**: Graphviz rendering for visualization

pub mod core;
pub mod formatters;
pub mod parsers;
