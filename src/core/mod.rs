pub mod analyzer;
pub mod classifier;
pub mod error;
pub mod graph;
pub mod scanner;

pub use analyzer::{DependencyMap, SourceAnalyzer};
pub use classifier::NodeKind;
pub use error::AnalyzerError;
pub use graph::{ClassEdge, ClassGraph, ClassNode, GraphAssembler};
pub use scanner::JavaFileScanner;
