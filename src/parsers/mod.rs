pub mod common;
pub mod java;

use std::collections::BTreeSet;

pub use java::JavaSourceParser;

/// Per-file extraction result: the primary type's name and the set of type
/// names referenced by its fields and method parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDependencies {
    pub name: String,
    pub depends_on: BTreeSet<String>,
}
