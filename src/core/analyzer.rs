use log::{debug, warn};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use super::{AnalyzerError, JavaFileScanner};
use crate::parsers::JavaSourceParser;

/// Mapping from each primary type name to the set of type names it references
/// through field declarations and method parameters.
///
/// Keys are unique per project: when two files declare the same primary type,
/// the entry parsed last wins and replaces the earlier one wholesale. Values
/// are simple name strings as written in source, deduplicated but not
/// resolved, so dependencies on types outside the project survive here and
/// are only filtered out at graph assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    entries: HashMap<String, BTreeSet<String>>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold per-file entries into a map, overwriting on duplicate names.
    /// The last entry in `entries` wins, so the caller's ordering decides
    /// collision outcomes.
    pub fn from_entries(entries: Vec<(String, BTreeSet<String>)>) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for (name, deps) in entries {
            map.insert(name, deps);
        }
        Self { entries: map }
    }

    pub fn insert(&mut self, name: String, deps: BTreeSet<String>) {
        self.entries.insert(name, deps);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(name)
    }

    /// Type names in lexicographic order, for reproducible iteration.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Walks a Java source tree and extracts the per-class dependency map.
pub struct SourceAnalyzer {
    scanner: JavaFileScanner,
    parser: JavaSourceParser,
}

impl SourceAnalyzer {
    pub fn new() -> Self {
        Self {
            scanner: JavaFileScanner::new(),
            parser: JavaSourceParser::new(),
        }
    }

    /// Process files in sorted path order so that duplicate primary-type
    /// collisions resolve deterministically.
    pub fn with_stable_order(mut self, stable_order: bool) -> Self {
        self.scanner = self.scanner.with_stable_order(stable_order);
        self
    }

    /// Analyze every `.java` file under `root`.
    ///
    /// Fails only when the root itself is unreadable. Files that cannot be
    /// read or contain syntax errors are logged and skipped; files whose
    /// primary declaration is missing or not a class-or-interface contribute
    /// nothing.
    pub fn analyze(&self, root: &Path) -> Result<DependencyMap, AnalyzerError> {
        let files = self.scanner.scan(root)?;
        debug!("found {} java files under {}", files.len(), root.display());

        let mut entries = Vec::with_capacity(files.len());

        for path in &files {
            match self.parser.parse_file(path) {
                Ok(Some(class)) => {
                    debug!(
                        "{}: {} depends on {} types",
                        path.display(),
                        class.name,
                        class.depends_on.len()
                    );
                    entries.push((class.name, class.depends_on));
                }
                Ok(None) => {
                    debug!(
                        "{}: no primary class or interface declaration, skipping",
                        path.display()
                    );
                }
                Err(err) => {
                    warn!("failed to parse {}: {err}", path.display());
                }
            }
        }

        Ok(DependencyMap::from_entries(entries))
    }
}

impl Default for SourceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
