use anyhow::Result;
use std::collections::BTreeSet;
use std::path::Path;
use tree_sitter::Node as TSNode;

use super::common::{extract_text, TreeSitterParser};
use super::ClassDependencies;

/// Top-level declaration kinds that can be a file's primary type.
const TYPE_DECLARATION_KINDS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "annotation_type_declaration",
    "record_declaration",
];

/// Extracts the primary type declaration and its structural dependencies
/// from a single Java source file.
pub struct JavaSourceParser;

impl JavaSourceParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one file.
    ///
    /// Returns `Ok(None)` when the file has no primary declaration (no
    /// top-level type named after the file) or when the primary declaration
    /// is not a class or interface. Returns `Err` on I/O failure or when the
    /// tree contains syntax errors; the caller decides whether that aborts
    /// anything (the analyzer logs and skips).
    pub fn parse_file(&self, file_path: &Path) -> Result<Option<ClassDependencies>> {
        let source = TreeSitterParser::read_source(file_path)?;
        let mut parser = TreeSitterParser::new(tree_sitter_java::language())?;
        let tree = parser.parse_source(&source, file_path)?;

        let root = tree.root_node();
        if root.has_error() {
            anyhow::bail!("syntax errors in {}", file_path.display());
        }

        let stem = file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        let source_bytes = source.as_bytes();

        Ok(self
            .primary_declaration(&root, source_bytes, stem)
            .map(|declaration| {
                let mut depends_on = BTreeSet::new();
                collect_dependencies(&declaration, source_bytes, &mut depends_on);
                ClassDependencies {
                    name: stem.to_string(),
                    depends_on,
                }
            }))
    }

    /// Locate the top-level type declaration whose name matches the file
    /// stem (the Java primary type). Primary enums, annotations, and records
    /// are rejected; only classes and interfaces carry dependencies here.
    fn primary_declaration<'a>(
        &self,
        root: &TSNode<'a>,
        source: &[u8],
        stem: &str,
    ) -> Option<TSNode<'a>> {
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            if !TYPE_DECLARATION_KINDS.contains(&child.kind()) {
                continue;
            }
            let name = child
                .child_by_field_name("name")
                .map(|n| extract_text(&n, source))
                .unwrap_or_default();
            if name != stem {
                continue;
            }
            return match child.kind() {
                "class_declaration" | "interface_declaration" => Some(child),
                _ => None,
            };
        }
        None
    }
}

impl Default for JavaSourceParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk the whole declaration subtree, collecting the declared type of every
/// field and every method parameter. Members of nested and inner types are
/// included because the walk is find-all, not limited to the immediate body.
fn collect_dependencies(node: &TSNode, source: &[u8], deps: &mut BTreeSet<String>) {
    match node.kind() {
        "field_declaration" => {
            if let Some(ty) = node.child_by_field_name("type") {
                push_type(&ty, source, deps);
            }
        }
        "method_declaration" => {
            if let Some(params) = node.child_by_field_name("parameters") {
                let mut cursor = params.walk();
                for param in params.named_children(&mut cursor) {
                    match param.kind() {
                        "formal_parameter" => {
                            if let Some(ty) = param.child_by_field_name("type") {
                                push_type(&ty, source, deps);
                            }
                        }
                        "spread_parameter" => {
                            // Varargs: the element type is the first named
                            // child that is not a modifier or declarator.
                            let mut inner = param.walk();
                            let ty = param.named_children(&mut inner).find(|c| {
                                c.kind() != "modifiers" && c.kind() != "variable_declarator"
                            });
                            if let Some(ty) = ty {
                                push_type(&ty, source, deps);
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_dependencies(&child, source, deps);
    }
}

fn push_type(node: &TSNode, source: &[u8], deps: &mut BTreeSet<String>) {
    let name = raw_type_name(node, source);
    if !name.is_empty() {
        deps.insert(name);
    }
}

/// Reduce a type node to its raw name: generic arguments and array markers
/// are stripped (`List<Foo>` becomes `List`, `Bar[]` becomes `Bar`), while
/// qualified names keep their dots as written.
fn raw_type_name(node: &TSNode, source: &[u8]) -> String {
    match node.kind() {
        "generic_type" => node
            .named_child(0)
            .map(|inner| raw_type_name(&inner, source))
            .unwrap_or_default(),
        "array_type" => node
            .child_by_field_name("element")
            .map(|inner| raw_type_name(&inner, source))
            .unwrap_or_default(),
        _ => extract_text(node, source).trim().to_string(),
    }
}
