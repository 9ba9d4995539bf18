use serde::{Deserialize, Serialize};

/// Architectural role of a declared type, derived from its name.
///
/// This is a naming-convention heuristic: it never inspects the syntax tree,
/// so a class named `StatusEnum` classifies as `Enum` even though it is not an
/// enum declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Controller,
    Service,
    Repository,
    Dto,
    Enum,
    Interface,
    Annotation,
    Package,
    Class,
}

type Predicate = fn(&str) -> bool;

/// Classification rules, evaluated top to bottom over the lowercased name.
/// Order matters: `MyServiceController` must classify as `Controller`, not
/// `Service`.
const RULES: &[(Predicate, NodeKind)] = &[
    (|n| n.ends_with("controller"), NodeKind::Controller),
    (
        |n| n.ends_with("service") || n.contains(".service"),
        NodeKind::Service,
    ),
    (
        |n| n.ends_with("repository") || n.contains(".repository"),
        NodeKind::Repository,
    ),
    (|n| n.ends_with("dto"), NodeKind::Dto),
    (|n| n.ends_with("enum"), NodeKind::Enum),
    (|n| n.ends_with("interface"), NodeKind::Interface),
    (|n| n.ends_with("annotation"), NodeKind::Annotation),
    (|n| n.contains(".package"), NodeKind::Package),
];

impl NodeKind {
    /// Classify a type name. Total and case-insensitive; names matching no
    /// rule fall back to `Class`.
    pub fn classify(type_name: &str) -> NodeKind {
        let name = type_name.to_lowercase();
        RULES
            .iter()
            .find(|(matches, _)| matches(&name))
            .map(|&(_, kind)| kind)
            .unwrap_or(NodeKind::Class)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Controller => "CONTROLLER",
            NodeKind::Service => "SERVICE",
            NodeKind::Repository => "REPOSITORY",
            NodeKind::Dto => "DTO",
            NodeKind::Enum => "ENUM",
            NodeKind::Interface => "INTERFACE",
            NodeKind::Annotation => "ANNOTATION",
            NodeKind::Package => "PACKAGE",
            NodeKind::Class => "CLASS",
        }
    }
}
