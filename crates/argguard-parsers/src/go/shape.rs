//! Closed description of a parameter's declared type.
//!
//! Lowering turns a tree-sitter type node into a [`TypeShape`]; everything
//! downstream (see [`crate::extract`]) works on the shape alone.

use serde::Serialize;
use tree_sitter::Node;

use crate::treesitter::{first_type_child, node_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeShape {
    /// `T`
    Ident(String),
    /// `alias.T`
    Qualified { alias: String, name: String },
    /// `*X`
    Pointer(Box<TypeShape>),
    /// `[]X` or `[N]X`
    Array(Box<TypeShape>),
    Unsupported(UnsupportedKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedKind {
    Map,
    Variadic,
    Function,
    Channel,
    Interface,
    Struct,
    Generic,
    Other,
}

impl UnsupportedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnsupportedKind::Map => "map",
            UnsupportedKind::Variadic => "variadic",
            UnsupportedKind::Function => "function",
            UnsupportedKind::Channel => "channel",
            UnsupportedKind::Interface => "interface",
            UnsupportedKind::Struct => "struct",
            UnsupportedKind::Generic => "generic",
            UnsupportedKind::Other => "other",
        }
    }
}

impl std::fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TypeShape {
    pub fn ident(name: &str) -> Self {
        TypeShape::Ident(name.to_string())
    }

    pub fn qualified(alias: &str, name: &str) -> Self {
        TypeShape::Qualified {
            alias: alias.to_string(),
            name: name.to_string(),
        }
    }

    pub fn pointer(inner: TypeShape) -> Self {
        TypeShape::Pointer(Box::new(inner))
    }

    pub fn array(element: TypeShape) -> Self {
        TypeShape::Array(Box::new(element))
    }

    /// Lower a tree-sitter Go type node.
    pub fn lower(node: Node<'_>, source: &[u8]) -> Self {
        match node.kind() {
            "type_identifier" | "identifier" => TypeShape::ident(node_text(node, source)),
            "qualified_type" => {
                let package = node.child_by_field_name("package");
                let name = node.child_by_field_name("name");
                match (package, name) {
                    (Some(p), Some(n)) => {
                        TypeShape::qualified(node_text(p, source), node_text(n, source))
                    }
                    _ => TypeShape::Unsupported(UnsupportedKind::Other),
                }
            }
            "pointer_type" => match first_type_child(node) {
                Some(inner) => TypeShape::pointer(TypeShape::lower(inner, source)),
                None => TypeShape::Unsupported(UnsupportedKind::Other),
            },
            "slice_type" | "array_type" | "implicit_length_array_type" => {
                match node.child_by_field_name("element") {
                    Some(element) => TypeShape::array(TypeShape::lower(element, source)),
                    None => TypeShape::Unsupported(UnsupportedKind::Other),
                }
            }
            "parenthesized_type" => match first_type_child(node) {
                Some(inner) => TypeShape::lower(inner, source),
                None => TypeShape::Unsupported(UnsupportedKind::Other),
            },
            "map_type" => TypeShape::Unsupported(UnsupportedKind::Map),
            "channel_type" => TypeShape::Unsupported(UnsupportedKind::Channel),
            "function_type" => TypeShape::Unsupported(UnsupportedKind::Function),
            "interface_type" => TypeShape::Unsupported(UnsupportedKind::Interface),
            "struct_type" => TypeShape::Unsupported(UnsupportedKind::Struct),
            "generic_type" => TypeShape::Unsupported(UnsupportedKind::Generic),
            _ => TypeShape::Unsupported(UnsupportedKind::Other),
        }
    }

    pub fn is_supported(&self) -> bool {
        crate::extract::reduce(self).is_some()
    }
}
