mod imports;

use std::path::Path;

use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor, Tree};

use crate::go::{FuncDecl, GoFile, ParamGroup, TypeShape, UnsupportedKind};
use crate::queries;
use argguard_core::types::DeclSite;

use imports::extract_imports;

/// Tree-sitter parser for Go source, holding the compiled capture query.
///
/// A `GoParser` is not `Sync`; give each worker its own.
pub struct GoParser {
    parser: Parser,
    query: Query,
}

impl GoParser {
    pub fn new() -> Result<Self, ParseError> {
        let lang: Language = tree_sitter_go::LANGUAGE.into();
        let mut parser = Parser::new();
        parser
            .set_language(&lang)
            .map_err(|e| ParseError::Language(format!("{e}")))?;
        let query = queries::go_query(&lang).map_err(ParseError::Query)?;
        Ok(Self { parser, query })
    }

    pub fn parse(&mut self, source: &[u8]) -> Result<Tree, ParseError> {
        self.parser.parse(source, None).ok_or(ParseError::ParseFailed)
    }

    /// Parse one file into its import table and function declarations.
    pub fn parse_file(&mut self, path: &Path, source: &str) -> Result<GoFile, ParseError> {
        let tree = self.parse(source.as_bytes())?;
        let bytes = source.as_bytes();
        let root = tree.root_node();

        let imports = extract_imports(&self.query, root, bytes);
        let functions = extract_functions(&self.query, root, bytes);

        Ok(GoFile {
            file_path: path.to_string_lossy().to_string(),
            imports,
            functions,
            has_syntax_errors: root.has_error(),
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    #[error("language error: {0}")]
    Language(String),
    #[error("query error: {0}")]
    Query(String),
    #[error("parse failed")]
    ParseFailed,
}

pub(crate) fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// First named child that is not a comment.
pub(crate) fn first_type_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|c| c.kind() != "comment");
    found
}

fn extract_functions(query: &Query, root: Node<'_>, source: &[u8]) -> Vec<FuncDecl> {
    let mut cursor = QueryCursor::new();
    let mut functions = Vec::new();
    let capture_names = query.capture_names();
    let mut matches = cursor.matches(query, root, source);

    while let Some(m) = matches.next() {
        let mut name = None;
        let mut params = None;
        let mut receiver = None;
        let mut decl = None;

        for cap in m.captures {
            match capture_names[cap.index as usize] {
                "def.func.name" | "def.method.name" => {
                    name = Some(node_text(cap.node, source).to_string());
                }
                "def.func.params" | "def.method.params" => params = Some(cap.node),
                "def.method.receiver" => receiver = Some(cap.node),
                "def.func" | "def.method" => decl = Some(cap.node),
                _ => {}
            }
        }

        if let (Some(name), Some(params), Some(decl)) = (name, params, decl) {
            functions.push(FuncDecl {
                name,
                receiver_type_name: receiver
                    .map(|r| receiver_type_name(r, source))
                    .unwrap_or_default(),
                params: lower_params(params, source),
                site: DeclSite {
                    line: decl.start_position().row as u32 + 1,
                    column: decl.start_position().column as u32 + 1,
                    offset: decl.start_byte(),
                },
            });
        }
    }
    functions
}

/// Lower a `parameter_list` into parameter groups, in declaration order.
fn lower_params(list: Node<'_>, source: &[u8]) -> Vec<ParamGroup> {
    let mut cursor = list.walk();
    let mut groups = Vec::new();
    for child in list.named_children(&mut cursor) {
        let shape = match child.kind() {
            "parameter_declaration" => child
                .child_by_field_name("type")
                .map(|t| TypeShape::lower(t, source))
                .unwrap_or(TypeShape::Unsupported(UnsupportedKind::Other)),
            "variadic_parameter_declaration" => TypeShape::Unsupported(UnsupportedKind::Variadic),
            // comments
            _ => continue,
        };
        groups.push(ParamGroup {
            names: field_texts(child, "name", source),
            shape,
        });
    }
    groups
}

fn field_texts(node: Node<'_>, field: &str, source: &[u8]) -> Vec<String> {
    let mut cursor = node.walk();
    let texts = node
        .children_by_field_name(field, &mut cursor)
        .map(|n| node_text(n, source).to_string())
        .collect();
    texts
}

/// Base type name of a method receiver: `T`, `*T`, `T[K]` and `*T[K]` all give `T`.
fn receiver_type_name(list: Node<'_>, source: &[u8]) -> String {
    let mut cursor = list.walk();
    let decl = list
        .named_children(&mut cursor)
        .find(|c| c.kind() == "parameter_declaration");
    decl.and_then(|d| d.child_by_field_name("type"))
        .map(|t| base_type_name(t, source))
        .unwrap_or_default()
}

fn base_type_name(node: Node<'_>, source: &[u8]) -> String {
    match node.kind() {
        "type_identifier" => node_text(node, source).to_string(),
        "pointer_type" | "parenthesized_type" => first_type_child(node)
            .map(|inner| base_type_name(inner, source))
            .unwrap_or_default(),
        "generic_type" => node
            .child_by_field_name("type")
            .map(|inner| base_type_name(inner, source))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

pub fn is_go_source(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("go")
}
