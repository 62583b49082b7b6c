//! Parsed Go declarations, independent of the tree-sitter tree they came from.

pub mod imports;
pub mod shape;

use argguard_core::types::DeclSite;
use serde::Serialize;

pub use imports::ImportTable;
pub use shape::{TypeShape, UnsupportedKind};

/// One analyzed Go source file.
#[derive(Debug, Clone, Serialize)]
pub struct GoFile {
    pub file_path: String,
    pub imports: ImportTable,
    pub functions: Vec<FuncDecl>,
    /// True when tree-sitter recovered from syntax errors somewhere in the file.
    pub has_syntax_errors: bool,
}

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuncDecl {
    pub name: String,
    /// Base type name of the receiver; empty for plain functions.
    pub receiver_type_name: String,
    pub params: Vec<ParamGroup>,
    pub site: DeclSite,
}

impl FuncDecl {
    /// Number of declared parameter slots.
    pub fn arity(&self) -> usize {
        self.params.iter().map(ParamGroup::slot_count).sum()
    }
}

/// A parameter group sharing one declared type, e.g. `limit, offset int`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamGroup {
    /// Empty for an unnamed parameter such as `func(int)`.
    pub names: Vec<String>,
    pub shape: TypeShape,
}

impl ParamGroup {
    pub fn new(names: &[&str], shape: TypeShape) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            shape,
        }
    }

    /// An unnamed parameter such as `func(int)` occupies one slot and is
    /// extracted like a named one.
    pub fn slot_count(&self) -> usize {
        self.names.len().max(1)
    }
}
