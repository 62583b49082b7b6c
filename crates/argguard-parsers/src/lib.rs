//! Go front end and argument descriptor extraction for argguard.
//!
//! - [`treesitter`]: tree-sitter parsing of Go source into [`go::GoFile`]
//! - [`go`]: parsed declarations, import tables, and type shapes
//! - [`extract`]: reduction of parameter shapes to argument descriptors
//! - [`walker`]: discovery of Go source files under a root

pub mod extract;
pub mod go;
pub mod queries;
pub mod treesitter;
pub mod walker;
