//! Import table extraction from tree-sitter query matches.

use streaming_iterator::StreamingIterator;
use tree_sitter::{Query, QueryCursor};

use crate::go::ImportTable;

use super::node_text;

pub(super) fn extract_imports(
    query: &Query,
    root: tree_sitter::Node<'_>,
    source: &[u8],
) -> ImportTable {
    let mut cursor = QueryCursor::new();
    let mut table = ImportTable::new();
    let capture_names = query.capture_names();
    let mut matches = cursor.matches(query, root, source);

    while let Some(m) = matches.next() {
        for cap in m.captures {
            if capture_names[cap.index as usize] != "ref.import" {
                continue;
            }
            let Some(path) = cap.node.child_by_field_name("path") else {
                continue;
            };
            // `name` is a package_identifier, `_` (blank_identifier) or `.` (dot)
            let name = cap
                .node
                .child_by_field_name("name")
                .map(|n| node_text(n, source));
            table.add_import(node_text(path, source), name);
        }
    }
    table
}
