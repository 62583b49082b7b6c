//! Per-file import table: the alias used in a declaration → canonical import path.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImportTable {
    by_alias: BTreeMap<String, String>,
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an import. `explicit_name` is the alias written in the import
    /// declaration, if any; otherwise the final path segment is used. Blank (`_`)
    /// and dot (`.`) imports never qualify a type and are not recorded.
    pub fn add_import(&mut self, path: &str, explicit_name: Option<&str>) {
        let path = trim_quotes(path);
        if path.is_empty() {
            return;
        }
        let alias = match explicit_name {
            Some("_") | Some(".") => return,
            Some(name) => name.to_string(),
            None => default_alias(path).to_string(),
        };
        self.by_alias.insert(alias, path.to_string());
    }

    /// Canonical path for an alias used at a declaration site.
    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.by_alias.get(alias).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_alias.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_alias.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, Option<&'a str>)> for ImportTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, Option<&'a str>)>>(iter: I) -> Self {
        let mut table = ImportTable::new();
        for (path, name) in iter {
            table.add_import(path, name);
        }
        table
    }
}

/// Alias Go assigns to an unnamed import: the final path segment.
/// e.g., `"fmt"` -> `"fmt"`, `"database/sql"` -> `"sql"`.
pub fn default_alias(import_path: &str) -> &str {
    let cleaned = trim_quotes(import_path);
    cleaned.rsplit('/').next().unwrap_or(cleaned)
}

fn trim_quotes(s: &str) -> &str {
    s.trim().trim_matches(|c| c == '"' || c == '`' || c == '\'')
}
