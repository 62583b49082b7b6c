//! Argument policies and the rules that bundle them.
//!
//! A [`Rule`] is loaded once from configuration and never mutated afterwards.
//! Field names on the wire follow the configuration file format:
//!
//! ```yaml
//! rules:
//!   - args:
//!       - type: Tx
//!         pkg: database/sql
//!         pkg_name: sql
//!         is_ptr: true
//!         index: 1
//!     recv_patterns: ["^DB$"]
//!     ignore_file_patterns: [".*_generated\\..*"]
//! ```

use serde::{Deserialize, Serialize};

/// One required-argument clause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArgumentPolicy {
    #[serde(rename = "type")]
    pub type_name: String,
    /// Canonical import path the type must come from.
    #[serde(rename = "pkg", default, skip_serializing_if = "Option::is_none")]
    pub namespace_path: Option<String>,
    /// Alias the declaration site must use; only meaningful with `pkg`.
    #[serde(rename = "pkg_name", default, skip_serializing_if = "Option::is_none")]
    pub namespace_alias: Option<String>,
    #[serde(rename = "is_ptr", default, skip_serializing_if = "is_false")]
    pub is_pointer: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_array: bool,
    /// Absolute slot when non-negative, counted from the end when negative.
    /// Absent means "anywhere".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl ArgumentPolicy {
    /// A policy requiring a plain argument of `type_name` anywhere.
    pub fn of_type(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            ..Self::default()
        }
    }

    /// Prefix used when naming the package in messages: the alias when one is
    /// configured, otherwise the canonical path.
    pub fn namespace_label(&self) -> Option<&str> {
        self.namespace_alias
            .as_deref()
            .or(self.namespace_path.as_deref())
    }
}

/// A bundle of argument policies plus the scope patterns restricting which
/// declarations it applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "args", default)]
    pub argument_policies: Vec<ArgumentPolicy>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_patterns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_file_patterns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub func_patterns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_func_patterns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recv_patterns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_recv_patterns: Vec<String>,
}

impl Rule {
    pub fn new(argument_policies: Vec<ArgumentPolicy>) -> Self {
        Self {
            argument_policies,
            ..Self::default()
        }
    }

    /// Display label: the configured name, else `rule #<n>` (1-based).
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("rule #{}", index + 1),
        }
    }

    /// True when none of the six pattern lists has entries.
    pub fn is_unscoped(&self) -> bool {
        self.file_patterns.is_empty()
            && self.ignore_file_patterns.is_empty()
            && self.func_patterns.is_empty()
            && self.ignore_func_patterns.is_empty()
            && self.recv_patterns.is_empty()
            && self.ignore_recv_patterns.is_empty()
    }
}
