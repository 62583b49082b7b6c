//! Output formatters for argguard command results.
//!
//! Provides two output modes:
//! - **Human** (default): compiler-style diagnostics for terminal users
//! - **JSON** (`--json`): machine-readable structured output

pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use argguard_core::config::Config;
use argguard_enforce::types::CheckResult;

pub trait OutputFormatter {
    fn format_check(&self, result: &CheckResult) -> String;
    fn format_rules(&self, config: &Config) -> String;
}
