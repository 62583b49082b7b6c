use crate::human_helpers::{format_diagnostic_human, format_rule_human};
use crate::OutputFormatter;
use argguard_core::config::Config;
use argguard_enforce::types::{CheckResult, DiagnosticKind};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        if result.diagnostics.is_empty() {
            return String::new(); // Clean check = empty stdout
        }

        let mut out = String::new();
        for d in &result.diagnostics {
            out.push_str(&format_diagnostic_human(d));
        }

        let invalid = result.count(DiagnosticKind::InvalidPattern);
        out.push_str(&format!(
            "\n{} error(s) in {} file(s)",
            result.diagnostics.len(),
            result.files_analyzed.len(),
        ));
        if invalid > 0 {
            out.push_str(&format!(", {invalid} from invalid patterns"));
        }
        out.push('\n');

        out
    }

    fn format_rules(&self, config: &Config) -> String {
        if config.rules.is_empty() {
            return "no rules configured\n".to_string();
        }

        let rendered: Vec<String> = config
            .rules
            .iter()
            .enumerate()
            .map(|(i, rule)| format_rule_human(rule, i))
            .collect();
        rendered.join("\n")
    }
}
