use crate::OutputFormatter;
use argguard_core::config::Config;
use argguard_enforce::types::CheckResult;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }

    fn format_rules(&self, config: &Config) -> String {
        serde_json::to_string_pretty(config).unwrap_or_default()
    }
}
