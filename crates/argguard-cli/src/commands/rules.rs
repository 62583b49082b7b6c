use std::path::PathBuf;

use argguard_output::OutputFormatter;

/// Run `argguard rules`: print the validated rule set.
pub fn run(formatter: &dyn OutputFormatter, config: Option<PathBuf>) -> i32 {
    match super::load_config("rules", config) {
        Ok(config) => {
            println!("{}", formatter.format_rules(&config).trim_end());
            0
        }
        Err(code) => code,
    }
}
