use std::path::{Path, PathBuf};

use argguard_enforce::engine::PolicyEngine;
use argguard_output::OutputFormatter;
use argguard_parsers::walker::FileWalker;

/// Run `argguard check [PATHS]`: 0 when clean, 1 on diagnostics, 2 on fatal errors.
pub fn run(formatter: &dyn OutputFormatter, paths: Vec<PathBuf>, config: Option<PathBuf>) -> i32 {
    let config = match super::load_config("check", config) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let roots = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };
    if let Some(missing) = roots.iter().find(|p| !p.exists()) {
        eprintln!("argguard check: no such file or directory: {}", missing.display());
        return 2;
    }

    let files = FileWalker::with_roots(&roots).walk();
    if files.is_empty() {
        tracing::warn!("no Go files found");
    }

    let mut sources = Vec::with_capacity(files.len());
    for file in &files {
        match std::fs::read_to_string(file) {
            Ok(content) => sources.push((display_path(file), content)),
            Err(e) => {
                eprintln!("argguard check: failed to read {}: {}", file.display(), e);
                return 2;
            }
        }
    }

    let engine = PolicyEngine::from_config(&config);
    let result = engine.check_sources(&sources);
    tracing::info!(
        files = result.files_analyzed.len(),
        functions = result.info.functions_analyzed,
        diagnostics = result.diagnostics.len(),
        "check finished"
    );

    let output = formatter.format_check(&result);
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }

    if result.is_clean() {
        0
    } else {
        1
    }
}

/// `./pkg/a.go` → `pkg/a.go`; other paths are kept as given.
fn display_path(path: &Path) -> String {
    path.strip_prefix("./")
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
