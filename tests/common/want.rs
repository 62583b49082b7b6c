//! Fixture harness driven by `// want "<regex>"` comments.
//!
//! Each fixture is a directory under `tests/testdata/` holding a
//! `config.yaml` and Go sources. A declaration line that should be reported
//! carries a trailing `// want "..." "..."` comment with one Go-quoted
//! regular expression per expected diagnostic. Every diagnostic must be
//! wanted and every want must be met.

use std::collections::BTreeMap;
use std::fs;

use argguard_core::config::Config;
use argguard_enforce::engine::PolicyEngine;
use argguard_enforce::types::{CheckResult, Diagnostic};
use regex::Regex;

use super::testdata_dir;

/// Expected diagnostics keyed by (file, line).
pub type Wants = BTreeMap<(String, u32), Vec<Regex>>;

/// Check the fixture `case` and assert its diagnostics match the wants.
#[allow(dead_code)]
pub fn check_fixture(case: &str) -> CheckResult {
    let dir = testdata_dir().join(case);
    let config = Config::load(&dir.join("config.yaml"))
        .unwrap_or_else(|e| panic!("{case}: bad config: {e}"));

    let mut entries: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "go"))
        .collect();
    entries.sort();

    let mut sources = Vec::new();
    let mut wants = Wants::new();
    for path in entries {
        let name = format!("{case}/{}", path.file_name().unwrap().to_string_lossy());
        let content = fs::read_to_string(&path).unwrap();
        for (i, line) in content.lines().enumerate() {
            let patterns = parse_want(line);
            if !patterns.is_empty() {
                wants.insert((name.clone(), i as u32 + 1), patterns);
            }
        }
        sources.push((name, content));
    }

    let result = PolicyEngine::from_config(&config).check_sources(&sources);
    assert_diagnostics(case, &result.diagnostics, wants);
    result
}

fn assert_diagnostics(case: &str, diagnostics: &[Diagnostic], mut wants: Wants) {
    let mut unexpected = Vec::new();
    for d in diagnostics {
        let key = (d.file.clone(), d.line);
        let matched = wants.get_mut(&key).and_then(|patterns| {
            let idx = patterns.iter().position(|re| re.is_match(&d.message))?;
            Some(patterns.remove(idx))
        });
        if matched.is_none() {
            unexpected.push(format!("{}:{}: {}", d.file, d.line, d.message));
        }
    }

    let unmet: Vec<String> = wants
        .iter()
        .flat_map(|((file, line), patterns)| {
            patterns
                .iter()
                .map(move |re| format!("{file}:{line}: {}", re.as_str()))
        })
        .collect();

    assert!(
        unexpected.is_empty() && unmet.is_empty(),
        "{case}: unexpected diagnostics {unexpected:#?}, unmet wants {unmet:#?}"
    );
}

/// Regexes from a trailing `// want "..."` comment, Go-unquoted.
pub fn parse_want(line: &str) -> Vec<Regex> {
    let Some(start) = line.find("// want ") else {
        return Vec::new();
    };
    let mut patterns = Vec::new();
    let mut chars = line[start + "// want ".len()..].chars();

    while let Some(c) = chars.next() {
        if c != '"' {
            continue;
        }
        let mut pattern = String::new();
        while let Some(c) = chars.next() {
            match c {
                '"' => break,
                '\\' => match chars.next() {
                    Some('\\') => pattern.push('\\'),
                    Some('"') => pattern.push('"'),
                    Some(other) => {
                        pattern.push('\\');
                        pattern.push(other);
                    }
                    None => pattern.push('\\'),
                },
                other => pattern.push(other),
            }
        }
        patterns.push(Regex::new(&pattern).unwrap_or_else(|e| panic!("bad want {pattern:?}: {e}")));
    }
    patterns
}
