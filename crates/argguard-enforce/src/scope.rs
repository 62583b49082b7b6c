//! Scope filter: decides whether a rule applies to a declaration.
//!
//! Six gates run in a fixed order and the first negative one wins:
//! file-include, file-exclude, func-include, func-exclude, recv-include,
//! recv-exclude. An empty include list passes; an empty exclude list never
//! blocks. Patterns are unanchored regular expressions.

use argguard_core::policy::Rule;
use regex::Regex;

/// One of the six pattern lists on a [`Rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    FileInclude,
    FileExclude,
    FuncInclude,
    FuncExclude,
    RecvInclude,
    RecvExclude,
}

impl Gate {
    /// Configuration key of the pattern list behind this gate.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gate::FileInclude => "file_patterns",
            Gate::FileExclude => "ignore_file_patterns",
            Gate::FuncInclude => "func_patterns",
            Gate::FuncExclude => "ignore_func_patterns",
            Gate::RecvInclude => "recv_patterns",
            Gate::RecvExclude => "ignore_recv_patterns",
        }
    }

    fn is_include(&self) -> bool {
        matches!(self, Gate::FileInclude | Gate::FuncInclude | Gate::RecvInclude)
    }
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid pattern {pattern:?} in {gate}: {source}")]
pub struct ScopeFilterError {
    pub gate: Gate,
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Whether `rule` applies to the declaration `func` (receiver `recv`) in `file`.
///
/// Gates after the first negative one are not evaluated, so an invalid
/// pattern in a later list is only reported when every earlier gate passed.
pub fn applies(rule: &Rule, file: &str, func: &str, recv: &str) -> Result<bool, ScopeFilterError> {
    let gates: [(Gate, &[String], &str); 6] = [
        (Gate::FileInclude, rule.file_patterns.as_slice(), file),
        (Gate::FileExclude, rule.ignore_file_patterns.as_slice(), file),
        (Gate::FuncInclude, rule.func_patterns.as_slice(), func),
        (Gate::FuncExclude, rule.ignore_func_patterns.as_slice(), func),
        (Gate::RecvInclude, rule.recv_patterns.as_slice(), recv),
        (Gate::RecvExclude, rule.ignore_recv_patterns.as_slice(), recv),
    ];

    for (gate, patterns, candidate) in gates {
        if !passes(gate, patterns, candidate)? {
            tracing::trace!(%gate, candidate, "scope gate closed");
            return Ok(false);
        }
    }
    Ok(true)
}

fn passes(gate: Gate, patterns: &[String], candidate: &str) -> Result<bool, ScopeFilterError> {
    if patterns.is_empty() {
        return Ok(true);
    }
    let matched = any_match(gate, patterns, candidate)?;
    Ok(matched == gate.is_include())
}

fn any_match(gate: Gate, patterns: &[String], candidate: &str) -> Result<bool, ScopeFilterError> {
    for pattern in patterns {
        let re = Regex::new(pattern).map_err(|source| ScopeFilterError {
            gate,
            pattern: pattern.clone(),
            source,
        })?;
        if re.is_match(candidate) {
            return Ok(true);
        }
    }
    Ok(false)
}
