use std::path::Path;

use rayon::prelude::*;

use argguard_core::config::Config;
use argguard_core::policy::Rule;
use argguard_core::types::{DeclSite, FunctionContext};
use argguard_parsers::extract::function_context;
use argguard_parsers::go::GoFile;
use argguard_parsers::treesitter::{GoParser, ParseError};

use crate::matcher;
use crate::scope;
use crate::types::{CheckInfo, CheckResult, Diagnostic, DiagnosticKind};

/// Evaluates a fixed rule set against function declarations.
///
/// The engine holds no mutable state; one instance can check any number of
/// files, from any number of threads.
pub struct PolicyEngine {
    rules: Vec<Rule>,
}

/// Diagnostics of one file plus the counters that feed [`CheckInfo`].
struct FileOutcome {
    diagnostics: Vec<Diagnostic>,
    analyzed: u32,
    skipped: u32,
}

impl PolicyEngine {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.rules.clone())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule against one declaration.
    ///
    /// Lifecycle hooks produce nothing. A rule whose scope patterns fail to
    /// compile yields one A002 diagnostic and is skipped for this
    /// declaration; the remaining rules still run.
    pub fn check_function(&self, ctx: &FunctionContext, site: &DeclSite) -> Vec<Diagnostic> {
        if ctx.is_lifecycle_hook() {
            return Vec::new();
        }

        let mut diagnostics = Vec::new();
        for (index, rule) in self.rules.iter().enumerate() {
            let label = rule.label(index);
            match scope::applies(rule, &ctx.file_name, &ctx.func_name, &ctx.receiver_type_name) {
                Ok(false) => {
                    tracing::debug!(rule = %label, func = %ctx.func_name, "out of scope");
                }
                Ok(true) => {
                    let unmet = matcher::evaluate(rule, ctx);
                    tracing::debug!(
                        rule = %label,
                        func = %ctx.func_name,
                        unmet = unmet.len(),
                        "evaluated"
                    );
                    if !unmet.is_empty() {
                        let message = matcher::unmet_message(&unmet, &ctx.func_name);
                        diagnostics.push(diagnostic(
                            DiagnosticKind::UnmetPolicies,
                            ctx,
                            site,
                            index,
                            label,
                            message,
                        ));
                    }
                }
                Err(err) => {
                    tracing::debug!(rule = %label, func = %ctx.func_name, error = %err, "scope filter failed");
                    diagnostics.push(diagnostic(
                        DiagnosticKind::InvalidPattern,
                        ctx,
                        site,
                        index,
                        label,
                        err.to_string(),
                    ));
                }
            }
        }
        diagnostics
    }

    /// Diagnostics for every declaration in a parsed file, in source order.
    pub fn check_file(&self, file: &GoFile) -> Vec<Diagnostic> {
        self.check_file_counted(file).diagnostics
    }

    fn check_file_counted(&self, file: &GoFile) -> FileOutcome {
        let mut outcome = FileOutcome {
            diagnostics: Vec::new(),
            analyzed: 0,
            skipped: 0,
        };
        for decl in &file.functions {
            let ctx = function_context(&file.file_path, decl, &file.imports);
            if ctx.is_lifecycle_hook() {
                outcome.skipped += 1;
                continue;
            }
            outcome.analyzed += 1;
            outcome
                .diagnostics
                .extend(self.check_function(&ctx, &decl.site));
        }
        outcome
    }

    /// Parse and check `(path, content)` pairs in parallel.
    ///
    /// Each worker owns its own parser. A file that cannot be parsed is
    /// counted in `info.parse_failures` and left out of `files_analyzed`.
    /// Diagnostics are ordered by file, declaration offset, then rule.
    pub fn check_sources(&self, sources: &[(String, String)]) -> CheckResult {
        let results: Vec<(&str, Result<FileOutcome, ParseError>)> = sources
            .par_iter()
            .map_init(GoParser::new, |parser, (path, content)| {
                let outcome = match parser {
                    Ok(parser) => parser
                        .parse_file(Path::new(path), content)
                        .map(|file| {
                            if file.has_syntax_errors {
                                tracing::debug!(file = %path, "syntax errors, checking recovered declarations");
                            }
                            self.check_file_counted(&file)
                        }),
                    Err(err) => Err(err.clone()),
                };
                (path.as_str(), outcome)
            })
            .collect();

        let mut files_analyzed = Vec::new();
        let mut diagnostics = Vec::new();
        let mut info = CheckInfo {
            rules: self.rules.len() as u32,
            ..CheckInfo::default()
        };

        for (path, outcome) in results {
            match outcome {
                Ok(outcome) => {
                    files_analyzed.push(path.to_string());
                    info.functions_analyzed += outcome.analyzed;
                    info.functions_skipped += outcome.skipped;
                    diagnostics.extend(outcome.diagnostics);
                }
                Err(err) => {
                    tracing::warn!(file = %path, error = %err, "failed to parse");
                    info.parse_failures += 1;
                }
            }
        }

        files_analyzed.sort();
        diagnostics.sort_by(|a, b| {
            a.file
                .cmp(&b.file)
                .then(a.offset.cmp(&b.offset))
                .then(a.rule_index.cmp(&b.rule_index))
        });

        let status = if diagnostics.is_empty() { "ok" } else { "error" };

        CheckResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "check".to_string(),
            status: status.to_string(),
            files_analyzed,
            diagnostics,
            info,
        }
    }
}

fn diagnostic(
    kind: DiagnosticKind,
    ctx: &FunctionContext,
    site: &DeclSite,
    rule_index: usize,
    rule: String,
    message: String,
) -> Diagnostic {
    Diagnostic {
        kind,
        code: kind.code().to_string(),
        file: ctx.file_name.clone(),
        line: site.line,
        column: site.column,
        offset: site.offset,
        function: ctx.func_name.clone(),
        rule,
        rule_index,
        message,
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
