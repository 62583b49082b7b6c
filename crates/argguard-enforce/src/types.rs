use serde::{Deserialize, Serialize};

/// What a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    UnmetPolicies,
    InvalidPattern,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::UnmetPolicies => "unmet_policies",
            DiagnosticKind::InvalidPattern => "invalid_pattern",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::UnmetPolicies => "A001",
            DiagnosticKind::InvalidPattern => "A002",
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding, attached to the start of a function declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub code: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    /// Byte offset of the declaration start.
    pub offset: usize,
    pub function: String,
    pub rule: String,
    /// Zero-based position of the rule in the configuration.
    #[serde(skip)]
    pub rule_index: usize,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "error"
    pub files_analyzed: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
    pub info: CheckInfo,
}

impl CheckResult {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInfo {
    pub rules: u32,
    pub functions_analyzed: u32,
    /// `init` and `main` declarations.
    pub functions_skipped: u32,
    pub parse_failures: u32,
}
