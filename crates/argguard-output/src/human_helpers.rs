use argguard_core::policy::{ArgumentPolicy, Rule};
use argguard_enforce::types::Diagnostic;

pub(crate) fn format_diagnostic_human(d: &Diagnostic) -> String {
    format!(
        "error[{}]: {}\n  --> {}:{}:{}\n   = rule: {}\n",
        d.code, d.message, d.file, d.line, d.column, d.rule,
    )
}

/// `[]*sql.Tx at index 1`, as written in a policy.
pub(crate) fn format_policy(p: &ArgumentPolicy) -> String {
    let mut out = String::new();
    if p.is_array {
        out.push_str("[]");
    }
    if p.is_pointer {
        out.push('*');
    }
    if let Some(ns) = p.namespace_label() {
        out.push_str(ns);
        out.push('.');
    }
    out.push_str(&p.type_name);
    if let (Some(alias), Some(path)) = (&p.namespace_alias, &p.namespace_path) {
        out.push_str(&format!(" ({alias} = {path})"));
    }
    match p.index {
        Some(index) => out.push_str(&format!(" at index {index}")),
        None => out.push_str(" anywhere"),
    }
    out
}

pub(crate) fn format_rule_human(rule: &Rule, index: usize) -> String {
    let mut out = format!("{}\n", rule.label(index));
    for p in &rule.argument_policies {
        out.push_str(&format!("  requires {}\n", format_policy(p)));
    }

    if rule.is_unscoped() {
        out.push_str("   = applies to every function\n");
        return out;
    }
    let scopes: [(&str, &[String]); 6] = [
        ("files", rule.file_patterns.as_slice()),
        ("ignore files", rule.ignore_file_patterns.as_slice()),
        ("funcs", rule.func_patterns.as_slice()),
        ("ignore funcs", rule.ignore_func_patterns.as_slice()),
        ("receivers", rule.recv_patterns.as_slice()),
        ("ignore receivers", rule.ignore_recv_patterns.as_slice()),
    ];
    for (label, patterns) in scopes {
        if !patterns.is_empty() {
            out.push_str(&format!("   = {label}: {}\n", patterns.join(", ")));
        }
    }
    out
}
