//! Policy matcher: which of a rule's argument policies a declaration fails.
//!
//! A policy is met when at least one descriptor agrees with it on type name,
//! pointer and array flags, namespace (only when the policy names one) and
//! index (only when the policy has one). `index >= 0` is the absolute
//! declared slot; `index < 0` counts back from the number of extracted
//! descriptors, so a skipped trailing parameter moves the end.

use argguard_core::policy::{ArgumentPolicy, Rule};
use argguard_core::types::{ArgumentDescriptor, FunctionContext};

/// Unmet policies of `rule`, in rule order. Empty when the rule is satisfied.
pub fn evaluate<'r>(rule: &'r Rule, ctx: &FunctionContext) -> Vec<&'r ArgumentPolicy> {
    rule.argument_policies
        .iter()
        .filter(|policy| !is_met(policy, ctx))
        .collect()
}

/// Whether some descriptor of `ctx` satisfies `policy`.
pub fn is_met(policy: &ArgumentPolicy, ctx: &FunctionContext) -> bool {
    let count = ctx.descriptors.len();
    ctx.descriptors
        .iter()
        .any(|desc| index_matches(policy.index, desc.position, count) && policy_matches(policy, desc))
}

/// Shape comparison of one policy against one descriptor, ignoring the index.
pub fn policy_matches(policy: &ArgumentPolicy, desc: &ArgumentDescriptor) -> bool {
    desc.type_name == policy.type_name
        && desc.is_pointer == policy.is_pointer
        && desc.is_array == policy.is_array
        && namespace_matches(policy, desc)
}

fn namespace_matches(policy: &ArgumentPolicy, desc: &ArgumentDescriptor) -> bool {
    let Some(path) = policy.namespace_path.as_deref() else {
        return true;
    };
    if desc.namespace_path.as_deref() != Some(path) {
        return false;
    }
    match policy.namespace_alias.as_deref() {
        Some(alias) => desc.namespace_alias.as_deref() == Some(alias),
        None => true,
    }
}

/// Resolve `index` for a descriptor at `position` out of `count` descriptors.
pub fn index_matches(index: Option<i64>, position: usize, count: usize) -> bool {
    let Some(index) = index else {
        return true;
    };
    let target = if index >= 0 {
        index
    } else {
        count as i64 + index
    };
    target >= 0 && target as usize == position
}

/// One clause per unmet policy, joined and followed by the function name:
/// `no *sql.Tx type arg at index 1, no int type arg found for func GetPost`.
pub fn unmet_message(unmet: &[&ArgumentPolicy], func_name: &str) -> String {
    let clauses: Vec<String> = unmet.iter().map(|p| clause(p)).collect();
    format!("{} found for func {}", clauses.join(", "), func_name)
}

fn clause(policy: &ArgumentPolicy) -> String {
    let mut msg = String::from("no ");
    if policy.is_array {
        msg.push_str("[]");
    }
    if policy.is_pointer {
        msg.push('*');
    }
    if let Some(ns) = policy.namespace_label() {
        msg.push_str(ns);
        msg.push('.');
    }
    msg.push_str(&policy.type_name);
    msg.push_str(" type arg");
    if let Some(index) = policy.index {
        msg.push_str(&format!(" at index {index}"));
    }
    msg
}
