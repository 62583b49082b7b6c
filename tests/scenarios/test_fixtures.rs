// One test per fixture package; the assertions live in the want comments.

use super::common::want::check_fixture;

#[test]
fn primitive_types() {
    let result = check_fixture("primitive");
    assert_eq!(result.info.functions_skipped, 2, "init and main are skipped");
}

#[test]
fn positive_and_negative_indexes() {
    check_fixture("argindex");
}

#[test]
fn skipped_trailing_parameters_move_the_end() {
    let result = check_fixture("unsupportedtail");
    assert_eq!(result.info.functions_analyzed, 5);
    assert_eq!(result.diagnostics.len(), 1);
}

#[test]
fn several_policies_in_one_rule() {
    check_fixture("multitype");
}

#[test]
fn pointer_arguments() {
    check_fixture("pointerarg");
}

#[test]
fn array_and_slice_arguments() {
    check_fixture("arrayarg");
}

#[test]
fn package_qualified_types() {
    check_fixture("pkgtype");
}

#[test]
fn qualified_types_without_package() {
    check_fixture("pkgtypenopkg");
}

#[test]
fn file_include_patterns() {
    let result = check_fixture("filepattern");
    assert_eq!(result.files_analyzed.len(), 2);
}

#[test]
fn func_include_patterns() {
    check_fixture("funcpattern");
}

#[test]
fn receiver_include_patterns() {
    check_fixture("recvpattern");
}

#[test]
fn file_exclude_patterns() {
    check_fixture("ignorefilepattern");
}

#[test]
fn func_exclude_patterns() {
    check_fixture("ignorefuncpattern");
}

#[test]
fn receiver_exclude_patterns() {
    check_fixture("ignorerecvpattern");
}

#[test]
fn repository_example() {
    let result = check_fixture("example");
    let rules: Vec<_> = result.diagnostics.iter().map(|d| d.rule.as_str()).collect();
    assert_eq!(rules, vec!["usecase-tenant", "db-transaction", "pagination"]);
}

#[test]
fn invalid_patterns_do_not_stop_other_rules() {
    let result = check_fixture("invalidpattern");
    let codes: Vec<_> = result.diagnostics.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, vec!["A002", "A002", "A001"]);
}
