// Tests for the want-comment parser used by the fixture harness.

use super::common::want::parse_want;

#[test]
fn no_want_comment() {
    assert!(parse_want("func f(num int) {").is_empty());
    assert!(parse_want("// wanted \"x\"").is_empty());
}

#[test]
fn single_want() {
    let res = parse_want(r#"func f1(num int) { // want "no string type arg found for func f1""#);
    assert_eq!(res.len(), 1);
    assert!(res[0].is_match("no string type arg found for func f1"));
}

#[test]
fn escaped_want() {
    let res = parse_want(r#"func f() { // want "no \\*sql.Tx type arg" "say \"hi\"""#);
    assert_eq!(res.len(), 2);
    assert_eq!(res[0].as_str(), r"no \*sql.Tx type arg");
    assert!(res[0].is_match("no *sql.Tx type arg at index 1"));
    assert_eq!(res[1].as_str(), r#"say "hi""#);
}
