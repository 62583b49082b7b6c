// Tests for `argguard check` output.

use super::common::{create_project, run_argguard, testdata_dir};

const CONFIG: &str = r#"
rules:
  - args:
      - type: TenantID
        index: 1
    recv_patterns: ["^Usecase$"]
"#;

const USECASE: &str = r#"package usecase

type TenantID string

type Usecase struct{}

func (u *Usecase) GetUser(ctx Context, tenantID TenantID) {
}

func (u *Usecase) GetPost(ctx Context, postID string) {
}
"#;

#[test]
fn test_check_human_output() {
    let (_dir, root) = create_project(&[("argguard.yaml", CONFIG), ("usecase/usecase.go", USECASE)]);
    let out = run_argguard(&root, &["check"]);
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert_eq!(out.status.code(), Some(1));
    assert!(
        stdout.contains("error[A001]: no TenantID type arg at index 1 found for func GetPost"),
        "got: {stdout}"
    );
    assert!(stdout.contains("--> usecase/usecase.go:10:1"), "got: {stdout}");
    assert!(stdout.contains("1 error(s) in 1 file(s)"), "got: {stdout}");
}

#[test]
fn test_check_json_output() {
    let (_dir, root) = create_project(&[("argguard.yaml", CONFIG), ("usecase/usecase.go", USECASE)]);
    let out = run_argguard(&root, &["check", "--json"]);
    assert_eq!(out.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(json["command"], "check");
    assert_eq!(json["status"], "error");
    assert_eq!(json["files_analyzed"][0], "usecase/usecase.go");
    let diag = &json["diagnostics"][0];
    assert_eq!(diag["kind"], "unmet_policies");
    assert_eq!(diag["function"], "GetPost");
    assert_eq!(diag["line"], 10);
    assert_eq!(json["info"]["functions_analyzed"], 2);
}

#[test]
fn test_check_clean_human_output_is_empty() {
    let (_dir, root) = create_project(&[
        ("argguard.yaml", CONFIG),
        (
            "usecase/usecase.go",
            "package usecase\n\nfunc (u *Usecase) GetUser(ctx Context, tenantID TenantID) {}\n",
        ),
    ]);
    let out = run_argguard(&root, &["check"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_check_explicit_paths() {
    let (_dir, root) = create_project(&[
        ("argguard.yaml", CONFIG),
        ("usecase/usecase.go", USECASE),
        ("other/usecase.go", USECASE),
    ]);
    let out = run_argguard(&root, &["check", "--json", "usecase"]);
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["files_analyzed"].as_array().unwrap().len(), 1);
    assert_eq!(json["diagnostics"].as_array().unwrap().len(), 1);
}

#[test]
fn test_check_respects_ignore_file() {
    let (_dir, root) = create_project(&[
        ("argguard.yaml", CONFIG),
        (".argguardignore", "vendor/\n"),
        ("vendor/usecase.go", USECASE),
        ("app/ok.go", "package app\n\nfunc Ok() {}\n"),
    ]);
    let out = run_argguard(&root, &["check", "--json"]);
    assert_eq!(out.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["files_analyzed"], serde_json::json!(["app/ok.go"]));
}

#[test]
fn test_check_config_flag_and_env() {
    let (_dir, root) = create_project(&[("lint/rules.yaml", CONFIG), ("usecase/usecase.go", USECASE)]);

    let out = run_argguard(&root, &["check", "--config", "lint/rules.yaml"]);
    assert_eq!(out.status.code(), Some(1));

    let out = std::process::Command::new(super::common::argguard_bin())
        .arg("check")
        .current_dir(&root)
        .env("ARGGUARD_CONFIG", "lint/rules.yaml")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_check_invalid_pattern_is_a_diagnostic() {
    let fixture = testdata_dir().join("invalidpattern");
    let config = fixture.join("config.yaml");
    let out = run_argguard(
        &fixture,
        &["check", "--config", config.to_str().unwrap(), "invalidpattern.go"],
    );
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout.contains("error[A002]: invalid pattern \"Get(\" in func_patterns"), "got: {stdout}");
    assert!(stdout.contains("error[A001]: no TenantID type arg found for func GetPost"), "got: {stdout}");
}
