/// Shared test helpers for all argguard integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
pub mod want;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Get path to compiled argguard binary.
///
/// Builds the binary if it doesn't exist yet.
#[allow(dead_code)]
pub fn argguard_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove 'deps'
    path.push("argguard");
    if !path.exists() {
        let status = Command::new("cargo")
            .args(["build", "-p", "argguard-cli"])
            .current_dir(env!("CARGO_MANIFEST_DIR"))
            .status()
            .expect("Failed to build argguard");
        assert!(status.success(), "Failed to build argguard binary");
    }
    path
}

/// Run argguard in `dir` with a clean environment for configuration lookup.
#[allow(dead_code)]
pub fn run_argguard(dir: &Path, args: &[&str]) -> Output {
    Command::new(argguard_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("ARGGUARD_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run argguard")
}

/// Create a project directory from a set of files.
///
/// Each entry in `files` is `(relative_path, content)`.
/// Returns (TempDir, project_root). Hold the TempDir to keep the directory alive.
#[allow(dead_code)]
pub fn create_project(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    let project_root = root.to_path_buf();
    (dir, project_root)
}

/// Directory holding the fixture packages.
#[allow(dead_code)]
pub fn testdata_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/testdata")
}
