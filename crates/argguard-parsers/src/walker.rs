use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::treesitter::is_go_source;

/// Custom ignore file honored alongside `.gitignore`.
pub const IGNORE_FILE: &str = ".argguardignore";

/// Collects Go source files under one or more roots.
///
/// A root may be a directory (walked recursively, honoring `.gitignore` and
/// `.argguardignore`, skipping hidden entries) or a single file, which is
/// taken as-is when it has a `.go` extension.
pub struct FileWalker {
    roots: Vec<PathBuf>,
}

impl FileWalker {
    pub fn new(root: &Path) -> Self {
        Self {
            roots: vec![root.to_path_buf()],
        }
    }

    pub fn with_roots(roots: &[PathBuf]) -> Self {
        Self {
            roots: roots.to_vec(),
        }
    }

    /// Go files in walk order, deduplicated and sorted for stable output.
    pub fn walk(&self) -> Vec<PathBuf> {
        let mut entries = Vec::new();

        for root in &self.roots {
            if root.is_file() {
                if is_go_source(root) {
                    entries.push(root.clone());
                }
                continue;
            }

            let walker = WalkBuilder::new(root)
                .hidden(true)
                .git_ignore(true)
                .git_global(false)
                .git_exclude(true)
                .require_git(false)
                .add_custom_ignore_filename(IGNORE_FILE)
                .build();

            for result in walker {
                let entry = match result {
                    Ok(e) => e,
                    Err(err) => {
                        tracing::debug!(error = %err, "skipping unreadable entry");
                        continue;
                    }
                };

                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }

                let path = entry.into_path();
                if is_go_source(&path) {
                    entries.push(path);
                }
            }
        }

        entries.sort();
        entries.dedup();
        entries
    }
}
