// src/style/files.rs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::fs::FileSystem;

/// Compiled set of style patterns, matched against `/`-separated paths
/// relative to the project root.
#[derive(Debug, Clone)]
pub struct StyleFileSet {
    set: GlobSet,
}

impl StyleFileSet {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pat in patterns {
            let glob = Glob::new(pat).with_context(|| format!("invalid style glob {pat:?}"))?;
            builder.add(glob);
        }
        let set = builder.build().context("building style glob set")?;
        Ok(Self { set })
    }

    pub fn matches(&self, rel_path: &str) -> bool {
        self.set.is_match(rel_path)
    }

    /// Walk `root` and return every matching file, relative to `root`,
    /// sorted.
    pub fn collect(&self, fs: &dyn FileSystem, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut stack = vec![root.to_path_buf()];

        while let Some(dir) = stack.pop() {
            for path in fs.read_dir(&dir)? {
                if fs.is_dir(&path) {
                    stack.push(path);
                } else if fs.is_file(&path) {
                    if let Ok(rel) = path.strip_prefix(root) {
                        let rel_str = rel.to_string_lossy().replace('\\', "/");
                        if self.matches(&rel_str) {
                            files.push(rel.to_path_buf());
                        }
                    }
                }
            }
        }

        files.sort();
        Ok(files)
    }
}
