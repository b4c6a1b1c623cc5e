use anyhow::{bail, Result};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const DEFAULT_EXTENSIONS: &[&str] = &["c", "h"];

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SourceFile {
    pub path: PathBuf,
}

/// Expands command-line paths into the ordered list of files to scan.
pub struct FileScanner {
    extensions: HashSet<String>,
    verbose: bool,
}

impl FileScanner {
    pub fn new() -> Self {
        Self::with_extensions(DEFAULT_EXTENSIONS)
    }

    pub fn with_extensions(extensions: &[&str]) -> Self {
        let extensions = extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self {
            extensions,
            verbose: false,
        }
    }

    /// Report directory entries that could not be walked on stderr.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Files named directly are kept in argument order whatever their extension;
    /// directories contribute matching files in file-name order.
    pub fn collect(&self, paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
        let mut files = Vec::with_capacity(paths.len());

        for path in paths {
            if path.is_dir() {
                files.extend(self.scan_directory(path)?);
            } else if path.exists() {
                // Pipes and character devices are read like regular files
                files.push(SourceFile { path: path.clone() });
            } else {
                bail!("No such file or directory: {}", path.display());
            }
        }

        Ok(files)
    }

    pub fn scan_directory(&self, root_path: &Path) -> Result<Vec<SourceFile>> {
        let entries: Vec<_> = WalkDir::new(root_path)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    if self.verbose {
                        eprintln!("Warning: Failed to walk {}: {}", root_path.display(), err);
                    }
                    None
                }
            })
            .filter(|entry| entry.path().is_file())
            .collect();

        // collect() keeps the walk order
        let files = entries
            .par_iter()
            .filter(|entry| self.matches_extension(entry.path()))
            .map(|entry| SourceFile {
                path: entry.path().to_path_buf(),
            })
            .collect();

        Ok(files)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.contains(ext))
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}
