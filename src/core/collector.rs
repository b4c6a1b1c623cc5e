use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;

use super::extractor::{TypedefExtractor, TypedefKind};
use super::scanner::SourceFile;
use super::source::read_source;

/// Type names extracted from one file.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct FileTypes {
    pub path: PathBuf,
    pub types: Vec<String>,
}

impl FileTypes {
    /// All names in file order, then occurrence order.
    pub fn flatten(collected: &[FileTypes]) -> Vec<&str> {
        collected
            .iter()
            .flat_map(|file| file.types.iter().map(String::as_str))
            .collect()
    }
}

pub struct TypeCollector {
    extractor: TypedefExtractor,
    verbose: bool,
}

impl TypeCollector {
    pub fn new() -> Self {
        Self {
            extractor: TypedefExtractor::new(),
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Reads and scans every file. Results come back in input order even though
    /// files are processed in parallel; the first unreadable file aborts the run.
    pub fn collect(&self, files: &[SourceFile]) -> Result<Vec<FileTypes>> {
        files
            .par_iter()
            .map(|file| self.collect_file(file))
            .collect()
    }

    fn collect_file(&self, file: &SourceFile) -> Result<FileTypes> {
        let source = read_source(&file.path)
            .with_context(|| format!("Failed to read {}", file.path.display()))?;
        let code = source.trim();

        let types = if self.verbose {
            let occurrences = self.extractor.occurrences(code);
            let mut types = Vec::with_capacity(occurrences.len());
            for occurrence in occurrences {
                if occurrence.kind == TypedefKind::FunctionPointer {
                    eprintln!("Filtered function pointer: {}", occurrence.body);
                } else {
                    types.push(occurrence.fragment.to_string());
                }
            }
            eprintln!("{}: {} types", file.path.display(), types.len());
            types
        } else {
            self.extractor.extract(code)
        };

        Ok(FileTypes {
            path: file.path.clone(),
            types,
        })
    }
}

impl Default for TypeCollector {
    fn default() -> Self {
        Self::new()
    }
}
