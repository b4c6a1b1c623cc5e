use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::core::FileTypes;

/// One name per line
pub struct LinesFormatter;

impl LinesFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_to_file(&self, collected: &[FileTypes], output_path: &Path) -> Result<()> {
        fs::write(output_path, self.format(collected)?)?;
        Ok(())
    }

    pub fn format(&self, collected: &[FileTypes]) -> Result<String> {
        let mut output = String::new();
        for name in FileTypes::flatten(collected) {
            output.push_str(name);
            output.push('\n');
        }
        Ok(output)
    }
}

impl Default for LinesFormatter {
    fn default() -> Self {
        Self::new()
    }
}
