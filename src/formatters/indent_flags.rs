use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::core::FileTypes;

/// Renders names as ` -T <name>` arguments for GNU indent.
pub struct IndentFlagsFormatter {
    flag: &'static str,
}

impl IndentFlagsFormatter {
    pub fn new() -> Self {
        Self { flag: "-T" }
    }

    pub fn format_to_file(&self, collected: &[FileTypes], output_path: &Path) -> Result<()> {
        fs::write(output_path, self.format(collected)?)?;
        Ok(())
    }

    /// No separators and no trailing newline: every name carries its own prefix.
    pub fn format(&self, collected: &[FileTypes]) -> Result<String> {
        let mut output = String::new();
        for name in FileTypes::flatten(collected) {
            output.push(' ');
            output.push_str(self.flag);
            output.push(' ');
            output.push_str(name);
        }
        Ok(output)
    }
}

impl Default for IndentFlagsFormatter {
    fn default() -> Self {
        Self::new()
    }
}
