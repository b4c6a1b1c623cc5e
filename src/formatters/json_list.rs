use anyhow::Result;
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::core::FileTypes;

/// Per-file JSON listing for tooling that wants to know where names came from
pub struct JsonListFormatter {
    pretty: bool,
}

impl JsonListFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn format_to_file(&self, collected: &[FileTypes], output_path: &Path) -> Result<()> {
        fs::write(output_path, self.format(collected)?)?;
        Ok(())
    }

    pub fn format(&self, collected: &[FileTypes]) -> Result<String> {
        let type_count: usize = collected.iter().map(|file| file.types.len()).sum();
        // Non-UTF-8 paths surface here as an error instead of inside json!
        let files = serde_json::to_value(collected)?;

        let output = json!({
            "meta": {
                "files": collected.len(),
                "types": type_count
            },
            "files": files
        });

        if self.pretty {
            Ok(serde_json::to_string_pretty(&output)?)
        } else {
            Ok(serde_json::to_string(&output)?)
        }
    }
}

impl Default for JsonListFormatter {
    fn default() -> Self {
        Self::new()
    }
}
