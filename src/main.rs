use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use indent_types::core::{FileScanner, TypeCollector};
use indent_types::formatters::{IndentFlagsFormatter, JsonListFormatter, LinesFormatter};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "indent-types",
    version = "0.1.0",
    author = "indent-types developers",
    about = "Print the typedef names of C sources as -T flags for indent"
)]
struct Cli {
    /// Source files or directories to scan
    #[arg(value_name = "PATHS")]
    paths: Vec<PathBuf>,

    /// Output format: indent, lines, json
    #[arg(short, long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Indent)]
    format: OutputFormat,

    /// Comma-separated extensions picked up when walking directories
    #[arg(
        short,
        long,
        value_name = "EXTS",
        value_delimiter = ',',
        default_value = "c,h"
    )]
    extensions: Vec<String>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Report progress and filtered function pointers on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Indent,
    Lines,
    Json,
}

impl OutputFormat {
    fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Indent => "indent",
            OutputFormat::Lines => "lines",
            OutputFormat::Json => "json",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        paths,
        format,
        extensions,
        output,
        verbose,
    } = cli;

    let start_time = Instant::now();

    let extension_refs: Vec<&str> = extensions.iter().map(String::as_str).collect();
    let files = FileScanner::with_extensions(&extension_refs)
        .with_verbose(verbose)
        .collect(&paths)?;
    if verbose {
        eprintln!("Scanning {} files (format: {})", files.len(), format.as_str());
    }

    let collected = TypeCollector::new().with_verbose(verbose).collect(&files)?;

    let rendered = match format {
        OutputFormat::Indent => IndentFlagsFormatter::new().format(&collected)?,
        OutputFormat::Lines => LinesFormatter::new().format(&collected)?,
        OutputFormat::Json => JsonListFormatter::new().format(&collected)?,
    };

    match output {
        Some(path) => std::fs::write(&path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    if verbose {
        let total: usize = collected.iter().map(|file| file.types.len()).sum();
        eprintln!(
            "Collected {} types in {:.2}s",
            total,
            start_time.elapsed().as_secs_f64()
        );
    }

    Ok(())
}
