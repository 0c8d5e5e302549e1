//! Common CLI types and utilities shared across commands.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Output format for estimation results.
///
/// Commands that produce structured output use this enum to let users choose
/// between an interactive table and pipe-friendly JSON.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable aligned table (default for interactive use)
    #[default]
    Table,
    /// Pretty-printed JSON (pipe-friendly, structured)
    Json,
}

/// Write rendered output to a file when a destination is given, otherwise to
/// stdout.
pub fn write_output(content: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("Wrote output to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }
    Ok(())
}
