use clap::ValueEnum;
use log::info;
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::errors::Result;
use crate::intrinsics::resolve;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    CompactJson,
    Yaml,
}

/// Parses a JSON template and resolves the tokens in it.
pub fn resolve_document(input: &str) -> Result<Value> {
    let document: Value = serde_json::from_str(input)?;
    resolve(&document)
}

pub fn render(value: &Value, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::CompactJson => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yml::to_string(value)?,
    };
    Ok(rendered)
}

/// Writes `rendered` with a single trailing newline to `output`, or to
/// stdout when no path is given.
pub fn write_rendered(rendered: &str, output: Option<&Path>) -> Result<()> {
    let contents = format!("{}\n", rendered.trim_end());
    match output {
        Some(path) => {
            fs::write(path, contents)?;
            info!("Wrote {}", path.display());
        }
        None => io::stdout().write_all(contents.as_bytes())?,
    }
    Ok(())
}

/// Reads the template at `input`, resolves it, and writes it to `output`.
pub fn resolve_file(input: &Path, output: &Path, format: OutputFormat) -> Result<()> {
    let contents = fs::read_to_string(input)?;
    let rendered = render(&resolve_document(&contents)?, format)?;
    write_rendered(&rendered, Some(output))
}
