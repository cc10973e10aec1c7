//! Input and output helpers.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use colored::Colorize;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// Read a file, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .wrap_err("Failed to read stdin")?;
            Ok(text)
        }
    }
}

pub fn read_json<T: DeserializeOwned>(path: Option<&Path>) -> Result<T> {
    let text = read_input(path)?;
    let source = path.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
    serde_json::from_str(&text).wrap_err_with(|| format!("{source} is not a valid configuration"))
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).wrap_err("Failed to serialize output")
}

/// Write to a file, or stdout when `output` is `None`.
pub fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let content = if text.ends_with('\n') {
                text.to_string()
            } else {
                format!("{text}\n")
            };
            std::fs::write(path, content)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} {}", "wrote".green().bold(), path.display());
            Ok(())
        }
        None => {
            println!("{}", text.trim_end_matches('\n'));
            Ok(())
        }
    }
}

pub fn report_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {warning}", "warning:".yellow().bold());
    }
}
