//! # CLI Command Implementations
//!
//! Each command returns its output as a string; `emit` decides whether it
//! goes to a file or to stdout.

use prudens_core::{KnowledgeBase, PrudensError};
use std::path::{Path, PathBuf};

// =============================================================================
// INPUT / OUTPUT PATHS
// =============================================================================

/// Maximum input file size (16 MB).
const MAX_INPUT_FILE_SIZE: u64 = 16 * 1024 * 1024;

fn io_error(context: &str, path: &Path, err: impl std::fmt::Display) -> PrudensError {
    PrudensError::IoError(format!("{} '{}': {}", context, path.display(), err))
}

/// Resolve an input path to a non-empty regular file within the size limit.
///
/// An empty file is neither a text nor a JSON knowledge base.
fn resolve_input(path: &Path) -> Result<PathBuf, PrudensError> {
    let resolved = path
        .canonicalize()
        .map_err(|e| io_error("Invalid input path", path, e))?;
    let metadata =
        std::fs::metadata(&resolved).map_err(|e| io_error("Cannot stat input", path, e))?;

    match metadata.len() {
        _ if !metadata.is_file() => Err(io_error("Input", path, "not a regular file")),
        0 => Err(io_error("Input", path, "file is empty")),
        len if len > MAX_INPUT_FILE_SIZE => Err(io_error(
            "Input",
            path,
            format!("{} bytes exceeds the {} byte limit", len, MAX_INPUT_FILE_SIZE),
        )),
        _ => Ok(resolved),
    }
}

/// Resolve an output path whose directory must already exist.
///
/// A bare file name is written to the working directory.
fn resolve_output(path: &Path) -> Result<PathBuf, PrudensError> {
    let filename = path
        .file_name()
        .ok_or_else(|| io_error("Output path", path, "has no file name"))?;
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let resolved = directory
        .canonicalize()
        .map_err(|e| io_error("Invalid output directory", directory, e))?;
    if !resolved.is_dir() {
        return Err(io_error("Output", directory, "not a directory"));
    }
    Ok(resolved.join(filename))
}

/// Read a validated input file as UTF-8.
pub fn read_input(path: &Path) -> Result<String, PrudensError> {
    let resolved = resolve_input(path)?;
    let text = std::fs::read_to_string(&resolved).map_err(|e| io_error("Read", path, e))?;
    tracing::debug!("Read {} bytes from {:?}", text.len(), resolved);
    Ok(text)
}

/// Read and parse a text knowledge base.
pub fn read_knowledge_base(path: &Path) -> Result<KnowledgeBase, PrudensError> {
    let kb = KnowledgeBase::parse(&read_input(path)?)?;
    tracing::info!(
        "Parsed {:?}: {} rules ({} active)",
        path,
        kb.len(),
        kb.active_count()
    );
    Ok(kb)
}

/// Write command output to `output`, or print it when no file is given.
pub fn emit(output: Option<&Path>, text: &str) -> Result<(), PrudensError> {
    match output {
        Some(path) => {
            let resolved = resolve_output(path)?;
            std::fs::write(&resolved, format!("{}\n", text))
                .map_err(|e| io_error("Write", path, e))?;
            tracing::info!("Wrote {} bytes to {:?}", text.len() + 1, resolved);
        }
        None => println!("{}", text),
    }
    Ok(())
}

/// Expand `\n`, `\t` and `\\` in a separator given on the command line.
pub fn unescape_separator(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

// =============================================================================
// EXPORT COMMAND
// =============================================================================

/// Convert a text knowledge base to exchange JSON.
pub fn cmd_export(input: &Path, pretty: bool) -> Result<String, PrudensError> {
    let kb = read_knowledge_base(input)?;
    kb.to_json(pretty)
}

// =============================================================================
// IMPORT COMMAND
// =============================================================================

/// Convert exchange JSON to a text knowledge base.
pub fn cmd_import(input: &Path, separator: &str) -> Result<String, PrudensError> {
    let kb = KnowledgeBase::from_json(&read_input(input)?)?;
    tracing::info!("Imported {:?}: {} rules", input, kb.len());
    Ok(kb.render(separator))
}

// =============================================================================
// FORMAT COMMAND
// =============================================================================

/// Re-render a text knowledge base.
pub fn cmd_format(input: &Path, separator: &str) -> Result<String, PrudensError> {
    Ok(read_knowledge_base(input)?.render(separator))
}

// =============================================================================
// CONTEXT COMMAND
// =============================================================================

/// List the full context, one name per line or as a JSON array.
pub fn cmd_context(input: &Path, json_mode: bool) -> Result<String, PrudensError> {
    let context = read_knowledge_base(input)?.full_context();

    if json_mode {
        return serde_json::to_string_pretty(&context)
            .map_err(|e| PrudensError::SerializationError(e.to_string()));
    }
    Ok(context.join("\n"))
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Parse a knowledge base and summarise it.
pub fn cmd_check(input: &Path, json_mode: bool) -> Result<String, PrudensError> {
    let kb = read_knowledge_base(input)?;
    let context_size = kb.full_context().len();

    if json_mode {
        let output = serde_json::json!({
            "file": input.to_string_lossy(),
            "rules": kb.len(),
            "active_rules": kb.active_count(),
            "context_size": context_size
        });
        return serde_json::to_string_pretty(&output)
            .map_err(|e| PrudensError::SerializationError(e.to_string()));
    }

    let mut report = String::new();
    report.push_str("Prudens Knowledge Base\n");
    report.push_str("======================\n");
    report.push_str(&format!("File:         {}\n", input.display()));
    report.push_str(&format!("Rules:        {}\n", kb.len()));
    report.push_str(&format!("Active Rules: {}\n", kb.active_count()));
    report.push_str(&format!("Context:      {} names", context_size));
    Ok(report)
}

// =============================================================================
// TESTS
// =============================================================================
