//! Integration tests for CLI commands against on-disk fixtures.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use clap::Parser;
use prudens::cli::{
    Cli, Commands, cmd_check, cmd_context, cmd_export, cmd_format, cmd_import, emit, execute,
};
use prudens::config::AppConfig;
use prudens_core::{KnowledgeBase, PrudensError};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

const SAMPLE_KB: &str = "@KnowledgeBase\n\
    R1 :: bird, -penguin implies flies;\n\
    R2 :: penguin implies -flies;\n\
    R3 :: item10, item2, true implies ok;\n";

fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// =============================================================================
// ARGUMENT PARSING
// =============================================================================

#[test]
fn test_parse_export_arguments() {
    let cli = Cli::try_parse_from(["prudens", "export", "-i", "kb.txt", "--compact"]).unwrap();
    match cli.command {
        Commands::Export {
            input,
            output,
            compact,
        } => {
            assert_eq!(input, PathBuf::from("kb.txt"));
            assert!(output.is_none());
            assert!(compact);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["prudens", "context", "-i", "kb.txt", "--json-mode", "-v"])
        .unwrap();
    assert!(cli.json_mode);
    assert!(cli.verbose);
}

#[test]
fn test_subcommand_required() {
    assert!(Cli::try_parse_from(["prudens"]).is_err());
}

// =============================================================================
// COMMANDS
// =============================================================================

#[test]
fn test_export_then_import_roundtrip() {
    let kb_file = write_fixture(SAMPLE_KB);
    let json = cmd_export(kb_file.path(), true).unwrap();
    assert!(json.contains("\"type\": \"output\""));

    let json_file = write_fixture(&json);
    let text = cmd_import(json_file.path(), "\n").unwrap();
    assert_eq!(
        KnowledgeBase::parse(&text).unwrap(),
        KnowledgeBase::parse(SAMPLE_KB).unwrap()
    );
}

#[test]
fn test_export_compact_is_single_line() {
    let kb_file = write_fixture("@KnowledgeBase R1 :: a implies b;");
    let json = cmd_export(kb_file.path(), false).unwrap();
    assert!(!json.contains('\n'));
}

#[test]
fn test_format_renumbers_rules() {
    let kb_file = write_fixture("@KnowledgeBase  X :: a implies b;  Y :: -c implies d;");
    let text = cmd_format(kb_file.path(), " ").unwrap();
    assert_eq!(
        text,
        "@KnowledgeBase R1 :: a implies b; R2 :: -c implies d;"
    );
}

#[test]
fn test_context_text_and_json() {
    let kb_file = write_fixture(SAMPLE_KB);

    let text = cmd_context(kb_file.path(), false).unwrap();
    assert_eq!(text, "bird\nitem2\nitem10\npenguin");

    let json = cmd_context(kb_file.path(), true).unwrap();
    let names: Vec<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(names, vec!["bird", "item2", "item10", "penguin"]);
}

#[test]
fn test_check_json_counts() {
    let kb_file = write_fixture(SAMPLE_KB);
    let json = cmd_check(kb_file.path(), true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["rules"], 3);
    assert_eq!(value["active_rules"], 3);
    assert_eq!(value["context_size"], 4);
}

#[test]
fn test_check_text_report() {
    let kb_file = write_fixture(SAMPLE_KB);
    let report = cmd_check(kb_file.path(), false).unwrap();
    assert!(report.contains("Rules:        3"));
    assert!(report.contains("Context:      4 names"));
}

#[test]
fn test_malformed_block_reported() {
    let kb_file = write_fixture("R1 :: a implies b;");
    let result = cmd_format(kb_file.path(), "\n");
    assert_eq!(result, Err(PrudensError::MalformedKnowledgeBase));
}

#[test]
fn test_import_rejects_incomplete_object() {
    let json_file = write_fixture(r#"{"type": "output", "kb": [{"name": "R1"}]}"#);
    let result = cmd_import(json_file.path(), "\n");
    assert!(matches!(result, Err(PrudensError::MalformedObject(_))));
}

#[test]
fn test_directory_input_rejected() {
    let dir = TempDir::new().unwrap();
    let result = cmd_format(dir.path(), "\n");
    assert!(matches!(result, Err(PrudensError::IoError(_))));
}

#[test]
fn test_empty_input_rejected() {
    let kb_file = write_fixture("");
    let result = cmd_check(kb_file.path(), false);
    assert!(matches!(result, Err(PrudensError::IoError(ref msg)) if msg.contains("empty")));
}

// =============================================================================
// OUTPUT
// =============================================================================

#[test]
fn test_emit_writes_file_with_trailing_newline() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("kb.txt");

    emit(Some(out.as_path()), "@KnowledgeBase").unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "@KnowledgeBase\n");
}

#[test]
fn test_emit_rejects_missing_directory() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("missing").join("kb.txt");
    assert!(matches!(emit(Some(out.as_path()), "x"), Err(PrudensError::IoError(_))));
}

#[test]
fn test_execute_import_uses_config_separator() {
    let dir = TempDir::new().unwrap();
    let json_file = write_fixture(
        &KnowledgeBase::parse(SAMPLE_KB)
            .unwrap()
            .to_json(false)
            .unwrap(),
    );
    let out = dir.path().join("kb.txt");

    let args: Vec<OsString> = vec![
        "prudens".into(),
        "import".into(),
        "-i".into(),
        json_file.path().into(),
        "-o".into(),
        out.as_os_str().into(),
    ];
    let cli = Cli::try_parse_from(args).unwrap();
    let config = AppConfig::from_toml("[render]\nseparator = \" | \"\n").unwrap();

    execute(cli, &config).unwrap();
    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("@KnowledgeBase | R1 :: bird, -penguin implies flies; | R2"));
}

#[test]
fn test_execute_separator_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let kb_file = write_fixture("@KnowledgeBase R1 :: a implies b;");
    let out = dir.path().join("kb.txt");

    let args: Vec<OsString> = vec![
        "prudens".into(),
        "format".into(),
        "-i".into(),
        kb_file.path().into(),
        "-o".into(),
        out.as_os_str().into(),
        "-s".into(),
        r"\t".into(),
    ];
    let cli = Cli::try_parse_from(args).unwrap();

    execute(cli, &AppConfig::default()).unwrap();
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "@KnowledgeBase\tR1 :: a implies b;\n"
    );
}
