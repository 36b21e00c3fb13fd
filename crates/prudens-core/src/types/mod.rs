//! # Core Type Definitions
//!
//! This module contains the types shared by every layer of the format:
//! - Error types (`PrudensError`)
//!
//! The record types themselves (`Literal`, `Rule`, `KnowledgeBase`) live in
//! their own modules because each owns its parser and renderer.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while converting Prudens knowledge bases.
///
/// - No silent failures at parse boundaries
/// - Use `Result<T, PrudensError>` for fallible operations
/// - A failed parse never yields a partial record
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrudensError {
    /// A rule statement lacks the `" :: "` or `" implies "` delimiter,
    /// or its implication does not split into exactly a body and a head.
    #[error("Malformed rule statement: {0}")]
    MalformedRule(String),

    /// The text does not begin with the `@KnowledgeBase` marker.
    #[error("Knowledge base text must begin with '@KnowledgeBase'")]
    MalformedKnowledgeBase,

    /// An exchange object is missing a required field or has the wrong shape.
    #[error("Malformed exchange object: {0}")]
    MalformedObject(String),

    /// A serialization error occurred while producing exchange JSON.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred (only raised by callers doing file access).
    #[error("I/O error: {0}")]
    IoError(String),

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for PrudensError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            Self::MalformedObject(err.to_string())
        } else {
            Self::SerializationError(err.to_string())
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
