//! # Exchange Objects
//!
//! Structured form of a knowledge base as exchanged with the Prudens engine.
//!
//! The engine speaks JSON. Each struct here is the typed schema of one JSON
//! object, so a missing required field fails decoding with
//! `PrudensError::MalformedObject` instead of yielding a default record.
//!
//! ```text
//! { "type": "output",
//!   "kb": [ { "name": "R1",
//!             "body": [ { "name": "a", "sign": true,  ... } ],
//!             "head":   { "name": "c", "sign": false, ... } } ],
//!   "imports": "",
//!   "warnings": [] }
//! ```
//!
//! Metadata fields of a literal (`isJS`, `isEquality`, `isInequality`,
//! `isAction`, `arity`) are optional on input and always emitted with their
//! fixed defaults by this crate.

use crate::primitives::KB_OBJECT_TYPE;
use crate::types::PrudensError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// =============================================================================
// LITERAL OBJECT
// =============================================================================

/// Exchange form of a single literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralObject {
    /// Atom name, never carrying the negation prefix.
    pub name: String,
    /// `true` for a positive literal.
    pub sign: bool,
    #[serde(rename = "isJS", default)]
    pub is_js: bool,
    #[serde(default)]
    pub is_equality: bool,
    #[serde(default)]
    pub is_inequality: bool,
    #[serde(default)]
    pub is_action: bool,
    #[serde(default)]
    pub arity: i64,
}

impl LiteralObject {
    /// Create a literal object with all metadata at its defaults.
    #[must_use]
    pub fn new(name: impl Into<String>, sign: bool) -> Self {
        Self {
            name: name.into(),
            sign,
            is_js: false,
            is_equality: false,
            is_inequality: false,
            is_action: false,
            arity: 0,
        }
    }
}

// =============================================================================
// RULE OBJECT
// =============================================================================

/// Exchange form of a rule.
///
/// `name` is required on input but never read back into a `Rule`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleObject {
    pub name: String,
    pub body: Vec<LiteralObject>,
    pub head: LiteralObject,
}

impl RuleObject {
    pub fn from_json(json: &str) -> Result<Self, PrudensError> {
        decode_str(json)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, PrudensError> {
        encode(self, pretty)
    }
}

// =============================================================================
// KNOWLEDGE BASE OBJECT
// =============================================================================

/// Exchange form of a whole knowledge base.
///
/// Only `kb` is required on input; `type`, `imports` and `warnings` are
/// read when present but never checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseObject {
    /// Always `"output"` when produced by this crate.
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    pub kb: Vec<RuleObject>,
    #[serde(default)]
    pub imports: String,
    #[serde(default)]
    pub warnings: Vec<serde_json::Value>,
}

impl KnowledgeBaseObject {
    /// Wrap rule objects with the fixed auxiliary fields.
    #[must_use]
    pub fn new(kb: Vec<RuleObject>) -> Self {
        Self {
            kind: KB_OBJECT_TYPE.to_string(),
            kb,
            imports: String::new(),
            warnings: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, PrudensError> {
        decode_str(json)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, PrudensError> {
        encode(self, pretty)
    }
}

fn default_kind() -> String {
    KB_OBJECT_TYPE.to_string()
}

// =============================================================================
// JSON HELPERS
// =============================================================================

fn decode_str<T: DeserializeOwned>(json: &str) -> Result<T, PrudensError> {
    serde_json::from_str(json).map_err(PrudensError::from)
}

fn encode<T: Serialize>(value: &T, pretty: bool) -> Result<String, PrudensError> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.map_err(|e| PrudensError::SerializationError(e.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================
