//! # Literal
//!
//! A signed propositional atom. In text the sign is positional (`-a` is the
//! negation of `a`); in the exchange form it is the boolean `sign` field.

use crate::exchange::LiteralObject;
use crate::primitives::{LITERAL_CACHE_CAPACITY, NEGATION_PREFIX};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Mutex, OnceLock};

/// A literal: an atom name plus its polarity.
///
/// Invariant: `name` never starts with the negation prefix introduced by
/// parsing. Only one leading `-` is consumed, so `--a` parses to the name
/// `-a` and is not re-validated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    name: String,
    sign: bool,
}

impl Literal {
    /// Create a positive literal.
    #[must_use]
    pub fn positive(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sign: true,
        }
    }

    /// Create a negative literal.
    #[must_use]
    pub fn negative(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sign: false,
        }
    }

    /// Parse a text token such as `a` or `-a`.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token.strip_prefix(NEGATION_PREFIX) {
            Some(name) => Self::negative(name),
            None => Self::positive(token),
        }
    }

    /// Rebuild a literal from its exchange object. Metadata is dropped.
    #[must_use]
    pub fn from_object(object: &LiteralObject) -> Self {
        Self {
            name: object.name.clone(),
            sign: object.sign,
        }
    }

    /// Exchange object with metadata at its fixed defaults.
    #[must_use]
    pub fn to_object(&self) -> LiteralObject {
        LiteralObject::new(self.name.clone(), self.sign)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` for a positive (unnegated) literal.
    #[must_use]
    pub fn sign(&self) -> bool {
        self.sign
    }

    /// The literal with the opposite sign.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            name: self.name.clone(),
            sign: !self.sign,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}{}", NEGATION_PREFIX, self.name)
        }
    }
}

impl From<&str> for Literal {
    fn from(token: &str) -> Self {
        Self::parse(token)
    }
}

// =============================================================================
// TOKEN MEMO
// =============================================================================

static OBJECT_CACHE: OnceLock<Mutex<BTreeMap<String, LiteralObject>>> = OnceLock::new();

/// Exchange object for a text token, memoized by token.
///
/// The memo is bounded by `LITERAL_CACHE_CAPACITY` and cleared when full.
/// A poisoned lock falls back to converting without the memo.
#[must_use]
pub fn token_to_object(token: &str) -> LiteralObject {
    let cache = OBJECT_CACHE.get_or_init(|| Mutex::new(BTreeMap::new()));
    let Ok(mut entries) = cache.lock() else {
        return Literal::parse(token).to_object();
    };

    if let Some(hit) = entries.get(token) {
        return hit.clone();
    }

    let object = Literal::parse(token).to_object();
    if entries.len() >= LITERAL_CACHE_CAPACITY {
        entries.clear();
    }
    entries.insert(token.to_string(), object.clone());
    object
}

// =============================================================================
// TESTS
// =============================================================================
