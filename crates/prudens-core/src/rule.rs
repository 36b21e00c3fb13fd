//! # Rule
//!
//! A rule is an ordered body of literal tokens implying a head token:
//!
//! ```text
//! R1 :: bird, -penguin implies flies;
//! ```
//!
//! Tokens are kept as raw text. Body order and duplicates are preserved for
//! rendering, but rule identity compares the body as a set.

use crate::exchange::RuleObject;
use crate::literal::{Literal, token_to_object};
use crate::primitives::{
    BODY_SEPARATOR, IMPLIES_DELIMITER, NAME_DELIMITER, NEGATION_PREFIX, RESERVED_CONTEXT_NAMES,
    RULE_NAME_PREFIX, STATEMENT_TERMINATOR,
};
use crate::types::PrudensError;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

// =============================================================================
// RULE NAME
// =============================================================================

/// Name written in front of a rendered statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleName<'a> {
    /// Plain `R`.
    #[default]
    Default,
    /// `R<i>`.
    Index(usize),
    /// Used verbatim.
    Text(&'a str),
}

impl fmt::Display for RuleName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "{}", RULE_NAME_PREFIX),
            Self::Index(i) => write!(f, "{}{}", RULE_NAME_PREFIX, i),
            Self::Text(name) => write!(f, "{}", name),
        }
    }
}

impl From<usize> for RuleName<'_> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl<'a> From<&'a str> for RuleName<'a> {
    fn from(name: &'a str) -> Self {
        Self::Text(name)
    }
}

impl<'a> From<Option<&'a str>> for RuleName<'a> {
    fn from(name: Option<&'a str>) -> Self {
        name.map_or(Self::Default, Self::Text)
    }
}

// =============================================================================
// RULE
// =============================================================================

/// An immutable rule record.
///
/// Equality and hashing use only `(set(body), head)`; `added_as` and
/// `active` are bookkeeping and never affect identity.
#[derive(Debug, Clone)]
pub struct Rule {
    body: Vec<String>,
    head: String,
    added_as: String,
    active: bool,
}

impl Rule {
    /// Create an active rule with an empty provenance tag.
    #[must_use]
    pub fn new<I, S>(body: I, head: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            body: body.into_iter().map(Into::into).collect(),
            head: head.into(),
            added_as: String::new(),
            active: true,
        }
    }

    /// Same rule with a different provenance tag.
    #[must_use]
    pub fn with_added_as(self, added_as: impl Into<String>) -> Self {
        Self {
            added_as: added_as.into(),
            ..self
        }
    }

    /// Same rule with a different active flag.
    #[must_use]
    pub fn with_active(self, active: bool) -> Self {
        Self { active, ..self }
    }

    /// Parse one statement as an active rule with no provenance tag.
    pub fn parse(statement: &str) -> Result<Self, PrudensError> {
        Self::parse_with(statement, "", true)
    }

    /// Parse one statement of the form `<name> :: <body> implies <head>;`.
    ///
    /// The name is ignored. The trailing `;` is optional. `added_as` and
    /// `active` are taken from the caller, never from the text.
    pub fn parse_with(
        statement: &str,
        added_as: impl Into<String>,
        active: bool,
    ) -> Result<Self, PrudensError> {
        let malformed = || PrudensError::MalformedRule(statement.trim().to_string());

        if !statement.contains(NAME_DELIMITER) || !statement.contains(IMPLIES_DELIMITER) {
            return Err(malformed());
        }

        // Leading whitespace is left alone so a blank name still precedes " :: ".
        let stripped = statement.trim_end().trim_end_matches(STATEMENT_TERMINATOR);
        let implication = stripped.split(NAME_DELIMITER).nth(1).ok_or_else(malformed)?;

        let mut sides = implication.split(IMPLIES_DELIMITER);
        let (Some(body), Some(head), None) = (sides.next(), sides.next(), sides.next()) else {
            return Err(malformed());
        };

        Ok(Self {
            body: body.split(BODY_SEPARATOR).map(str::to_string).collect(),
            head: head.trim().to_string(),
            added_as: added_as.into(),
            active,
        })
    }

    /// Build a rule from its exchange object.
    ///
    /// Every literal is parsed and re-rendered to canonical text; the
    /// object's own `name` is discarded.
    #[must_use]
    pub fn from_object(object: &RuleObject) -> Self {
        Self::new(
            object
                .body
                .iter()
                .map(|lit| Literal::from_object(lit).to_string()),
            Literal::from_object(&object.head).to_string(),
        )
    }

    /// Decode a JSON rule object.
    pub fn from_json(json: &str) -> Result<Self, PrudensError> {
        RuleObject::from_json(json).map(|object| Self::from_object(&object))
    }

    /// Render as `<name> :: <body> implies <head>;`.
    #[must_use]
    pub fn render<'a>(&self, name: impl Into<RuleName<'a>>) -> String {
        format!(
            "{}{}{}{}{}{}",
            name.into(),
            NAME_DELIMITER,
            self.body.join(BODY_SEPARATOR),
            IMPLIES_DELIMITER,
            self.head,
            STATEMENT_TERMINATOR
        )
    }

    /// Exchange object under the given rule name.
    #[must_use]
    pub fn to_object<'a>(&self, name: impl Into<RuleName<'a>>) -> RuleObject {
        RuleObject {
            name: name.into().to_string(),
            body: self.body.iter().map(|token| token_to_object(token)).collect(),
            head: token_to_object(&self.head),
        }
    }

    #[must_use]
    pub fn body(&self) -> &[String] {
        &self.body
    }

    #[must_use]
    pub fn head(&self) -> &str {
        &self.head
    }

    #[must_use]
    pub fn added_as(&self) -> &str {
        &self.added_as
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Sign-stripped body names, minus the reserved `true` / `empty`.
    ///
    /// Strips the same single leading `-` as `Literal::parse`.
    pub fn context_names(&self) -> impl Iterator<Item = &str> {
        self.body
            .iter()
            .map(|token| token.strip_prefix(NEGATION_PREFIX).unwrap_or(token))
            .filter(|name| !RESERVED_CONTEXT_NAMES.contains(name))
    }

    fn body_set(&self) -> BTreeSet<&str> {
        self.body.iter().map(String::as_str).collect()
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.head == other.head && self.body_set() == other.body_set()
    }
}

impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.head.hash(state);
        // BTreeSet iterates sorted and deduplicated, matching `eq`.
        for token in self.body_set() {
            token.hash(state);
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RuleName::Default))
    }
}

// =============================================================================
// TESTS
// =============================================================================
