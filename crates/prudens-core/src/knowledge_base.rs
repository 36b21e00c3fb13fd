//! # Knowledge Base
//!
//! An ordered sequence of rules, each carrying its own active flag.
//!
//! ```text
//! @KnowledgeBase
//! R1 :: bird implies flies;
//! R2 :: penguin implies -flies;
//! ```
//!
//! ## Numbering
//!
//! Rendering and export number rules `R1, R2, ...` by position within the
//! **active** subsequence. Inactive rules are kept in the record but never
//! rendered, numbered or exported.

use crate::context::natural_sort;
use crate::exchange::KnowledgeBaseObject;
use crate::primitives::{DEFAULT_KB_SEPARATOR, KB_MARKER, STATEMENT_TERMINATOR};
use crate::rule::{Rule, RuleName};
use crate::types::PrudensError;
use std::fmt;
use std::sync::Arc;

/// An immutable, ordered collection of rules.
///
/// Equality is order-sensitive: two knowledge bases are equal iff their rule
/// sequences are pairwise equal under `Rule` equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KnowledgeBase {
    rules: Arc<[Rule]>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a knowledge base from rules, keeping their order.
    #[must_use]
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    // =========================================================================
    // TEXT FORM
    // =========================================================================

    /// Parse a `@KnowledgeBase` block.
    ///
    /// Newlines are collapsed to spaces, the block is split on `;` and every
    /// non-blank statement is parsed as an active rule.
    pub fn parse(text: &str) -> Result<Self, PrudensError> {
        let rest = text
            .trim()
            .strip_prefix(KB_MARKER)
            .ok_or(PrudensError::MalformedKnowledgeBase)?;

        let collapsed = rest.replace("\r\n", " ").replace('\n', " ");

        collapsed
            .trim()
            .split(STATEMENT_TERMINATOR)
            .map(str::trim)
            .filter(|statement| !statement.is_empty())
            .map(Rule::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_rules)
    }

    /// Render the marker line followed by one numbered statement per active
    /// rule, joined with `separator`.
    #[must_use]
    pub fn render(&self, separator: &str) -> String {
        std::iter::once(KB_MARKER.to_string())
            .chain(
                self.active_rules()
                    .map(|(index, rule)| rule.render(RuleName::Index(index))),
            )
            .collect::<Vec<_>>()
            .join(separator)
    }

    // =========================================================================
    // EXCHANGE FORM
    // =========================================================================

    /// Export the active rules as an exchange object.
    #[must_use]
    pub fn to_object(&self) -> KnowledgeBaseObject {
        KnowledgeBaseObject::new(
            self.active_rules()
                .map(|(index, rule)| rule.to_object(RuleName::Index(index)))
                .collect(),
        )
    }

    /// Import an exchange object. Every imported rule is active.
    #[must_use]
    pub fn from_object(object: &KnowledgeBaseObject) -> Self {
        object.kb.iter().map(Rule::from_object).collect()
    }

    /// Decode a JSON knowledge-base object.
    pub fn from_json(json: &str) -> Result<Self, PrudensError> {
        KnowledgeBaseObject::from_json(json).map(|object| Self::from_object(&object))
    }

    /// Export the active rules as exchange JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, PrudensError> {
        self.to_object().to_json(pretty)
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    /// Every distinct sign-stripped body name over all rules, active or not,
    /// without `true` / `empty`, in natural order.
    #[must_use]
    pub fn full_context(&self) -> Vec<String> {
        natural_sort(
            self.rules
                .iter()
                .flat_map(Rule::context_names)
                .map(str::to_string),
        )
    }

    /// Active rules paired with their 1-based position among active rules.
    pub fn active_rules(&self) -> impl Iterator<Item = (usize, &Rule)> {
        self.rules
            .iter()
            .filter(|rule| rule.is_active())
            .enumerate()
            .map(|(position, rule)| (position + 1, rule))
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of active rules.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.rules.iter().filter(|rule| rule.is_active()).count()
    }

    /// A new knowledge base sharing this rule sequence.
    #[must_use]
    pub fn copy(&self) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
        }
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::from_rules(Vec::new())
    }
}

impl fmt::Display for KnowledgeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_KB_SEPARATOR))
    }
}

impl FromIterator<Rule> for KnowledgeBase {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::from_rules(iter.into_iter().collect())
    }
}

impl From<Vec<Rule>> for KnowledgeBase {
    fn from(rules: Vec<Rule>) -> Self {
        Self::from_rules(rules)
    }
}

impl<'a> IntoIterator for &'a KnowledgeBase {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
