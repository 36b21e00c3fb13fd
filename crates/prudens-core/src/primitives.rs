//! # Format Primitives
//!
//! Fixed delimiters and reserved words of the Prudens textual syntax.
//!
//! The grammar is delimiter-exact: every separator below is matched as a
//! literal substring, including its surrounding spaces.
//!
//! ```text
//! @KnowledgeBase
//! R1 :: a, -b implies c;
//! ```

/// Marker that must open every knowledge-base block.
pub const KB_MARKER: &str = "@KnowledgeBase";

/// Separates the (ignored) rule name from the implication.
pub const NAME_DELIMITER: &str = " :: ";

/// Separates the rule body from its head.
pub const IMPLIES_DELIMITER: &str = " implies ";

/// Separates literal tokens inside a rule body.
pub const BODY_SEPARATOR: &str = ", ";

/// Terminates a rule statement.
pub const STATEMENT_TERMINATOR: char = ';';

/// Prefix marking a negated literal.
pub const NEGATION_PREFIX: char = '-';

/// Prefix of synthesized rule names (`R`, `R1`, `R2`, ...).
pub const RULE_NAME_PREFIX: &str = "R";

/// Default separator between lines of a rendered knowledge base.
pub const DEFAULT_KB_SEPARATOR: &str = "\n";

/// Body names that are never part of a knowledge base's context.
///
/// `true` and `empty` stand for an unconditional body.
pub const RESERVED_CONTEXT_NAMES: [&str; 2] = ["true", "empty"];

/// Fixed `type` tag of an exported knowledge-base object.
pub const KB_OBJECT_TYPE: &str = "output";

/// Maximum number of literal tokens kept in the exchange-object memo.
///
/// The memo is cleared when it reaches this size.
pub const LITERAL_CACHE_CAPACITY: usize = 4096;
