//! # prudens-core
//!
//! The knowledge-base format layer for Prudens rule bases - THE FORMAT.
//!
//! This crate converts between three representations of the same rules:
//! - Textual syntax (`@KnowledgeBase R1 :: a, -b implies c;`)
//! - In-memory records (`Literal`, `Rule`, `KnowledgeBase`)
//! - Exchange objects (`LiteralObject`, `RuleObject`, `KnowledgeBaseObject`)
//!   as consumed by the Prudens engine
//!
//! ## Architectural Constraints
//!
//! The FORMAT layer:
//! - Never evaluates rules; it only parses, renders and compares them
//! - Has NO async, NO network, NO file I/O (pure Rust)
//! - Is deterministic: every output is a pure function of its input
//!
//! ## Example
//!
//! ```
//! use prudens_core::KnowledgeBase;
//!
//! let kb = KnowledgeBase::parse("@KnowledgeBase R1 :: a, -b implies c;")?;
//! assert_eq!(kb.render("\n"), "@KnowledgeBase\nR1 :: a, -b implies c;");
//! assert_eq!(kb.full_context(), vec!["a", "b"]);
//! # Ok::<(), prudens_core::PrudensError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod context;
pub mod exchange;
pub mod knowledge_base;
pub mod literal;
pub mod primitives;
pub mod rule;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::PrudensError;

// =============================================================================
// RE-EXPORTS: Records
// =============================================================================

pub use knowledge_base::KnowledgeBase;
pub use literal::{Literal, token_to_object};
pub use rule::{Rule, RuleName};

// =============================================================================
// RE-EXPORTS: Exchange Form & Ordering
// =============================================================================

pub use context::{natural_cmp, natural_sort};
pub use exchange::{KnowledgeBaseObject, LiteralObject, RuleObject};
