//! # Context Ordering
//!
//! Natural ordering for context names: digit runs compare by numeric value,
//! everything else compares case-insensitively.
//!
//! `item1 < item2 < item10`, where a plain string sort would give
//! `item1 < item10 < item2`.
//!
//! Only ASCII `0-9` form digit runs. Other Unicode digits (`٣`, `５`) are
//! ordinary text and compare by their lowercased characters.

use std::cmp::Ordering;
use std::collections::BTreeSet;

/// One run of a natural sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Lowercased non-digit run.
    Text(String),
    /// ASCII digit run with leading zeros removed.
    Number(String),
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Arbitrary-length integers: longer is larger, then digit-wise.
            (Self::Number(a), Self::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Split a name into alternating text and number runs.
///
/// Keys always start with a (possibly empty) text run, so runs at the same
/// index of two keys are always of the same kind.
fn natural_key(name: &str) -> Vec<Segment> {
    let mut key = Vec::new();
    let mut text = String::new();
    let mut digits = String::new();

    for ch in name.chars() {
        if ch.is_ascii_digit() {
            if digits.is_empty() {
                key.push(Segment::Text(text.to_lowercase()));
                text.clear();
            }
            digits.push(ch);
        } else {
            if !digits.is_empty() {
                key.push(number_segment(&digits));
                digits.clear();
            }
            text.push(ch);
        }
    }

    if digits.is_empty() {
        key.push(Segment::Text(text.to_lowercase()));
    } else {
        key.push(number_segment(&digits));
        key.push(Segment::Text(String::new()));
    }
    key
}

fn number_segment(digits: &str) -> Segment {
    Segment::Number(digits.trim_start_matches('0').to_string())
}

/// Compare two names in natural order.
///
/// Names with equal keys (`a01` and `a1`, `A` and `a`) fall back to plain
/// byte order so the result is total and deterministic.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a)
        .cmp(&natural_key(b))
        .then_with(|| a.cmp(b))
}

/// Deduplicate and sort names in natural order.
#[must_use]
pub fn natural_sort<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let unique: BTreeSet<String> = names.into_iter().map(Into::into).collect();
    let mut sorted: Vec<String> = unique.into_iter().collect();
    sorted.sort_by(|a, b| natural_cmp(a, b));
    sorted
}

// =============================================================================
// TESTS
// =============================================================================
