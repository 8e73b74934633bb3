//! Interval set of already-classified byte ranges.
//!
//! Each classification pass claims ranges here. Later passes only search the
//! unclaimed gaps, so an earlier category can never be split or reclassified.

use std::collections::BTreeMap;
use std::ops::Range;

use super::token::{Category, Token};

/// Sorted, non-overlapping set of claimed ranges keyed by start offset.
#[derive(Clone, Debug, Default)]
pub struct ClaimSet {
    claims: BTreeMap<usize, Token>,
}

impl ClaimSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// True if no claimed range intersects `range`.
    #[must_use]
    pub fn is_free(&self, range: Range<usize>) -> bool {
        if range.start >= range.end {
            return false;
        }
        // The only candidate is the last claim starting before `range.end`.
        match self.claims.range(..range.end).next_back() {
            Some((_, token)) => token.end <= range.start,
            None => true,
        }
    }

    /// Claim `range` for `category`. Returns false (and claims nothing) if the
    /// range is empty or overlaps an existing claim.
    pub fn claim(&mut self, category: Category, range: Range<usize>) -> bool {
        if !self.is_free(range.clone()) {
            return false;
        }
        self.claims
            .insert(range.start, Token::new(category, range.start, range.end));
        true
    }

    /// Category of the claim covering exactly `range`, if any.
    #[must_use]
    pub fn category_of(&self, range: Range<usize>) -> Option<Category> {
        self.claims
            .get(&range.start)
            .filter(|token| token.end == range.end)
            .map(|token| token.category)
    }

    /// Unclaimed gaps of a text of length `len`, in order.
    #[must_use]
    pub fn gaps(&self, len: usize) -> Vec<Range<usize>> {
        let mut gaps = Vec::with_capacity(self.claims.len() + 1);
        let mut cursor = 0usize;
        for token in self.claims.values() {
            if token.start > cursor {
                gaps.push(cursor..token.start);
            }
            cursor = cursor.max(token.end);
        }
        if cursor < len {
            gaps.push(cursor..len);
        }
        gaps
    }

    /// Consume the set, yielding tokens sorted by start offset.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.claims.into_values().collect()
    }
}
