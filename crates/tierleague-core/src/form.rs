//! # Form History
//!
//! Fixed-capacity record of a team's most recent results.
//!
//! - Ordered most-recent-first
//! - Holds at most `FORM_CAPACITY` results; the oldest falls off the back
//! - Rendered as a fixed-width string padded with `FORM_PLACEHOLDER`

use crate::{MatchResult, TierError};
use crate::primitives::{FORM_CAPACITY, FORM_PLACEHOLDER};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// The recent form of a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FormRecord")]
pub struct FormHistory {
    /// Index 0 is the latest result.
    results: VecDeque<MatchResult>,
    /// Results recorded since the last reset, including discarded ones.
    games_recorded: u32,
}

/// Unchecked wire shape of a `FormHistory`.
#[derive(Deserialize)]
struct FormRecord {
    results: VecDeque<MatchResult>,
    games_recorded: u32,
}

impl TryFrom<FormRecord> for FormHistory {
    type Error = TierError;

    fn try_from(record: FormRecord) -> Result<Self, Self::Error> {
        let held = record.results.len();
        if held > FORM_CAPACITY {
            return Err(TierError::InvalidRecord(format!(
                "form holds {held} results, at most {FORM_CAPACITY} allowed"
            )));
        }
        if held > record.games_recorded as usize {
            return Err(TierError::InvalidRecord(format!(
                "form holds {held} results but only {} were recorded",
                record.games_recorded
            )));
        }
        Ok(Self {
            results: record.results,
            games_recorded: record.games_recorded,
        })
    }
}

impl Default for FormHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl FormHistory {
    /// Create an empty form history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            results: VecDeque::with_capacity(FORM_CAPACITY),
            games_recorded: 0,
        }
    }

    /// Record a new result at the front.
    ///
    /// At capacity the oldest result is discarded first.
    pub fn push(&mut self, result: MatchResult) {
        if self.results.len() == FORM_CAPACITY {
            self.results.pop_back();
        }
        self.results.push_front(result);
        self.games_recorded = self.games_recorded.saturating_add(1);
    }

    /// Drop every result and the game counter.
    pub fn clear(&mut self) {
        self.results.clear();
        self.games_recorded = 0;
    }

    /// Number of results currently held (never more than `FORM_CAPACITY`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if no result has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Total results recorded since the last reset.
    #[must_use]
    pub fn games_recorded(&self) -> u32 {
        self.games_recorded
    }

    /// The latest result, if any.
    #[must_use]
    pub fn latest(&self) -> Option<MatchResult> {
        self.results.front().copied()
    }

    /// Results from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = MatchResult> + '_ {
        self.results.iter().copied()
    }

    /// Render exactly `FORM_CAPACITY` characters, most recent first.
    #[must_use]
    pub fn to_form_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for FormHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbols = self
            .results
            .iter()
            .map(|r| r.symbol())
            .chain(std::iter::repeat(FORM_PLACEHOLDER))
            .take(FORM_CAPACITY);
        for symbol in symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
