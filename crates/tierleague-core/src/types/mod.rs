//! # Core Type Definitions
//!
//! This module contains the small value types shared by every layer of the
//! season engine:
//! - Match outcome from one side's perspective (`MatchResult`)
//! - League lifecycle state (`SeasonState`)
//! - The configurable goal bound (`GoalLimit`)
//! - Error types (`TierError`, `ErrorKind`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` where they are used as ordering keys

use crate::primitives::{DEFAULT_MAX_GOALS, POINTS_PER_DRAW, POINTS_PER_LOSS, POINTS_PER_WIN};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

// =============================================================================
// MATCH RESULT
// =============================================================================

/// Outcome of a single match, seen from one team's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    /// The team scored more goals than it conceded.
    Win,
    /// The team conceded more goals than it scored.
    Loss,
    /// Both sides scored the same number of goals.
    Draw,
}

impl MatchResult {
    /// Classify a score line from the perspective of the side that scored
    /// `scored` goals.
    #[must_use]
    pub fn from_score(scored: u32, conceded: u32) -> Self {
        match scored.cmp(&conceded) {
            Ordering::Greater => MatchResult::Win,
            Ordering::Less => MatchResult::Loss,
            Ordering::Equal => MatchResult::Draw,
        }
    }

    /// Competition points this result is worth.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            MatchResult::Win => POINTS_PER_WIN,
            MatchResult::Loss => POINTS_PER_LOSS,
            MatchResult::Draw => POINTS_PER_DRAW,
        }
    }

    /// Single-character form symbol (`W`, `L` or `D`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            MatchResult::Win => 'W',
            MatchResult::Loss => 'L',
            MatchResult::Draw => 'D',
        }
    }

    /// The same match seen from the opponent's side.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            MatchResult::Win => MatchResult::Loss,
            MatchResult::Loss => MatchResult::Win,
            MatchResult::Draw => MatchResult::Draw,
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// =============================================================================
// SEASON STATE
// =============================================================================

/// Lifecycle state of a league.
///
/// Roster changes are only allowed in `OffSeason`; matches are only allowed
/// in `InSeason`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum SeasonState {
    /// Initial state. Teams may be registered or removed.
    #[default]
    OffSeason,
    /// A season is running. Matches may be played.
    InSeason,
}

impl SeasonState {
    /// Human readable state name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SeasonState::OffSeason => "off-season",
            SeasonState::InSeason => "in-season",
        }
    }
}

impl std::fmt::Display for SeasonState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// GOAL LIMIT
// =============================================================================

/// Inclusive upper bound on the goals one side may record in a match.
///
/// The lower bound is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GoalLimit(u32);

impl Default for GoalLimit {
    fn default() -> Self {
        Self(DEFAULT_MAX_GOALS)
    }
}

impl GoalLimit {
    /// Create a goal limit with the given inclusive maximum.
    #[must_use]
    pub const fn new(max: u32) -> Self {
        Self(max)
    }

    /// Get the inclusive maximum.
    #[must_use]
    pub const fn max(self) -> u32 {
        self.0
    }

    /// Validate a raw goal count, returning it as an unsigned value.
    ///
    /// Returns `TierError::GoalsOutOfRange` for negative counts and for
    /// counts above the maximum.
    pub fn check(self, goals: i32) -> Result<u32, TierError> {
        match u32::try_from(goals) {
            Ok(g) if g <= self.0 => Ok(g),
            _ => Err(TierError::GoalsOutOfRange {
                goals,
                max: self.0,
            }),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error taxonomy every `TierError` belongs to.
///
/// Callers that only care about the category of a failure can match on this
/// instead of the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed input to a pure operation.
    Validation,
    /// Operation attempted in the wrong season state.
    State,
    /// Referenced team or tier does not exist.
    NotFound,
    /// Roster has not reached (or has exceeded) the size an operation needs.
    Precondition,
}

/// Errors that can occur in the season engine.
///
/// - No silent failures
/// - Use `Result<T, TierError>` for fallible operations
/// - The CORE should never panic; all errors must be recoverable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TierError {
    /// A team name was empty or whitespace only.
    #[error("Team {0} must not be empty")]
    EmptyName(&'static str),

    /// A goal count fell outside `0..=max`.
    #[error("Goal count {goals} is outside the allowed range 0..={max}")]
    GoalsOutOfRange {
        /// The rejected count.
        goals: i32,
        /// The inclusive maximum in force.
        max: u32,
    },

    /// A team with the same official name is already registered.
    #[error("A team named '{0}' is already registered")]
    DuplicateTeam(String),

    /// A match was requested between a team and itself.
    #[error("Team '{0}' cannot play against itself")]
    SelfMatch(String),

    /// A deserialized team record breaks a statistics or form invariant.
    #[error("Invalid team record: {0}")]
    InvalidRecord(String),

    /// The competition shape given at construction is unusable.
    #[error("Invalid competition: {0}")]
    InvalidCompetition(String),

    /// Roster changes or a new season were requested while a season runs.
    #[error("Operation not allowed while the season is in progress")]
    SeasonInProgress,

    /// Match play or season end was requested during the off-season.
    #[error("Operation not allowed during the off-season")]
    SeasonNotStarted,

    /// A season cannot start until the roster is exactly full.
    #[error("Cannot start season with {registered} of {required} teams registered")]
    RosterIncomplete {
        /// Teams currently registered.
        registered: usize,
        /// Teams the league requires.
        required: usize,
    },

    /// The roster is already at its required size.
    #[error("League is full ({required} teams)")]
    RosterFull {
        /// Teams the league requires.
        required: usize,
    },

    /// Ranking was requested on a roster below its required size.
    #[error("Ranking needs {required} teams, only {registered} registered")]
    RankingUnavailable {
        /// Teams currently registered.
        registered: usize,
        /// Teams the league requires.
        required: usize,
    },

    /// No team with this official name is registered.
    #[error("Team not found: {0}")]
    TeamNotFound(String),

    /// The tier index is outside the competition.
    #[error("Tier {index} does not exist (competition has {tier_count} tiers)")]
    TierNotFound {
        /// The requested index.
        index: usize,
        /// Tiers in the competition.
        tier_count: usize,
    },
}

impl TierError {
    /// Taxonomy kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            TierError::EmptyName(_)
            | TierError::GoalsOutOfRange { .. }
            | TierError::DuplicateTeam(_)
            | TierError::SelfMatch(_)
            | TierError::InvalidRecord(_)
            | TierError::InvalidCompetition(_) => ErrorKind::Validation,
            TierError::SeasonInProgress
            | TierError::SeasonNotStarted
            | TierError::RosterIncomplete { .. } => ErrorKind::State,
            TierError::TeamNotFound(_) | TierError::TierNotFound { .. } => ErrorKind::NotFound,
            TierError::RosterFull { .. } | TierError::RankingUnavailable { .. } => {
                ErrorKind::Precondition
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_score_classifies_all_outcomes() {
        assert_eq!(MatchResult::from_score(3, 1), MatchResult::Win);
        assert_eq!(MatchResult::from_score(0, 4), MatchResult::Loss);
        assert_eq!(MatchResult::from_score(2, 2), MatchResult::Draw);
    }

    #[test]
    fn reversed_swaps_win_and_loss() {
        assert_eq!(MatchResult::Win.reversed(), MatchResult::Loss);
        assert_eq!(MatchResult::Loss.reversed(), MatchResult::Win);
        assert_eq!(MatchResult::Draw.reversed(), MatchResult::Draw);
    }

    #[test]
    fn goal_limit_bounds_are_inclusive() {
        let limit = GoalLimit::default();
        assert_eq!(limit.check(0), Ok(0));
        assert_eq!(limit.check(20), Ok(20));
        assert!(limit.check(21).is_err());
        assert!(limit.check(-1).is_err());
    }

    #[test]
    fn custom_goal_limit() {
        let limit = GoalLimit::new(9);
        assert_eq!(limit.check(9), Ok(9));
        assert_eq!(
            limit.check(10),
            Err(TierError::GoalsOutOfRange { goals: 10, max: 9 })
        );
    }

    #[test]
    fn error_kinds() {
        assert_eq!(TierError::SelfMatch("A".into()).kind(), ErrorKind::Validation);
        assert_eq!(TierError::InvalidRecord("x".into()).kind(), ErrorKind::Validation);
        assert_eq!(TierError::SeasonNotStarted.kind(), ErrorKind::State);
        assert_eq!(TierError::TeamNotFound("A".into()).kind(), ErrorKind::NotFound);
        assert_eq!(
            TierError::RankingUnavailable {
                registered: 1,
                required: 2
            }
            .kind(),
            ErrorKind::Precondition
        );
    }

    #[test]
    fn season_state_defaults_to_off_season() {
        assert_eq!(SeasonState::default(), SeasonState::OffSeason);
        assert_eq!(SeasonState::InSeason.to_string(), "in-season");
    }
}
