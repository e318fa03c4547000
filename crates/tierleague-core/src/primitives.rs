//! # Innate Primitives
//!
//! Hardcoded rule constants for the tierleague CORE.
//!
//! These values are compiled into the binary. Only the goal bound can be
//! overridden at runtime, through [`crate::GoalLimit`].

/// Number of recent results kept in a team's form history.
///
/// Once a team has played more matches than this, the oldest result is
/// discarded on every new insertion.
pub const FORM_CAPACITY: usize = 5;

/// Character rendered for a form slot with no recorded match.
pub const FORM_PLACEHOLDER: char = '-';

/// Highest goal count a single side may record in one match.
///
/// Anything above this (or below zero) is rejected as unrealistic input.
pub const DEFAULT_MAX_GOALS: u32 = 20;

/// Competition points awarded for a win.
pub const POINTS_PER_WIN: u32 = 3;

/// Competition points awarded for a draw.
pub const POINTS_PER_DRAW: u32 = 1;

/// Competition points awarded for a loss.
pub const POINTS_PER_LOSS: u32 = 0;

/// Minimum roster size per tier when a competition has more than one tier.
///
/// With a single team per tier the promotion and relegation candidates of a
/// tier would be the same team.
pub const MIN_TEAMS_FOR_TRANSFERS: usize = 2;
