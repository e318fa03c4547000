//! # Ranking
//!
//! The single ordering used for league tables, top team and bottom team.
//!
//! Keys, in order:
//! 1. Competition points, descending
//! 2. Goal difference, descending
//! 3. Official name, ascending (byte-wise)
//!
//! Official names are unique within a league, so the order is total over any
//! roster.

use crate::Team;
use std::cmp::Ordering;

/// Compare two teams for table position. `Less` means `a` ranks higher.
#[must_use]
pub fn compare(a: &Team, b: &Team) -> Ordering {
    b.points()
        .cmp(&a.points())
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| a.official_name().cmp(b.official_name()))
}

/// Sort teams into table order, best first.
pub fn rank<'a, I>(teams: I) -> Vec<&'a Team>
where
    I: IntoIterator<Item = &'a Team>,
{
    let mut ranked: Vec<&Team> = teams.into_iter().collect();
    ranked.sort_by(|a, b| compare(a, b));
    ranked
}

// =============================================================================
// TESTS
// =============================================================================
