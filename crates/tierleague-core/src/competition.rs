//! # Competition Module
//!
//! An ordered stack of leagues with promotion and relegation between
//! neighbours.
//!
//! ## Tier Convention
//!
//! Tier 0 is the highest division. At season end the top team of tier `i`
//! is promoted to tier `i - 1` and the bottom team of tier `i - 1` is
//! relegated to tier `i`. The top team of tier 0 and the bottom team of the
//! last tier stay where they are.
//!
//! ## Batch Semantics
//!
//! `start_season` and `end_season` visit every tier even when one of them
//! fails. Failures are returned in a report; nothing is printed or logged
//! here.

use crate::primitives::MIN_TEAMS_FOR_TRANSFERS;
use crate::{GoalLimit, League, MatchResult, Team, TierError};
use serde::{Deserialize, Serialize};

// =============================================================================
// REPORTS
// =============================================================================

/// Result of a season transition on one tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierOutcome {
    pub tier: usize,
    pub result: Result<(), TierError>,
}

/// Per-tier outcomes of `Competition::start_season`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeasonReport {
    pub tiers: Vec<TierOutcome>,
}

impl SeasonReport {
    /// Tiers whose transition failed, with the reason.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &TierError)> {
        self.tiers
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.tier, e)))
    }

    /// Check if every tier transitioned.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// One promotion/relegation swap across a tier boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// The higher tier of the pair (receives `promoted`).
    pub upper_tier: usize,
    /// The lower tier of the pair (receives `relegated`).
    pub lower_tier: usize,
    pub promoted: String,
    pub relegated: String,
}

/// A boundary where no swap took place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTransfer {
    pub upper_tier: usize,
    pub lower_tier: usize,
    pub reason: TierError,
}

/// Everything `Competition::end_season` did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EndOfSeasonReport {
    /// Outcome of ending the season on each tier.
    pub season: SeasonReport,
    /// Swaps applied, upper boundary first.
    pub transfers: Vec<Transfer>,
    /// Boundaries left untouched.
    pub skipped: Vec<SkippedTransfer>,
}

impl EndOfSeasonReport {
    /// Check if every tier ended and every boundary swapped.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.season.is_clean() && self.skipped.is_empty()
    }
}

/// A tier's table, best team first.
#[derive(Debug, Clone, Serialize)]
pub struct TierStandings<'a> {
    pub tier: usize,
    pub teams: Vec<&'a Team>,
}

// =============================================================================
// COMPETITION
// =============================================================================

/// A named multi-tier competition.
#[derive(Debug, Clone)]
pub struct Competition {
    name: String,
    leagues: Vec<League>,
}

impl Competition {
    /// Create a competition of `tier_count` empty leagues of
    /// `teams_per_tier` teams each.
    ///
    /// # Errors
    /// `InvalidCompetition` if there are no tiers, no teams per tier, or more
    /// than one tier with fewer than two teams each.
    pub fn new(
        name: impl Into<String>,
        tier_count: usize,
        teams_per_tier: usize,
    ) -> Result<Self, TierError> {
        Self::with_goal_limit(name, tier_count, teams_per_tier, GoalLimit::default())
    }

    /// Create a competition whose leagues all use `goal_limit`.
    pub fn with_goal_limit(
        name: impl Into<String>,
        tier_count: usize,
        teams_per_tier: usize,
        goal_limit: GoalLimit,
    ) -> Result<Self, TierError> {
        if tier_count == 0 {
            return Err(TierError::InvalidCompetition(
                "a competition needs at least one tier".to_string(),
            ));
        }
        if tier_count > 1 && teams_per_tier < MIN_TEAMS_FOR_TRANSFERS {
            return Err(TierError::InvalidCompetition(format!(
                "promotion and relegation need at least {} teams per tier",
                MIN_TEAMS_FOR_TRANSFERS
            )));
        }

        let leagues = (0..tier_count)
            .map(|_| League::with_goal_limit(teams_per_tier, goal_limit))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.into(),
            leagues,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tier_count(&self) -> usize {
        self.leagues.len()
    }

    /// Leagues from the highest tier down.
    pub fn leagues(&self) -> impl Iterator<Item = &League> {
        self.leagues.iter()
    }

    /// Get the league at `tier`.
    pub fn league(&self, tier: usize) -> Result<&League, TierError> {
        let tier_count = self.leagues.len();
        self.leagues.get(tier).ok_or(TierError::TierNotFound {
            index: tier,
            tier_count,
        })
    }

    /// Get the league at `tier` for mutation.
    pub fn league_mut(&mut self, tier: usize) -> Result<&mut League, TierError> {
        let tier_count = self.leagues.len();
        self.leagues.get_mut(tier).ok_or(TierError::TierNotFound {
            index: tier,
            tier_count,
        })
    }

    // -------------------------------------------------------------------------
    // Tier-addressed operations
    // -------------------------------------------------------------------------

    pub fn register_team(&mut self, tier: usize, team: Team) -> Result<(), TierError> {
        self.league_mut(tier)?.register_team(team)
    }

    pub fn remove_team(&mut self, tier: usize, name: &str) -> Result<Team, TierError> {
        self.league_mut(tier)?.remove_team(name)
    }

    pub fn play_match(
        &mut self,
        tier: usize,
        home: &str,
        home_goals: i32,
        away: &str,
        away_goals: i32,
    ) -> Result<MatchResult, TierError> {
        self.league_mut(tier)?
            .play_match(home, home_goals, away, away_goals)
    }

    pub fn ranked_standings(&self, tier: usize) -> Result<Vec<&Team>, TierError> {
        Ok(self.league(tier)?.ranked_standings())
    }

    pub fn top_team(&self, tier: usize) -> Result<&Team, TierError> {
        self.league(tier)?.top_team()
    }

    pub fn bottom_team(&self, tier: usize) -> Result<&Team, TierError> {
        self.league(tier)?.bottom_team()
    }

    /// Recent form of a team, looked up by tier and official name.
    pub fn form_string(&self, tier: usize, name: &str) -> Result<String, TierError> {
        Ok(self.league(tier)?.team(name)?.form_string())
    }

    // -------------------------------------------------------------------------
    // Season lifecycle
    // -------------------------------------------------------------------------

    /// Start a new season on every tier.
    pub fn start_season(&mut self) -> SeasonReport {
        let tiers = self
            .leagues
            .iter_mut()
            .enumerate()
            .map(|(tier, league)| TierOutcome {
                tier,
                result: league.start_new_season(),
            })
            .collect();
        SeasonReport { tiers }
    }

    /// End the season on every tier, then promote and relegate.
    ///
    /// Top and bottom teams are captured for every tier before any roster
    /// changes. A tier that failed to end takes no part in transfers; its
    /// boundaries are skipped with that tier's error. Each boundary swap is
    /// checked against both leagues first, so a skipped boundary leaves both
    /// rosters as they were.
    pub fn end_season(&mut self) -> EndOfSeasonReport {
        let tiers: Vec<TierOutcome> = self
            .leagues
            .iter_mut()
            .enumerate()
            .map(|(tier, league)| TierOutcome {
                tier,
                result: league.end_season(),
            })
            .collect();

        let snapshot: Vec<_> = self
            .leagues
            .iter()
            .zip(&tiers)
            .map(|(league, outcome)| -> Result<(String, String), TierError> {
                outcome.result.clone()?;
                let top = league.top_team()?.official_name().to_string();
                let bottom = league.bottom_team()?.official_name().to_string();
                Ok((top, bottom))
            })
            .collect();

        let mut report = EndOfSeasonReport {
            season: SeasonReport { tiers },
            ..EndOfSeasonReport::default()
        };

        for lower in 1..self.leagues.len() {
            let upper = lower - 1;
            let candidates = match (&snapshot[lower], &snapshot[upper]) {
                (Ok((promoted, _)), Ok((_, relegated))) => Ok((promoted, relegated)),
                (Err(e), _) | (_, Err(e)) => Err(e.clone()),
            };
            let outcome = candidates
                .and_then(|(promoted, relegated)| self.swap(upper, lower, promoted, relegated));
            match outcome {
                Ok(transfer) => report.transfers.push(transfer),
                Err(reason) => report.skipped.push(SkippedTransfer {
                    upper_tier: upper,
                    lower_tier: lower,
                    reason,
                }),
            }
        }

        report
    }

    /// Every tier's table, highest tier first.
    #[must_use]
    pub fn standings_snapshot(&self) -> Vec<TierStandings<'_>> {
        self.leagues
            .iter()
            .enumerate()
            .map(|(tier, league)| TierStandings {
                tier,
                teams: league.ranked_standings(),
            })
            .collect()
    }

    fn swap(
        &mut self,
        upper: usize,
        lower: usize,
        promoted: &str,
        relegated: &str,
    ) -> Result<Transfer, TierError> {
        self.league(lower)?.check_swap(promoted, relegated)?;
        self.league(upper)?.check_swap(relegated, promoted)?;

        let promoted_team = self.league_mut(lower)?.remove_team(promoted)?;
        let relegated_team = self.league_mut(upper)?.remove_team(relegated)?;
        self.league_mut(upper)?.register_team(promoted_team)?;
        self.league_mut(lower)?.register_team(relegated_team)?;

        Ok(Transfer {
            upper_tier: upper,
            lower_tier: lower,
            promoted: promoted.to_string(),
            relegated: relegated.to_string(),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
