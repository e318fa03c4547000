//! # League Module
//!
//! One division: a roster of a fixed required size and its season state
//! machine.
//!
//! ```text
//!   OffSeason ──start_new_season()──▶ InSeason
//!       ▲                                 │
//!       └──────────end_season()───────────┘
//! ```
//!
//! - Registration and removal: `OffSeason` only
//! - Match play: `InSeason` only
//! - Season start: roster must be exactly full; every team is reset

use crate::ranking;
use crate::{GoalLimit, MatchResult, SeasonState, Team, TierError};
use std::collections::BTreeMap;

/// A league holding teams keyed by official name.
#[derive(Debug, Clone)]
pub struct League {
    required_team_count: usize,
    /// BTreeMap for deterministic iteration order.
    teams: BTreeMap<String, Team>,
    state: SeasonState,
    goal_limit: GoalLimit,
}

impl League {
    /// Create an empty league that needs `required_team_count` teams.
    ///
    /// Returns `TierError::InvalidCompetition` for a required count of zero.
    pub fn new(required_team_count: usize) -> Result<Self, TierError> {
        Self::with_goal_limit(required_team_count, GoalLimit::default())
    }

    /// Create an empty league with a custom goal bound.
    pub fn with_goal_limit(
        required_team_count: usize,
        goal_limit: GoalLimit,
    ) -> Result<Self, TierError> {
        if required_team_count == 0 {
            return Err(TierError::InvalidCompetition(
                "a league needs at least one team".to_string(),
            ));
        }
        Ok(Self {
            required_team_count,
            teams: BTreeMap::new(),
            state: SeasonState::OffSeason,
            goal_limit,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn required_team_count(&self) -> usize {
        self.required_team_count
    }

    #[must_use]
    pub fn registered_team_count(&self) -> usize {
        self.teams.len()
    }

    #[must_use]
    pub fn state(&self) -> SeasonState {
        self.state
    }

    #[must_use]
    pub fn is_off_season(&self) -> bool {
        self.state == SeasonState::OffSeason
    }

    #[must_use]
    pub fn goal_limit(&self) -> GoalLimit {
        self.goal_limit
    }

    /// Check if a team with this official name is registered.
    #[must_use]
    pub fn contains_team(&self, name: &str) -> bool {
        self.teams.contains_key(name)
    }

    /// Look up a team by official name.
    pub fn team(&self, name: &str) -> Result<&Team, TierError> {
        self.teams
            .get(name)
            .ok_or_else(|| TierError::TeamNotFound(name.to_string()))
    }

    /// Registered teams in official-name order.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    // -------------------------------------------------------------------------
    // Roster management (off-season)
    // -------------------------------------------------------------------------

    /// Add a team to the roster.
    ///
    /// # Errors
    /// - `SeasonInProgress` if a season is running
    /// - `RosterFull` if the roster is at its required size
    /// - `DuplicateTeam` if the official name is taken
    pub fn register_team(&mut self, team: Team) -> Result<(), TierError> {
        self.ensure_off_season()?;
        if self.teams.len() >= self.required_team_count {
            return Err(TierError::RosterFull {
                required: self.required_team_count,
            });
        }
        if self.teams.contains_key(team.official_name()) {
            return Err(TierError::DuplicateTeam(team.official_name().to_string()));
        }
        self.teams.insert(team.official_name().to_string(), team);
        Ok(())
    }

    /// Remove a team from the roster and hand it back.
    pub fn remove_team(&mut self, name: &str) -> Result<Team, TierError> {
        self.ensure_off_season()?;
        self.teams
            .remove(name)
            .ok_or_else(|| TierError::TeamNotFound(name.to_string()))
    }

    /// Check that `outgoing` could be replaced by a team named `incoming`
    /// without touching the roster.
    pub(crate) fn check_swap(&self, outgoing: &str, incoming: &str) -> Result<(), TierError> {
        self.ensure_off_season()?;
        if !self.teams.contains_key(outgoing) {
            return Err(TierError::TeamNotFound(outgoing.to_string()));
        }
        if incoming != outgoing && self.teams.contains_key(incoming) {
            return Err(TierError::DuplicateTeam(incoming.to_string()));
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Season lifecycle
    // -------------------------------------------------------------------------

    /// `OffSeason -> InSeason`, resetting every team.
    pub fn start_new_season(&mut self) -> Result<(), TierError> {
        self.ensure_off_season()?;
        if self.teams.len() != self.required_team_count {
            return Err(TierError::RosterIncomplete {
                registered: self.teams.len(),
                required: self.required_team_count,
            });
        }
        for team in self.teams.values_mut() {
            team.reset_stats();
        }
        self.state = SeasonState::InSeason;
        Ok(())
    }

    /// `InSeason -> OffSeason`.
    pub fn end_season(&mut self) -> Result<(), TierError> {
        self.ensure_in_season()?;
        self.state = SeasonState::OffSeason;
        Ok(())
    }

    /// Play a match and return the result from the home side's perspective.
    ///
    /// Both goal counts and both names are validated before either team is
    /// updated, so a rejected match changes nothing.
    pub fn play_match(
        &mut self,
        home: &str,
        home_goals: i32,
        away: &str,
        away_goals: i32,
    ) -> Result<MatchResult, TierError> {
        self.ensure_in_season()?;
        if home == away {
            return Err(TierError::SelfMatch(home.to_string()));
        }
        self.team(home)?;
        self.team(away)?;
        let home_goals = self.goal_limit.check(home_goals)?;
        let away_goals = self.goal_limit.check(away_goals)?;

        let result = self.team_mut(home)?.record(home_goals, away_goals);
        self.team_mut(away)?.record(away_goals, home_goals);
        Ok(result)
    }

    // -------------------------------------------------------------------------
    // Ranking
    // -------------------------------------------------------------------------

    /// The roster in table order, best first.
    #[must_use]
    pub fn ranked_standings(&self) -> Vec<&Team> {
        ranking::rank(self.teams.values())
    }

    /// Highest ranked team. Needs a complete roster.
    pub fn top_team(&self) -> Result<&Team, TierError> {
        self.ensure_complete()?;
        self.ranked_standings()
            .first()
            .copied()
            .ok_or_else(|| self.ranking_unavailable())
    }

    /// Lowest ranked team. Needs a complete roster.
    pub fn bottom_team(&self) -> Result<&Team, TierError> {
        self.ensure_complete()?;
        self.ranked_standings()
            .last()
            .copied()
            .ok_or_else(|| self.ranking_unavailable())
    }

    // -------------------------------------------------------------------------
    // Guards
    // -------------------------------------------------------------------------

    fn team_mut(&mut self, name: &str) -> Result<&mut Team, TierError> {
        self.teams
            .get_mut(name)
            .ok_or_else(|| TierError::TeamNotFound(name.to_string()))
    }

    fn ensure_off_season(&self) -> Result<(), TierError> {
        match self.state {
            SeasonState::OffSeason => Ok(()),
            SeasonState::InSeason => Err(TierError::SeasonInProgress),
        }
    }

    fn ensure_in_season(&self) -> Result<(), TierError> {
        match self.state {
            SeasonState::InSeason => Ok(()),
            SeasonState::OffSeason => Err(TierError::SeasonNotStarted),
        }
    }

    fn ensure_complete(&self) -> Result<(), TierError> {
        if self.teams.len() < self.required_team_count {
            return Err(self.ranking_unavailable());
        }
        Ok(())
    }

    fn ranking_unavailable(&self) -> TierError {
        TierError::RankingUnavailable {
            registered: self.teams.len(),
            required: self.required_team_count,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
