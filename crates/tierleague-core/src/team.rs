//! # Team Module
//!
//! A team's identity, its season statistics and its recent form.
//!
//! Statistics only change through [`Team::play_match`] (or the league, which
//! validates both sides of a match before recording either) and
//! [`Team::reset_stats`].

use crate::form::FormHistory;
use crate::{GoalLimit, MatchResult, TierError};
use serde::{Deserialize, Serialize};

// =============================================================================
// SEASON STATISTICS
// =============================================================================

/// Counters accumulated by a team over one season.
///
/// Invariants:
/// - `played == won + lost + drawn`
/// - `points == 3 * won + drawn`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "StatsRecord")]
pub struct TeamStats {
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub drawn: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

/// Unchecked wire shape of `TeamStats`.
#[derive(Deserialize)]
struct StatsRecord {
    played: u32,
    won: u32,
    lost: u32,
    drawn: u32,
    goals_for: u32,
    goals_against: u32,
    points: u32,
}

impl TryFrom<StatsRecord> for TeamStats {
    type Error = TierError;

    fn try_from(r: StatsRecord) -> Result<Self, Self::Error> {
        let outcomes = u64::from(r.won) + u64::from(r.lost) + u64::from(r.drawn);
        if u64::from(r.played) != outcomes {
            return Err(TierError::InvalidRecord(format!(
                "played {} but won + lost + drawn is {outcomes}",
                r.played
            )));
        }
        let earned = u64::from(r.won) * u64::from(MatchResult::Win.points())
            + u64::from(r.drawn) * u64::from(MatchResult::Draw.points());
        if u64::from(r.points) != earned {
            return Err(TierError::InvalidRecord(format!(
                "{} points but results earn {earned}",
                r.points
            )));
        }
        Ok(Self {
            played: r.played,
            won: r.won,
            lost: r.lost,
            drawn: r.drawn,
            goals_for: r.goals_for,
            goals_against: r.goals_against,
            points: r.points,
        })
    }
}

impl TeamStats {
    /// Goals scored minus goals conceded.
    #[must_use]
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    fn record(&mut self, scored: u32, conceded: u32) -> MatchResult {
        let result = MatchResult::from_score(scored, conceded);
        self.played = self.played.saturating_add(1);
        match result {
            MatchResult::Win => self.won = self.won.saturating_add(1),
            MatchResult::Loss => self.lost = self.lost.saturating_add(1),
            MatchResult::Draw => self.drawn = self.drawn.saturating_add(1),
        }
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        self.points = self.points.saturating_add(result.points());
        result
    }
}

// =============================================================================
// TEAM
// =============================================================================

/// A team taking part in a league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TeamRecord")]
pub struct Team {
    official_name: String,
    nick_name: String,
    stats: TeamStats,
    form: FormHistory,
}

impl Team {
    /// Create a team with zeroed statistics.
    ///
    /// Returns `TierError::EmptyName` if either name is empty or whitespace.
    pub fn new(
        official_name: impl Into<String>,
        nick_name: impl Into<String>,
    ) -> Result<Self, TierError> {
        let official_name = official_name.into();
        let nick_name = nick_name.into();
        check_names(&official_name, &nick_name)?;

        Ok(Self {
            official_name,
            nick_name,
            stats: TeamStats::default(),
            form: FormHistory::new(),
        })
    }

    /// The unique official name.
    #[must_use]
    pub fn official_name(&self) -> &str {
        &self.official_name
    }

    #[must_use]
    pub fn nick_name(&self) -> &str {
        &self.nick_name
    }

    /// Current season statistics.
    #[must_use]
    pub fn stats(&self) -> &TeamStats {
        &self.stats
    }

    #[must_use]
    pub fn form(&self) -> &FormHistory {
        &self.form
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.stats.points
    }

    #[must_use]
    pub fn goal_difference(&self) -> i64 {
        self.stats.goal_difference()
    }

    /// Recent form as exactly five characters, most recent first.
    #[must_use]
    pub fn form_string(&self) -> String {
        self.form.to_form_string()
    }

    /// Record a match using the default goal bound.
    pub fn play_match(&mut self, scored: i32, conceded: i32) -> Result<MatchResult, TierError> {
        self.play_match_within(GoalLimit::default(), scored, conceded)
    }

    /// Record a match after checking both counts against `limit`.
    ///
    /// Nothing changes if either count is rejected.
    pub fn play_match_within(
        &mut self,
        limit: GoalLimit,
        scored: i32,
        conceded: i32,
    ) -> Result<MatchResult, TierError> {
        let scored = limit.check(scored)?;
        let conceded = limit.check(conceded)?;
        Ok(self.record(scored, conceded))
    }

    /// Apply an already validated score line.
    pub(crate) fn record(&mut self, scored: u32, conceded: u32) -> MatchResult {
        let result = self.stats.record(scored, conceded);
        self.form.push(result);
        result
    }

    /// Zero every counter and clear the form history.
    pub fn reset_stats(&mut self) {
        self.stats = TeamStats::default();
        self.form.clear();
    }
}

fn check_names(official_name: &str, nick_name: &str) -> Result<(), TierError> {
    if official_name.trim().is_empty() {
        return Err(TierError::EmptyName("official name"));
    }
    if nick_name.trim().is_empty() {
        return Err(TierError::EmptyName("nick name"));
    }
    Ok(())
}

/// Unchecked wire shape of a `Team`; the nested stats and form validate
/// themselves.
#[derive(Deserialize)]
struct TeamRecord {
    official_name: String,
    nick_name: String,
    stats: TeamStats,
    form: FormHistory,
}

impl TryFrom<TeamRecord> for Team {
    type Error = TierError;

    fn try_from(r: TeamRecord) -> Result<Self, Self::Error> {
        check_names(&r.official_name, &r.nick_name)?;
        if r.stats.played != r.form.games_recorded() {
            return Err(TierError::InvalidRecord(format!(
                "played {} but form recorded {}",
                r.stats.played,
                r.form.games_recorded()
            )));
        }
        Ok(Self {
            official_name: r.official_name,
            nick_name: r.nick_name,
            stats: r.stats,
            form: r.form,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn brisbane() -> Team {
        let mut team = Team::new("Brisbane Roar", "The Roar").expect("team");
        team.play_match(3, 5).expect("match");
        team.play_match(7, 3).expect("match");
        team.play_match(0, 4).expect("match");
        team.play_match(2, 2).expect("match");
        team
    }

    #[test]
    fn rejects_empty_names() {
        assert_eq!(
            Team::new("", "The Roar"),
            Err(TierError::EmptyName("official name"))
        );
        assert_eq!(
            Team::new("Brisbane Roar", "  "),
            Err(TierError::EmptyName("nick name"))
        );
    }

    #[test]
    fn worked_example_counters() {
        let team = brisbane();
        let stats = team.stats();

        assert_eq!(stats.played, 4);
        assert_eq!(stats.won, 1);
        assert_eq!(stats.lost, 2);
        assert_eq!(stats.drawn, 1);
        assert_eq!(stats.goals_for, 12);
        assert_eq!(stats.goals_against, 14);
        assert_eq!(team.points(), 4);
        assert_eq!(team.goal_difference(), -2);
        assert_eq!(team.form_string(), "DLWL-");
    }

    #[test]
    fn out_of_range_leaves_team_untouched() {
        let mut team = brisbane();
        let before = team.clone();

        for (scored, conceded) in [(22, 3), (2, 21), (-22, 3), (2, -21)] {
            let err = team.play_match(scored, conceded).expect_err("rejected");
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
        assert_eq!(team, before);
    }

    #[test]
    fn custom_limit_is_respected() {
        let mut team = Team::new("Gotham City", "Batmen").expect("team");
        assert!(team.play_match_within(GoalLimit::new(30), 25, 0).is_ok());
        assert!(team.play_match_within(GoalLimit::new(3), 4, 0).is_err());
        assert_eq!(team.stats().played, 1);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut team = brisbane();
        team.reset_stats();

        assert_eq!(*team.stats(), TeamStats::default());
        assert_eq!(team.form_string(), "-----");
        assert_eq!(team.official_name(), "Brisbane Roar");
        assert_eq!(team.nick_name(), "The Roar");
    }

    #[test]
    fn serialized_team_reads_back() {
        let team = brisbane();
        let json = serde_json::to_string(&team).expect("serialize");
        let back: Team = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, team);
        assert_eq!(back.form_string(), "DLWL-");
    }

    #[test]
    fn deserialize_rejects_blank_name() {
        let mut value = serde_json::to_value(brisbane()).expect("serialize");
        value["official_name"] = serde_json::json!("  ");
        let err = serde_json::from_value::<Team>(value).expect_err("blank name");
        assert!(err.to_string().contains("official name"));
    }

    #[test]
    fn deserialize_rejects_inconsistent_stats() {
        let mut value = serde_json::to_value(brisbane()).expect("serialize");
        value["stats"]["points"] = serde_json::json!(99);
        assert!(serde_json::from_value::<Team>(value).is_err());

        let mut value = serde_json::to_value(brisbane()).expect("serialize");
        value["stats"]["played"] = serde_json::json!(5);
        assert!(serde_json::from_value::<Team>(value).is_err());
    }

    #[test]
    fn deserialize_rejects_stats_out_of_step_with_form() {
        let mut value = serde_json::to_value(brisbane()).expect("serialize");
        value["form"]["games_recorded"] = serde_json::json!(9);
        assert!(serde_json::from_value::<Team>(value).is_err());
    }
}
