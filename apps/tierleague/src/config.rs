//! # Competition Files
//!
//! TOML description of a competition: its shape, the teams registered in
//! each tier and, optionally, the results to play.
//!
//! ```toml
//! name = "Australian Soccer"
//! teams_per_tier = 2
//! max_goals = 20
//!
//! [[tiers]]
//! teams = [
//!   { official_name = "Brisbane Roar", nick_name = "The Roar" },
//!   { official_name = "Gotham City", nick_name = "Batmen" },
//! ]
//! results = [
//!   { home = "Brisbane Roar", home_goals = 3, away = "Gotham City", away_goals = 0 },
//! ]
//! ```
//!
//! Tier order in the file is tier order in the competition: the first
//! `[[tiers]]` table is the highest division.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tierleague_core::{Competition, GoalLimit, Team, TierError};

/// Maximum competition file size (1 MB).
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Top-level competition file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompetitionConfig {
    pub name: String,
    pub teams_per_tier: usize,
    /// Overrides the default goal bound when present.
    #[serde(default)]
    pub max_goals: Option<u32>,
    #[serde(default)]
    pub tiers: Vec<TierConfig>,
}

/// One `[[tiers]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierConfig {
    #[serde(default)]
    pub teams: Vec<TeamConfig>,
    #[serde(default)]
    pub results: Vec<ResultConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamConfig {
    pub official_name: String,
    pub nick_name: String,
}

/// A played match. Goal counts are signed so that the engine, not the
/// parser, rejects negative input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResultConfig {
    pub home: String,
    pub home_goals: i32,
    pub away: String,
    pub away_goals: i32,
}

/// A configured result the engine refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedResult {
    pub tier: usize,
    /// Position of the result within its tier's `results` list.
    pub index: usize,
    pub error: TierError,
}

impl CompetitionConfig {
    /// Parse a competition from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a competition file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let metadata = std::fs::metadata(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(AppError::FileTooLarge {
                size: metadata.len(),
                max: MAX_CONFIG_FILE_SIZE,
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "loaded competition file");
        Self::from_toml_str(&content)
    }

    /// The goal bound the competition will use.
    #[must_use]
    pub fn goal_limit(&self) -> GoalLimit {
        self.max_goals.map(GoalLimit::new).unwrap_or_default()
    }

    /// Build the competition and register every configured team.
    ///
    /// Fails on the first team the engine rejects.
    pub fn build(&self) -> Result<Competition, AppError> {
        let mut competition = Competition::with_goal_limit(
            self.name.clone(),
            self.tiers.len(),
            self.teams_per_tier,
            self.goal_limit(),
        )?;

        for (tier, tier_config) in self.tiers.iter().enumerate() {
            for team in &tier_config.teams {
                let team = Team::new(team.official_name.clone(), team.nick_name.clone())?;
                competition.register_team(tier, team)?;
            }
        }
        Ok(competition)
    }

    /// Play every configured result in file order.
    ///
    /// Rejected results are collected and the remaining ones still play.
    pub fn play_results(&self, competition: &mut Competition) -> Vec<RejectedResult> {
        let mut rejected = Vec::new();
        for (tier, tier_config) in self.tiers.iter().enumerate() {
            for (index, r) in tier_config.results.iter().enumerate() {
                if let Err(error) =
                    competition.play_match(tier, &r.home, r.home_goals, &r.away, r.away_goals)
                {
                    rejected.push(RejectedResult { tier, index, error });
                }
            }
        }
        rejected
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tierleague_core::ErrorKind;

    const SAMPLE: &str = r#"
name = "Sample"
teams_per_tier = 2

[[tiers]]
teams = [
  { official_name = "Alpha", nick_name = "A" },
  { official_name = "Bravo", nick_name = "B" },
]
results = [
  { home = "Alpha", home_goals = 2, away = "Bravo", away_goals = 1 },
  { home = "Alpha", home_goals = -1, away = "Bravo", away_goals = 0 },
]
"#;

    #[test]
    fn parses_sample() {
        let config = CompetitionConfig::from_toml_str(SAMPLE).expect("parse");
        assert_eq!(config.tiers.len(), 1);
        assert_eq!(config.tiers[0].results.len(), 2);
        assert_eq!(config.goal_limit(), GoalLimit::default());
    }

    #[test]
    fn rejects_unknown_fields() {
        let toml = "name = \"x\"\nteams_per_tier = 2\ncolour = \"red\"\n";
        assert!(matches!(
            CompetitionConfig::from_toml_str(toml),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn rejected_results_do_not_stop_play() {
        let config = CompetitionConfig::from_toml_str(SAMPLE).expect("parse");
        let mut competition = config.build().expect("build");
        assert!(competition.start_season().is_clean());

        let rejected = config.play_results(&mut competition);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].index, 1);
        assert_eq!(rejected[0].error.kind(), ErrorKind::Validation);
        assert_eq!(competition.top_team(0).expect("top").official_name(), "Alpha");
    }

    #[test]
    fn build_fails_on_overfull_tier() {
        let toml = r#"
name = "x"
teams_per_tier = 1

[[tiers]]
teams = [
  { official_name = "Alpha", nick_name = "A" },
  { official_name = "Bravo", nick_name = "B" },
]
"#;
        let config = CompetitionConfig::from_toml_str(toml).expect("parse");
        assert!(matches!(
            config.build(),
            Err(AppError::Tier(TierError::RosterFull { required: 1 }))
        ));
    }
}
