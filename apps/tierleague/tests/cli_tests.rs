//! Integration tests for tierleague CLI commands.
//!
//! Uses tempfile for competition files and the bundled demo file.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use std::path::PathBuf;
use tempfile::TempDir;
use tierleague::AppError;
use tierleague::cli::{cmd_check, cmd_season, cmd_team, play_season};
use tierleague::config::CompetitionConfig;
use tierleague::render::{competition_json, render_competition};
use tierleague_core::{ErrorKind, TierError};

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Path of the bundled demo competition.
fn demo_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demo/a_league.toml")
}

/// Create a temporary directory for tests.
fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write a competition file into `dir`.
fn write_competition(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("competition.toml");
    std::fs::write(&path, content).unwrap();
    path
}

const INCOMPLETE: &str = r#"
name = "Half Built"
teams_per_tier = 2

[[tiers]]
teams = [
  { official_name = "Alpha", nick_name = "A" },
  { official_name = "Bravo", nick_name = "B" },
]
results = [
  { home = "Alpha", home_goals = 1, away = "Bravo", away_goals = 0 },
]

[[tiers]]
teams = [
  { official_name = "Charlie", nick_name = "C" },
]
results = [
  { home = "Charlie", home_goals = 1, away = "Delta", away_goals = 0 },
]
"#;

// =============================================================================
// DEMO COMPETITION
// =============================================================================

#[test]
fn test_demo_loads_and_builds() {
    let config = CompetitionConfig::load(&demo_path()).unwrap();
    let competition = config.build().unwrap();

    assert_eq!(competition.name(), "Australian Soccer");
    assert_eq!(competition.tier_count(), 2);
    for league in competition.leagues() {
        assert_eq!(league.registered_team_count(), 4);
    }
}

#[test]
fn test_demo_season_standings() {
    let played = play_season(&demo_path()).unwrap();
    assert!(played.start.is_clean());
    assert!(played.rejected.is_empty());

    let competition = &played.competition;
    let roar = competition.league(0).unwrap().team("Brisbane Roar").unwrap();
    assert_eq!(roar.points(), 4);
    assert_eq!(roar.form_string(), "DLWL-");

    assert_eq!(competition.top_team(0).unwrap().official_name(), "Melbourne Victory");
    assert_eq!(competition.bottom_team(0).unwrap().official_name(), "Perth Glory");
    // Level on points and goal difference with Star City; name decides.
    assert_eq!(competition.top_team(1).unwrap().official_name(), "Gotham City");
}

#[test]
fn test_demo_end_of_season_transfers() {
    let mut played = play_season(&demo_path()).unwrap();
    let report = played.competition.end_season();

    assert!(report.is_clean());
    assert_eq!(report.transfers.len(), 1);
    assert_eq!(report.transfers[0].promoted, "Gotham City");
    assert_eq!(report.transfers[0].relegated, "Perth Glory");

    let top = played.competition.league(0).unwrap();
    assert!(top.contains_team("Gotham City"));
    assert!(!top.contains_team("Perth Glory"));
}

#[test]
fn test_demo_rendering() {
    let played = play_season(&demo_path()).unwrap();
    let text = render_competition(&played.competition);
    assert!(text.contains("+++++ Australian Soccer +++++"));
    assert!(text.contains("---- League 2 ----"));

    let json = competition_json(&played.competition);
    assert_eq!(json["tiers"][0]["teams"][0]["official_name"], "Melbourne Victory");
    assert_eq!(json["tiers"][0]["teams"][2]["form"], "DLWL-");
}

// =============================================================================
// COMMAND TESTS
// =============================================================================

#[test]
fn test_check_command() {
    assert!(cmd_check(&demo_path(), false).is_ok());
    assert!(cmd_check(&demo_path(), true).is_ok());
}

#[test]
fn test_season_command_with_end() {
    assert!(cmd_season(&demo_path(), false, true).is_ok());
    assert!(cmd_season(&demo_path(), true, true).is_ok());
}

#[test]
fn test_team_command() {
    assert!(cmd_team(&demo_path(), false, 0, "Brisbane Roar").is_ok());

    let missing = cmd_team(&demo_path(), false, 0, "Gotham City");
    assert!(matches!(missing, Err(AppError::Tier(TierError::TeamNotFound(_)))));

    let bad_tier = cmd_team(&demo_path(), false, 5, "Brisbane Roar");
    assert!(matches!(
        bad_tier,
        Err(AppError::Tier(TierError::TierNotFound { index: 5, .. }))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = create_temp_dir();
    let result = cmd_check(&temp.path().join("nope.toml"), false);
    assert!(matches!(result, Err(AppError::Io { .. })));
}

#[test]
fn test_malformed_file_is_config_error() {
    let temp = create_temp_dir();
    let path = write_competition(&temp, "name = \"x\"\nteams_per_tier = \"two\"\n");
    assert!(matches!(cmd_check(&path, false), Err(AppError::Config(_))));
}

// =============================================================================
// BEST-EFFORT BEHAVIOUR
// =============================================================================

#[test]
fn test_incomplete_tier_is_reported_not_fatal() {
    let temp = create_temp_dir();
    let path = write_competition(&temp, INCOMPLETE);

    let mut played = play_season(&path).unwrap();
    let failed: Vec<_> = played.start.failures().map(|(tier, _)| tier).collect();
    assert_eq!(failed, vec![1]);

    assert_eq!(played.rejected.len(), 1);
    assert_eq!(played.rejected[0].tier, 1);
    assert_eq!(played.rejected[0].error.kind(), ErrorKind::State);

    let report = played.competition.end_season();
    assert!(report.transfers.is_empty());
    assert_eq!(report.skipped.len(), 1);

    assert!(cmd_season(&path, false, true).is_ok());
}

#[test]
fn test_single_team_tiers_rejected() {
    let temp = create_temp_dir();
    let path = write_competition(
        &temp,
        "name = \"x\"\nteams_per_tier = 1\n[[tiers]]\n[[tiers]]\n",
    );
    let result = cmd_check(&path, false);
    assert!(matches!(
        result,
        Err(AppError::Tier(TierError::InvalidCompetition(_)))
    ));
}
