//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//! Every command loads the competition file fresh; nothing is persisted.

use crate::config::{CompetitionConfig, RejectedResult};
use crate::error::AppError;
use crate::render::{
    TeamRow, competition_json, end_of_season_json, format_row, render_competition,
    season_report_json,
};
use std::path::Path;
use tierleague_core::{Competition, EndOfSeasonReport, SeasonReport};

// =============================================================================
// SEASON DRIVER
// =============================================================================

/// A competition after its configured results have been played.
#[derive(Debug)]
pub struct PlayedSeason {
    pub competition: Competition,
    pub start: SeasonReport,
    pub rejected: Vec<RejectedResult>,
}

/// Load a competition file, start the season and play every result.
///
/// Tier failures and rejected results are logged and returned, never fatal.
pub fn play_season(path: &Path) -> Result<PlayedSeason, AppError> {
    let config = CompetitionConfig::load(path)?;
    let mut competition = config.build()?;

    let start = competition.start_season();
    log_season_report("start", &start);

    let rejected = config.play_results(&mut competition);
    for r in &rejected {
        tracing::warn!(
            tier = r.tier,
            index = r.index,
            kind = ?r.error.kind(),
            "result rejected: {}",
            r.error
        );
    }

    tracing::info!(
        competition = competition.name(),
        tiers = competition.tier_count(),
        "season played"
    );
    Ok(PlayedSeason {
        competition,
        start,
        rejected,
    })
}

fn log_season_report(phase: &str, report: &SeasonReport) {
    for (tier, error) in report.failures() {
        tracing::warn!(phase, tier, kind = ?error.kind(), "tier failed: {}", error);
    }
}

fn log_end_of_season(report: &EndOfSeasonReport) {
    log_season_report("end", &report.season);
    for t in &report.transfers {
        tracing::info!(
            upper_tier = t.upper_tier,
            lower_tier = t.lower_tier,
            "promoted '{}', relegated '{}'",
            t.promoted,
            t.relegated
        );
    }
    for s in &report.skipped {
        tracing::warn!(
            upper_tier = s.upper_tier,
            lower_tier = s.lower_tier,
            kind = ?s.reason.kind(),
            "no transfer: {}",
            s.reason
        );
    }
}

fn print_json(value: &serde_json::Value) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Validate a competition file and list its rosters.
pub fn cmd_check(path: &Path, json_mode: bool) -> Result<(), AppError> {
    let config = CompetitionConfig::load(path)?;
    let competition = config.build()?;

    if json_mode {
        return print_json(&competition_json(&competition));
    }

    println!("Competition: {}", competition.name());
    println!("Tiers:       {}", competition.tier_count());
    println!("Goal limit:  0..={}", config.goal_limit().max());
    println!();
    for (tier, league) in competition.leagues().enumerate() {
        let status = if league.registered_team_count() == league.required_team_count() {
            "ready"
        } else {
            "incomplete"
        };
        println!(
            "Tier {}: {}/{} teams ({})",
            tier,
            league.registered_team_count(),
            league.required_team_count(),
            status
        );
        for team in league.teams() {
            println!("  {} ({})", team.official_name(), team.nick_name());
        }
    }
    Ok(())
}

// =============================================================================
// SEASON COMMAND
// =============================================================================

/// Play a season and print the tables, optionally ending it.
pub fn cmd_season(path: &Path, json_mode: bool, end_season: bool) -> Result<(), AppError> {
    let PlayedSeason {
        mut competition,
        start,
        rejected,
    } = play_season(path)?;

    let standings = competition_json(&competition);
    let table = render_competition(&competition);

    let end = end_season.then(|| competition.end_season());
    if let Some(report) = &end {
        log_end_of_season(report);
    }

    if json_mode {
        let rejected: Vec<_> = rejected
            .iter()
            .map(|r| {
                serde_json::json!({
                    "tier": r.tier,
                    "index": r.index,
                    "error": r.error.to_string(),
                })
            })
            .collect();
        let output = serde_json::json!({
            "start_failures": season_report_json(&start),
            "rejected_results": rejected,
            "standings": standings,
            "end_of_season": end.as_ref().map(end_of_season_json),
            "next_season": end.as_ref().map(|_| competition_json(&competition)),
        });
        return print_json(&output);
    }

    for (tier, error) in start.failures() {
        println!("Tier {} did not start: {}", tier, error);
    }
    for r in &rejected {
        println!("Tier {} result #{} rejected: {}", r.tier, r.index + 1, r.error);
    }
    print!("{}", table);

    if let Some(report) = &end {
        println!();
        println!("End of season");
        println!("=============");
        for t in &report.transfers {
            println!(
                "League {} -> League {}: {} promoted, {} relegated",
                t.lower_tier + 1,
                t.upper_tier + 1,
                t.promoted,
                t.relegated
            );
        }
        for s in &report.skipped {
            println!(
                "League {} / League {}: no transfer ({})",
                s.upper_tier + 1,
                s.lower_tier + 1,
                s.reason
            );
        }
        println!();
        println!("Next season rosters");
        for (tier, league) in competition.leagues().enumerate() {
            let names: Vec<_> = league.teams().map(|t| t.official_name()).collect();
            println!("  League {}: {}", tier + 1, names.join(", "));
        }
    }
    Ok(())
}

// =============================================================================
// TEAM COMMAND
// =============================================================================

/// Print one team's table line after the configured results.
pub fn cmd_team(path: &Path, json_mode: bool, tier: usize, name: &str) -> Result<(), AppError> {
    let played = play_season(path)?;
    let league = played.competition.league(tier)?;
    let team = league.team(name)?;
    let position = league
        .ranked_standings()
        .iter()
        .position(|t| t.official_name() == name)
        .map_or(0, |i| i + 1);
    let row = TeamRow::new(position, team);

    if json_mode {
        return print_json(&serde_json::to_value(&row)?);
    }

    println!("{}", format_row(&row));
    println!("Form: {} ({} results recorded)", row.form, team.form().games_recorded());
    Ok(())
}
