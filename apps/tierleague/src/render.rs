//! # Standings Rendering
//!
//! Turns the engine's read-only tables into text or JSON. No ranking
//! happens here: rows arrive already sorted from
//! `Competition::standings_snapshot`.

use serde::Serialize;
use tierleague_core::{Competition, EndOfSeasonReport, SeasonReport, Team, TierStandings};

/// One table row, as printed and as serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRow {
    pub position: usize,
    pub official_name: String,
    pub nick_name: String,
    pub form: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub drawn: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl TeamRow {
    #[must_use]
    pub fn new(position: usize, team: &Team) -> Self {
        let stats = team.stats();
        Self {
            position,
            official_name: team.official_name().to_string(),
            nick_name: team.nick_name().to_string(),
            form: team.form_string(),
            played: stats.played,
            won: stats.won,
            lost: stats.lost,
            drawn: stats.drawn,
            goals_for: stats.goals_for,
            goals_against: stats.goals_against,
            goal_difference: stats.goal_difference(),
            points: stats.points,
        }
    }
}

/// A tier's rows with 1-based positions.
#[must_use]
pub fn tier_rows(standings: &TierStandings<'_>) -> Vec<TeamRow> {
    standings
        .teams
        .iter()
        .enumerate()
        .map(|(i, team)| TeamRow::new(i + 1, team))
        .collect()
}

const HEADER: &str = "Pos  Official Name         Nick Name        Form   Pld   W   L   D   GF   GA   GD  Pts";

/// Render a single row in the text table layout.
#[must_use]
pub fn format_row(row: &TeamRow) -> String {
    format!(
        "{:>3}  {:<20}  {:<15}  {:<5}  {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
        row.position,
        row.official_name,
        row.nick_name,
        row.form,
        row.played,
        row.won,
        row.lost,
        row.drawn,
        row.goals_for,
        row.goals_against,
        row.goal_difference,
        row.points
    )
}

/// Render every tier of a competition as text tables.
#[must_use]
pub fn render_competition(competition: &Competition) -> String {
    let mut out = format!("+++++ {} +++++\n", competition.name());
    for standings in competition.standings_snapshot() {
        out.push_str(&format!("---- League {} ----\n", standings.tier + 1));
        out.push_str(HEADER);
        out.push('\n');
        for row in tier_rows(&standings) {
            out.push_str(&format_row(&row));
            out.push('\n');
        }
    }
    out
}

/// Every tier of a competition as JSON.
#[must_use]
pub fn competition_json(competition: &Competition) -> serde_json::Value {
    let tiers: Vec<_> = competition
        .standings_snapshot()
        .iter()
        .zip(competition.leagues())
        .map(|(standings, league)| {
            serde_json::json!({
                "tier": standings.tier,
                "state": league.state().name(),
                "registered": league.registered_team_count(),
                "required": league.required_team_count(),
                "teams": tier_rows(standings),
            })
        })
        .collect();

    serde_json::json!({
        "name": competition.name(),
        "tiers": tiers,
    })
}

/// Per-tier failures of a season transition as JSON.
#[must_use]
pub fn season_report_json(report: &SeasonReport) -> serde_json::Value {
    let failures: Vec<_> = report
        .failures()
        .map(|(tier, error)| {
            serde_json::json!({
                "tier": tier,
                "kind": format!("{:?}", error.kind()),
                "error": error.to_string(),
            })
        })
        .collect();
    serde_json::json!(failures)
}

/// Transfers and skipped boundaries of a season end as JSON.
#[must_use]
pub fn end_of_season_json(report: &EndOfSeasonReport) -> serde_json::Value {
    let skipped: Vec<_> = report
        .skipped
        .iter()
        .map(|s| {
            serde_json::json!({
                "upper_tier": s.upper_tier,
                "lower_tier": s.lower_tier,
                "kind": format!("{:?}", s.reason.kind()),
                "reason": s.reason.to_string(),
            })
        })
        .collect();

    serde_json::json!({
        "failures": season_report_json(&report.season),
        "transfers": report.transfers,
        "skipped": skipped,
    })
}

// =============================================================================
// TESTS
// =============================================================================
